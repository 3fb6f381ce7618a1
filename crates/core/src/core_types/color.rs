//! Color space helpers
//!
//! Colors are carried as [`Vec3`] and read through its `r`/`g`/`b` view.
//! Material parameters are authored in `sRGB` but the renderer consumes
//! linear values, and light colors are derived from a correlated color
//! temperature.

use super::vec3::Vec3;
use serde::{Deserialize, Serialize};

/// Color space an input color is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RgbType {
    /// Gamma-encoded `sRGB`, converted with the exact piecewise transfer function
    #[default]
    Srgb,
    /// Already linear, passed through unchanged
    Linear,
}

impl RgbType {
    /// Convert a color tagged with this color space to linear `sRGB`
    pub fn to_linear(self, color: Vec3) -> Vec3 {
        match self {
            RgbType::Srgb => srgb_to_linear(color),
            RgbType::Linear => color,
        }
    }
}

#[inline]
fn srgb_channel_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Decode an `sRGB` color into linear `sRGB`, channel by channel
pub fn srgb_to_linear(color: Vec3) -> Vec3 {
    Vec3::new(
        srgb_channel_to_linear(color.r()),
        srgb_channel_to_linear(color.g()),
        srgb_channel_to_linear(color.b()),
    )
}

/// Linear `sRGB` color of a black body at `kelvin`.
///
/// Uses Krystek's (1985) rational approximation of the Planckian locus in
/// CIE 1960 UCS, converts the chromaticity to XYZ with `Y = 1` and then to
/// linear `sRGB`. The result is scaled so its brightest channel is 1 and
/// clamped to `[0, 1]`, so it only carries chroma; brightness comes from the
/// light intensity.
///
/// Valid for roughly 1000 K to 15000 K.
pub fn cct(kelvin: f32) -> Vec3 {
    let t = kelvin;
    let t2 = t * t;

    let u = (0.860117757 + 1.54118254e-4 * t + 1.28641212e-7 * t2)
        / (1.0 + 8.42420235e-4 * t + 7.08145163e-7 * t2);
    let v = (0.317398726 + 4.22806245e-5 * t + 4.20481691e-8 * t2)
        / (1.0 - 2.89741816e-5 * t + 1.61456053e-7 * t2);

    // CIE 1960 UCS -> CIE 1931 xy
    let denom = 1.0 / (2.0 * u - 8.0 * v + 4.0);
    let chroma_x = 3.0 * u * denom;
    let chroma_y = 2.0 * v * denom;
    let chroma_z = 1.0 - chroma_x - chroma_y;

    let xyz_x = chroma_x / chroma_y;
    let xyz_z = chroma_z / chroma_y;

    // XYZ -> linear sRGB (D65), with Y = 1
    let linear = Vec3::new(
        3.2404542 * xyz_x - 1.5371385 - 0.4985314 * xyz_z,
        -0.9692660 * xyz_x + 1.8760108 + 0.0415560 * xyz_z,
        0.0556434 * xyz_x - 0.2040259 + 1.0572252 * xyz_z,
    );

    let max = linear.r().max(linear.g()).max(linear.b());
    let scaled = linear / max;
    Vec3::new(
        scaled.r().clamp(0.0, 1.0),
        scaled.g().clamp(0.0, 1.0),
        scaled.b().clamp(0.0, 1.0),
    )
}
