//! Serializable scene description
//!
//! Every field defaults to the values of the transparent-view demo: a warm
//! dielectric cube lit by a 5500 K sun, rendered over a fully transparent
//! clear color so whatever is behind the surface shows through.

use crate::camera::{Exposure, LookAt, OrthoProjection};
use crate::core_types::{RgbType, Vec3};
use crate::error::SceneError;
use crate::transform::LinearSweep;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Range over which [`crate::core_types::cct`] is a good fit
pub const TEMPERATURE_RANGE_KELVIN: (f32, f32) = (1000.0, 15000.0);

fn check_unit_range(name: &'static str, value: f32) -> Result<(), SceneError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SceneError::OutOfRange {
            name,
            value,
            min: 0.0,
            max: 1.0,
        })
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), SceneError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SceneError::NonPositive { name, value })
    }
}

/// Lit material parameters for the cube
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialParams {
    pub base_color: Vec3,
    /// Space `base_color` is written in
    pub color_space: RgbType,
    pub metallic: f32,
    pub roughness: f32,
    pub reflectance: f32,
}

impl Default for MaterialParams {
    fn default() -> Self {
        Self {
            base_color: Vec3::new(1.0, 0.85, 0.57),
            color_space: RgbType::Srgb,
            // dielectric, with roughness raised to spread highlights
            metallic: 0.0,
            roughness: 0.3,
            reflectance: 0.5,
        }
    }
}

impl MaterialParams {
    /// # Errors
    /// [`SceneError::OutOfRange`] if any channel or parameter leaves `[0, 1]`.
    pub fn validate(&self) -> Result<(), SceneError> {
        check_unit_range("material.base_color.r", self.base_color.r())?;
        check_unit_range("material.base_color.g", self.base_color.g())?;
        check_unit_range("material.base_color.b", self.base_color.b())?;
        check_unit_range("material.metallic", self.metallic)?;
        check_unit_range("material.roughness", self.roughness)?;
        check_unit_range("material.reflectance", self.reflectance)
    }
}

/// Directional light standing in for the sun
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SunLight {
    pub temperature_kelvin: f32,
    /// Illuminance in lux
    pub intensity_lux: f32,
    /// Direction the light travels. Normalised during resolution.
    pub direction: Vec3,
    pub cast_shadows: bool,
}

impl Default for SunLight {
    fn default() -> Self {
        Self {
            temperature_kelvin: 5500.0,
            // clear-day sun
            intensity_lux: 110_000.0,
            direction: Vec3::new(-1.0, -1.0, -1.0),
            cast_shadows: true,
        }
    }
}

impl SunLight {
    /// # Errors
    /// - [`SceneError::OutOfRange`] for a temperature outside [`TEMPERATURE_RANGE_KELVIN`]
    /// - [`SceneError::NonPositive`] for a non-positive intensity
    /// - [`SceneError::ZeroDirection`] for a zero or non-finite direction
    pub fn validate(&self) -> Result<(), SceneError> {
        let (min, max) = TEMPERATURE_RANGE_KELVIN;
        if !(min..=max).contains(&self.temperature_kelvin) {
            return Err(SceneError::OutOfRange {
                name: "sun.temperature_kelvin",
                value: self.temperature_kelvin,
                min,
                max,
            });
        }
        check_positive("sun.intensity_lux", f64::from(self.intensity_lux))?;

        let len2 = self.direction.squared_length();
        if len2 == 0.0 || !len2.is_finite() {
            return Err(SceneError::ZeroDirection {
                name: "sun.direction",
            });
        }
        Ok(())
    }
}

/// Camera placement, exposure and the orthographic volume fitted to the surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub look_at: LookAt,
    pub exposure: Exposure,
    /// Half-height of the orthographic view volume
    pub zoom: f64,
    pub near: f64,
    pub far: f64,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            look_at: LookAt::default(),
            exposure: Exposure::default(),
            zoom: 1.5,
            near: 0.0,
            far: 10.0,
        }
    }
}

impl CameraSettings {
    /// # Errors
    /// Propagates [`LookAt::validate`] and [`Exposure::validate`], plus
    /// [`SceneError::NonPositive`] for the zoom and
    /// [`SceneError::DepthRange`] when `near >= far`.
    pub fn validate(&self) -> Result<(), SceneError> {
        self.look_at.validate()?;
        self.exposure.validate()?;
        check_positive("camera.zoom", self.zoom)?;
        if self.near >= self.far || self.near.is_nan() || self.far.is_nan() {
            return Err(SceneError::DepthRange {
                near: self.near,
                far: self.far,
            });
        }
        Ok(())
    }

    /// Projection for a surface of the given size
    ///
    /// # Errors
    /// See [`OrthoProjection::fit_surface`].
    pub fn projection(&self, width: u32, height: u32) -> Result<OrthoProjection, SceneError> {
        OrthoProjection::fit_surface(width, height, self.zoom, self.near, self.far)
    }
}

/// Everything needed to set up the transparent cube scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// RGBA the view clears to before drawing
    pub clear_color: [f32; 4],
    /// Whether the render target is opaque. Transparency needs `false`.
    pub opaque: bool,
    pub material: MaterialParams,
    pub sun: SunLight,
    pub camera: CameraSettings,
    pub animation: LinearSweep,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            clear_color: [0.0; 4],
            opaque: false,
            material: MaterialParams::default(),
            sun: SunLight::default(),
            camera: CameraSettings::default(),
            animation: LinearSweep::default(),
        }
    }
}

impl SceneConfig {
    /// Parse and validate a RON description. Missing fields take defaults.
    ///
    /// # Errors
    /// [`SceneError::Parse`] for malformed RON, otherwise whatever
    /// [`SceneConfig::validate`] reports.
    pub fn from_ron_str(text: &str) -> Result<Self, SceneError> {
        let config: SceneConfig = ron::from_str(text)?;
        config.validate()?;
        debug!(?config, "Loaded scene config");
        Ok(config)
    }

    /// Pretty RON with struct names, suitable for writing back to disk
    ///
    /// # Errors
    /// [`SceneError::Serialize`] if RON serialization fails.
    pub fn to_ron_string(&self) -> Result<String, SceneError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default().struct_names(true),
        )?)
    }

    /// Check every section. A see-through target that clears to an opaque
    /// color is allowed but logged, since nothing behind it will show.
    ///
    /// # Errors
    /// The first invalid parameter found.
    pub fn validate(&self) -> Result<(), SceneError> {
        for (name, value) in [
            ("clear_color.r", self.clear_color[0]),
            ("clear_color.g", self.clear_color[1]),
            ("clear_color.b", self.clear_color[2]),
            ("clear_color.a", self.clear_color[3]),
        ] {
            check_unit_range(name, value)?;
        }
        self.material.validate()?;
        self.sun.validate()?;
        self.camera.validate()?;

        if !self.opaque && self.clear_color[3] > 0.0 {
            warn!(
                alpha = self.clear_color[3],
                "Transparent target clears with non-zero alpha; content behind the surface will be hidden"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SceneConfig::default().validate().is_ok());
    }

    #[test]
    fn test_defaults_match_demo_scene() {
        let config = SceneConfig::default();
        assert_eq!(config.clear_color, [0.0, 0.0, 0.0, 0.0]);
        assert!(!config.opaque);
        assert_eq!(config.material.base_color, Vec3::new(1.0, 0.85, 0.57));
        assert_eq!(config.material.roughness, 0.3);
        assert_eq!(config.sun.temperature_kelvin, 5500.0);
        assert_eq!(config.sun.intensity_lux, 110_000.0);
        assert_eq!(config.camera.zoom, 1.5);
        assert_eq!(config.animation.duration_ms, 1000);
    }

    #[test]
    fn test_roughness_out_of_range() {
        let material = MaterialParams {
            roughness: 1.5,
            ..MaterialParams::default()
        };
        assert!(matches!(
            material.validate(),
            Err(SceneError::OutOfRange { name: "material.roughness", .. })
        ));
    }

    #[test]
    fn test_nan_metallic_is_rejected() {
        let material = MaterialParams {
            metallic: f32::NAN,
            ..MaterialParams::default()
        };
        assert!(material.validate().is_err());
    }

    #[test]
    fn test_sun_needs_direction_and_intensity() {
        let dark = SunLight {
            intensity_lux: 0.0,
            ..SunLight::default()
        };
        assert!(matches!(dark.validate(), Err(SceneError::NonPositive { .. })));

        let aimless = SunLight {
            direction: Vec3::ZERO,
            ..SunLight::default()
        };
        assert!(matches!(
            aimless.validate(),
            Err(SceneError::ZeroDirection { name: "sun.direction" })
        ));
    }

    #[test]
    fn test_sun_temperature_bounds() {
        let hot = SunLight {
            temperature_kelvin: 20_000.0,
            ..SunLight::default()
        };
        assert!(hot.validate().is_err());
    }

    #[test]
    fn test_camera_depth_range() {
        let camera = CameraSettings {
            near: 5.0,
            far: 1.0,
            ..CameraSettings::default()
        };
        assert!(matches!(camera.validate(), Err(SceneError::DepthRange { .. })));
    }

    #[test]
    fn test_opaque_clear_alpha_is_only_a_warning() {
        let config = SceneConfig {
            clear_color: [1.0, 1.0, 1.0, 1.0],
            ..SceneConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
