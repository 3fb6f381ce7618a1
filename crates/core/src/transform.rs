//! Model transforms for the spinning cube
//!
//! All matrices are 4x4, column-major, ready to hand to the renderer's
//! transform component as sixteen floats.

use crate::core_types::Vec3;
use nalgebra::{Rotation3, Unit, Vector3};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Largest value a progress slider reports
pub const MAX_PROGRESS: u32 = 100;

/// Rotation of `angle_degrees` about `axis`.
///
/// The axis does not need to be unit length. A zero axis is not rejected:
/// normalising it yields NaNs, which end up in the matrix.
pub fn rotation_matrix(angle_degrees: f32, axis: Vec3) -> [f32; 16] {
    let axis = Unit::new_unchecked(Vector3::from(axis.normalized()));
    let rotation = Rotation3::from_axis_angle(&axis, angle_degrees.to_radians());

    let mut out = [0.0; 16];
    out.copy_from_slice(rotation.to_homogeneous().as_slice());
    out
}

/// Map slider progress to an angle in `[0.01, 360]` degrees.
///
/// The lower bound is never zero, so angles can be divided by one another.
/// Progress past [`MAX_PROGRESS`] is clamped.
pub fn progress_to_degrees(progress: u32) -> f32 {
    0.01 + progress.min(MAX_PROGRESS) as f32 / MAX_PROGRESS as f32 * 359.99
}

/// Two sliders tilting the cube.
///
/// Each slider owns one angle; moving it rotates the cube by that angle
/// about an axis skewed by the ratio of the two angles, so the last slider
/// moved wins but still depends on the other one's position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRotation {
    horizontal: f32,
    vertical: f32,
}

impl Default for SliderRotation {
    fn default() -> Self {
        Self {
            horizontal: 1.0,
            vertical: 1.0,
        }
    }
}

impl SliderRotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current horizontal angle in degrees
    pub fn horizontal(&self) -> f32 {
        self.horizontal
    }

    /// Current vertical angle in degrees
    pub fn vertical(&self) -> f32 {
        self.vertical
    }

    /// Move the horizontal slider and return the resulting transform
    pub fn set_horizontal(&mut self, progress: u32) -> [f32; 16] {
        self.horizontal = progress_to_degrees(progress);
        rotation_matrix(
            self.horizontal,
            Vec3::new(1.0, self.vertical / self.horizontal, 0.0),
        )
    }

    /// Move the vertical slider and return the resulting transform
    pub fn set_vertical(&mut self, progress: u32) -> [f32; 16] {
        self.vertical = progress_to_degrees(progress);
        rotation_matrix(
            self.vertical,
            Vec3::new(self.horizontal / self.vertical, 1.0, 0.0),
        )
    }
}

/// One-shot linear spin about +Y
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearSweep {
    pub from_degrees: f32,
    pub to_degrees: f32,
    pub duration_ms: u64,
}

impl Default for LinearSweep {
    fn default() -> Self {
        Self {
            from_degrees: 0.0,
            to_degrees: 360.0,
            duration_ms: 1000,
        }
    }
}

impl LinearSweep {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Angle reached after `elapsed`. Holds the end value once finished.
    pub fn value_at(&self, elapsed: Duration) -> f32 {
        if self.duration_ms == 0 {
            return self.to_degrees;
        }
        let t = (elapsed.as_secs_f32() / self.duration().as_secs_f32()).clamp(0.0, 1.0);
        self.from_degrees + (self.to_degrees - self.from_degrees) * t
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration()
    }

    /// Model transform after `elapsed`
    pub fn transform_at(&self, elapsed: Duration) -> [f32; 16] {
        rotation_matrix(self.value_at(elapsed), Vec3::new(0.0, 1.0, 0.0))
    }
}
