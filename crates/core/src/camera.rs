//! Camera placement, projection and exposure.
//!
//! Projection math runs in `f64`, matching the precision the renderer's
//! camera API takes for its matrices.

use crate::error::SceneError;
use nalgebra::{Matrix4, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Orthographic view volume
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoProjection {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
    pub near: f64,
    pub far: f64,
}

impl OrthoProjection {
    /// Fit a view volume of half-height `zoom` to a surface, widening it by
    /// the surface aspect ratio so nothing is stretched.
    ///
    /// # Errors
    /// - [`SceneError::EmptySurface`] if either dimension is zero
    /// - [`SceneError::NonPositive`] if `zoom` is not finite and positive
    /// - [`SceneError::DepthRange`] if `near >= far`
    pub fn fit_surface(
        width: u32,
        height: u32,
        zoom: f64,
        near: f64,
        far: f64,
    ) -> Result<Self, SceneError> {
        if width == 0 || height == 0 {
            return Err(SceneError::EmptySurface { width, height });
        }
        if !(zoom.is_finite() && zoom > 0.0) {
            return Err(SceneError::NonPositive {
                name: "camera.zoom",
                value: zoom,
            });
        }
        if near >= far || near.is_nan() || far.is_nan() {
            return Err(SceneError::DepthRange { near, far });
        }

        let aspect = f64::from(width) / f64::from(height);
        Ok(Self {
            left: -aspect * zoom,
            right: aspect * zoom,
            bottom: -zoom,
            top: zoom,
            near,
            far,
        })
    }

    /// Column-major projection matrix mapping the volume to clip space
    pub fn matrix(&self) -> [f64; 16] {
        let m = Matrix4::new_orthographic(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        );
        let mut out = [0.0; 16];
        out.copy_from_slice(m.as_slice());
        out
    }
}

/// Pixel rectangle rendered into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub left: i32,
    pub bottom: i32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Viewport covering a whole surface
    pub fn covering(width: u32, height: u32) -> Self {
        Self {
            left: 0,
            bottom: 0,
            width,
            height,
        }
    }
}

/// Camera placement: where it sits, what it looks at, which way is up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookAt {
    pub eye: [f64; 3],
    pub center: [f64; 3],
    pub up: [f64; 3],
}

impl Default for LookAt {
    /// Backed off and raised so the cube is seen from above
    fn default() -> Self {
        Self {
            eye: [0.0, 3.0, 4.0],
            center: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
        }
    }
}

impl LookAt {
    /// # Errors
    /// [`SceneError::ZeroDirection`] if the eye sits on the target, `up`
    /// is the zero vector, or `up` is parallel to the viewing direction
    /// (the camera's right axis would have zero length).
    pub fn validate(&self) -> Result<(), SceneError> {
        let forward = Point3::from(self.center) - Point3::from(self.eye);
        if forward.norm_squared() == 0.0 {
            return Err(SceneError::ZeroDirection {
                name: "camera.look_at (center - eye)",
            });
        }
        let up = Vector3::from(self.up);
        if up.norm_squared() == 0.0 {
            return Err(SceneError::ZeroDirection {
                name: "camera.look_at.up",
            });
        }
        if forward.cross(&up).norm_squared() == 0.0 {
            return Err(SceneError::ZeroDirection {
                name: "camera.look_at (center - eye) x up",
            });
        }
        Ok(())
    }

    /// Right-handed world-to-view matrix, column-major
    pub fn view_matrix(&self) -> [f64; 16] {
        let m = Matrix4::look_at_rh(
            &Point3::from(self.eye),
            &Point3::from(self.center),
            &Vector3::from(self.up),
        );
        let mut out = [0.0; 16];
        out.copy_from_slice(m.as_slice());
        out
    }
}

/// Physical camera settings used to derive exposure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Exposure {
    /// f-stop
    pub aperture: f32,
    /// Seconds
    pub shutter_speed: f32,
    /// ISO
    pub sensitivity: f32,
}

impl Default for Exposure {
    /// Sunny 16: f/16, 1/125 s, ISO 100. Correct for a sun-strength light.
    fn default() -> Self {
        Self {
            aperture: 16.0,
            shutter_speed: 1.0 / 125.0,
            sensitivity: 100.0,
        }
    }
}

impl Exposure {
    /// # Errors
    /// [`SceneError::NonPositive`] if any setting is not finite and positive.
    pub fn validate(&self) -> Result<(), SceneError> {
        for (name, value) in [
            ("camera.exposure.aperture", self.aperture),
            ("camera.exposure.shutter_speed", self.shutter_speed),
            ("camera.exposure.sensitivity", self.sensitivity),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SceneError::NonPositive {
                    name,
                    value: f64::from(value),
                });
            }
        }
        Ok(())
    }

    /// Exposure value at ISO 100
    pub fn ev100(&self) -> f32 {
        ((self.aperture * self.aperture) / self.shutter_speed * 100.0 / self.sensitivity).log2()
    }

    /// Scale applied to scene luminance: `1 / (1.2 * 2^ev100)`
    pub fn exposure(&self) -> f32 {
        1.0 / (1.2 * self.ev100().exp2())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fit_landscape_surface() {
        let p = OrthoProjection::fit_surface(1920, 1080, 1.5, 0.0, 10.0).unwrap();
        assert_relative_eq!(p.right, 1920.0 / 1080.0 * 1.5, epsilon = 1e-12);
        assert_eq!(p.left, -p.right);
        assert_eq!(p.top, 1.5);
        assert_eq!(p.bottom, -1.5);

        let m = p.matrix();
        assert_relative_eq!(m[0], 2.0 / (p.right - p.left), epsilon = 1e-12);
        assert_relative_eq!(m[5], 2.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(m[10], -0.2, epsilon = 1e-12);
        assert_relative_eq!(m[14], -1.0, epsilon = 1e-12);
        assert_eq!(m[15], 1.0);
    }

    #[test]
    fn test_fit_rejects_empty_surface() {
        let err = OrthoProjection::fit_surface(800, 0, 1.5, 0.0, 10.0).unwrap_err();
        assert!(matches!(err, SceneError::EmptySurface { width: 800, height: 0 }));
    }

    #[test]
    fn test_fit_rejects_inverted_depth() {
        let err = OrthoProjection::fit_surface(800, 600, 1.5, 10.0, 10.0).unwrap_err();
        assert!(matches!(err, SceneError::DepthRange { .. }));
    }

    #[test]
    fn test_fit_rejects_bad_zoom() {
        assert!(OrthoProjection::fit_surface(800, 600, 0.0, 0.0, 10.0).is_err());
        assert!(OrthoProjection::fit_surface(800, 600, f64::NAN, 0.0, 10.0).is_err());
    }

    #[test]
    fn test_viewport_covers_surface() {
        let v = Viewport::covering(640, 480);
        assert_eq!((v.left, v.bottom, v.width, v.height), (0, 0, 640, 480));
    }

    #[test]
    fn test_view_matrix_moves_eye_to_origin() {
        let look = LookAt::default();
        let m = Matrix4::from_column_slice(&look.view_matrix());
        let eye = m.transform_point(&Point3::from(look.eye));
        assert_relative_eq!(eye, Point3::origin(), epsilon = 1e-9);

        // The target lies straight ahead, down -Z in view space
        let target = m.transform_point(&Point3::from(look.center));
        assert_relative_eq!(target.z, -5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_look_at_rejects_degenerate_placement() {
        let look = LookAt {
            eye: [1.0, 1.0, 1.0],
            center: [1.0, 1.0, 1.0],
            ..LookAt::default()
        };
        assert!(look.validate().is_err());
        assert!(LookAt::default().validate().is_ok());
    }

    #[test]
    fn test_look_at_rejects_up_along_view_direction() {
        let overhead = LookAt {
            eye: [0.0, 5.0, 0.0],
            center: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
        };
        assert!(matches!(
            overhead.validate(),
            Err(SceneError::ZeroDirection {
                name: "camera.look_at (center - eye) x up"
            })
        ));

        let tilted = LookAt {
            up: [0.0, 0.0, -1.0],
            ..overhead
        };
        assert!(tilted.validate().is_ok());
        assert!(tilted.view_matrix().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_sunny_sixteen_exposure() {
        let e = Exposure::default();
        assert_relative_eq!(e.ev100(), 32000f32.log2(), epsilon = 1e-4);
        assert_relative_eq!(e.exposure(), 1.0 / 38400.0, max_relative = 1e-4);
    }

    #[test]
    fn test_exposure_rejects_zero_shutter() {
        let e = Exposure {
            shutter_speed: 0.0,
            ..Exposure::default()
        };
        assert!(matches!(
            e.validate(),
            Err(SceneError::NonPositive { name: "camera.exposure.shutter_speed", .. })
        ));
    }
}
