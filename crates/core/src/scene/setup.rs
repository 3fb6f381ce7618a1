//! Resolve a `SceneConfig` into the values the renderer consumes

use super::config::SceneConfig;
use crate::camera::{OrthoProjection, Viewport};
use crate::core_types::{cct, Vec3};
use crate::error::SceneError;
use crate::geometry::UnitCube;
use crate::transform::LinearSweep;
use std::time::Duration;
use tracing::info;

/// Material parameters with the base color already linear
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedMaterial {
    pub base_color: Vec3,
    pub metallic: f32,
    pub roughness: f32,
    pub reflectance: f32,
}

/// Directional light ready for the light component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedLight {
    /// Linear RGB, brightest channel 1
    pub color: Vec3,
    pub intensity_lux: f32,
    /// Unit length
    pub direction: Vec3,
    pub cast_shadows: bool,
}

/// A validated scene with every derived quantity computed once
#[derive(Debug, Clone)]
pub struct SceneSetup {
    config: SceneConfig,
    material: ResolvedMaterial,
    light: ResolvedLight,
    exposure: f32,
    view_matrix: [f64; 16],
    cube: UnitCube,
}

impl SceneSetup {
    /// # Errors
    /// Any [`SceneConfig::validate`] failure.
    pub fn resolve(config: &SceneConfig) -> Result<Self, SceneError> {
        config.validate()?;

        let params = &config.material;
        let material = ResolvedMaterial {
            base_color: params.color_space.to_linear(params.base_color),
            metallic: params.metallic,
            roughness: params.roughness,
            reflectance: params.reflectance,
        };

        let mut direction = config.sun.direction;
        direction.make_unit_vector();
        let light = ResolvedLight {
            color: cct(config.sun.temperature_kelvin),
            intensity_lux: config.sun.intensity_lux,
            direction,
            cast_shadows: config.sun.cast_shadows,
        };

        let exposure = config.camera.exposure.exposure();
        info!(
            light_color = %light.color,
            base_color = %material.base_color,
            exposure,
            "Resolved scene"
        );

        Ok(Self {
            config: *config,
            material,
            light,
            exposure,
            view_matrix: config.camera.look_at.view_matrix(),
            cube: UnitCube::new(),
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn material(&self) -> &ResolvedMaterial {
        &self.material
    }

    pub fn light(&self) -> &ResolvedLight {
        &self.light
    }

    /// Luminance scale derived from the camera's exposure settings
    pub fn exposure(&self) -> f32 {
        self.exposure
    }

    pub fn view_matrix(&self) -> &[f64; 16] {
        &self.view_matrix
    }

    pub fn cube(&self) -> &UnitCube {
        &self.cube
    }

    pub fn clear_color(&self) -> [f32; 4] {
        self.config.clear_color
    }

    pub fn sweep(&self) -> &LinearSweep {
        &self.config.animation
    }

    /// Model transform of the spinning cube after `elapsed`
    pub fn sweep_transform(&self, elapsed: Duration) -> [f32; 16] {
        self.config.animation.transform_at(elapsed)
    }

    /// Projection and viewport for a resized surface
    ///
    /// # Errors
    /// See [`OrthoProjection::fit_surface`].
    pub fn projection_for(
        &self,
        width: u32,
        height: u32,
    ) -> Result<(OrthoProjection, Viewport), SceneError> {
        let projection = self.config.camera.projection(width, height)?;
        Ok((projection, Viewport::covering(width, height)))
    }
}
