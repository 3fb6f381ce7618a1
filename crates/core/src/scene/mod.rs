//! Scene configuration and resolution

pub mod config;
pub mod setup;

pub use config::{
    CameraSettings, MaterialParams, SceneConfig, SunLight, TEMPERATURE_RANGE_KELVIN,
};
pub use setup::{ResolvedLight, ResolvedMaterial, SceneSetup};
