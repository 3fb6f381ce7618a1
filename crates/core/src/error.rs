//! Errors raised while building scene parameters.
//!
//! Vector arithmetic never fails (special values propagate per IEEE-754);
//! only configuration and surface-dependent setup can be rejected.

use thiserror::Error;

/// The error returned by scene configuration, camera and surface setup
#[derive(Debug, Error)]
pub enum SceneError {
    /// The RON text could not be parsed into a `SceneConfig`
    #[error("Failed to parse scene config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// The config could not be serialized back to RON
    #[error("Failed to serialize scene config: {0}")]
    Serialize(#[from] ron::Error),

    /// A parameter fell outside its closed range
    #[error("{name} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    /// A parameter that must be strictly positive and finite was not
    #[error("{name} must be finite and positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// A direction vector had zero length and cannot be normalised
    #[error("{name} must have a non-zero length")]
    ZeroDirection { name: &'static str },

    /// The surface has no area to project onto
    #[error("Surface must have a non-zero size, got {width}x{height}")]
    EmptySurface { width: u32, height: u32 },

    /// The depth range of a projection is empty or inverted
    #[error("Near plane ({near}) must be in front of far plane ({far})")]
    DepthRange { near: f64, far: f64 },
}
