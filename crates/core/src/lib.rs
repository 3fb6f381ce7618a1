//! Transparent View Core Library
//!
//! Host-independent math behind a transparent rendering demo: a lit cube
//! spinning over a see-through surface. The host owns the rendering engine,
//! the surface and the UI; this crate computes what gets handed to them.
//!
//! ## Contents
//! - [`Vec3`]: three-component vector with position and color views
//! - Color conversion (`sRGB` decoding, correlated color temperature)
//! - Cube mesh with quaternion tangent frames
//! - Rotation transforms driven by sliders or a linear sweep
//! - Orthographic camera, look-at and exposure
//! - RON-backed scene configuration

// Core types and utilities
pub mod core_types;

pub mod camera;
pub mod error;
pub mod geometry;
pub mod scene;
pub mod transform;

// Re-export core types
pub use core_types::{cct, srgb_to_linear, RgbType, Vec3};

pub use camera::{Exposure, LookAt, OrthoProjection, Viewport};
pub use error::SceneError;
pub use geometry::{pack_tangent_frame, UnitCube, Vertex};
pub use scene::{SceneConfig, SceneSetup};
pub use transform::{progress_to_degrees, rotation_matrix, LinearSweep, SliderRotation};
