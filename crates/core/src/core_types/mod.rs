//! Core types and utilities

pub mod color;
pub mod vec3;

pub use color::{cct, srgb_to_linear, RgbType};
pub use vec3::Vec3;
