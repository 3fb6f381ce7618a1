//! Three-component vector for positions, directions and colors.
//!
//! `Vec3` is a plain value: every operation returns a new vector except
//! [`Vec3::make_unit_vector`], which rescales the receiver in place.
//!
//! # Special values
//! Nothing here validates its inputs. Division by zero (scalar or
//! elementwise) and normalising a zero-length vector follow IEEE-754 and
//! produce infinities or NaNs instead of panicking or returning an error.
//!
//! # Usage
//! ```
//! use transparent_view_core::Vec3;
//!
//! let mut v = Vec3::new(3.0, 4.0, 0.0);
//! assert_eq!(v.length(), 5.0);
//!
//! v.make_unit_vector();
//! assert!((v.length() - 1.0).abs() < 1e-6);
//!
//! // Color-style access reads the same storage
//! assert_eq!(v.r(), v.x());
//! ```

use bytemuck::{Pod, Zeroable};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Sub};

/// A point, direction or RGB color in 3D space.
///
/// Components are addressable by position (`x`, `y`, `z`, or `v[0..3]`) and
/// by color channel (`r`, `g`, `b`). Both views share one `[f32; 3]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
#[serde(from = "[f32; 3]", into = "[f32; 3]")]
#[repr(C)]
pub struct Vec3 {
    e: [f32; 3],
}

impl Vec3 {
    /// The zero vector
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    /// Create a vector from three components. Any value is accepted.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vec3 { e: [x, y, z] }
    }

    #[inline]
    pub const fn x(&self) -> f32 {
        self.e[0]
    }

    #[inline]
    pub const fn y(&self) -> f32 {
        self.e[1]
    }

    #[inline]
    pub const fn z(&self) -> f32 {
        self.e[2]
    }

    /// Red channel, same storage as [`Vec3::x`]
    #[inline]
    pub const fn r(&self) -> f32 {
        self.e[0]
    }

    /// Green channel, same storage as [`Vec3::y`]
    #[inline]
    pub const fn g(&self) -> f32 {
        self.e[1]
    }

    /// Blue channel, same storage as [`Vec3::z`]
    #[inline]
    pub const fn b(&self) -> f32 {
        self.e[2]
    }

    /// Euclidean norm. Zero for the zero vector.
    #[inline]
    pub fn length(&self) -> f32 {
        self.squared_length().sqrt()
    }

    /// Sum of squared components, for comparisons that don't need the root
    #[inline]
    pub fn squared_length(&self) -> f32 {
        self.e[0] * self.e[0] + self.e[1] * self.e[1] + self.e[2] * self.e[2]
    }

    /// Rescale this vector to unit length in place.
    ///
    /// A zero-length vector is not guarded against: the scale factor becomes
    /// infinite and every component ends up NaN.
    #[inline]
    pub fn make_unit_vector(&mut self) {
        let k = 1.0 / self.length();
        self.e[0] *= k;
        self.e[1] *= k;
        self.e[2] *= k;
    }

    /// Unit vector with the same direction, leaving `self` untouched.
    ///
    /// Same special-value behaviour as [`Vec3::make_unit_vector`].
    #[inline]
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.make_unit_vector();
        self
    }

    #[inline]
    pub fn dot(&self, other: Vec3) -> f32 {
        self.e[0] * other.e[0] + self.e[1] * other.e[1] + self.e[2] * other.e[2]
    }

    /// Right-handed cross product
    #[inline]
    #[must_use]
    pub fn cross(&self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.e[1] * other.e[2] - self.e[2] * other.e[1],
            self.e[2] * other.e[0] - self.e[0] * other.e[2],
            self.e[0] * other.e[1] - self.e[1] * other.e[0],
        )
    }

    /// Components as an array, in `x, y, z` order
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        self.e
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.e[index]
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.e[index]
    }
}

// ============================================================================
// ELEMENTWISE OPERATORS (vector, vector)
// ============================================================================

impl Add for Vec3 {
    type Output = Vec3;

    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z())
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x() - rhs.x(), self.y() - rhs.y(), self.z() - rhs.z())
    }
}

impl Mul<Vec3> for Vec3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x() * rhs.x(), self.y() * rhs.y(), self.z() * rhs.z())
    }
}

impl Div<Vec3> for Vec3 {
    type Output = Vec3;

    #[inline]
    fn div(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x() / rhs.x(), self.y() / rhs.y(), self.z() / rhs.z())
    }
}

// ============================================================================
// SCALAR OPERATORS (vector, scalar)
// ============================================================================

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, t: f32) -> Vec3 {
        Vec3::new(self.x() * t, self.y() * t, self.z() * t)
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;

    #[inline]
    fn div(self, t: f32) -> Vec3 {
        Vec3::new(self.x() / t, self.y() / t, self.z() / t)
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<[f32; 3]> for Vec3 {
    fn from(e: [f32; 3]) -> Self {
        Vec3 { e }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> [f32; 3] {
        v.e
    }
}

impl From<Vector3<f32>> for Vec3 {
    fn from(v: Vector3<f32>) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for Vector3<f32> {
    fn from(v: Vec3) -> Vector3<f32> {
        Vector3::new(v.x(), v.y(), v.z())
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_accessors_alias_same_storage() {
        let v = Vec3::new(0.25, -7.5, 1e6);
        assert_eq!(v.x(), 0.25);
        assert_eq!(v.y(), -7.5);
        assert_eq!(v.z(), 1e6);
        assert_eq!(v.r(), v.x());
        assert_eq!(v.g(), v.y());
        assert_eq!(v.b(), v.z());
        assert_eq!(v[0], v.x());
        assert_eq!(v[2], v.b());
    }

    #[test]
    fn test_index_mut_is_visible_through_both_views() {
        let mut v = Vec3::ZERO;
        v[1] = 0.5;
        assert_eq!(v.y(), 0.5);
        assert_eq!(v.g(), 0.5);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_index_past_third_component_panics() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let _ = v[3];
    }

    #[test]
    fn test_length_three_four_five() {
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).length(), 5.0);
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).squared_length(), 25.0);
        assert_eq!(Vec3::ZERO.length(), 0.0);
    }

    #[test]
    fn test_elementwise_operators() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(
            Vec3::new(4.0, 6.0, 8.0) / Vec3::new(2.0, 2.0, 2.0),
            Vec3::new(2.0, 3.0, 4.0)
        );
    }

    #[test]
    fn test_scalar_operators() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a / 2.0, Vec3::new(0.5, 1.0, 1.5));
    }

    #[test]
    fn test_operators_leave_operands_untouched() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let _ = a + a;
        let _ = a * 4.0;
        assert_eq!(a, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_make_unit_vector_preserves_direction() {
        let mut v = Vec3::new(3.0, 4.0, 0.0);
        v.make_unit_vector();
        assert_relative_eq!(v.length(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(v.x() / v.y(), 3.0 / 4.0, epsilon = 1e-6);
        assert_eq!(v.z(), 0.0);
    }

    #[test]
    fn test_make_unit_vector_of_zero_yields_nan() {
        let mut v = Vec3::ZERO;
        v.make_unit_vector();
        assert!(v.x().is_nan());
        assert!(v.y().is_nan());
        assert!(v.z().is_nan());
    }

    #[test]
    fn test_normalized_does_not_mutate_receiver() {
        let v = Vec3::new(0.0, 0.0, 2.0);
        let n = v.normalized();
        assert_eq!(n, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(v, Vec3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_division_by_zero_propagates_infinity() {
        let v = Vec3::new(1.0, -1.0, 0.0) / 0.0;
        assert_eq!(v.x(), f32::INFINITY);
        assert_eq!(v.y(), f32::NEG_INFINITY);
        assert!(v.z().is_nan());

        let w = Vec3::new(1.0, 2.0, 3.0) / Vec3::new(1.0, 0.0, 1.0);
        assert_eq!(w.x(), 1.0);
        assert!(w.y().is_infinite());
        assert_eq!(w.z(), 3.0);
    }

    #[test]
    fn test_dot_and_cross() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(x.dot(y), 0.0);
        assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_nalgebra_conversion() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let n: Vector3<f32> = v.into();
        assert_eq!(n, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(Vec3::from(n), v);
    }

    #[test]
    fn test_display() {
        assert_eq!(Vec3::new(1.0, -2.5, 0.0).to_string(), "(1, -2.5, 0)");
    }
}
