use transparent_view_core::Vec3;

use crate::error::{DefaultTvError, TvErrorCode};
use crate::helpers::{handle_ffi_result_error, instance_from_mut_ptr};

/// C-compatible 3-component vector. Also used for RGB colors (x = r, y = g, z = b).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TvVec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Vec3> for TvVec3 {
    fn from(v: Vec3) -> Self {
        Self {
            x: v.x(),
            y: v.y(),
            z: v.z(),
        }
    }
}

impl From<TvVec3> for Vec3 {
    fn from(v: TvVec3) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

/// Euclidean length of `v`.
#[no_mangle]
pub extern "C" fn tv_vec3_length(v: TvVec3) -> f32 {
    Vec3::from(v).length()
}

/// Squared length of `v`.
#[no_mangle]
pub extern "C" fn tv_vec3_squared_length(v: TvVec3) -> f32 {
    Vec3::from(v).squared_length()
}

/// Rescale `*v` to unit length in place.
///
/// A zero vector becomes NaN in every component; this is not reported as an error.
///
/// Returns
/// - `TvErrorCode::Ok` (0) on success
/// - `TvErrorCode::NullPointer` if `v` is null
///
/// # Safety
/// `v` must be null or a valid, writable pointer to a `TvVec3`.
#[no_mangle]
pub unsafe extern "C" fn tv_vec3_make_unit_vector(v: *mut TvVec3) -> TvErrorCode {
    handle_ffi_result_error(|| {
        let v = unsafe { instance_from_mut_ptr(v, "v") }?;
        let mut unit = Vec3::from(*v);
        unit.make_unit_vector();
        *v = unit.into();
        Ok::<(), DefaultTvError>(())
    })
}

/// Elementwise `a + b`.
#[no_mangle]
pub extern "C" fn tv_vec3_add(a: TvVec3, b: TvVec3) -> TvVec3 {
    (Vec3::from(a) + Vec3::from(b)).into()
}

/// Elementwise `a - b`.
#[no_mangle]
pub extern "C" fn tv_vec3_sub(a: TvVec3, b: TvVec3) -> TvVec3 {
    (Vec3::from(a) - Vec3::from(b)).into()
}

/// Elementwise `a * b`.
#[no_mangle]
pub extern "C" fn tv_vec3_mul(a: TvVec3, b: TvVec3) -> TvVec3 {
    (Vec3::from(a) * Vec3::from(b)).into()
}

/// Elementwise `a / b`. Zero components of `b` give infinities or NaNs.
#[no_mangle]
pub extern "C" fn tv_vec3_div(a: TvVec3, b: TvVec3) -> TvVec3 {
    (Vec3::from(a) / Vec3::from(b)).into()
}

/// `v` with every component multiplied by `t`.
#[no_mangle]
pub extern "C" fn tv_vec3_scale(v: TvVec3, t: f32) -> TvVec3 {
    (Vec3::from(v) * t).into()
}

/// `v` with every component divided by `t`. `t == 0` gives infinities or NaNs.
#[no_mangle]
pub extern "C" fn tv_vec3_div_scalar(v: TvVec3, t: f32) -> TvVec3 {
    (Vec3::from(v) / t).into()
}
