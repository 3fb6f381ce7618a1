use transparent_view_core::{rotation_matrix, SliderRotation};

use crate::error::{DefaultTvError, TvErrorCode};
use crate::helpers::{handle_ffi_result_error, instance_from_mut_ptr, write_out};
use crate::vec3::TvVec3;

/// Column-major 4x4 matrix, as consumed by the renderer's transform manager.
pub type TvMat4 = [f32; 16];

/// State of the two rotation sliders. Opaque to C.
pub struct TvSliderRotation {
    inner: SliderRotation,
}

/// Write the rotation of `angle_degrees` about `axis` into `out_matrix`.
///
/// A zero axis produces NaNs rather than an error.
///
/// Returns
/// - `TvErrorCode::Ok` (0) on success
/// - `TvErrorCode::NullPointer` if `out_matrix` is null
///
/// # Safety
/// `out_matrix` must be null or valid for writes of 16 floats.
#[no_mangle]
pub unsafe extern "C" fn tv_rotation_matrix(
    angle_degrees: f32,
    axis: TvVec3,
    out_matrix: *mut TvMat4,
) -> TvErrorCode {
    handle_ffi_result_error(|| unsafe {
        write_out(out_matrix, "out_matrix", rotation_matrix(angle_degrees, axis.into()))
    })
}

/// Create slider state with both angles at 1 degree.
/// Free with `tv_slider_rotation_destroy`.
#[no_mangle]
pub extern "C" fn tv_slider_rotation_new() -> *mut TvSliderRotation {
    Box::into_raw(Box::new(TvSliderRotation {
        inner: SliderRotation::new(),
    }))
}

/// Destroy slider state created by `tv_slider_rotation_new`. Null is ignored.
///
/// # Safety
/// `ptr` must be null or a pointer from `tv_slider_rotation_new` not yet destroyed.
#[no_mangle]
pub unsafe extern "C" fn tv_slider_rotation_destroy(ptr: *mut TvSliderRotation) {
    if ptr.is_null() {
        return;
    }
    // SAFETY: produced by Box::into_raw in tv_slider_rotation_new
    unsafe {
        drop(Box::from_raw(ptr));
    }
}

/// Apply a horizontal slider move (`progress` 0..=100, clamped) and write the
/// resulting model transform.
///
/// Returns
/// - `TvErrorCode::Ok` (0) on success
/// - `TvErrorCode::NullPointer` if `ptr` or `out_matrix` is null
///
/// # Safety
/// `ptr` must be null or a live pointer from `tv_slider_rotation_new`.
/// `out_matrix` must be null or valid for writes of 16 floats.
#[no_mangle]
pub unsafe extern "C" fn tv_slider_rotation_set_horizontal(
    ptr: *mut TvSliderRotation,
    progress: u32,
    out_matrix: *mut TvMat4,
) -> TvErrorCode {
    handle_ffi_result_error(|| {
        let sliders = unsafe { instance_from_mut_ptr(ptr, "ptr") }?;
        // a failed call must not move the slider
        if out_matrix.is_null() {
            return Err(DefaultTvError::null_pointer("out_matrix"));
        }
        let matrix = sliders.inner.set_horizontal(progress);
        unsafe {
            out_matrix.write(matrix);
        }
        Ok(())
    })
}

/// Apply a vertical slider move. See `tv_slider_rotation_set_horizontal`.
///
/// A failed call leaves the slider state unchanged.
///
/// # Safety
/// Same requirements as `tv_slider_rotation_set_horizontal`.
#[no_mangle]
pub unsafe extern "C" fn tv_slider_rotation_set_vertical(
    ptr: *mut TvSliderRotation,
    progress: u32,
    out_matrix: *mut TvMat4,
) -> TvErrorCode {
    handle_ffi_result_error(|| {
        let sliders = unsafe { instance_from_mut_ptr(ptr, "ptr") }?;
        // a failed call must not move the slider
        if out_matrix.is_null() {
            return Err(DefaultTvError::null_pointer("out_matrix"));
        }
        let matrix = sliders.inner.set_vertical(progress);
        unsafe {
            out_matrix.write(matrix);
        }
        Ok(())
    })
}
