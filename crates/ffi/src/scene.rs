use std::ffi::CStr;
use std::os::raw::c_char;
use std::ptr;
use std::time::Duration;
use transparent_view_core::{SceneConfig, SceneSetup};

use crate::error::{DefaultTvError, TvErrorCode};
use crate::helpers::{
    handle_ffi_result_error, instance_from_ptr, track_error, track_result, write_out,
};
use crate::transform::TvMat4;
use crate::vec3::TvVec3;

/// A resolved scene: material, light, camera and animation values ready to
/// hand to the renderer. Opaque to C.
///
/// # Thread Safety
/// Every query takes `*const TvScene` and only reads, so a scene may be
/// queried from several threads at once. Destroying it while another thread
/// queries is undefined behaviour; the host must serialize destruction.
pub struct TvScene {
    setup: SceneSetup,
}

/// Material parameters with a linear base color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TvMaterial {
    pub base_color: TvVec3,
    pub metallic: f32,
    pub roughness: f32,
    pub reflectance: f32,
}

/// Directional sun light.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TvLight {
    /// Linear RGB, brightest channel 1.
    pub color: TvVec3,
    /// Illuminance in lux.
    pub intensity_lux: f32,
    /// Unit direction the light travels.
    pub direction: TvVec3,
    pub cast_shadows: bool,
}

/// View-level settings that don't depend on the surface.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TvCamera {
    /// Column-major world-to-view matrix.
    pub view_matrix: [f64; 16],
    /// Luminance scale from aperture, shutter speed and ISO.
    pub exposure: f32,
    /// RGBA clear color. Alpha 0 keeps the surface see-through.
    pub clear_color: [f32; 4],
    pub opaque: bool,
}

/// Orthographic projection and viewport fitted to a surface.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TvProjection {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
    pub near: f64,
    pub far: f64,
    /// Column-major projection matrix.
    pub matrix: [f64; 16],
    pub viewport_width: u32,
    pub viewport_height: u32,
}

/// # Safety
/// `config_ron` must be null or a valid NUL-terminated string.
unsafe fn parse_config(config_ron: *const c_char) -> Result<SceneConfig, DefaultTvError> {
    if config_ron.is_null() {
        return Ok(SceneConfig::default());
    }
    let text = unsafe { CStr::from_ptr(config_ron) }
        .to_str()
        .map_err(|e| DefaultTvError::invalid_parameter(format!("config_ron is not UTF-8: {e}")))?;
    SceneConfig::from_ron_str(text).map_err(|e| DefaultTvError::invalid_config(&e))
}

/// Create a scene from a RON description.
///
/// - `config_ron`: NUL-terminated RON text, or null for the built-in defaults.
///   Fields left out take their default values.
/// - `out_scene`: receives the new scene, or null on failure.
///
/// Returns
/// - `TvErrorCode::Ok` (0) on success
/// - `TvErrorCode::NullPointer` if `out_scene` is null
/// - `TvErrorCode::InvalidParameter` if `config_ron` is not UTF-8
/// - `TvErrorCode::InvalidConfig` if the RON fails to parse or validate
///
/// Free with `tv_scene_destroy`.
///
/// # Safety
/// `config_ron` must be null or a valid NUL-terminated string.
/// `out_scene` must be null or valid for a pointer-sized write.
#[no_mangle]
pub unsafe extern "C" fn tv_scene_new(
    config_ron: *const c_char,
    out_scene: *mut *mut TvScene,
) -> TvErrorCode {
    if out_scene.is_null() {
        return track_error(&DefaultTvError::null_pointer("out_scene"));
    }

    let result = unsafe { parse_config(config_ron) }
        .and_then(|config| {
            SceneSetup::resolve(&config).map_err(|e| DefaultTvError::invalid_config(&e))
        });

    match track_result(result) {
        Ok(setup) => {
            unsafe {
                *out_scene = Box::into_raw(Box::new(TvScene { setup }));
            }
            TvErrorCode::Ok
        }
        Err(code) => {
            unsafe {
                // Set to null on error (per documentation contract)
                *out_scene = ptr::null_mut();
            }
            code
        }
    }
}

/// Destroy a scene created by `tv_scene_new`. Null is ignored.
///
/// # Safety
/// `ptr` must be null or a pointer from `tv_scene_new` not yet destroyed.
#[no_mangle]
pub unsafe extern "C" fn tv_scene_destroy(ptr: *mut TvScene) {
    if ptr.is_null() {
        return;
    }
    // SAFETY: produced by Box::into_raw in tv_scene_new
    unsafe {
        drop(Box::from_raw(ptr));
    }
}

/// Fill `out_material` with the scene's material parameters.
///
/// Returns
/// - `TvErrorCode::Ok` (0) on success
/// - `TvErrorCode::NullPointer` if `ptr` or `out_material` is null
///
/// # Safety
/// `ptr` must be null or a live scene. `out_material` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn tv_scene_material(
    ptr: *const TvScene,
    out_material: *mut TvMaterial,
) -> TvErrorCode {
    handle_ffi_result_error(|| {
        let scene = unsafe { instance_from_ptr(ptr, "ptr") }?;
        let material = scene.setup.material();
        let value = TvMaterial {
            base_color: material.base_color.into(),
            metallic: material.metallic,
            roughness: material.roughness,
            reflectance: material.reflectance,
        };
        unsafe { write_out(out_material, "out_material", value) }
    })
}

/// Fill `out_light` with the scene's sun light.
///
/// Returns
/// - `TvErrorCode::Ok` (0) on success
/// - `TvErrorCode::NullPointer` if `ptr` or `out_light` is null
///
/// # Safety
/// `ptr` must be null or a live scene. `out_light` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn tv_scene_light(
    ptr: *const TvScene,
    out_light: *mut TvLight,
) -> TvErrorCode {
    handle_ffi_result_error(|| {
        let scene = unsafe { instance_from_ptr(ptr, "ptr") }?;
        let light = scene.setup.light();
        let value = TvLight {
            color: light.color.into(),
            intensity_lux: light.intensity_lux,
            direction: light.direction.into(),
            cast_shadows: light.cast_shadows,
        };
        unsafe { write_out(out_light, "out_light", value) }
    })
}

/// Fill `out_camera` with the view matrix, exposure and clear settings.
///
/// Returns
/// - `TvErrorCode::Ok` (0) on success
/// - `TvErrorCode::NullPointer` if `ptr` or `out_camera` is null
///
/// # Safety
/// `ptr` must be null or a live scene. `out_camera` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn tv_scene_camera(
    ptr: *const TvScene,
    out_camera: *mut TvCamera,
) -> TvErrorCode {
    handle_ffi_result_error(|| {
        let scene = unsafe { instance_from_ptr(ptr, "ptr") }?;
        let value = TvCamera {
            view_matrix: *scene.setup.view_matrix(),
            exposure: scene.setup.exposure(),
            clear_color: scene.setup.clear_color(),
            opaque: scene.setup.config().opaque,
        };
        unsafe { write_out(out_camera, "out_camera", value) }
    })
}

/// Fit the projection and viewport to a resized surface.
///
/// Returns
/// - `TvErrorCode::Ok` (0) on success
/// - `TvErrorCode::NullPointer` if `ptr` or `out_projection` is null
/// - `TvErrorCode::InvalidParameter` if `width` or `height` is zero
///
/// # Safety
/// `ptr` must be null or a live scene. `out_projection` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn tv_scene_projection(
    ptr: *const TvScene,
    width: u32,
    height: u32,
    out_projection: *mut TvProjection,
) -> TvErrorCode {
    handle_ffi_result_error(|| {
        let scene = unsafe { instance_from_ptr(ptr, "ptr") }?;
        let (projection, viewport) = scene
            .setup
            .projection_for(width, height)
            .map_err(|e| DefaultTvError::invalid_parameter(e.to_string()))?;
        let value = TvProjection {
            left: projection.left,
            right: projection.right,
            bottom: projection.bottom,
            top: projection.top,
            near: projection.near,
            far: projection.far,
            matrix: projection.matrix(),
            viewport_width: viewport.width,
            viewport_height: viewport.height,
        };
        unsafe { write_out(out_projection, "out_projection", value) }
    })
}

/// Model transform of the spinning cube `elapsed_ms` after the sweep started.
///
/// Returns
/// - `TvErrorCode::Ok` (0) on success
/// - `TvErrorCode::NullPointer` if `ptr` or `out_matrix` is null
///
/// # Safety
/// `ptr` must be null or a live scene. `out_matrix` must be null or valid
/// for writes of 16 floats.
#[no_mangle]
pub unsafe extern "C" fn tv_scene_sweep_transform(
    ptr: *const TvScene,
    elapsed_ms: u64,
    out_matrix: *mut TvMat4,
) -> TvErrorCode {
    handle_ffi_result_error(|| {
        let scene = unsafe { instance_from_ptr(ptr, "ptr") }?;
        let matrix = scene.setup.sweep_transform(Duration::from_millis(elapsed_ms));
        unsafe { write_out(out_matrix, "out_matrix", matrix) }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{tv_get_last_error, tv_get_last_error_code};
    use approx::assert_relative_eq;
    use std::ffi::CString;

    fn new_scene(config: Option<&str>) -> (TvErrorCode, *mut TvScene) {
        let text = config.map(|c| CString::new(c).unwrap());
        let mut scene = ptr::null_mut();
        let code = unsafe {
            tv_scene_new(
                text.as_ref().map_or(ptr::null(), |t| t.as_ptr()),
                &mut scene,
            )
        };
        (code, scene)
    }

    #[test]
    fn test_default_scene() {
        let (code, scene) = new_scene(None);
        assert_eq!(code, TvErrorCode::Ok);
        assert!(!scene.is_null());

        let mut light = TvLight {
            color: TvVec3::default(),
            intensity_lux: 0.0,
            direction: TvVec3::default(),
            cast_shadows: false,
        };
        unsafe {
            assert_eq!(tv_scene_light(scene, &mut light), TvErrorCode::Ok);
            tv_scene_destroy(scene);
        }
        assert_eq!(light.intensity_lux, 110_000.0);
        assert!(light.cast_shadows);
        assert_relative_eq!(light.direction.x, -(1.0f32 / 3.0).sqrt(), epsilon = 1e-6);
    }

    #[test]
    fn test_config_overrides_material() {
        let (code, scene) = new_scene(Some("(material: (roughness: 0.9, color_space: Linear))"));
        assert_eq!(code, TvErrorCode::Ok);

        let mut material = TvMaterial {
            base_color: TvVec3::default(),
            metallic: -1.0,
            roughness: -1.0,
            reflectance: -1.0,
        };
        unsafe {
            assert_eq!(tv_scene_material(scene, &mut material), TvErrorCode::Ok);
            tv_scene_destroy(scene);
        }
        assert_eq!(material.roughness, 0.9);
        assert_eq!(material.base_color.y, 0.85);
    }

    #[test]
    fn test_invalid_config_reports_message() {
        let (code, scene) = new_scene(Some("(sun: (intensity_lux: -5.0))"));
        assert_eq!(code, TvErrorCode::InvalidConfig);
        assert!(scene.is_null());
        assert_eq!(tv_get_last_error_code(), TvErrorCode::InvalidConfig);

        let msg = unsafe { CStr::from_ptr(tv_get_last_error()) };
        assert!(msg.to_str().unwrap().contains("sun.intensity_lux"));
    }

    #[test]
    fn test_inverted_depth_range_is_a_config_error() {
        let (code, scene) = new_scene(Some("(camera: (near: 5.0, far: 1.0))"));
        assert_eq!(code, TvErrorCode::InvalidConfig);
        assert!(scene.is_null());
        assert_eq!(tv_get_last_error_code(), TvErrorCode::InvalidConfig);
    }

    #[test]
    fn test_success_clears_last_error() {
        let _ = new_scene(Some("not ron at all ("));
        assert_ne!(tv_get_last_error_code(), TvErrorCode::Ok);

        let (code, scene) = new_scene(None);
        assert_eq!(code, TvErrorCode::Ok);
        assert!(tv_get_last_error().is_null());
        unsafe {
            tv_scene_destroy(scene);
        }
    }

    #[test]
    fn test_projection_and_camera() {
        let (_, scene) = new_scene(None);
        let mut projection = TvProjection {
            left: 0.0,
            right: 0.0,
            bottom: 0.0,
            top: 0.0,
            near: 0.0,
            far: 0.0,
            matrix: [0.0; 16],
            viewport_width: 0,
            viewport_height: 0,
        };
        let mut camera = TvCamera {
            view_matrix: [0.0; 16],
            exposure: 0.0,
            clear_color: [1.0; 4],
            opaque: true,
        };
        unsafe {
            assert_eq!(
                tv_scene_projection(scene, 800, 400, &mut projection),
                TvErrorCode::Ok
            );
            assert_eq!(
                tv_scene_projection(scene, 800, 0, &mut projection),
                TvErrorCode::InvalidParameter
            );
            assert_eq!(tv_scene_camera(scene, &mut camera), TvErrorCode::Ok);
            tv_scene_destroy(scene);
        }
        assert_eq!(projection.right, 3.0);
        assert_eq!(projection.viewport_width, 800);
        assert_eq!(camera.clear_color, [0.0; 4]);
        assert!(!camera.opaque);
        assert!(camera.exposure > 0.0);
    }

    #[test]
    fn test_sweep_transform_on_null_scene() {
        let mut m: TvMat4 = [0.0; 16];
        let code = unsafe { tv_scene_sweep_transform(ptr::null(), 10, &mut m) };
        assert_eq!(code, TvErrorCode::NullPointer);
    }
}
