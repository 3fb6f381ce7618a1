use std::sync::LazyLock;
use transparent_view_core::geometry::{
    UnitCube, INDEX_COUNT, POSITION_ATTRIBUTE, TANGENTS_ATTRIBUTE, VERTEX_COUNT,
};

use crate::error::{DefaultTvError, TvErrorCode};
use crate::helpers::handle_ffi_result_error;

// Built on first use and shared by every caller; the data never changes.
static CUBE: LazyLock<UnitCube> = LazyLock::new(UnitCube::new);

/// Byte layout of one interleaved cube vertex, for declaring vertex attributes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TvVertexLayout {
    /// Bytes between consecutive vertices.
    pub stride: usize,
    /// Offset of the FLOAT3 position.
    pub position_offset: usize,
    /// Offset of the FLOAT4 packed tangent frame.
    pub tangents_offset: usize,
}

/// Number of vertices in the cube mesh (24).
#[no_mangle]
pub extern "C" fn tv_cube_vertex_count() -> usize {
    VERTEX_COUNT
}

/// Number of `u16` indices in the cube mesh (36).
#[no_mangle]
pub extern "C" fn tv_cube_index_count() -> usize {
    INDEX_COUNT
}

/// Size in bytes of the interleaved vertex buffer.
#[no_mangle]
pub extern "C" fn tv_cube_vertex_buffer_size() -> usize {
    CUBE.vertex_bytes().len()
}

/// Attribute layout of the vertex buffer.
#[no_mangle]
pub extern "C" fn tv_cube_layout() -> TvVertexLayout {
    TvVertexLayout {
        stride: POSITION_ATTRIBUTE.stride,
        position_offset: POSITION_ATTRIBUTE.offset,
        tangents_offset: TANGENTS_ATTRIBUTE.offset,
    }
}

/// Copy the interleaved vertex data (native byte order) into `out_bytes`.
///
/// Returns
/// - `TvErrorCode::Ok` (0) on success
/// - `TvErrorCode::NullPointer` if `out_bytes` is null
/// - `TvErrorCode::BufferTooSmall` if `len < tv_cube_vertex_buffer_size()`
///
/// # Safety
/// `out_bytes` must be null or valid for writes of `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn tv_cube_copy_vertices(out_bytes: *mut u8, len: usize) -> TvErrorCode {
    handle_ffi_result_error(|| {
        if out_bytes.is_null() {
            return Err(DefaultTvError::null_pointer("out_bytes"));
        }
        let bytes = CUBE.vertex_bytes();
        if len < bytes.len() {
            return Err(DefaultTvError::buffer_too_small("out_bytes", bytes.len(), len));
        }
        let out = unsafe { std::slice::from_raw_parts_mut(out_bytes, bytes.len()) };
        out.copy_from_slice(bytes);
        Ok(())
    })
}

/// Copy the triangle indices into `out_indices`.
///
/// Returns
/// - `TvErrorCode::Ok` (0) on success
/// - `TvErrorCode::NullPointer` if `out_indices` is null
/// - `TvErrorCode::BufferTooSmall` if `len < tv_cube_index_count()`
///
/// # Safety
/// `out_indices` must be null or valid for writes of `len` `u16` values.
#[no_mangle]
pub unsafe extern "C" fn tv_cube_copy_indices(out_indices: *mut u16, len: usize) -> TvErrorCode {
    handle_ffi_result_error(|| {
        if out_indices.is_null() {
            return Err(DefaultTvError::null_pointer("out_indices"));
        }
        let indices = CUBE.indices();
        if len < indices.len() {
            return Err(DefaultTvError::buffer_too_small(
                "out_indices",
                indices.len(),
                len,
            ));
        }
        let out = unsafe { std::slice::from_raw_parts_mut(out_indices, indices.len()) };
        out.copy_from_slice(indices);
        Ok(())
    })
}
