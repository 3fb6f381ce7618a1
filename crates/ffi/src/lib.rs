//! C ABI for the transparent cube view.
//!
//! Every fallible call returns a [`TvErrorCode`]. A failure records a message
//! that `tv_get_last_error` exposes until the next fallible call on the same
//! thread, and a success clears it. Infallible calls leave it alone.
//! Handles (`TvScene`, `TvSliderRotation`) are opaque and must be released
//! with their matching `*_destroy` function.

mod error;
mod helpers;
mod mesh;
mod scene;
mod transform;
mod vec3;

pub use error::{tv_get_last_error, tv_get_last_error_code, TvErrorCode};
pub use mesh::{
    tv_cube_copy_indices, tv_cube_copy_vertices, tv_cube_index_count, tv_cube_layout,
    tv_cube_vertex_buffer_size, tv_cube_vertex_count, TvVertexLayout,
};
pub use scene::{
    tv_scene_camera, tv_scene_destroy, tv_scene_light, tv_scene_material, tv_scene_new,
    tv_scene_projection, tv_scene_sweep_transform, TvCamera, TvLight, TvMaterial, TvProjection,
    TvScene,
};
pub use transform::{
    tv_rotation_matrix, tv_slider_rotation_destroy, tv_slider_rotation_new,
    tv_slider_rotation_set_horizontal, tv_slider_rotation_set_vertical, TvMat4, TvSliderRotation,
};
pub use vec3::{
    tv_vec3_add, tv_vec3_div, tv_vec3_div_scalar, tv_vec3_length, tv_vec3_make_unit_vector,
    tv_vec3_mul, tv_vec3_scale, tv_vec3_squared_length, tv_vec3_sub, TvVec3,
};
