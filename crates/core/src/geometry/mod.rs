//! Mesh data handed to the renderer's vertex and index buffers

pub mod cube;
pub mod tangent_frame;

pub use cube::{
    AttributeType, BoundingBox, UnitCube, Vertex, VertexAttribute, INDEX_COUNT,
    POSITION_ATTRIBUTE, TANGENTS_ATTRIBUTE, VERTEX_COUNT,
};
pub use tangent_frame::pack_tangent_frame;
