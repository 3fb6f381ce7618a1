//! Lit unit cube: interleaved vertex data and triangle indices

use super::tangent_frame::pack_tangent_frame;
use crate::core_types::Vec3;
use bytemuck::{Pod, Zeroable};
use std::mem::{offset_of, size_of};

/// Number of cube faces
pub const FACE_COUNT: usize = 6;
/// Four corners per face, none shared so each face keeps its own frame
pub const VERTEX_COUNT: usize = FACE_COUNT * 4;
/// Two triangles per face
pub const INDEX_COUNT: usize = FACE_COUNT * 2 * 3;

/// One interleaved vertex: position followed by a packed tangent frame
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vertex {
    pub position: [f32; 3],
    /// Quaternion `[x, y, z, w]` from [`pack_tangent_frame`]
    pub tangents: [f32; 4],
}

/// Component type of a vertex attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    Float3,
    Float4,
}

/// Where one attribute sits inside the interleaved buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub kind: AttributeType,
    /// Byte offset from the start of a vertex
    pub offset: usize,
    /// Bytes between consecutive vertices
    pub stride: usize,
}

/// Layout of [`Vertex`] for the renderer's vertex buffer declaration
pub const POSITION_ATTRIBUTE: VertexAttribute = VertexAttribute {
    kind: AttributeType::Float3,
    offset: offset_of!(Vertex, position),
    stride: size_of::<Vertex>(),
};

/// See [`POSITION_ATTRIBUTE`]
pub const TANGENTS_ATTRIBUTE: VertexAttribute = VertexAttribute {
    kind: AttributeType::Float4,
    offset: offset_of!(Vertex, tangents),
    stride: size_of::<Vertex>(),
};

/// Axis-aligned box given as center and half extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub center: Vec3,
    pub half_extent: Vec3,
}

/// Cube centered at the origin with half-size 0.5.
///
/// Faces are emitted in the order -Z, +X, +Z, -X, -Y, +Y.
#[derive(Debug, Clone)]
pub struct UnitCube {
    vertices: Vec<Vertex>,
    indices: Vec<u16>,
}

impl Default for UnitCube {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitCube {
    pub fn new() -> Self {
        let v = Vec3::new;

        let px = pack_tangent_frame(v(0.0, 1.0, 0.0), v(0.0, 0.0, -1.0), v(1.0, 0.0, 0.0));
        let nx = pack_tangent_frame(v(0.0, 1.0, 0.0), v(0.0, 0.0, -1.0), v(-1.0, 0.0, 0.0));
        let py = pack_tangent_frame(v(-1.0, 0.0, 0.0), v(0.0, 0.0, -1.0), v(0.0, 1.0, 0.0));
        let ny = pack_tangent_frame(v(-1.0, 0.0, 0.0), v(0.0, 0.0, 1.0), v(0.0, -1.0, 0.0));
        let pz = pack_tangent_frame(v(0.0, 1.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 0.0, 1.0));
        let nz = pack_tangent_frame(v(0.0, -1.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 0.0, -1.0));

        let faces: [([[f32; 3]; 4], [f32; 4]); FACE_COUNT] = [
            // -Z
            (
                [
                    [-0.5, -0.5, -0.5],
                    [-0.5, 0.5, -0.5],
                    [0.5, 0.5, -0.5],
                    [0.5, -0.5, -0.5],
                ],
                nz,
            ),
            // +X
            (
                [
                    [0.5, -0.5, -0.5],
                    [0.5, 0.5, -0.5],
                    [0.5, 0.5, 0.5],
                    [0.5, -0.5, 0.5],
                ],
                px,
            ),
            // +Z
            (
                [
                    [-0.5, -0.5, 0.5],
                    [0.5, -0.5, 0.5],
                    [0.5, 0.5, 0.5],
                    [-0.5, 0.5, 0.5],
                ],
                pz,
            ),
            // -X
            (
                [
                    [-0.5, -0.5, 0.5],
                    [-0.5, 0.5, 0.5],
                    [-0.5, 0.5, -0.5],
                    [-0.5, -0.5, -0.5],
                ],
                nx,
            ),
            // -Y
            (
                [
                    [-0.5, -0.5, 0.5],
                    [-0.5, -0.5, -0.5],
                    [0.5, -0.5, -0.5],
                    [0.5, -0.5, 0.5],
                ],
                ny,
            ),
            // +Y
            (
                [
                    [-0.5, 0.5, -0.5],
                    [-0.5, 0.5, 0.5],
                    [0.5, 0.5, 0.5],
                    [0.5, 0.5, -0.5],
                ],
                py,
            ),
        ];

        let vertices: Vec<Vertex> = faces
            .iter()
            .flat_map(|(corners, tangents)| {
                corners.iter().map(move |&position| Vertex {
                    position,
                    tangents: *tangents,
                })
            })
            .collect();

        let indices: Vec<u16> = (0..FACE_COUNT as u16)
            .flat_map(|face| {
                let i = face * 4;
                [i, i + 1, i + 2, i, i + 2, i + 3]
            })
            .collect();

        tracing::debug!(
            vertices = vertices.len(),
            indices = indices.len(),
            "Built unit cube mesh"
        );

        Self { vertices, indices }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Vertex buffer contents in native byte order
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer contents (`u16`) in native byte order
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Bounds declared for the renderable
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox {
            center: Vec3::ZERO,
            half_extent: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}
