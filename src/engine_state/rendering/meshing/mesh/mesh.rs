//! Mesh data produced by the mesh generator and handed to a mesh backend.

use crate::engine_state::voxels::block::block_side::BlockSide;

use super::face::{Face, FACE_UVS, VERTICES_PER_FACE};

/// Vertex positions paired one-to-one with texture coordinates.
///
/// Positions are in chunk-local block units. Every visible face contributes
/// exactly [`VERTICES_PER_FACE`] consecutive entries to both sequences.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Vertex positions, three per triangle.
    pub vertices: Vec<[f32; 3]>,
    /// Texture coordinates, one per vertex.
    pub uvs: Vec<[f32; 2]>,
}

impl MeshData {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        MeshData::default()
    }

    /// Appends both triangles of a face.
    pub fn push_face(&mut self, face: &Face) {
        self.vertices.extend_from_slice(&face.vertices());
        self.uvs.extend_from_slice(&FACE_UVS);
    }

    /// A unit cube with all six faces, scaled per axis.
    ///
    /// With a scale of one this is the template every chunk mesh is created from;
    /// scaled to a chunk's extent it is the chunk-bounds debug mesh.
    pub fn cube(scale: [f32; 3]) -> Self {
        let mut mesh = MeshData::new();
        for side in BlockSide::all() {
            mesh.push_face(&Face::new(cgmath::Point3::new(0, 0, 0), 1, side));
        }
        for vertex in mesh.vertices.iter_mut() {
            vertex[0] *= scale[0];
            vertex[1] *= scale[1];
            vertex[2] *= scale[2];
        }
        mesh
    }

    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of visible faces in the mesh.
    pub fn face_count(&self) -> usize {
        self.vertices.len() / VERTICES_PER_FACE
    }

    /// Whether the mesh has no geometry.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Positions as raw bytes for buffer uploads.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Texture coordinates as raw bytes for buffer uploads.
    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }
}
