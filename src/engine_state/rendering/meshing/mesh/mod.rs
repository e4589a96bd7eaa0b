//! Mesh generation for voxel chunks.
//!
//! This module converts chunk voxel data into renderable triangle lists. Each
//! visible block face becomes two triangles built from a fixed per-side quad
//! template; hidden faces (those touching another solid block, including blocks
//! in neighbouring chunks) are culled.
//!
//! # Architecture
//! - [`MeshData`]: vertex positions paired with texture coordinates
//! - [`Face`]: a single quad on one side of a voxel
//! - [`generate_chunk_mesh`]: the face-culling mesher

mod culled;
mod face;
mod mesh;

pub use culled::{generate_chunk_mesh, is_face_visible};
pub use face::{Face, FACE_UVS, VERTICES_PER_FACE};
pub use mesh::MeshData;
