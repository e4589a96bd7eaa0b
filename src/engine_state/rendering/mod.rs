//! # Rendering Module
//!
//! Everything between voxel data and renderable geometry. The engine does not
//! draw anything itself; it produces meshes and hands them to a
//! [`MeshBackend`](meshing::MeshBackend).

pub mod meshing;
