//! Chunk mesh management.
//!
//! The [`MeshManager`] owns one backend mesh per chunk plus a debug mesh that
//! outlines a single chunk's bounds. It rebuilds chunk meshes when the world
//! flags them dirty and pushes the new contents to the backend.
//!
//! # Architecture
//! - [`MeshManager`]: per-chunk handles and the dirty-chunk update pass
//! - [`MeshBackend`]: the create/update/destroy capability of the renderer
//! - `mesh/`: the face-culling mesh generator

use log::{debug, info};
use web_time::Instant;

mod backend;
pub mod mesh;

pub use backend::{MemoryMeshBackend, MeshBackend, MeshHandle, MeshStore, StoredMesh};
pub use mesh::*;

use crate::{
    engine_state::voxels::{
        chunk::{CHUNK_COUNT, CHUNK_HEIGHT, CHUNK_LENGTH},
        world::{ChunkId, World},
    },
    error::MeshError,
};

/// Owns the backend meshes for every chunk and keeps them in sync with the world.
///
/// Mesh identities are fixed for the manager's lifetime; rebuilding a chunk only
/// replaces the contents of its existing mesh. Dropping the manager destroys
/// every mesh it created.
pub struct MeshManager<B: MeshBackend> {
    /// The renderer-side mesh storage
    backend: B,
    /// One mesh per chunk, indexed by `ChunkId`
    chunk_meshes: Vec<B::Handle>,
    /// Wireframe-scale cube spanning one chunk's footprint
    debug_mesh: Option<B::Handle>,
}

impl<B: MeshBackend> MeshManager<B> {
    /// Creates every chunk mesh and the debug mesh, then builds each chunk's real
    /// geometry from the world.
    ///
    /// Chunk meshes are created from the unit cube template and immediately
    /// replaced with the chunk's visible faces. All dirty flags are cleared.
    pub fn new(mut backend: B, world: &mut World) -> Result<Self, MeshError> {
        info!("generating chunk meshes");
        let start = Instant::now();

        let template = MeshData::cube([1.0, 1.0, 1.0]);
        let mut chunk_meshes = Vec::with_capacity(CHUNK_COUNT);
        for _ in 0..CHUNK_COUNT {
            chunk_meshes.push(backend.create_mesh(&template.vertices, &template.uvs)?);
        }

        let debug = MeshData::cube([
            CHUNK_LENGTH as f32,
            CHUNK_HEIGHT as f32,
            CHUNK_LENGTH as f32,
        ]);
        let debug_mesh = Some(backend.create_mesh(&debug.vertices, &debug.uvs)?);

        let mut manager = MeshManager {
            backend,
            chunk_meshes,
            debug_mesh,
        };

        for chunk_id in 0..CHUNK_COUNT {
            manager.rebuild(world, chunk_id)?;
        }

        info!(
            "finished generating {} chunk meshes in {:?}",
            CHUNK_COUNT,
            start.elapsed()
        );
        Ok(manager)
    }

    /// Regenerates one chunk's mesh, uploads it and clears the chunk's dirty flag.
    ///
    /// # Returns
    /// The new vertex count of the chunk's mesh.
    ///
    /// # Panics
    /// Panics if `chunk_id` is not a valid chunk id.
    pub fn rebuild(&mut self, world: &mut World, chunk_id: ChunkId) -> Result<usize, MeshError> {
        let mesh = generate_chunk_mesh(world, chunk_id);
        self.backend.update_mesh(&self.chunk_meshes[chunk_id], &mesh.vertices, &mesh.uvs)?;
        world.clear_dirty(chunk_id);
        Ok(mesh.vertex_count())
    }

    /// Rebuilds every dirty chunk in ascending id order.
    ///
    /// # Returns
    /// The number of chunks rebuilt.
    pub fn update(&mut self, world: &mut World) -> Result<usize, MeshError> {
        let dirty = world.dirty_chunk_ids();
        if dirty.is_empty() {
            return Ok(0);
        }

        let start = Instant::now();
        for chunk_id in dirty.iter() {
            self.rebuild(world, *chunk_id)?;
        }
        debug!("Rebuilt {} dirty chunks in {:?}", dirty.len(), start.elapsed());

        Ok(dirty.len())
    }

    /// The backend this manager drives.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The mesh handle of a chunk.
    ///
    /// # Panics
    /// Panics if the manager has been torn down or `chunk_id` is out of range.
    pub fn chunk_mesh(&self, chunk_id: ChunkId) -> &B::Handle {
        &self.chunk_meshes[chunk_id]
    }

    /// The chunk-bounds debug mesh, if the manager has not been torn down.
    pub fn debug_mesh(&self) -> Option<&B::Handle> {
        self.debug_mesh.as_ref()
    }

    /// Destroys every mesh. Safe to call more than once.
    pub fn teardown(&mut self) {
        if self.debug_mesh.is_none() && self.chunk_meshes.is_empty() {
            return;
        }

        if let Some(handle) = self.debug_mesh.take() {
            self.backend.destroy_mesh(handle);
        }
        let destroyed = self.chunk_meshes.len();
        for handle in self.chunk_meshes.drain(..) {
            self.backend.destroy_mesh(handle);
        }
        info!("destroyed {} chunk meshes", destroyed);
    }
}

impl<B: MeshBackend> Drop for MeshManager<B> {
    fn drop(&mut self) {
        self.teardown();
    }
}
