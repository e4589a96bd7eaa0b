//! # Engine State Module
//!
//! The single owned aggregate that holds the voxel world, its meshes and the
//! engine configuration.
//!
//! ## Key Components
//!
//! * `EngineState` - Owns the world and mesh manager and exposes the runtime operations
//! * `config` - Serde-backed engine settings
//! * `rendering` - Mesh generation and the mesh backend seam
//! * `voxels` - Chunks, the world grid, coordinate transforms and ray casting
//!
//! ## Architecture
//!
//! Everything runs on one thread. Block edits go through [`EngineState::set_block`],
//! which flags the chunks whose meshes went stale. A later call to
//! [`EngineState::update`] rebuilds those meshes. Edits made between two updates
//! are batched into a single rebuild per chunk. Ray casts only read the world and
//! never touch meshing.

use cgmath::{Point3, Vector3};
use log::info;
use web_time::Instant;

use config::EngineConfig;
use rendering::meshing::{MeshBackend, MeshManager};
use voxels::{
    block::BlockTypeSize,
    chunk::GenerationMethod,
    raycast::{RayCaster, RayHit},
    world::{ChunkId, World},
};

use crate::error::EngineError;

pub mod config;
pub mod rendering;
pub mod voxels;

/// The main state container for the voxel engine
///
/// Owns the world, one backend mesh per chunk and the ray caster. Dropping the
/// state destroys every mesh it created.
///
/// # Examples
///
/// ```
/// use cgmath::{Point3, Vector3};
/// use toroid_voxels::{EngineConfig, EngineState, MemoryMeshBackend};
///
/// let mut engine = EngineState::new(EngineConfig::default(), MemoryMeshBackend::new()).unwrap();
///
/// // Dig out the block under a downward ray
/// let origin = Point3::new(8.5, 40.0, 8.5);
/// if let Some(hit) = engine.cast_ray(origin, Vector3::new(0.0, -1.0, 0.0), 16.0) {
///     engine.set_block(hit.chunk_id, hit.local_position, 0);
/// }
/// assert_eq!(engine.update().unwrap(), 1);
/// ```
pub struct EngineState<B: MeshBackend> {
    /// Settings the engine was created with
    config: EngineConfig,
    /// The voxel world containing all chunk data
    world: World,
    /// Per-chunk meshes and the rebuild driver
    mesh_manager: MeshManager<B>,
    /// Block picking
    ray_caster: RayCaster,
}

impl<B: MeshBackend> EngineState<B> {
    /// Creates the world from the configured generation rule and builds every
    /// chunk mesh on `backend`.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidConfig`] for an unusable configuration and
    /// [`EngineError::Mesh`] if the backend rejects a mesh.
    pub fn new(config: EngineConfig, backend: B) -> Result<Self, EngineError> {
        config.validate()?;

        info!("started generating chunks");
        let start = Instant::now();
        let mut world = World::new(&config.generation);
        info!("generated world in {:?}", start.elapsed());

        let mesh_manager = MeshManager::new(backend, &mut world)?;
        let ray_caster = RayCaster::new(config.raycast_steps);

        info!("finished generating chunks");

        Ok(EngineState {
            config,
            world,
            mesh_manager,
            ray_caster,
        })
    }

    /// Writes a block. Out-of-bounds local coordinates are a silent no-op.
    ///
    /// # Returns
    /// `true` if the write happened.
    ///
    /// # Panics
    /// Panics if `chunk_id` is not a valid chunk id.
    pub fn set_block(&mut self, chunk_id: ChunkId, pos: Point3<i32>, block: BlockTypeSize) -> bool {
        self.world.set_block(chunk_id, pos, block)
    }

    /// Reads a block.
    ///
    /// # Panics
    /// Panics if `chunk_id` or `pos` is out of range.
    pub fn get_block(&self, chunk_id: ChunkId, pos: Point3<i32>) -> BlockTypeSize {
        self.world.get_block(chunk_id, pos)
    }

    /// Rebuilds the mesh of every dirty chunk.
    ///
    /// # Returns
    /// The number of chunks rebuilt.
    pub fn update(&mut self) -> Result<usize, EngineError> {
        Ok(self.mesh_manager.update(&mut self.world)?)
    }

    /// Finds the first solid voxel along a ray.
    ///
    /// The ray is sampled `raycast_steps` times over `max_distance`; see
    /// [`RayCaster::cast`] for the exact stepping rules.
    pub fn cast_ray(
        &self,
        origin: Point3<f32>,
        direction: Vector3<f32>,
        max_distance: f32,
    ) -> Option<RayHit> {
        self.ray_caster.cast(&self.world, origin, direction, max_distance)
    }

    /// World position where a ray first hit a solid voxel.
    pub fn cast_ray_position(
        &self,
        origin: Point3<f32>,
        direction: Vector3<f32>,
        max_distance: f32,
    ) -> Option<Point3<f32>> {
        self.cast_ray(origin, direction, max_distance)
            .map(|hit| hit.position)
    }

    /// Flat index, inside its chunk, of the voxel a ray first hit.
    pub fn cast_ray_block_index(
        &self,
        origin: Point3<f32>,
        direction: Vector3<f32>,
        max_distance: f32,
    ) -> Option<usize> {
        self.cast_ray(origin, direction, max_distance)
            .map(|hit| hit.block_index)
    }

    /// Chunk containing the voxel a ray first hit.
    pub fn cast_ray_chunk_id(
        &self,
        origin: Point3<f32>,
        direction: Vector3<f32>,
        max_distance: f32,
    ) -> Option<ChunkId> {
        self.cast_ray(origin, direction, max_distance)
            .map(|hit| hit.chunk_id)
    }

    /// Refills every chunk so its first `empty_prefix` flat indices are air and
    /// the rest solid, then rebuilds every chunk mesh.
    ///
    /// Useful for stress testing the mesher with a known amount of geometry.
    pub fn refill(&mut self, empty_prefix: usize) -> Result<(), EngineError> {
        info!("refilling chunks with {} leading air voxels", empty_prefix);
        let start = Instant::now();

        self.world.refill(&GenerationMethod::Partial { empty_prefix });
        self.mesh_manager.update(&mut self.world)?;

        info!("refilled chunks in {:?}", start.elapsed());
        Ok(())
    }

    /// Destroys every mesh and releases the world.
    pub fn teardown(mut self) {
        info!("tearing down engine state");
        self.mesh_manager.teardown();
    }

    /// The voxel world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The mesh manager and, through it, the backend.
    pub fn mesh_manager(&self) -> &MeshManager<B> {
        &self.mesh_manager
    }

    /// The configuration the engine was created with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
