//! # Ray Caster
//!
//! Fixed-budget ray marching used for block picking.
//!
//! The ray is sampled at `max_steps` evenly spaced points, each `max_distance /
//! max_steps` apart. This is not an exact voxel traversal: when a step is longer
//! than one block the march can skip over thin features entirely. Callers that
//! need reliable picking should keep the step length below one block.

use cgmath::{InnerSpace, Point2, Point3, Vector3};
use log::{trace, warn};

use super::block::{self, BlockTypeSize};
use super::chunk::VoxelVolume;
use super::coords;
use super::world::{ChunkId, World};

/// Default number of samples taken along a ray.
pub const DEFAULT_RAYCAST_STEPS: u32 = 256;

/// The first solid voxel found along a ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Block-id of the voxel that was hit.
    pub block: BlockTypeSize,
    /// Chunk containing the voxel.
    pub chunk_id: ChunkId,
    /// Flat index of the voxel inside its chunk.
    pub block_index: usize,
    /// Local coordinate of the voxel inside its chunk.
    pub local_position: Point3<i32>,
    /// The sample position where the hit was detected (not snapped to the voxel).
    pub position: Point3<f32>,
}

/// Marches rays through a [`World`] with a fixed step budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RayCaster {
    /// Number of samples taken per ray.
    pub max_steps: u32,
}

impl Default for RayCaster {
    fn default() -> Self {
        RayCaster {
            max_steps: DEFAULT_RAYCAST_STEPS,
        }
    }
}

impl RayCaster {
    /// Creates a ray caster taking `max_steps` samples per ray.
    pub fn new(max_steps: u32) -> Self {
        RayCaster { max_steps }
    }

    /// Length of a single step for a ray of the given maximum distance.
    pub fn step_length(&self, max_distance: f32) -> f32 {
        max_distance / self.max_steps as f32
    }

    /// Finds the first solid voxel along a ray.
    ///
    /// After every step the horizontal components are wrapped into the world, so
    /// rays leaving one edge re-enter at the opposite edge. The vertical component
    /// is never wrapped; samples above or below the world are skipped.
    ///
    /// Wrapping maps into the half-open range `[0, WORLD_LENGTH)`, so a sample
    /// landing exactly on the far edge is tested as the first block of the
    /// opposite edge instead of being skipped.
    ///
    /// # Returns
    /// `None` when no sample lands in a solid voxel, or when the direction has no
    /// length.
    pub fn cast(
        &self,
        world: &World,
        origin: Point3<f32>,
        direction: Vector3<f32>,
        max_distance: f32,
    ) -> Option<RayHit> {
        if self.max_steps == 0 || max_distance.is_nan() || max_distance <= 0.0 {
            return None;
        }

        let length = direction.magnitude();
        if length == 0.0 || !length.is_finite() {
            warn!("Ray cast with degenerate direction {:?}", direction);
            return None;
        }

        let step = direction / length * self.step_length(max_distance);
        let mut current = origin;

        for _ in 0..self.max_steps {
            current += step;
            current.x = coords::wrap_world_horizontal(current.x);
            current.z = coords::wrap_world_horizontal(current.z);

            if !coords::is_inside_world(current) {
                continue;
            }

            let chunk_coords = coords::world_to_chunk(current);
            let local_position = coords::world_to_block(current);
            let chunk_id = coords::grid_to_chunk_id(Point2::new(chunk_coords.x, chunk_coords.z));
            let Some(block_index) = VoxelVolume::index_of(local_position) else {
                continue;
            };

            let block = world.get_block_by_index(chunk_id, block_index);
            if block::is_solid(block) {
                trace!(
                    "Ray hit block {} in chunk {} at {:?}",
                    block,
                    chunk_id,
                    current
                );
                return Some(RayHit {
                    block,
                    chunk_id,
                    block_index,
                    local_position,
                    position: current,
                });
            }
        }

        trace!("Ray from {:?} missed", origin);
        None
    }
}
