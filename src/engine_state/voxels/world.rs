//! # World Module
//!
//! This module provides the `World` struct which owns every chunk of the voxel
//! world together with one dirty flag per chunk.
//!
//! ## Architecture
//!
//! The world is a fixed `CHUNKS_RADIUS x CHUNKS_RADIUS` grid of chunks allocated once
//! and mutated in place. Chunk ids are `cz * CHUNKS_RADIUS + cx`. The horizontal
//! edges of the grid wrap around, so every chunk has exactly four axis neighbours.
//!
//! ## Dirty Tracking
//!
//! A write that changes a voxel flags the owning chunk. Writes on an x or z
//! boundary also flag the chunk across that boundary, because its mesh culls
//! faces against the written voxel. Diagonal neighbours are never flagged: face
//! culling only looks along the six axis directions, so a diagonal chunk never
//! reads a corner voxel of another chunk.

use bitvec::bitvec;
use bitvec::prelude::BitVec;
use cgmath::{Point2, Point3};

use super::block::BlockTypeSize;
use super::chunk::{Chunk, GenerationMethod, VoxelVolume, CHUNK_COUNT, CHUNK_LENGTH};
use super::coords;

/// Index of a chunk in the world grid, in `[0, CHUNK_COUNT)`.
pub type ChunkId = usize;

/// The voxel world: a fixed toroidal grid of chunks plus their dirty flags.
pub struct World {
    /// Chunk storage indexed by `ChunkId`.
    chunks: Vec<Chunk>,

    /// One bit per chunk; set when the chunk's mesh no longer matches its voxels.
    dirty: BitVec,
}

impl World {
    /// Allocates every chunk and fills it with the given generation rule.
    ///
    /// All dirty flags start cleared; the initial meshes are built explicitly by
    /// the mesh manager.
    pub fn new(method: &GenerationMethod) -> Self {
        let chunks = (0..CHUNK_COUNT)
            .map(|id| Chunk::generate(coords::chunk_id_to_grid(id), method))
            .collect();

        World {
            chunks,
            dirty: bitvec![0; CHUNK_COUNT],
        }
    }

    /// Regenerates every chunk in place and flags all of them dirty.
    pub fn refill(&mut self, method: &GenerationMethod) {
        for (id, chunk) in self.chunks.iter_mut().enumerate() {
            *chunk = Chunk::generate(coords::chunk_id_to_grid(id), method);
        }
        self.dirty.fill(true);
    }

    /// Returns the chunk with the given id.
    ///
    /// # Panics
    /// Panics if `chunk_id` is not a valid chunk id.
    pub fn chunk(&self, chunk_id: ChunkId) -> &Chunk {
        Self::assert_chunk_id(chunk_id);
        &self.chunks[chunk_id]
    }

    /// All chunks in id order.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Writes a block and updates dirty flags.
    ///
    /// Out-of-bounds local coordinates are ignored silently. When the new value
    /// differs from the stored one the owning chunk is flagged, and so is each
    /// axis neighbour whose boundary plane contains the written voxel.
    ///
    /// # Returns
    /// `true` if the coordinate was in bounds and the write happened.
    ///
    /// # Panics
    /// Panics if `chunk_id` is not a valid chunk id.
    pub fn set_block(&mut self, chunk_id: ChunkId, pos: Point3<i32>, block: BlockTypeSize) -> bool {
        Self::assert_chunk_id(chunk_id);

        let Some(previous) = self.chunks[chunk_id].volume.set(pos, block) else {
            return false;
        };

        if previous != block {
            self.dirty.set(chunk_id, true);

            if pos.x == 0 {
                self.mark_dirty(self.neighbour_chunk_id(chunk_id, -1, 0));
            }
            if pos.x == CHUNK_LENGTH - 1 {
                self.mark_dirty(self.neighbour_chunk_id(chunk_id, 1, 0));
            }
            if pos.z == 0 {
                self.mark_dirty(self.neighbour_chunk_id(chunk_id, 0, -1));
            }
            if pos.z == CHUNK_LENGTH - 1 {
                self.mark_dirty(self.neighbour_chunk_id(chunk_id, 0, 1));
            }
        }

        true
    }

    /// Reads a block.
    ///
    /// # Panics
    /// Panics if `chunk_id` or `pos` is out of range; use [`World::try_get_block`]
    /// for unvalidated input.
    pub fn get_block(&self, chunk_id: ChunkId, pos: Point3<i32>) -> BlockTypeSize {
        match self.try_get_block(chunk_id, pos) {
            Some(block) => block,
            None => panic!(
                "block {:?} of chunk {} is outside the chunk volume",
                pos, chunk_id
            ),
        }
    }

    /// Reads a block, returning `None` for an out-of-range chunk id or coordinate.
    pub fn try_get_block(&self, chunk_id: ChunkId, pos: Point3<i32>) -> Option<BlockTypeSize> {
        self.chunks.get(chunk_id)?.volume.get(pos)
    }

    /// Reads a block by its flat index inside the chunk volume.
    pub fn get_block_by_index(&self, chunk_id: ChunkId, index: usize) -> BlockTypeSize {
        self.chunk(chunk_id).volume.get_index(index)
    }

    /// Converts a local coordinate in the given chunk to world space.
    pub fn block_to_world(&self, pos: Point3<i32>, chunk_id: ChunkId) -> Point3<i32> {
        coords::block_to_world(pos, self.chunk(chunk_id).position)
    }

    /// Id of the chunk `dx` columns along x and `dz` columns along z, wrapping around the grid.
    pub fn neighbour_chunk_id(&self, chunk_id: ChunkId, dx: i32, dz: i32) -> ChunkId {
        let position = self.chunk(chunk_id).position;
        coords::grid_to_chunk_id(Point2::new(position.x + dx, position.y + dz))
    }

    /// Resolves the voxel one step from `pos` inside `chunk_id`, crossing into the
    /// horizontal neighbour chunk when the step leaves the chunk.
    ///
    /// # Returns
    /// `None` when the position lies above or below the world, which callers treat as air.
    pub fn neighbour_block(&self, chunk_id: ChunkId, pos: Point3<i32>) -> Option<BlockTypeSize> {
        let volume = &self.chunk(chunk_id).volume;
        if let Some(block) = volume.get(pos) {
            return Some(block);
        }
        if !(0..super::chunk::CHUNK_HEIGHT).contains(&pos.y) {
            return None;
        }

        let dx = pos.x.div_euclid(CHUNK_LENGTH);
        let dz = pos.z.div_euclid(CHUNK_LENGTH);
        let neighbour = self.neighbour_chunk_id(chunk_id, dx, dz);
        let wrapped = Point3::new(coords::wrap_local(pos.x), pos.y, coords::wrap_local(pos.z));
        debug_assert!(VoxelVolume::contains(wrapped));
        self.chunks[neighbour].volume.get(wrapped)
    }

    /// Whether the chunk's mesh is stale.
    pub fn is_dirty(&self, chunk_id: ChunkId) -> bool {
        Self::assert_chunk_id(chunk_id);
        self.dirty[chunk_id]
    }

    /// Flags a chunk's mesh as stale.
    pub fn mark_dirty(&mut self, chunk_id: ChunkId) {
        Self::assert_chunk_id(chunk_id);
        self.dirty.set(chunk_id, true);
    }

    /// Clears a chunk's dirty flag after its mesh has been rebuilt.
    pub fn clear_dirty(&mut self, chunk_id: ChunkId) {
        Self::assert_chunk_id(chunk_id);
        self.dirty.set(chunk_id, false);
    }

    /// Ids of every dirty chunk in ascending order.
    pub fn dirty_chunk_ids(&self) -> Vec<ChunkId> {
        self.dirty.iter_ones().collect()
    }

    /// Number of dirty chunks.
    pub fn dirty_count(&self) -> usize {
        self.dirty.count_ones()
    }

    fn assert_chunk_id(chunk_id: ChunkId) {
        assert!(
            chunk_id < CHUNK_COUNT,
            "chunk id {} out of range (world has {} chunks)",
            chunk_id,
            CHUNK_COUNT
        );
    }
}
