//! # Chunk Iteration Module
//!
//! This module provides an iterator over the solid voxels of a chunk in flat
//! storage order (x fastest, then y, then z).

use cgmath::Point3;

use crate::engine_state::voxels::block::{self, BlockTypeSize};

use super::{Chunk, VoxelVolume, CHUNK_VOLUME};

/// An iterator over all non-air blocks in a chunk.
///
/// Yields the local coordinate and block-id of each solid voxel, skipping air.
pub struct ChunkBlockIterator<'a> {
    /// The chunk being iterated over
    chunk_ref: &'a Chunk,
    /// Next flat index to inspect
    current_offset: usize,
}

impl<'a> ChunkBlockIterator<'a> {
    /// Creates a new `ChunkBlockIterator` positioned before the chunk's first voxel.
    pub fn new(chunk_ref: &'a Chunk) -> Self {
        ChunkBlockIterator {
            chunk_ref,
            current_offset: 0,
        }
    }
}

impl Iterator for ChunkBlockIterator<'_> {
    type Item = (Point3<i32>, BlockTypeSize);

    fn next(&mut self) -> Option<Self::Item> {
        let data = self.chunk_ref.volume.as_slice();
        while self.current_offset < CHUNK_VOLUME {
            let index = self.current_offset;
            self.current_offset += 1;

            let block = data[index];
            if block::is_solid(block) {
                return Some((VoxelVolume::position_of(index), block));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(CHUNK_VOLUME - self.current_offset))
    }
}

#[cfg(test)]
mod tests {
    use cgmath::Point2;

    use super::*;

    #[test]
    fn skips_air_blocks() {
        let mut chunk = Chunk::empty(Point2::new(0, 0));
        chunk.volume.set(Point3::new(3, 4, 5), 2);
        chunk.volume.set(Point3::new(0, 0, 0), 1);

        let found: Vec<_> = ChunkBlockIterator::new(&chunk).collect();
        assert_eq!(
            found,
            vec![(Point3::new(0, 0, 0), 1), (Point3::new(3, 4, 5), 2)]
        );
    }

    #[test]
    fn visits_every_solid_block() {
        let chunk = Chunk::checkerboard(Point2::new(0, 0));
        assert_eq!(
            ChunkBlockIterator::new(&chunk).count(),
            chunk.volume.solid_count()
        );
    }
}
