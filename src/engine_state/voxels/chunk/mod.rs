//! # Chunk Module
//!
//! This module provides the `Chunk` struct, the dense voxel storage behind it and
//! the procedural rules used to fill chunks when the world is created.
//!
//! ## Storage
//!
//! A chunk owns exactly `CHUNK_VOLUME` block-ids in a flat buffer. The flat index of
//! local coordinate `(x, y, z)` is `(z * CHUNK_HEIGHT + y) * CHUNK_LENGTH + x`, so x
//! varies fastest. All index arithmetic lives in [`VoxelVolume`]; nothing else in
//! the crate computes flat offsets.
//!
//! Chunks span the full world height, so the chunk grid only has horizontal axes.

use cgmath::Point2;
use cgmath::Point3;
use noise::NoiseFn;
use noise::Perlin;
use serde::{Deserialize, Serialize};

use super::block::block_type::BlockType;
use super::block::{BlockTypeSize, AIR};

pub mod chunk_iteration;

/// Horizontal extent of a chunk in blocks (both x and z).
pub const CHUNK_LENGTH: i32 = 16;
/// Vertical extent of a chunk in blocks. Chunks span the whole world height.
pub const CHUNK_HEIGHT: i32 = 32;
/// Number of chunks along each horizontal side of the world.
pub const CHUNKS_RADIUS: i32 = 8;
/// Total number of chunks in the world.
pub const CHUNK_COUNT: usize = (CHUNKS_RADIUS * CHUNKS_RADIUS) as usize;
/// The number of blocks in a single horizontal row of a chunk.
pub const CHUNK_ROW_SIZE: usize = CHUNK_LENGTH as usize;
/// The number of blocks in one z-slice of a chunk (`CHUNK_LENGTH * CHUNK_HEIGHT`).
pub const CHUNK_SLICE_SIZE: usize = (CHUNK_LENGTH * CHUNK_HEIGHT) as usize;
/// The total number of blocks in a chunk.
pub const CHUNK_VOLUME: usize = CHUNK_SLICE_SIZE * CHUNK_LENGTH as usize;

/// Bounds-checked dense storage for one chunk's block-ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelVolume {
    data: Vec<BlockTypeSize>,
}

impl VoxelVolume {
    /// Creates a volume with every voxel set to `block`.
    pub fn filled(block: BlockTypeSize) -> Self {
        VoxelVolume {
            data: vec![block; CHUNK_VOLUME],
        }
    }

    /// Whether a local coordinate lies inside `[0,L) x [0,H) x [0,L)`.
    #[inline]
    pub fn contains(pos: Point3<i32>) -> bool {
        (0..CHUNK_LENGTH).contains(&pos.x)
            && (0..CHUNK_HEIGHT).contains(&pos.y)
            && (0..CHUNK_LENGTH).contains(&pos.z)
    }

    /// Flat index of a local coordinate, or `None` when it is out of bounds.
    #[inline]
    pub fn index_of(pos: Point3<i32>) -> Option<usize> {
        if !Self::contains(pos) {
            return None;
        }
        Some(((pos.z * CHUNK_HEIGHT + pos.y) * CHUNK_LENGTH + pos.x) as usize)
    }

    /// Local coordinate of a flat index. Inverse of [`VoxelVolume::index_of`].
    #[inline]
    pub fn position_of(index: usize) -> Point3<i32> {
        debug_assert!(index < CHUNK_VOLUME);
        let x = index % CHUNK_ROW_SIZE;
        let y = (index / CHUNK_ROW_SIZE) % CHUNK_HEIGHT as usize;
        let z = index / CHUNK_SLICE_SIZE;
        Point3::new(x as i32, y as i32, z as i32)
    }

    /// Reads the block at a local coordinate, `None` when out of bounds.
    #[inline]
    pub fn get(&self, pos: Point3<i32>) -> Option<BlockTypeSize> {
        Self::index_of(pos).map(|index| self.data[index])
    }

    /// Writes the block at a local coordinate.
    ///
    /// # Returns
    /// The previous block-id, or `None` (and no write) when out of bounds.
    #[inline]
    pub fn set(&mut self, pos: Point3<i32>, block: BlockTypeSize) -> Option<BlockTypeSize> {
        let index = Self::index_of(pos)?;
        Some(std::mem::replace(&mut self.data[index], block))
    }

    /// Reads by flat index.
    ///
    /// # Panics
    /// Panics if `index >= CHUNK_VOLUME`.
    #[inline]
    pub fn get_index(&self, index: usize) -> BlockTypeSize {
        self.data[index]
    }

    /// Raw view of the flat buffer.
    pub fn as_slice(&self) -> &[BlockTypeSize] {
        &self.data
    }

    /// Number of solid voxels in the volume.
    pub fn solid_count(&self) -> usize {
        self.data.iter().filter(|block| **block != AIR).count()
    }
}

/// Procedural rule used to fill chunks at world creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum GenerationMethod {
    /// Every voxel is a solid dirt block.
    Solid,
    /// Every voxel is air.
    Empty,
    /// Alternating solid and air voxels in all three axes.
    Checkerboard,
    /// Each voxel is independently solid with probability `density`.
    Random {
        /// Probability in `[0, 1]` that a voxel is solid.
        density: f64,
        /// Seed for the per-chunk random generators.
        seed: u64,
    },
    /// Heightmap terrain sampled from 2D Perlin noise over world x/z.
    Perlin {
        /// Noise seed.
        seed: u32,
        /// Scaling factor applied to world coordinates before sampling.
        scale: f64,
        /// Terrain height where the noise sample is zero.
        base_height: f64,
        /// Height change per unit of noise.
        amplitude: f64,
    },
    /// The first `empty_prefix` flat indices are air, the rest are solid.
    Partial {
        /// Number of leading air voxels in each chunk's flat buffer.
        empty_prefix: usize,
    },
}

impl Default for GenerationMethod {
    fn default() -> Self {
        GenerationMethod::Solid
    }
}

/// A column of `CHUNK_LENGTH x CHUNK_HEIGHT x CHUNK_LENGTH` voxels in the world grid.
#[derive(Clone, Debug)]
pub struct Chunk {
    /// Grid position of this chunk. `x` is the world-x column and `y` is the
    /// world-z column; there is no vertical chunk axis.
    pub position: Point2<i32>,

    /// The chunk's voxel data.
    pub volume: VoxelVolume,
}

impl Chunk {
    /// Builds a chunk at `position` using the given generation rule.
    pub fn generate(position: Point2<i32>, method: &GenerationMethod) -> Self {
        match method {
            GenerationMethod::Solid => Self::solid(position),
            GenerationMethod::Empty => Self::empty(position),
            GenerationMethod::Checkerboard => Self::checkerboard(position),
            GenerationMethod::Random { density, seed } => Self::random(position, *density, *seed),
            GenerationMethod::Perlin {
                seed,
                scale,
                base_height,
                amplitude,
            } => Self::perlin(position, &Perlin::new(*seed), *scale, *base_height, *amplitude),
            GenerationMethod::Partial { empty_prefix } => Self::partial(position, *empty_prefix),
        }
    }

    /// Creates a new, completely empty chunk (all blocks are air).
    pub fn empty(position: Point2<i32>) -> Self {
        Chunk {
            position,
            volume: VoxelVolume::filled(AIR),
        }
    }

    /// Creates a new chunk filled with solid dirt blocks.
    pub fn solid(position: Point2<i32>) -> Self {
        Chunk {
            position,
            volume: VoxelVolume::filled(BlockType::DIRT.id()),
        }
    }

    /// Creates a chunk whose first `empty_prefix` flat indices are air and the rest solid.
    pub fn partial(position: Point2<i32>, empty_prefix: usize) -> Self {
        let mut chunk = Self::solid(position);
        chunk.volume.data[..empty_prefix.min(CHUNK_VOLUME)].fill(AIR);
        chunk
    }

    /// Creates a new chunk with a 3D checkerboard pattern.
    pub fn checkerboard(position: Point2<i32>) -> Self {
        let mut chunk = Self::empty(position);
        for (index, block) in chunk.volume.data.iter_mut().enumerate() {
            let pos = VoxelVolume::position_of(index);
            if (pos.x + pos.y + pos.z) % 2 == 0 {
                *block = BlockType::DIRT.id();
            }
        }
        chunk
    }

    /// Creates a new chunk with randomly placed blocks of random solid materials.
    ///
    /// The generator is seeded from `seed` and the chunk position, so the same
    /// configuration reproduces the same world.
    pub fn random(position: Point2<i32>, density: f64, seed: u64) -> Self {
        let chunk_seed = seed
            ^ ((position.x as u64) << 32)
            ^ (position.y as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        let mut rng = fastrand::Rng::with_seed(chunk_seed);
        let mut chunk = Self::empty(position);
        for block in chunk.volume.data.iter_mut() {
            if rng.f64() < density {
                *block = BlockType::get_random_type(&mut rng).id();
            }
        }
        chunk
    }

    /// Generates heightmap terrain from 2D Perlin noise.
    ///
    /// Each column is solid up to `base_height + sample * amplitude`, clamped to the
    /// chunk height. The top solid block of a column is grass, the rest dirt.
    pub fn perlin(
        position: Point2<i32>,
        perlin: &Perlin,
        scale: f64,
        base_height: f64,
        amplitude: f64,
    ) -> Self {
        let mut chunk = Self::empty(position);

        for z in 0..CHUNK_LENGTH {
            for x in 0..CHUNK_LENGTH {
                let world_x = (x + position.x * CHUNK_LENGTH) as f64;
                let world_z = (z + position.y * CHUNK_LENGTH) as f64;
                let sample = perlin.get([world_x * scale, world_z * scale]);
                let height = (base_height + sample * amplitude)
                    .round()
                    .clamp(0.0, CHUNK_HEIGHT as f64) as i32;

                for y in 0..height {
                    let block = if y == height - 1 {
                        BlockType::GRASS
                    } else {
                        BlockType::DIRT
                    };
                    chunk.volume.set(Point3::new(x, y, z), block.id());
                }
            }
        }

        chunk
    }
}
