//! # Block Type Module
//!
//! This module defines the materials a block-id can name and conversions to and
//! from the compact per-voxel representation.

use num_derive::FromPrimitive;

use super::BlockTypeSize;

/// Enumerates all possible block types in the voxel world.
///
/// The discriminant is the block-id stored in chunk volumes. `FromPrimitive`
/// allows recovering the enum from a stored id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockType {
    /// An air block, which is non-solid and transparent.
    AIR,

    /// A basic dirt block, the default material for generated terrain.
    DIRT,

    /// A grass block, used for the surface layer of noise terrain.
    GRASS,

    /// A wooden block.
    WOOD,

    /// A plain white block, often used for testing.
    WHITE,
}

impl BlockType {
    /// Converts a stored block-id to a `BlockType`.
    ///
    /// # Returns
    /// `None` if the id does not name a known material.
    pub fn from_id(btype: BlockTypeSize) -> Option<Self> {
        num::FromPrimitive::from_u8(btype)
    }

    /// The block-id stored in chunk volumes for this material.
    pub fn id(self) -> BlockTypeSize {
        self as BlockTypeSize
    }

    /// Draws a random solid block type (never `BlockType::AIR`) from `rng`.
    pub fn get_random_type(rng: &mut fastrand::Rng) -> Self {
        Self::from_id(rng.u8(1..=4)).unwrap_or(BlockType::DIRT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for block_type in [
            BlockType::AIR,
            BlockType::DIRT,
            BlockType::GRASS,
            BlockType::WOOD,
            BlockType::WHITE,
        ] {
            assert_eq!(BlockType::from_id(block_type.id()), Some(block_type));
        }
        assert_eq!(BlockType::from_id(200), None);
    }

    #[test]
    fn random_type_follows_seed() {
        let mut a = fastrand::Rng::with_seed(21);
        let mut b = fastrand::Rng::with_seed(21);
        for _ in 0..16 {
            assert_eq!(
                BlockType::get_random_type(&mut a),
                BlockType::get_random_type(&mut b)
            );
        }
    }

    #[test]
    fn random_type_is_solid() {
        let mut rng = fastrand::Rng::with_seed(5);
        for _ in 0..64 {
            assert_ne!(BlockType::get_random_type(&mut rng), BlockType::AIR);
        }
    }
}
