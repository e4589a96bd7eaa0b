//! # Block Module
//!
//! Block-ids, the material enum they map to, and the six face directions used
//! for neighbour lookups and face emission.

pub mod block_side;
pub mod block_type;

/// The integer type stored per voxel. Zero is air; any other value is a solid material.
pub type BlockTypeSize = u8;

/// The block-id of an empty voxel.
pub const AIR: BlockTypeSize = 0;

/// Returns `true` when the block-id denotes a solid material.
#[inline]
pub fn is_solid(block: BlockTypeSize) -> bool {
    block != AIR
}
