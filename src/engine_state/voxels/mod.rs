//! # Voxel World
//!
//! This module contains the voxel data model: block-ids, chunks, the world grid
//! that owns them, the coordinate transforms between world and chunk space, and
//! the ray caster used for picking.
//!
//! ## Architecture
//!
//! * **Block**: block-id type, materials and face directions
//! * **Chunk**: fixed-size dense voxel volumes and their generation rules
//! * **World**: the toroidal grid of chunks with per-chunk dirty flags
//! * **Coords**: pure conversions between world, grid and local coordinates
//! * **Raycast**: fixed-step ray marching against the world
//!
//! ## Data Flow
//!
//! 1. World is generated once at startup
//! 2. Block writes go through `World::set_block`, which flags stale chunks
//! 3. The mesh manager rebuilds flagged chunks on its next update pass
//! 4. Ray casts read the world without touching meshes or flags

pub mod block;
pub mod chunk;
pub mod coords;
pub mod raycast;
pub mod world;
