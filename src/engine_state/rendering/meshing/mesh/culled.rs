//! Face-culled chunk meshing.
//!
//! A face of a solid voxel is emitted when the cell it looks into is air. Cells
//! above or below the world are always air. Cells past a chunk's x or z edge are
//! read from the horizontal neighbour chunk, wrapping around the world grid.

use cgmath::Point3;
use log::debug;
use web_time::Instant;

use crate::engine_state::voxels::{
    block::{self, block_side::BlockSide},
    chunk::chunk_iteration::ChunkBlockIterator,
    world::{ChunkId, World},
};

use super::{face::Face, mesh::MeshData};

/// Whether the face on `side` of the voxel at `pos` in `chunk_id` is exposed to air.
pub fn is_face_visible(
    world: &World,
    chunk_id: ChunkId,
    pos: Point3<i32>,
    side: BlockSide,
) -> bool {
    let neighbour = pos + side.neighbour_offset();
    match world.neighbour_block(chunk_id, neighbour) {
        Some(block) => !block::is_solid(block),
        None => true,
    }
}

/// Rebuilds a chunk's visible geometry from scratch.
///
/// Every solid voxel is tested against all six neighbours regardless of how many
/// faces end up visible, so the cost depends only on the chunk's solid count.
///
/// # Panics
/// Panics if `chunk_id` is not a valid chunk id.
pub fn generate_chunk_mesh(world: &World, chunk_id: ChunkId) -> MeshData {
    let start = Instant::now();
    let chunk = world.chunk(chunk_id);
    let mut mesh = MeshData::new();

    for (pos, block) in ChunkBlockIterator::new(chunk) {
        for side in BlockSide::all() {
            if is_face_visible(world, chunk_id, pos, side) {
                mesh.push_face(&Face::new(pos, block, side));
            }
        }
    }

    debug!(
        "Meshed chunk {} ({} faces) in {:?}",
        chunk_id,
        mesh.face_count(),
        start.elapsed()
    );

    mesh
}

#[cfg(test)]
mod tests {
    use cgmath::Point2;

    use super::*;
    use crate::engine_state::voxels::{
        chunk::{GenerationMethod, CHUNKS_RADIUS, CHUNK_HEIGHT, CHUNK_LENGTH},
        coords,
    };

    fn id_at(cx: i32, cz: i32) -> ChunkId {
        coords::grid_to_chunk_id(Point2::new(cx, cz))
    }

    #[test]
    fn isolated_voxel_emits_six_faces() {
        let mut world = World::new(&GenerationMethod::Empty);
        world.set_block(0, Point3::new(5, 5, 5), 1);
        let mesh = generate_chunk_mesh(&world, 0);
        assert_eq!(mesh.vertex_count(), 36);
        assert_eq!(mesh.uvs.len(), 36);
        for v in mesh.vertices.iter() {
            assert!((5.0..=6.0).contains(&v[0]));
            assert!((5.0..=6.0).contains(&v[1]));
            assert!((5.0..=6.0).contains(&v[2]));
        }
    }

    #[test]
    fn solid_world_only_shows_top_and_bottom() {
        let world = World::new(&GenerationMethod::Solid);
        let layer = (CHUNK_LENGTH * CHUNK_LENGTH) as usize;
        for id in [0, id_at(3, 4), id_at(CHUNKS_RADIUS - 1, CHUNKS_RADIUS - 1)] {
            let mesh = generate_chunk_mesh(&world, id);
            assert_eq!(mesh.face_count(), 2 * layer);
            for v in mesh.vertices.iter() {
                assert!(v[1] == 0.0 || v[1] == CHUNK_HEIGHT as f32);
            }
        }
    }

    #[test]
    fn top_layer_always_emits_top_face() {
        let world = World::new(&GenerationMethod::Solid);
        let mesh = generate_chunk_mesh(&world, 0);
        let top_vertices = mesh
            .vertices
            .iter()
            .filter(|v| v[1] == CHUNK_HEIGHT as f32)
            .count();
        assert_eq!(top_vertices, (CHUNK_LENGTH * CHUNK_LENGTH) as usize * 6);
    }

    #[test]
    fn adjacent_chunk_occludes_boundary_face() {
        let mut world = World::new(&GenerationMethod::Empty);
        let west = id_at(2, 2);
        let east = id_at(3, 2);
        world.set_block(west, Point3::new(CHUNK_LENGTH - 1, 4, 4), 1);
        world.set_block(east, Point3::new(0, 4, 4), 1);

        assert_eq!(generate_chunk_mesh(&world, west).face_count(), 5);
        assert_eq!(generate_chunk_mesh(&world, east).face_count(), 5);
    }

    #[test]
    fn boundary_faces_wrap_around_world() {
        let mut world = World::new(&GenerationMethod::Empty);
        let first = id_at(0, 0);
        let last_x = id_at(CHUNKS_RADIUS - 1, 0);
        let last_z = id_at(0, CHUNKS_RADIUS - 1);
        world.set_block(first, Point3::new(0, 1, 0), 1);
        world.set_block(last_x, Point3::new(CHUNK_LENGTH - 1, 1, 0), 1);
        world.set_block(last_z, Point3::new(0, 1, CHUNK_LENGTH - 1), 1);

        assert_eq!(generate_chunk_mesh(&world, first).face_count(), 4);
        assert_eq!(generate_chunk_mesh(&world, last_x).face_count(), 5);
        assert_eq!(generate_chunk_mesh(&world, last_z).face_count(), 5);
    }

    #[test]
    fn vertical_faces_never_wrap() {
        let mut world = World::new(&GenerationMethod::Empty);
        world.set_block(0, Point3::new(3, 0, 3), 1);
        world.set_block(0, Point3::new(3, CHUNK_HEIGHT - 1, 3), 1);
        assert_eq!(generate_chunk_mesh(&world, 0).face_count(), 12);
    }

    #[test]
    fn rebuild_reflects_edits() {
        let mut world = World::new(&GenerationMethod::Solid);
        let before = generate_chunk_mesh(&world, 0).face_count();
        world.set_block(0, Point3::new(5, CHUNK_HEIGHT - 1, 5), 0);
        let after = generate_chunk_mesh(&world, 0).face_count();
        // the removed top face is replaced by four walls and a floor
        assert_eq!(after, before - 1 + 5);
    }
}
