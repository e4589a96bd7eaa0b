//! # Ray Picking Tests
//!
//! Run with: cargo test --test raycast

use cgmath::{Point2, Point3, Vector3};
use toroid_voxels::engine_state::voxels::chunk::{VoxelVolume, CHUNK_HEIGHT};
use toroid_voxels::engine_state::voxels::coords::{self, WORLD_LENGTH};
use toroid_voxels::{
    EngineConfig, EngineState, GenerationMethod, MemoryMeshBackend, RayCaster, World,
};

fn empty_world_with(blocks: &[Point3<i32>]) -> World {
    let mut world = World::new(&GenerationMethod::Empty);
    for block in blocks {
        let pos = block.cast::<f32>().unwrap();
        let grid = coords::world_to_chunk(pos);
        let id = coords::grid_to_chunk_id(Point2::new(grid.x, grid.z));
        assert!(world.set_block(id, coords::world_to_block(pos), 4));
    }
    world
}

#[test]
fn hit_reports_owner_and_index() {
    let target = Point3::new(50, 5, 70);
    let world = empty_world_with(&[target]);
    let caster = RayCaster::new(1000);

    let hit = caster
        .cast(
            &world,
            Point3::new(30.5, 5.5, 70.5),
            Vector3::new(1.0, 0.0, 0.0),
            40.0,
        )
        .expect("block in range must be hit");

    assert_eq!(hit.block, 4);
    assert_eq!(hit.chunk_id, coords::grid_to_chunk_id(Point2::new(3, 4)));
    assert_eq!(hit.local_position, Point3::new(2, 5, 6));
    assert_eq!(
        hit.block_index,
        VoxelVolume::index_of(Point3::new(2, 5, 6)).unwrap()
    );
    assert!(hit.position.x >= 50.0 && hit.position.x < 50.0 + caster.step_length(40.0) + 1e-3);
}

#[test]
fn long_steps_may_tunnel() {
    let world = empty_world_with(&[Point3::new(10, 5, 10)]);
    // three 10-block steps: starting at x = 0.1 the first sample lands on the target,
    // starting half a step earlier every sample misses it
    let caster = RayCaster::new(3);
    let direction = Vector3::new(1.0, 0.0, 0.0);
    let aligned = caster.cast(&world, Point3::new(0.1, 5.5, 10.5), direction, 30.0);
    assert!(aligned.is_some());
    let skipped = caster.cast(&world, Point3::new(-4.9, 5.5, 10.5), direction, 30.0);
    assert!(skipped.is_none());
}

#[test]
fn wraps_across_the_x_edge() {
    let world = empty_world_with(&[Point3::new(1, 3, 9)]);
    let caster = RayCaster::new(400);
    let origin = Point3::new(WORLD_LENGTH as f32 - 0.25, 3.5, 9.5);

    let hit = caster
        .cast(&world, origin, Vector3::new(1.0, 0.0, 0.0), 4.0)
        .expect("ray wraps to the far side");
    assert_eq!(hit.chunk_id, coords::grid_to_chunk_id(Point2::new(0, 0)));
    assert!((0.0..WORLD_LENGTH as f32).contains(&hit.position.x));
    assert!(hit.position.x < 2.0);
}

#[test]
fn wraps_across_the_negative_z_edge() {
    let world = empty_world_with(&[Point3::new(9, 3, WORLD_LENGTH - 2)]);
    let caster = RayCaster::new(400);

    let hit = caster
        .cast(
            &world,
            Point3::new(9.5, 3.5, 0.5),
            Vector3::new(0.0, 0.0, -1.0),
            4.0,
        )
        .expect("ray wraps to the far side");
    assert_eq!(hit.local_position.z, 14);
    assert!(hit.position.z >= (WORLD_LENGTH - 2) as f32);
}

#[test]
fn vertical_does_not_wrap() {
    let world = World::new(&GenerationMethod::Solid);
    let caster = RayCaster::default();
    let above = Point3::new(5.5, CHUNK_HEIGHT as f32 + 0.5, 5.5);
    assert!(caster
        .cast(&world, above, Vector3::new(0.0, 1.0, 0.0), 100.0)
        .is_none());
}

#[test]
fn engine_uses_configured_step_budget() {
    let config = EngineConfig {
        generation: GenerationMethod::Solid,
        raycast_steps: 1,
    };
    let engine = EngineState::new(config, MemoryMeshBackend::new()).unwrap();
    // a single 4-block step from y = 34 samples y = 30, which is solid
    let hit = engine.cast_ray_position(
        Point3::new(1.5, 34.0, 1.5),
        Vector3::new(0.0, -1.0, 0.0),
        4.0,
    );
    assert_eq!(hit, Some(Point3::new(1.5, 30.0, 1.5)));
    // a single 1-block step from y = 34 samples y = 33, above the world
    assert_eq!(
        engine.cast_ray_position(Point3::new(1.5, 34.0, 1.5), Vector3::new(0.0, -1.0, 0.0), 1.0),
        None
    );
}
