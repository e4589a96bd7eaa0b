//! # Coordinate Transforms
//!
//! Pure conversions between world space, chunk grid space and local block space.
//!
//! The world is an `CHUNKS_RADIUS x CHUNKS_RADIUS` grid of chunks that wraps
//! around on the horizontal axes. Every place that needs the wrap rule (neighbour
//! lookups in the mesher, dirty propagation on writes, ray position correction)
//! goes through [`wrap_grid`], [`wrap_local`] or [`wrap_world_horizontal`].
//!
//! Conversions from world space truncate toward zero, so callers must bring
//! negative horizontal positions into `[0, WORLD_LENGTH)` first.

use cgmath::{Point2, Point3};

use super::chunk::{CHUNKS_RADIUS, CHUNK_COUNT, CHUNK_HEIGHT, CHUNK_LENGTH};

/// Horizontal extent of the whole world in blocks (`CHUNKS_RADIUS * CHUNK_LENGTH`).
pub const WORLD_LENGTH: i32 = CHUNKS_RADIUS * CHUNK_LENGTH;

/// Scales a chunk grid coordinate to the world position of its origin corner.
pub fn chunk_to_world(chunk_coords: Point3<i32>) -> Point3<i32> {
    Point3::new(
        chunk_coords.x * CHUNK_LENGTH,
        chunk_coords.y * CHUNK_HEIGHT,
        chunk_coords.z * CHUNK_LENGTH,
    )
}

/// Converts a world position to the chunk grid coordinate containing it.
///
/// The `y` component is kept for symmetry with [`chunk_to_world`] but the grid has
/// no vertical axis, so it is zero for every in-world position.
pub fn world_to_chunk(world_coords: Point3<f32>) -> Point3<i32> {
    Point3::new(
        world_coords.x as i32 / CHUNK_LENGTH,
        world_coords.y as i32 / CHUNK_HEIGHT,
        world_coords.z as i32 / CHUNK_LENGTH,
    )
}

/// Converts a world position to the local block coordinate inside its chunk.
///
/// Horizontal components use the integer remainder; the vertical component passes
/// through unchanged.
pub fn world_to_block(world_coords: Point3<f32>) -> Point3<i32> {
    Point3::new(
        world_coords.x as i32 % CHUNK_LENGTH,
        world_coords.y as i32,
        world_coords.z as i32 % CHUNK_LENGTH,
    )
}

/// Converts a local block coordinate back to world space given its chunk's grid position.
pub fn block_to_world(block_coords: Point3<i32>, grid_position: Point2<i32>) -> Point3<i32> {
    Point3::new(
        block_coords.x + grid_position.x * CHUNK_LENGTH,
        block_coords.y,
        block_coords.z + grid_position.y * CHUNK_LENGTH,
    )
}

/// Grid position `(cx, cz)` of a chunk id. The `y` field holds the world-z column.
pub fn chunk_id_to_grid(chunk_id: usize) -> Point2<i32> {
    debug_assert!(chunk_id < CHUNK_COUNT);
    let radius = CHUNKS_RADIUS as usize;
    Point2::new((chunk_id % radius) as i32, (chunk_id / radius) as i32)
}

/// Chunk id of a grid position, wrapping both axes onto the torus first.
pub fn grid_to_chunk_id(grid_position: Point2<i32>) -> usize {
    let x = wrap_grid(grid_position.x);
    let z = wrap_grid(grid_position.y);
    (z * CHUNKS_RADIUS + x) as usize
}

/// Wraps a chunk grid component into `[0, CHUNKS_RADIUS)`.
#[inline]
pub fn wrap_grid(value: i32) -> i32 {
    value.rem_euclid(CHUNKS_RADIUS)
}

/// Wraps a local horizontal block component into `[0, CHUNK_LENGTH)`.
#[inline]
pub fn wrap_local(value: i32) -> i32 {
    value.rem_euclid(CHUNK_LENGTH)
}

/// Wraps a horizontal world component into `[0, WORLD_LENGTH)`.
#[inline]
pub fn wrap_world_horizontal(value: f32) -> f32 {
    let extent = WORLD_LENGTH as f32;
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to exactly `extent` for tiny negative inputs
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

/// Whether a world position lies inside the addressable world volume.
pub fn is_inside_world(world_coords: Point3<f32>) -> bool {
    let extent = WORLD_LENGTH as f32;
    (0.0..extent).contains(&world_coords.x)
        && (0.0..extent).contains(&world_coords.z)
        && (0.0..CHUNK_HEIGHT as f32).contains(&world_coords.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_ids_round_trip_through_grid() {
        let mut seen = vec![false; CHUNK_COUNT];
        for id in 0..CHUNK_COUNT {
            let grid = chunk_id_to_grid(id);
            assert!((0..CHUNKS_RADIUS).contains(&grid.x));
            assert!((0..CHUNKS_RADIUS).contains(&grid.y));
            assert_eq!(grid_to_chunk_id(grid), id);
            seen[(grid.y * CHUNKS_RADIUS + grid.x) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn chunk_origin_round_trips() {
        for cz in 0..CHUNKS_RADIUS {
            for cx in 0..CHUNKS_RADIUS {
                let grid = Point3::new(cx, 0, cz);
                let origin = chunk_to_world(grid);
                let back = world_to_chunk(origin.cast::<f32>().unwrap());
                assert_eq!(back, grid);
            }
        }
    }

    #[test]
    fn local_block_round_trips() {
        let world = Point3::new(37.6_f32, 12.2, 85.9);
        let grid = world_to_chunk(world);
        let local = world_to_block(world);
        assert_eq!(local, Point3::new(37 % CHUNK_LENGTH, 12, 85 % CHUNK_LENGTH));

        let back = block_to_world(local, Point2::new(grid.x, grid.z));
        assert_eq!(back, Point3::new(37, 12, 85));
    }

    #[test]
    fn vertical_component_is_not_wrapped() {
        let local = world_to_block(Point3::new(1.0, (CHUNK_HEIGHT + 5) as f32, 1.0));
        assert_eq!(local.y, CHUNK_HEIGHT + 5);
    }

    #[test]
    fn grid_wrap_covers_both_edges() {
        assert_eq!(wrap_grid(-1), CHUNKS_RADIUS - 1);
        assert_eq!(wrap_grid(CHUNKS_RADIUS), 0);
        assert_eq!(wrap_local(-1), CHUNK_LENGTH - 1);
        assert_eq!(wrap_local(CHUNK_LENGTH), 0);
        assert_eq!(grid_to_chunk_id(Point2::new(-1, 0)), (CHUNKS_RADIUS - 1) as usize);
    }

    #[test]
    fn world_wrap_stays_in_range() {
        let extent = WORLD_LENGTH as f32;
        assert_eq!(wrap_world_horizontal(extent + 0.5), 0.5);
        assert_eq!(wrap_world_horizontal(-0.5), extent - 0.5);
        assert_eq!(wrap_world_horizontal(extent), 0.0);
        let tiny = wrap_world_horizontal(-1e-9);
        assert!((0.0..extent).contains(&tiny));
    }
}
