#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Toroid Voxels
//!
//! A voxel world on a fixed toroidal grid of chunks, with face-culled chunk
//! meshing and fixed-step ray picking.
//!
//! The world is `CHUNKS_RADIUS x CHUNKS_RADIUS` chunks of
//! `CHUNK_LENGTH x CHUNK_HEIGHT x CHUNK_LENGTH` voxels. Its horizontal edges wrap
//! around; the vertical axis does not.
//!
//! ## Key Modules
//!
//! * `core` - Small shared utilities
//! * `engine_state` - The engine aggregate, its configuration, voxel data and meshing
//! * `error` - Error types
//!
//! ## Architecture
//!
//! The engine never issues draw calls. Rendering is delegated to a
//! [`MeshBackend`] that can create, replace and destroy meshes. The in-memory
//! [`MemoryMeshBackend`] is enough to drive the whole engine headless.
//!
//! ## Usage
//!
//! ```no_run
//! fn main() {
//!     if let Err(err) = toroid_voxels::run(None) {
//!         eprintln!("{err}");
//!     }
//! }
//! ```

use std::path::Path;

use cgmath::{Point3, Vector3};
use log::info;
use web_time::Instant;

pub mod core;
pub mod engine_state;
pub mod error;

pub use engine_state::{
    config::{EngineConfig, GenerationMethod},
    rendering::meshing::{MemoryMeshBackend, MeshBackend, MeshData, MeshHandle, MeshManager},
    voxels::{
        block::{BlockTypeSize, AIR},
        raycast::{RayCaster, RayHit},
        world::{ChunkId, World},
    },
    EngineState,
};
pub use error::{EngineError, MeshError};

/// Name of the stopwatch covering engine construction in the demo driver.
pub const APPLICATION_INITIALIZATION_STOPWATCH: &str = "Application Initialization";

/// Runs the headless demo: builds the world, digs a shaft with ray picks,
/// rebuilds the affected meshes and tears everything down.
///
/// `config_path` names a JSON configuration file; without one the defaults are used.
pub fn run(config_path: Option<&Path>) -> Result<(), EngineError> {
    // a logger installed by an earlier call or by the host stays in place
    let _ = env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .try_init();

    info!("Logger initialized");

    let config = match config_path {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    let start = Instant::now();
    let backend = MemoryMeshBackend::new();
    let store = backend.store();
    let mut engine = EngineState::new(config, backend)?;
    info!(
        "{}: {:?}",
        APPLICATION_INITIALIZATION_STOPWATCH,
        start.elapsed()
    );

    let origin = Point3::new(8.5, 40.0, 8.5);
    let down = Vector3::new(0.0, -1.0, 0.0);
    let mut dug = 0;
    for _ in 0..8 {
        let Some(hit) = engine.cast_ray(origin, down, 48.0) else {
            break;
        };
        engine.set_block(hit.chunk_id, hit.local_position, AIR);
        dug += 1;
    }
    info!("dug {} blocks", dug);

    let rebuilt = engine.update()?;
    let vertices: usize = {
        let store = store.get();
        (0..engine_state::voxels::chunk::CHUNK_COUNT)
            .filter_map(|id| store.mesh(*engine.mesh_manager().chunk_mesh(id)))
            .map(|mesh| mesh.vertex_count())
            .sum()
    };
    info!("rebuilt {} chunks; world mesh has {} vertices", rebuilt, vertices);

    engine.teardown();
    Ok(())
}
