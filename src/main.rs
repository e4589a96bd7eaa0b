//! # Toroid Voxels Entry Point
//!
//! Runs the headless demo. The optional first argument is the path of a JSON
//! configuration file.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release -- config.json
//! ```

use std::{path::PathBuf, process};

fn main() {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);

    if let Err(err) = toroid_voxels::run(config_path.as_deref()) {
        log::error!("{err}");
        process::exit(1);
    }
}
