//! # Configuration Tests
//!
//! Run with: cargo test --test config

use std::fs;

use toroid_voxels::{EngineConfig, EngineError, EngineState, GenerationMethod, MemoryMeshBackend};

#[test]
fn loads_config_file_and_builds_engine() {
    let path = std::env::temp_dir().join(format!("toroid-voxels-{}.json", std::process::id()));
    fs::write(
        &path,
        r#"{
            "generation": {
                "method": "perlin",
                "seed": 3,
                "scale": 0.05,
                "base_height": 12.0,
                "amplitude": 5.0
            },
            "raycast_steps": 128
        }"#,
    )
    .unwrap();

    let config = EngineConfig::load(&path);
    fs::remove_file(&path).unwrap();
    let config = config.unwrap();

    assert_eq!(config.raycast_steps, 128);
    assert!(matches!(config.generation, GenerationMethod::Perlin { seed: 3, .. }));

    let engine = EngineState::new(config.clone(), MemoryMeshBackend::new()).unwrap();
    assert_eq!(engine.config(), &config);
    let solids: usize = engine
        .world()
        .chunks()
        .iter()
        .map(|chunk| chunk.volume.solid_count())
        .sum();
    assert!(solids > 0);
}

#[test]
fn config_round_trips_through_json() {
    let config = EngineConfig {
        generation: GenerationMethod::Random {
            density: 0.25,
            seed: 11,
        },
        raycast_steps: 32,
    };
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains(r#""method":"random""#));
    assert_eq!(EngineConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn unknown_method_is_rejected() {
    let json = r#"{ "generation": { "method": "caves" } }"#;
    let err = EngineConfig::from_json_str(json).unwrap_err();
    assert!(matches!(err, EngineError::Config(_)));
}
