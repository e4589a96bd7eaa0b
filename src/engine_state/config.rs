//! Engine configuration.
//!
//! Configuration is plain JSON. Every field is optional; missing fields take
//! the values of [`EngineConfig::default`].
//!
//! ```json
//! {
//!     "generation": {
//!         "method": "perlin",
//!         "seed": 7,
//!         "scale": 0.05,
//!         "base_height": 12.0,
//!         "amplitude": 6.0
//!     },
//!     "raycast_steps": 512
//! }
//! ```

use std::{fs, path::Path};

use log::info;
use serde::{Deserialize, Serialize};

use super::voxels::raycast::DEFAULT_RAYCAST_STEPS;

use crate::error::EngineError;

pub use super::voxels::chunk::GenerationMethod;

/// Settings fixed for the lifetime of an engine instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Rule used to fill chunks when the world is created.
    pub generation: GenerationMethod,
    /// Number of samples taken along each ray. Must be nonzero.
    pub raycast_steps: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            generation: GenerationMethod::default(),
            raycast_steps: DEFAULT_RAYCAST_STEPS,
        }
    }
}

impl EngineConfig {
    /// Parses and validates a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        info!("loading configuration from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Checks that the values are usable.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.raycast_steps == 0 {
            return Err(EngineError::InvalidConfig(
                "raycast_steps must be greater than zero".to_string(),
            ));
        }

        match self.generation {
            GenerationMethod::Random { density, .. } if !(0.0..=1.0).contains(&density) => {
                Err(EngineError::InvalidConfig(format!(
                    "random density {density} is outside [0, 1]"
                )))
            }
            GenerationMethod::Perlin { scale, .. } if !scale.is_finite() => Err(
                EngineError::InvalidConfig("perlin scale must be finite".to_string()),
            ),
            _ => Ok(()),
        }
    }
}
