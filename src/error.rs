//! # Error Types
//!
//! Errors surfaced by engine construction, configuration loading and mesh backends.

use thiserror::Error;

/// Errors reported by a [`MeshBackend`](crate::MeshBackend).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// Vertex and UV sequences must pair up one-to-one.
    #[error("vertex/uv count mismatch: {vertices} vertices, {uvs} uvs")]
    VertexUvMismatch {
        /// Number of vertex positions supplied.
        vertices: usize,
        /// Number of texture coordinates supplied.
        uvs: usize,
    },

    /// The handle does not name a live mesh.
    #[error("unknown mesh handle: {0}")]
    UnknownHandle(u64),

    /// Backend-specific failure.
    #[error("mesh backend failure: {0}")]
    Backend(String),
}

/// Errors that can occur while building or driving the engine.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Reading a configuration file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("malformed configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A configuration parsed but holds unusable values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The mesh backend rejected an operation.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}
