//! # Core Module
//!
//! Small shared-ownership primitives used across the engine.
//!
//! ## Key Components
//! - `StResource`: Single-threaded reference-counted resource with interior mutability

pub mod st_resource;

pub use st_resource::StResource;
