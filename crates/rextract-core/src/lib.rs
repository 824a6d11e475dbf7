//! rextract-core: errors, config, tracing, and shared types for the
//! rextract extraction engine.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
