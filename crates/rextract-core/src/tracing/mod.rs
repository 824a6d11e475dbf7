//! Tracing and diagnostics.

mod setup;

pub use setup::init_tracing;
