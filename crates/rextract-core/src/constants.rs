//! Shared constants for the rextract extraction engine.

/// rextract version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum source unit size in bytes for batch scanning (default: 1MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_048_576;

/// Default number of worker threads (0 = auto-detect).
pub const DEFAULT_THREADS: usize = 0;
