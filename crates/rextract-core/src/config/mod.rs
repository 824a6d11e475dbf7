//! Batch run configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_FILE_SIZE, DEFAULT_THREADS};

/// Configuration for a batch extraction run.
///
/// Applies only to batch orchestration; the per-unit engine itself has no
/// tunables.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExtractConfig {
    /// Number of worker threads. Default: auto-detect.
    pub threads: Option<usize>,
    /// Maximum source unit size in bytes. Default: 1MB.
    pub max_file_size: Option<u64>,
    /// Follow symlinks during directory walks. Default: false.
    pub follow_symlinks: Option<bool>,
}

impl ExtractConfig {
    /// Returns the worker thread count, defaulting to auto-detect.
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(DEFAULT_THREADS)
    }

    /// Returns the source unit size limit in bytes.
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(DEFAULT_MAX_FILE_SIZE)
    }

    /// Returns whether directory walks follow symlinks, defaulting to false.
    pub fn effective_follow_symlinks(&self) -> bool {
        self.follow_symlinks.unwrap_or(false)
    }
}
