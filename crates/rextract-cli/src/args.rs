//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;
use rextract_core::config::ExtractConfig;
use rextract_core::constants::DEFAULT_MAX_FILE_SIZE;

/// Extract regular-expression invocations from Python source files.
///
/// Prints one JSON report per analyzed unit on stdout; diagnostics go to
/// stderr. Exits non-zero when any unit could not be analyzed.
#[derive(Debug, Parser)]
#[command(name = "rextract", version, about)]
pub struct Arguments {
    /// Files or directories to analyze. Directories are walked for Python
    /// sources, honoring ignore files.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Number of worker threads (0 = auto-detect).
    #[arg(long, default_value_t = 0)]
    pub threads: usize,

    /// Skip files larger than this many bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_FILE_SIZE)]
    pub max_file_size: u64,

    /// Follow symbolic links when walking directories.
    #[arg(long)]
    pub follow_symlinks: bool,
}

impl Arguments {
    pub fn to_config(&self) -> ExtractConfig {
        ExtractConfig {
            threads: Some(self.threads),
            max_file_size: Some(self.max_file_size),
            follow_symlinks: Some(self.follow_symlinks),
        }
    }
}
