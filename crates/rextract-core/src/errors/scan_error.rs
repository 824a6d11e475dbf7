//! Batch scanning errors.

use std::path::PathBuf;

/// Errors that can occur while loading source units for a batch run.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("IO error reading {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("File too large: {path} ({size} bytes, max {max})")]
    MaxFileSizeExceeded { path: PathBuf, size: u64, max: u64 },

    #[error("Unsupported encoding in {path}: not valid UTF-8")]
    UnsupportedEncoding { path: PathBuf },
}
