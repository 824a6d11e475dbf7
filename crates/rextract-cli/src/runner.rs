//! Batch orchestration: discover units, run the engine, emit reports.
//!
//! One engine invocation per unit, in parallel across independent units.
//! Unit failures are isolated: a unit that cannot be analyzed is diagnosed
//! and counted, and every other unit is still reported.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use ignore::WalkBuilder;
use rayon::prelude::*;
use rextract_analysis::extract::{extract_unit, SourceUnit};
use rextract_analysis::parsers::Language;
use rextract_analysis::report::FileRecord;
use rextract_core::config::ExtractConfig;
use rextract_core::errors::ScanError;
use tracing::debug;

/// Outcome of one batch run.
#[derive(Debug, Default)]
pub struct RunOutcome {
    /// Serialized reports, one JSON line per unit, in discovery order.
    pub reports: Vec<String>,
    /// Units that could not be analyzed, with their diagnostics.
    pub failures: Vec<(PathBuf, String)>,
}

impl RunOutcome {
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run extraction over every unit reachable from `paths`.
pub fn run(paths: &[PathBuf], config: &ExtractConfig) -> Result<RunOutcome> {
    let threads = config.effective_threads();
    if threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .ok();
    }

    let files = collect_files(paths, config);
    debug!(units = files.len(), "starting batch extraction");

    let results: Vec<(PathBuf, Result<String, String>)> = files
        .par_iter()
        .map(|path| (path.clone(), process_unit(path, config)))
        .collect();

    let mut outcome = RunOutcome::default();
    for (path, result) in results {
        match result {
            Ok(line) => outcome.reports.push(line),
            Err(message) => outcome.failures.push((path, message)),
        }
    }
    Ok(outcome)
}

/// Load, extract, and serialize one unit. The error string is the unit's
/// diagnostic; it never reaches the report channel.
fn process_unit(path: &Path, config: &ExtractConfig) -> Result<String, String> {
    let text = load_unit(path, config).map_err(|e| e.to_string())?;
    let language = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(Language::from_extension)
        .unwrap_or(Language::Python);
    let unit = SourceUnit::new(path.display().to_string(), text, language);
    let report = extract_unit(&unit).map_err(|e| e.to_string())?;
    serde_json::to_string(&FileRecord::from(&report)).map_err(|e| e.to_string())
}

fn load_unit(path: &Path, config: &ExtractConfig) -> Result<String, ScanError> {
    let max = config.effective_max_file_size();
    let metadata = fs::metadata(path).map_err(|source| ScanError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    if metadata.len() > max {
        return Err(ScanError::MaxFileSizeExceeded {
            path: path.to_path_buf(),
            size: metadata.len(),
            max,
        });
    }
    let bytes = fs::read(path).map_err(|source| ScanError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| ScanError::UnsupportedEncoding {
        path: path.to_path_buf(),
    })
}

/// Collect source units: explicit files as given, directories walked for
/// Python sources with ignore-file awareness. Sorted so output order is
/// deterministic run to run.
fn collect_files(paths: &[PathBuf], config: &ExtractConfig) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let walker = WalkBuilder::new(path)
                .follow_links(config.effective_follow_symlinks())
                .build();
            for entry in walker.flatten() {
                let entry_path = entry.path();
                if entry.file_type().is_some_and(|ft| ft.is_file())
                    && is_python_source(entry_path)
                {
                    files.push(entry_path.to_path_buf());
                }
            }
        } else {
            files.push(path.clone());
        }
    }
    files.sort();
    files.dedup();
    files
}

fn is_python_source(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(Language::from_extension)
        .is_some()
}
