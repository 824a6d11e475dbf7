//! Extraction report types and the wire records consumed downstream.

use rextract_core::types::collections::SmallVec4;
use serde::{Deserialize, Serialize};

/// Sentinel for a pattern only determinable at run time.
pub const DYNAMIC_PATTERN: &str = "DYNAMIC-PATTERN";

/// Sentinel for flags only determinable at run time.
pub const DYNAMIC_FLAGS: &str = "DYNAMIC-FLAGS";

/// Sentinel for operations with no flags parameter.
pub const FLAGLESS: &str = "FLAGLESS";

/// A pattern argument: fixed in source text, or run-time determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternValue {
    Literal(String),
    Dynamic,
}

/// A flags argument resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagsValue {
    /// The operation has no flags parameter at all.
    Flagless,
    /// Resolved tokens in resolution order. Empty when no flags were supplied.
    Literal(SmallVec4<String>),
    Dynamic,
}

/// One extracted matching-library invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedRegex {
    pub func_name: String,
    pub pattern: PatternValue,
    pub flags: FlagsValue,
}

/// All invocations found in one source unit, in visitation order.
///
/// No deduplication: a pattern invoked N times yields N entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionReport {
    pub filename: String,
    pub regexps: Vec<ExtractedRegex>,
}

// ---- Wire records ----
//
// Field names and sentinel spellings are the contract consumed by the
// downstream validation harness and by sibling per-language engines feeding
// the same pipeline. They must not change.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegexRecord {
    #[serde(rename = "funcName")]
    pub func_name: String,
    pub pattern: String,
    pub flags: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub filename: String,
    pub regexps: Vec<RegexRecord>,
}

impl From<&ExtractedRegex> for RegexRecord {
    fn from(regex: &ExtractedRegex) -> Self {
        let pattern = match &regex.pattern {
            PatternValue::Literal(text) => text.clone(),
            PatternValue::Dynamic => DYNAMIC_PATTERN.to_string(),
        };
        let flags = match &regex.flags {
            FlagsValue::Flagless => FLAGLESS.to_string(),
            FlagsValue::Literal(tokens) => tokens.join("|"),
            FlagsValue::Dynamic => DYNAMIC_FLAGS.to_string(),
        };
        Self {
            func_name: regex.func_name.clone(),
            pattern,
            flags,
        }
    }
}

impl From<&ExtractionReport> for FileRecord {
    fn from(report: &ExtractionReport) -> Self {
        Self {
            filename: report.filename.clone(),
            regexps: report.regexps.iter().map(RegexRecord::from).collect(),
        }
    }
}
