//! rextract-analysis: the static extraction engine.
//!
//! Parses one Python source unit into a syntax tree, tracks which local
//! names alias the `re` module, locates call sites invoking pattern-matching
//! operations, and resolves each call's pattern and flags arguments to a
//! literal value or an explicit dynamic sentinel. The resulting report feeds
//! a downstream harness that tests each pattern for pathological worst-case
//! matching behavior.

pub mod extract;
pub mod parsers;
pub mod report;

pub use extract::{extract_unit, AliasTracker, Resolution, SourceUnit};
pub use parsers::{Language, LanguageParser, PythonParser};
pub use report::{
    ExtractedRegex, ExtractionReport, FileRecord, FlagsValue, PatternValue, RegexRecord,
};
