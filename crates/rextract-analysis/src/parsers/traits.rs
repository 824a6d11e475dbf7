//! LanguageParser trait — the contract every language parser implements.

use std::path::Path;

use rextract_core::errors::ParseError;
use tree_sitter::Tree;

use super::types::Language;

/// Trait that every language parser must implement.
pub trait LanguageParser: Send + Sync {
    /// The language family this parser handles.
    fn language(&self) -> Language;

    /// File extensions this parser handles.
    fn extensions(&self) -> &[&str];

    /// Parse source text into a syntax tree.
    ///
    /// A returned tree is fully parseable source. A tree containing ERROR
    /// or MISSING nodes is a unit-level failure, never silently analyzed.
    fn parse(&self, source: &[u8], path: &Path) -> Result<Tree, ParseError>;
}
