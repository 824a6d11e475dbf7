//! Parser errors.

use std::path::PathBuf;

/// Errors that make a source unit unanalyzable.
///
/// Fatal for that unit only, and always distinguishable from a valid empty
/// report: an empty report means no matching-library usage was found, a
/// `ParseError` means the unit could not be analyzed at all.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Grammar not found for language: {language}")]
    GrammarNotFound { language: String },

    #[error("Tree-sitter error parsing {path}: {message}")]
    TreeSitterError { path: PathBuf, message: String },

    #[error("Syntax error in {path} at line {line}, column {column}")]
    SyntaxError {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    #[error("Unsupported language: {extension}")]
    UnsupportedLanguage { extension: String },
}
