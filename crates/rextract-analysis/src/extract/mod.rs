//! The extraction engine: one pass over one source unit.

mod aliases;
mod resolver;
mod scanner;
mod signatures;
mod strings;

pub use aliases::AliasTracker;
pub use resolver::Resolution;

use std::path::Path;

use rextract_core::errors::ParseError;
use tree_sitter::Node;

use crate::parsers::{self, Language};
use crate::report::ExtractionReport;
use scanner::ExtractionPass;

/// One source unit: identifier, text content, and language tag.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    pub path: String,
    pub text: String,
    pub language: Language,
}

impl SourceUnit {
    pub fn new(path: impl Into<String>, text: impl Into<String>, language: Language) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
            language,
        }
    }
}

/// Run one extraction pass over one source unit.
///
/// All traversal state — the alias set, the accumulated call sites, the
/// parser itself — is allocated here and dropped on return. Running this
/// repeatedly, or concurrently across independent units, is safe by
/// construction.
pub fn extract_unit(unit: &SourceUnit) -> Result<ExtractionReport, ParseError> {
    let parser = parsers::parser_for(unit.language);
    let tree = parser.parse(unit.text.as_bytes(), Path::new(&unit.path))?;

    let mut pass = ExtractionPass::new(unit.text.as_bytes());
    pass.visit(tree.root_node());

    Ok(ExtractionReport {
        filename: unit.path.clone(),
        regexps: pass.into_regexps(),
    })
}

pub(crate) fn node_text<'a>(node: &Node, source: &'a [u8]) -> Option<&'a str> {
    node.utf8_text(source).ok()
}
