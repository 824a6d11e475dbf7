//! Python parser.

use std::path::Path;

use rextract_core::errors::ParseError;
use tree_sitter::{Node, Parser, Tree};

use super::traits::LanguageParser;
use super::types::Language;

pub struct PythonParser;

impl LanguageParser for PythonParser {
    fn language(&self) -> Language {
        Language::Python
    }

    fn extensions(&self) -> &[&str] {
        &["py", "pyi"]
    }

    fn parse(&self, source: &[u8], path: &Path) -> Result<Tree, ParseError> {
        // Fresh parser per unit: no state shared across invocations.
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|_| ParseError::GrammarNotFound {
                language: "python".to_string(),
            })?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ParseError::TreeSitterError {
                path: path.to_path_buf(),
                message: "parser produced no tree".to_string(),
            })?;

        if let Some(error_node) = first_error_node(tree.root_node()) {
            let position = error_node.start_position();
            return Err(ParseError::SyntaxError {
                path: path.to_path_buf(),
                line: position.row + 1,
                column: position.column + 1,
            });
        }

        Ok(tree)
    }
}

/// Locate the first ERROR or MISSING node in document order, if any.
fn first_error_node(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(error_node) = first_error_node(child) {
            return Some(error_node);
        }
    }
    Some(node)
}
