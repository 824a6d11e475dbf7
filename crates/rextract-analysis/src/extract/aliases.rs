//! Alias tracking for the matching-library module.

use rextract_core::types::collections::FxHashSet;
use tracing::debug;
use tree_sitter::Node;

use super::node_text;

/// The module whose operations the scanner recognizes.
const MODULE_NAME: &str = "re";

/// The set of local names bound to the matching-library module.
///
/// Flat and append-only for the lifetime of one unit: an alias introduced
/// anywhere is visible for the remainder of the pass. No block or function
/// scoping, and no shadowing/rebinding model.
#[derive(Debug, Default)]
pub struct AliasTracker {
    names: FxHashSet<String>,
}

impl AliasTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `name` is currently bound to the matching-library module.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Record aliases introduced by an `import` statement.
    ///
    /// `import re` binds `re`; `import re as X` binds `X`. One statement may
    /// bind several modules (`import os, re as R`). Dotted module names
    /// other than `re` itself bind nothing.
    pub(crate) fn record_import(&mut self, node: &Node, source: &[u8]) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "dotted_name" => {
                    if node_text(&child, source) == Some(MODULE_NAME) {
                        self.insert(MODULE_NAME.to_string());
                    }
                }
                "aliased_import" => {
                    let module = child.child_by_field_name("name");
                    let alias = child.child_by_field_name("alias");
                    if let (Some(module), Some(alias)) = (module, alias) {
                        if node_text(&module, source) == Some(MODULE_NAME) {
                            if let Some(name) = node_text(&alias, source) {
                                self.insert(name.to_string());
                            }
                        }
                    }
                }
                _ => {}
            }
        }
    }

    /// Note a `from re import ...` statement.
    ///
    /// Names it brings into scope are never tracked; unqualified calls stay
    /// invisible to the scanner. An intentional under-approximation.
    pub(crate) fn note_from_import(&self, node: &Node, source: &[u8]) {
        if let Some(module) = node.child_by_field_name("module_name") {
            if node_text(&module, source) == Some(MODULE_NAME) {
                debug!("potentially-missed regexps: from {MODULE_NAME} import ...");
            }
        }
    }

    fn insert(&mut self, name: String) {
        debug!(alias = %name, "new alias for {MODULE_NAME}");
        self.names.insert(name);
    }
}
