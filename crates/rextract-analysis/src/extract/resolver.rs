//! Argument resolution: literal values or explicit dynamic degradation.
//!
//! Every resolution step returns [`Resolution`] explicitly. Irregular shapes
//! degrade to `Dynamic` and the surrounding call site keeps being processed;
//! nothing here is fatal for the unit.

use rextract_core::types::collections::SmallVec4;
use smallvec::smallvec;
use tracing::trace;
use tree_sitter::Node;

use super::aliases::AliasTracker;
use super::node_text;
use super::signatures;
use super::strings;

/// Outcome of one resolution step.
///
/// Once any subexpression forces `Dynamic`, the enclosing argument is
/// `Dynamic`; no partial resolution is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    Resolved(T),
    Dynamic,
}

impl<T> Resolution<T> {
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic)
    }
}

/// Resolve a pattern argument to its literal text.
///
/// Only plain string literals resolve (including raw strings and implicit
/// concatenation). Everything else — names, calls, f-strings, bytes,
/// `+`-concatenation — is dynamic, with no partial resolution attempted.
pub(crate) fn resolve_pattern(node: Node, source: &[u8]) -> Resolution<String> {
    let node = unwrap_parens(node);
    match node.kind() {
        "string" => strings::decode_string_literal(node, source),
        "concatenated_string" => strings::decode_concatenated(node, source),
        kind => {
            trace!(kind, "pattern is dynamic");
            Resolution::Dynamic
        }
    }
}

/// Resolve a flags expression to its ordered token list.
///
/// Token order follows resolution (left-to-right) order, never sorted, and
/// duplicates are kept.
pub(crate) fn resolve_flags(
    node: Node,
    aliases: &AliasTracker,
    source: &[u8],
) -> Resolution<SmallVec4<String>> {
    let node = unwrap_parens(node);
    match node.kind() {
        "integer" => match node_text(&node, source) {
            Some(text) => Resolution::Resolved(smallvec![stringify_integer(text)]),
            None => Resolution::Dynamic,
        },
        "float" => match node_text(&node, source) {
            Some(text) => Resolution::Resolved(smallvec![text.to_string()]),
            None => Resolution::Dynamic,
        },
        "attribute" => resolve_flag_attribute(node, aliases, source),
        "identifier" => match node_text(&node, source) {
            // A bare tracked alias contributes nothing; any other bare
            // identifier makes the whole expression dynamic.
            Some(name) if aliases.contains(name) => Resolution::Resolved(SmallVec4::new()),
            Some(name) => {
                trace!(name, "bare identifier in flags expression");
                Resolution::Dynamic
            }
            None => Resolution::Dynamic,
        },
        "binary_operator" => resolve_flag_union(node, aliases, source),
        kind => {
            trace!(kind, "unexpected node in flags expression");
            Resolution::Dynamic
        }
    }
}

/// Resolve `alias.FLAG` where `alias` is tracked and `FLAG` is recognized.
fn resolve_flag_attribute(
    node: Node,
    aliases: &AliasTracker,
    source: &[u8],
) -> Resolution<SmallVec4<String>> {
    let (Some(object), Some(attribute)) = (
        node.child_by_field_name("object"),
        node.child_by_field_name("attribute"),
    ) else {
        return Resolution::Dynamic;
    };
    if object.kind() != "identifier" {
        return Resolution::Dynamic;
    }
    match (node_text(&object, source), node_text(&attribute, source)) {
        (Some(module), Some(flag)) if aliases.contains(module) && signatures::is_flag_name(flag) => {
            trace!(flag, "resolved flag attribute");
            Resolution::Resolved(smallvec![flag.to_string()])
        }
        (Some(module), Some(flag)) => {
            trace!(module, flag, "inappropriate attribute in flags expression");
            Resolution::Dynamic
        }
        _ => Resolution::Dynamic,
    }
}

/// Resolve `lhs | rhs` to the ordered union of both sides.
///
/// Either side dynamic makes the whole union dynamic, regardless of how
/// many siblings resolved. Any operator other than `|` is dynamic.
fn resolve_flag_union(
    node: Node,
    aliases: &AliasTracker,
    source: &[u8],
) -> Resolution<SmallVec4<String>> {
    if node.child_by_field_name("operator").map(|op| op.kind()) != Some("|") {
        return Resolution::Dynamic;
    }
    let (Some(left), Some(right)) = (
        node.child_by_field_name("left"),
        node.child_by_field_name("right"),
    ) else {
        return Resolution::Dynamic;
    };
    match (
        resolve_flags(left, aliases, source),
        resolve_flags(right, aliases, source),
    ) {
        (Resolution::Resolved(mut tokens), Resolution::Resolved(rest)) => {
            tokens.extend(rest);
            Resolution::Resolved(tokens)
        }
        _ => Resolution::Dynamic,
    }
}

/// Parentheses are transparent, as they are in the CPython AST.
fn unwrap_parens(mut node: Node) -> Node {
    while node.kind() == "parenthesized_expression" {
        let inner = (0..node.named_child_count())
            .filter_map(|i| node.named_child(i))
            .find(|child| child.kind() != "comment");
        match inner {
            Some(inner) => node = inner,
            None => break,
        }
    }
    node
}

/// Stringify a numeric flags operand the way its cooked value prints:
/// radix- and underscore-aware, decimal output. Unparseable spellings fall
/// back to the source text.
fn stringify_integer(text: &str) -> String {
    let cleaned = text.replace('_', "");
    let lower = cleaned.to_ascii_lowercase();
    let parsed = if let Some(hex) = lower.strip_prefix("0x") {
        i128::from_str_radix(hex, 16)
    } else if let Some(oct) = lower.strip_prefix("0o") {
        i128::from_str_radix(oct, 8)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        i128::from_str_radix(bin, 2)
    } else {
        cleaned.parse::<i128>()
    };
    match parsed {
        Ok(value) => value.to_string(),
        Err(_) => text.to_string(),
    }
}
