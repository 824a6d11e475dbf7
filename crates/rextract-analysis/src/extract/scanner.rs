//! Call-site scanning: full recursive traversal of one syntax tree.

use rextract_core::types::collections::{FxHashMap, SmallVec4};
use tracing::debug;
use tree_sitter::Node;

use super::aliases::AliasTracker;
use super::node_text;
use super::resolver::{self, Resolution};
use super::signatures::{self, OpSignature, FLAGS_KEYWORD};
use crate::report::{ExtractedRegex, FlagsValue, PatternValue};

/// Per-unit traversal state: the alias set and the accumulated call sites.
///
/// Created fresh for every unit and discarded at the end of the pass; no
/// state is shared across units.
pub(crate) struct ExtractionPass<'s> {
    source: &'s [u8],
    aliases: AliasTracker,
    regexps: Vec<ExtractedRegex>,
}

impl<'s> ExtractionPass<'s> {
    pub(crate) fn new(source: &'s [u8]) -> Self {
        Self {
            source,
            aliases: AliasTracker::new(),
            regexps: Vec::new(),
        }
    }

    pub(crate) fn into_regexps(self) -> Vec<ExtractedRegex> {
        self.regexps
    }

    /// Visit `node` and every reachable child, in document order.
    ///
    /// A matched call is recorded before its children are visited, so a
    /// matching call nested inside another's arguments — at any depth —
    /// yields its own entry after the outer one. Traversal never stops at a
    /// match or a mismatch.
    pub(crate) fn visit(&mut self, node: Node<'_>) {
        match node.kind() {
            "import_statement" => self.aliases.record_import(&node, self.source),
            "import_from_statement" => self.aliases.note_from_import(&node, self.source),
            "call" => {
                if let Some(regex) = self.match_call(&node) {
                    self.regexps.push(regex);
                }
            }
            _ => {}
        }

        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            self.visit(child);
        }
    }

    /// Test a call node against the `alias.operation(...)` shape and, on a
    /// match, resolve its arguments.
    ///
    /// Every unexpected shape — a non-attribute callee, a non-identifier
    /// receiver, an untracked alias, an unrecognized member, a call without
    /// positional arguments — is a non-match for this node only.
    fn match_call(&self, node: &Node<'_>) -> Option<ExtractedRegex> {
        let function = node.child_by_field_name("function")?;
        if function.kind() != "attribute" {
            return None;
        }
        let object = function.child_by_field_name("object")?;
        if object.kind() != "identifier" {
            return None;
        }
        let alias = node_text(&object, self.source)?;
        if !self.aliases.contains(alias) {
            return None;
        }
        let member = function.child_by_field_name("attribute")?;
        let op_name = node_text(&member, self.source)?;
        let signature = signatures::signature_for(op_name)?;

        debug!(alias, op = op_name, "matching-library call site");

        let arguments = node.child_by_field_name("arguments")?;
        let (positional, keywords) = split_arguments(&arguments, self.source);

        // args[0] is the pattern; a recognized call invoked without
        // positional arguments is dropped as a non-match.
        let pattern_node = positional.first().copied()?;
        let pattern = match resolver::resolve_pattern(pattern_node, self.source) {
            Resolution::Resolved(text) => PatternValue::Literal(text),
            Resolution::Dynamic => PatternValue::Dynamic,
        };

        let flags = self.resolve_call_flags(signature, &positional, &keywords);

        Some(ExtractedRegex {
            func_name: op_name.to_string(),
            pattern,
            flags,
        })
    }

    /// Resolve the flags argument per the operation's fixed signature:
    /// positional slot first, then the `flags` keyword, then the default
    /// empty set.
    fn resolve_call_flags(
        &self,
        signature: OpSignature,
        positional: &[Node<'_>],
        keywords: &FxHashMap<String, Node<'_>>,
    ) -> FlagsValue {
        let Some(slot) = signature.flags_slot else {
            return FlagsValue::Flagless;
        };

        let flags_node = positional
            .get(slot)
            .copied()
            .or_else(|| keywords.get(FLAGS_KEYWORD).copied());
        let Some(flags_node) = flags_node else {
            return FlagsValue::Literal(SmallVec4::new());
        };

        match resolver::resolve_flags(flags_node, &self.aliases, self.source) {
            Resolution::Resolved(tokens) => FlagsValue::Literal(tokens),
            Resolution::Dynamic => FlagsValue::Dynamic,
        }
    }
}

/// Split an argument list into ordered positional nodes and the keyword map.
///
/// Comments and `**kwargs` splats are not arguments; a `*args` splat
/// occupies a positional slot (and resolves dynamic downstream).
fn split_arguments<'t>(
    arguments: &Node<'t>,
    source: &[u8],
) -> (Vec<Node<'t>>, FxHashMap<String, Node<'t>>) {
    let mut positional = Vec::new();
    let mut keywords = FxHashMap::default();

    let mut cursor = arguments.walk();
    for child in arguments.named_children(&mut cursor) {
        match child.kind() {
            "comment" => {}
            "dictionary_splat" => {}
            "keyword_argument" => {
                let (Some(name), Some(value)) = (
                    child.child_by_field_name("name"),
                    child.child_by_field_name("value"),
                ) else {
                    continue;
                };
                if let Some(name) = node_text(&name, source) {
                    keywords.entry(name.to_string()).or_insert(value);
                }
            }
            _ => positional.push(child),
        }
    }

    (positional, keywords)
}
