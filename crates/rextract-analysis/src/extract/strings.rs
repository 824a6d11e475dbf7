//! Python string-literal decoding.
//!
//! Pattern extraction needs the cooked value of a string literal — the text
//! the running program would hand to the matching library — not its source
//! spelling. Raw strings keep their backslashes; f-strings and bytes
//! literals never resolve.

use tracing::trace;
use tree_sitter::Node;

use super::node_text;
use super::resolver::Resolution;

/// Decode one `string` node to its cooked text.
pub(crate) fn decode_string_literal(node: Node, source: &[u8]) -> Resolution<String> {
    let Some(prefix) = string_prefix(node, source) else {
        return Resolution::Dynamic;
    };
    if prefix.contains('b') {
        trace!("bytes literal is not a string pattern");
        return Resolution::Dynamic;
    }
    if prefix.contains('f') {
        trace!("f-string pattern is dynamic");
        return Resolution::Dynamic;
    }
    let raw = prefix.contains('r');

    let mut cooked = String::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "string_start" | "string_end" => {}
            "string_content" => match node_text(&child, source) {
                Some(text) => cooked.push_str(text),
                None => return Resolution::Dynamic,
            },
            "escape_sequence" => match node_text(&child, source) {
                Some(text) if raw => cooked.push_str(text),
                Some(text) => cooked.push_str(&decode_escape(text)),
                None => return Resolution::Dynamic,
            },
            "line_continuation" => {}
            "interpolation" => return Resolution::Dynamic,
            kind => {
                trace!(kind, "unexpected node inside string literal");
                return Resolution::Dynamic;
            }
        }
    }
    Resolution::Resolved(cooked)
}

/// Decode implicit concatenation of adjacent literals (`'a' 'b'`).
///
/// The CPython AST folds these into one literal node; mixing in anything
/// non-literal (an f-string piece, a bytes piece) makes the whole argument
/// dynamic.
pub(crate) fn decode_concatenated(node: Node, source: &[u8]) -> Resolution<String> {
    let mut cooked = String::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "string" => match decode_string_literal(child, source) {
                Resolution::Resolved(piece) => cooked.push_str(&piece),
                Resolution::Dynamic => return Resolution::Dynamic,
            },
            "comment" | "line_continuation" => {}
            _ => return Resolution::Dynamic,
        }
    }
    Resolution::Resolved(cooked)
}

/// The lowercase prefix letters of a string literal (`r`, `b`, `f`, `u`).
fn string_prefix(node: Node, source: &[u8]) -> Option<String> {
    let mut cursor = node.walk();
    let start = node
        .named_children(&mut cursor)
        .find(|child| child.kind() == "string_start")?;
    let text = node_text(&start, source)?;
    Some(
        text.chars()
            .take_while(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_lowercase())
            .collect(),
    )
}

/// Decode one escape sequence to its cooked value.
///
/// Unrecognized escapes keep the backslash, as CPython does. `\N{...}`
/// named escapes are kept verbatim rather than resolved against the Unicode
/// name table.
fn decode_escape(text: &str) -> String {
    let mut chars = text.chars();
    let Some('\\') = chars.next() else {
        return text.to_string();
    };
    let Some(kind) = chars.next() else {
        return text.to_string();
    };
    let rest: String = chars.collect();
    match kind {
        // Backslash-newline is a line continuation: cooked away entirely.
        '\n' | '\r' => String::new(),
        '\\' => "\\".to_string(),
        '\'' => "'".to_string(),
        '"' => "\"".to_string(),
        'a' => "\x07".to_string(),
        'b' => "\x08".to_string(),
        'f' => "\x0c".to_string(),
        'n' => "\n".to_string(),
        'r' => "\r".to_string(),
        't' => "\t".to_string(),
        'v' => "\x0b".to_string(),
        '0'..='7' => {
            let digits: String = std::iter::once(kind).chain(rest.chars()).collect();
            match u32::from_str_radix(&digits, 8).ok().and_then(char::from_u32) {
                Some(c) => c.to_string(),
                None => text.to_string(),
            }
        }
        'x' | 'u' | 'U' => match u32::from_str_radix(&rest, 16).ok().and_then(char::from_u32) {
            Some(c) => c.to_string(),
            None => text.to_string(),
        },
        'N' => text.to_string(),
        _ => text.to_string(),
    }
}
