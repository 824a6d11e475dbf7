//! Recognized matching operations and flag names.
//!
//! Both tables are frozen: the downstream consumer depends on this exact
//! recognition profile.

/// One matching operation's fixed call signature.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OpSignature {
    pub name: &'static str,
    /// Positional slot where flags may appear; `None` for flagless ops.
    pub flags_slot: Option<usize>,
}

/// Keyword through which flags may alternatively be supplied.
pub(crate) const FLAGS_KEYWORD: &str = "flags";

/// The `re` module operations the scanner recognizes.
///
/// Signatures:
///   compile(pattern, flags=0)
///   search(pattern, string, flags=0)
///   match(pattern, string, flags=0)
///   fullmatch(pattern, string, flags=0)
///   split(pattern, string, maxsplit=0, flags=0)
///   findall(pattern, string, flags=0)
///   finditer(pattern, string, flags=0)
///   sub(pattern, repl, string, count=0, flags=0)
///   subn(pattern, repl, string, count=0, flags=0)
///   escape(pattern)
pub(crate) const OPERATIONS: [OpSignature; 10] = [
    OpSignature { name: "compile", flags_slot: Some(1) },
    OpSignature { name: "search", flags_slot: Some(2) },
    OpSignature { name: "match", flags_slot: Some(2) },
    OpSignature { name: "fullmatch", flags_slot: Some(2) },
    OpSignature { name: "split", flags_slot: Some(3) },
    OpSignature { name: "findall", flags_slot: Some(2) },
    OpSignature { name: "finditer", flags_slot: Some(2) },
    OpSignature { name: "sub", flags_slot: Some(4) },
    OpSignature { name: "subn", flags_slot: Some(4) },
    OpSignature { name: "escape", flags_slot: None },
];

/// Flag attribute names that resolve to themselves.
pub(crate) const FLAG_NAMES: [&str; 13] = [
    "DEBUG",
    "I",
    "IGNORECASE",
    "L",
    "LOCALE",
    "M",
    "MULTILINE",
    "S",
    "DOTALL",
    "U",
    "UNICODE",
    "X",
    "VERBOSE",
];

/// Look up the signature of a recognized operation.
pub(crate) fn signature_for(name: &str) -> Option<OpSignature> {
    OPERATIONS.iter().copied().find(|op| op.name == name)
}

/// Whether `name` is a recognized flag attribute.
pub(crate) fn is_flag_name(name: &str) -> bool {
    FLAG_NAMES.contains(&name)
}
