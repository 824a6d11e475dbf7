//! Extraction engine tests.
//!
//! Tests cover: alias tracking, call-site discovery (including arbitrary
//! nesting), pattern resolution, flags resolution (positional, keyword,
//! unions, degradation), wire-record shape, determinism, and unit-level
//! failure handling.

use rextract_analysis::extract::{extract_unit, SourceUnit};
use rextract_analysis::parsers::Language;
use rextract_analysis::report::{FileRecord, RegexRecord};
use rextract_core::errors::ParseError;

// ---- Helpers ----

fn extract(source: &str) -> FileRecord {
    let unit = SourceUnit::new("unit.py", source, Language::Python);
    let report = extract_unit(&unit).expect("extraction should succeed");
    FileRecord::from(&report)
}

fn extract_one(source: &str) -> RegexRecord {
    let record = extract(source);
    assert_eq!(
        record.regexps.len(),
        1,
        "expected exactly one extracted regex, got {:?}",
        record.regexps
    );
    record.regexps.into_iter().next().unwrap()
}

fn record(func_name: &str, pattern: &str, flags: &str) -> RegexRecord {
    RegexRecord {
        func_name: func_name.to_string(),
        pattern: pattern.to_string(),
        flags: flags.to_string(),
    }
}

// ---- Alias tracking ----

#[test]
fn plain_import_is_tracked() {
    let rx = extract_one("import re\nre.compile('a')\n");
    assert_eq!(rx, record("compile", "a", ""));
}

#[test]
fn renamed_import_is_tracked() {
    let rx = extract_one("import re as RE\nRE.compile('ab+c', RE.IGNORECASE | RE.MULTILINE)\n");
    assert_eq!(rx, record("compile", "ab+c", "IGNORECASE|MULTILINE"));
}

#[test]
fn two_aliases_are_both_tracked() {
    let source = "import re\nimport re as R\nre.search('a', s)\nR.match('b', s)\n";
    let found = extract(source);
    assert_eq!(
        found.regexps,
        vec![record("search", "a", ""), record("match", "b", "")]
    );
}

#[test]
fn multi_module_import_tracks_the_re_binding() {
    let rx = extract_one("import os, re as R\nR.compile('a')\n");
    assert_eq!(rx, record("compile", "a", ""));
}

#[test]
fn from_import_star_is_never_tracked() {
    let found = extract("from re import *\ncompile('a')\nsearch('b', s)\n");
    assert!(found.regexps.is_empty());
}

#[test]
fn no_imports_yields_empty_report_not_an_error() {
    let found = extract("x = 1\nprint(x)\n");
    assert!(found.regexps.is_empty());
}

#[test]
fn call_before_import_is_not_matched() {
    let found = extract("re.compile('early')\nimport re\nre.compile('late')\n");
    assert_eq!(found.regexps, vec![record("compile", "late", "")]);
}

#[test]
fn import_inside_function_is_visible_for_the_rest_of_the_unit() {
    let source = "def f():\n    import re\n    return re.compile('a')\n\nre.compile('b')\n";
    let found = extract(source);
    // Flat alias scoping: the function-local import binds for the whole
    // remainder of the pass.
    assert_eq!(
        found.regexps,
        vec![record("compile", "a", ""), record("compile", "b", "")]
    );
}

#[test]
fn compiled_object_methods_are_not_tracked() {
    let source = "import re\np = re.compile('a')\np.match(text)\n";
    let found = extract(source);
    assert_eq!(found.regexps, vec![record("compile", "a", "")]);
}

// ---- Call-site discovery ----

#[test]
fn unrecognized_members_are_ignored() {
    let found = extract("import re\nre.purge()\nre.notathing('a')\n");
    assert!(found.regexps.is_empty());
}

#[test]
fn attribute_of_attribute_receiver_is_ignored() {
    let found = extract("import re\nx.re.compile('a')\n");
    assert!(found.regexps.is_empty());
}

#[test]
fn call_without_positional_arguments_is_dropped() {
    let found = extract("import re\nre.compile(pattern='a')\n");
    assert!(found.regexps.is_empty());
}

#[test]
fn nested_call_yields_outer_then_inner_entries() {
    let rx = extract("import re\nre.compile(re.escape(user_input))\n");
    assert_eq!(
        rx.regexps,
        vec![
            record("compile", "DYNAMIC-PATTERN", ""),
            record("escape", "DYNAMIC-PATTERN", "FLAGLESS"),
        ]
    );
}

#[test]
fn nested_call_in_flags_keeps_the_conservative_rule() {
    let rx = extract("import re\nre.compile('a', re.compile('b'))\n");
    // The outer flags stay dynamic even though the inner call is itself
    // independently classified.
    assert_eq!(
        rx.regexps,
        vec![
            record("compile", "a", "DYNAMIC-FLAGS"),
            record("compile", "b", ""),
        ]
    );
}

#[test]
fn deeply_nested_calls_each_yield_an_entry() {
    let rx = extract("import re\nre.escape(re.sub('a', re.escape(x), s))\n");
    assert_eq!(
        rx.regexps,
        vec![
            record("escape", "DYNAMIC-PATTERN", "FLAGLESS"),
            record("sub", "a", ""),
            record("escape", "DYNAMIC-PATTERN", "FLAGLESS"),
        ]
    );
}

#[test]
fn repeated_invocations_are_not_deduplicated() {
    let found = extract("import re\nre.compile('a')\nre.compile('a')\nre.compile('a')\n");
    assert_eq!(found.regexps.len(), 3);
}

// ---- Pattern resolution ----

#[test]
fn raw_string_pattern_is_kept_verbatim() {
    let rx = extract_one("import re\nre.compile(r'\\d+')\n");
    assert_eq!(rx.pattern, "\\d+");
}

#[test]
fn escape_sequences_are_cooked() {
    let rx = extract_one("import re\nre.compile('a\\tb\\n')\n");
    assert_eq!(rx.pattern, "a\tb\n");
}

#[test]
fn implicit_concatenation_folds_into_one_literal() {
    let rx = extract_one("import re\nre.compile('ab' 'cd')\n");
    assert_eq!(rx.pattern, "abcd");
}

#[test]
fn fstring_pattern_is_dynamic() {
    let rx = extract_one("import re\nre.compile(f'{x}+')\n");
    assert_eq!(rx.pattern, "DYNAMIC-PATTERN");
}

#[test]
fn bytes_pattern_is_dynamic() {
    let rx = extract_one("import re\nre.compile(b'a+')\n");
    assert_eq!(rx.pattern, "DYNAMIC-PATTERN");
}

#[test]
fn plus_concatenation_is_dynamic_with_no_partial_resolution() {
    let rx = extract_one("import re\nre.compile('a' + suffix)\n");
    assert_eq!(rx.pattern, "DYNAMIC-PATTERN");
}

#[test]
fn name_pattern_is_dynamic() {
    let rx = extract_one("import re\nre.compile(pattern_var)\n");
    assert_eq!(rx.pattern, "DYNAMIC-PATTERN");
}

#[test]
fn parenthesized_pattern_is_transparent() {
    let rx = extract_one("import re\nre.compile(('a+'))\n");
    assert_eq!(rx.pattern, "a+");
}

// ---- Flags resolution ----

#[test]
fn flagless_operation_reports_the_flagless_sentinel() {
    let rx = extract_one("import re\nre.escape('a')\n");
    assert_eq!(rx, record("escape", "a", "FLAGLESS"));
}

#[test]
fn absent_flags_default_to_the_empty_string() {
    let rx = extract_one("import re\nre.search('a', s)\n");
    assert_eq!(rx.flags, "");
}

#[test]
fn positional_and_keyword_flags_resolve_identically() {
    let positional = extract_one("import re\nre.search('a', s, re.I | re.M)\n");
    let keyword = extract_one("import re\nre.search('a', s, flags=re.I | re.M)\n");
    assert_eq!(positional.flags, "I|M");
    assert_eq!(positional.flags, keyword.flags);
}

#[test]
fn union_preserves_resolution_order() {
    let rx = extract_one("import re\nre.compile('a', re.M | re.I | re.X)\n");
    assert_eq!(rx.flags, "M|I|X");
}

#[test]
fn duplicate_tokens_are_kept() {
    let rx = extract_one("import re\nre.compile('a', re.I | re.I)\n");
    assert_eq!(rx.flags, "I|I");
}

#[test]
fn keyword_zero_flags_resolve_to_the_numeric_literal() {
    let rx = extract_one("import re\nre.sub('a', 'b', s, flags=0)\n");
    assert_eq!(rx, record("sub", "a", "0"));
}

#[test]
fn hex_integer_flags_stringify_decimally() {
    let rx = extract_one("import re\nre.compile('a', 0x2)\n");
    assert_eq!(rx.flags, "2");
}

#[test]
fn bare_untracked_identifier_always_degrades_flags() {
    let rx = extract_one("import re\nre.compile('a', myflags)\n");
    assert_eq!(rx.flags, "DYNAMIC-FLAGS");
}

#[test]
fn one_unresolved_operand_poisons_the_whole_union() {
    let rx = extract_one("import re\nre.compile('a', re.I | myflags | re.M)\n");
    assert_eq!(rx.flags, "DYNAMIC-FLAGS");
}

#[test]
fn unrecognized_flag_attribute_is_dynamic() {
    let rx = extract_one("import re\nre.compile('a', re.ASCII)\n");
    assert_eq!(rx.flags, "DYNAMIC-FLAGS");
}

#[test]
fn attribute_on_a_non_alias_is_dynamic() {
    let rx = extract_one("import re\nre.compile('a', other.IGNORECASE)\n");
    assert_eq!(rx.flags, "DYNAMIC-FLAGS");
}

#[test]
fn parenthesized_union_is_transparent() {
    let rx = extract_one("import re\nre.compile('a', (re.I | re.M))\n");
    assert_eq!(rx.flags, "I|M");
}

#[test]
fn non_or_binary_operator_is_dynamic() {
    let rx = extract_one("import re\nre.compile('a', re.I + re.M)\n");
    assert_eq!(rx.flags, "DYNAMIC-FLAGS");
}

#[test]
fn call_in_flags_is_dynamic() {
    let rx = extract_one("import re\nre.search('a', s, get_flags())\n");
    assert_eq!(rx.flags, "DYNAMIC-FLAGS");
}

#[test]
fn split_and_sub_use_their_fixed_positional_slots() {
    let split = extract_one("import re\nre.split('a', s, 0, re.I)\n");
    assert_eq!(split, record("split", "a", "I"));

    let sub = extract_one("import re\nre.sub('a', 'b', s, 1, re.M)\n");
    assert_eq!(sub, record("sub", "a", "M"));
}

#[test]
fn pattern_and_flags_degrade_independently() {
    let rx = extract_one("import re\nre.compile(build(), re.I)\n");
    assert_eq!(rx, record("compile", "DYNAMIC-PATTERN", "I"));
}

// ---- Wire shape & determinism ----

#[test]
fn wire_record_shape_is_exact() {
    let found = extract("import re as RE\nRE.compile('ab+c', RE.IGNORECASE | RE.MULTILINE)\n");
    let line = serde_json::to_string(&found).unwrap();
    assert_eq!(
        line,
        "{\"filename\":\"unit.py\",\"regexps\":[{\"funcName\":\"compile\",\
         \"pattern\":\"ab+c\",\"flags\":\"IGNORECASE|MULTILINE\"}]}"
    );
}

#[test]
fn rerunning_extraction_is_byte_identical() {
    let source = "import re\nre.compile('a', re.I)\nre.escape(x)\nre.sub(p, 'r', s)\n";
    let first = serde_json::to_string(&extract(source)).unwrap();
    let second = serde_json::to_string(&extract(source)).unwrap();
    assert_eq!(first, second);
}

// ---- Unit-level failures ----

#[test]
fn syntax_errors_fail_the_unit() {
    let unit = SourceUnit::new("broken.py", "def broken(:\n", Language::Python);
    let result = extract_unit(&unit);
    assert!(matches!(result, Err(ParseError::SyntaxError { .. })));
}

#[test]
fn a_failed_unit_is_distinguishable_from_an_empty_report() {
    let empty = SourceUnit::new("empty.py", "", Language::Python);
    assert!(extract_unit(&empty).unwrap().regexps.is_empty());

    let broken = SourceUnit::new("broken.py", "import (\n", Language::Python);
    assert!(extract_unit(&broken).is_err());
}
