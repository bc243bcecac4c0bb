// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These pin the parser's algebraic properties: normalization is
//! idempotent, well-formed entries round-trip through a parse, typed
//! lookups round-trip primitive values, and re-parsing is deterministic.

use inicfg::prelude::*;
use proptest::prelude::*;

// Section names, keys, and values drawn from an alphabet free of comment
// markers, brackets, separators, and edge whitespace, so that a generated
// triple survives parsing unchanged.
const NAME_PATTERN: &str = "[a-zA-Z][a-zA-Z0-9_]{0,11}";
const VALUE_PATTERN: &str = "[a-zA-Z0-9_][a-zA-Z0-9_ ]{0,10}[a-zA-Z0-9_]";

proptest! {
    // Entry round-trip: a value with no comment markers and no edge
    // whitespace is returned verbatim by get.
    #[test]
    fn test_entry_round_trip(
        section in NAME_PATTERN,
        key in NAME_PATTERN,
        value in VALUE_PATTERN,
    ) {
        let text = format!("[{section}]\n{key} = {value}\n");
        let doc: IniDocument = text.parse().unwrap();
        let got = doc.get_from(&section, &key).unwrap();
        prop_assert_eq!(got.as_str(), value.as_str());
    }
}

proptest! {
    // Default-section round-trip without any header.
    #[test]
    fn test_default_entry_round_trip(key in NAME_PATTERN, value in VALUE_PATTERN) {
        let text = format!("{key}={value}\n");
        let doc: IniDocument = text.parse().unwrap();
        let got = doc.get(&key).unwrap();
        prop_assert_eq!(got.as_str(), value.as_str());
    }
}

proptest! {
    // Whitespace around keys and values never reaches the stored entry.
    #[test]
    fn test_edge_whitespace_is_trimmed(
        key in NAME_PATTERN,
        value in VALUE_PATTERN,
        pad in "[ \t]{0,4}",
    ) {
        let text = format!("{pad}{key}{pad}={pad}{value}{pad}\n");
        let doc: IniDocument = text.parse().unwrap();
        let got = doc.get(&key).unwrap();
        prop_assert_eq!(got.as_str(), value.as_str());
    }
}

proptest! {
    // A trailing comment, with either marker, never reaches the value.
    #[test]
    fn test_trailing_comment_never_reaches_value(
        key in NAME_PATTERN,
        value in VALUE_PATTERN,
        marker in prop::sample::select(vec!['#', ';']),
        comment in "[a-zA-Z0-9 ]{0,10}",
    ) {
        let text = format!("{key} = {value} {marker}{comment}\n");
        let doc: IniDocument = text.parse().unwrap();
        let got = doc.get(&key).unwrap();
        prop_assert_eq!(got.as_str(), value.as_str());
    }
}

proptest! {
    // Re-parsing identical text yields a document with identical query
    // results.
    #[test]
    fn test_reparse_is_deterministic(
        section in NAME_PATTERN,
        key in NAME_PATTERN,
        value in VALUE_PATTERN,
    ) {
        let text = format!("{key} = {value}\n[{section}]\n{key} = {value}\n");
        let first: IniDocument = text.parse().unwrap();
        let second: IniDocument = text.parse().unwrap();
        prop_assert_eq!(first, second);
    }
}

proptest! {
    // Last write wins for a duplicated key within one section.
    #[test]
    fn test_last_write_wins(
        key in NAME_PATTERN,
        first in VALUE_PATTERN,
        second in VALUE_PATTERN,
    ) {
        let text = format!("[s]\n{key} = {first}\n{key} = {second}\n");
        let doc: IniDocument = text.parse().unwrap();
        let got = doc.get_from("s", &key).unwrap();
        prop_assert_eq!(got.as_str(), second.as_str());
    }
}

proptest! {
    // Typed round-trip: integers survive parse_or unchanged.
    #[test]
    fn test_i64_round_trip(n in prop::num::i64::ANY) {
        let text = format!("n = {n}\n");
        let doc: IniDocument = text.parse().unwrap();
        prop_assert_eq!(doc.parse_or("n", 0i64), n);
    }
}

proptest! {
    #[test]
    fn test_u64_round_trip(n in prop::num::u64::ANY) {
        let text = format!("n = {n}\n");
        let doc: IniDocument = text.parse().unwrap();
        prop_assert_eq!(doc.parse_or("n", 0u64), n);
    }
}

proptest! {
    #[test]
    fn test_bool_round_trip(b in prop::bool::ANY) {
        let text = format!("flag = {b}\n");
        let doc: IniDocument = text.parse().unwrap();
        prop_assert_eq!(doc.parse_or("flag", !b), b);
    }
}

proptest! {
    // Lenient lookups on an empty document always return the fallback.
    #[test]
    fn test_empty_document_always_falls_back(
        key in NAME_PATTERN,
        fallback in VALUE_PATTERN,
    ) {
        let doc: IniDocument = "".parse().unwrap();
        let got = doc.get_or(&key, &fallback);
        prop_assert_eq!(got.as_str(), fallback.as_str());
    }
}

proptest! {
    // Strings that are not pure integers never come back from a typed
    // integer lookup.
    #[test]
    fn test_non_numeric_values_fall_back(key in NAME_PATTERN, value in "[a-zA-Z_]{1,8}") {
        let text = format!("{key} = {value}\n");
        let doc: IniDocument = text.parse().unwrap();
        prop_assert_eq!(doc.parse_or(&key, -1i64), -1);
    }
}
