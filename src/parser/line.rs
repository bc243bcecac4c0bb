// SPDX-License-Identifier: MIT OR Apache-2.0

//! Single-line normalization: whitespace trimming and comment stripping.
//!
//! Both operations are idempotent and allocation-free; they return
//! subslices of their input. Stripping a comment can expose trailing
//! whitespace, so callers trim fragments again before storing them.

/// The INI whitespace set. Deliberately not `char::is_whitespace`; the
/// format trims exactly these ASCII characters.
const WHITESPACE: [char; 6] = [' ', '\t', '\n', '\r', '\x0C', '\x0B'];

/// Removes leading and trailing characters from the INI whitespace set.
pub(crate) fn trim(s: &str) -> &str {
    s.trim_matches(WHITESPACE)
}

/// Truncates at the first `#` or `;`, whichever occurs first. Comment
/// markers are not escapable; there is no quoting mechanism.
pub(crate) fn strip_comment(s: &str) -> &str {
    match s.find(['#', ';']) {
        Some(mark) => &s[..mark],
        None => s,
    }
}
