// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parser layer: builds an [`IniDocument`] from a line-oriented text source.
//!
//! Parsing is a single pass. Each line is trimmed and stripped of trailing
//! comments, then classified as empty (skipped), a `[section]` header, or a
//! `key = value` entry. Anything else is a syntax error, which aborts the
//! whole parse; there is no recovery and no partial document.

mod line;

use std::collections::HashMap;
use std::io::BufRead;

use crate::domain::errors::{ConfigError, Result};
use crate::domain::{ConfigValue, IniDocument};

/// Parses an INI document from a buffered reader.
///
/// Entries before the first section header land in the default section.
/// An entry splits at the first `=`; later `=` characters belong to the
/// value. A re-declared header reopens the existing section, and a
/// re-assigned key keeps its last value. A header with empty brackets
/// (`[]`) declares a section named the empty string, which is distinct
/// from the default section.
///
/// # Errors
///
/// [`ConfigError::Syntax`] for a header without its closing bracket or a
/// non-empty line without `=`; [`ConfigError::Io`] if the reader fails.
///
/// # Examples
///
/// ```
/// use inicfg::parser::parse_document;
///
/// let doc = parse_document("a = 1 # comment\n[s]\nb = 2\n".as_bytes()).unwrap();
/// assert_eq!(doc.get("a").unwrap().as_str(), "1");
/// assert_eq!(doc.get_from("s", "b").unwrap().as_str(), "2");
/// ```
pub fn parse_document<R: BufRead>(reader: R) -> Result<IniDocument> {
    let mut defaults: HashMap<String, ConfigValue> = HashMap::new();
    let mut sections: HashMap<String, HashMap<String, ConfigValue>> = HashMap::new();
    // None until the first header; entries land in the default section.
    let mut current: Option<String> = None;

    for (index, read) in reader.lines().enumerate() {
        let raw = read?;
        let text = line::strip_comment(line::trim(&raw));

        if text.is_empty() {
            continue;
        }

        if let Some(rest) = text.strip_prefix('[') {
            // The closing bracket must end the comment-stripped text; the
            // name between the brackets is trimmed on its own.
            let Some(name) = rest.strip_suffix(']') else {
                return Err(ConfigError::Syntax {
                    line: index + 1,
                    message: format!("the section header '{text}' is missing a closing bracket"),
                });
            };
            let name = line::trim(name).to_string();
            sections.entry(name.clone()).or_default();
            current = Some(name);
            continue;
        }

        let Some((key, value)) = text.split_once('=') else {
            return Err(ConfigError::Syntax {
                line: index + 1,
                message: format!("the line '{text}' has no '=' separator"),
            });
        };
        let key = line::trim(key).to_string();
        let value = ConfigValue::from(line::trim(value));

        match &current {
            Some(name) => {
                sections.entry(name.clone()).or_default().insert(key, value);
            }
            None => {
                defaults.insert(key, value);
            }
        }
    }

    tracing::debug!(
        sections = sections.len(),
        entries = defaults.len() + sections.values().map(HashMap::len).sum::<usize>(),
        "parsed INI document"
    );

    Ok(IniDocument::from_parts(defaults, sections))
}
