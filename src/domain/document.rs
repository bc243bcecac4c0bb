// SPDX-License-Identifier: MIT OR Apache-2.0

//! The parsed configuration document and its query interface.
//!
//! An [`IniDocument`] is built exactly once from a text source and has no
//! mutation API afterwards. Lookups come in three flavors: exact (`get*`,
//! which fail on missing sections or keys), lenient (`*_or`, which
//! substitute a caller-supplied fallback), and typed (`parse_or` /
//! `parse_from_or`, which additionally treat conversion failure as a miss).

use std::collections::HashMap;
use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use directories::ProjectDirs;
use serde::Serialize;

use crate::domain::errors::{ConfigError, Result};
use crate::domain::{ConfigValue, SectionView};
use crate::parser;

/// Maximum allowed size for an INI file read via [`IniDocument::from_file`]
/// (prevents accidentally slurping huge files into memory)
const MAX_INI_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// An immutable, parsed INI document.
///
/// The document owns one map for the default section (entries that appear
/// before any `[section]` header) plus one map per named section. Within a
/// map, a re-assigned key keeps its last value; a re-declared section header
/// reopens the existing section.
///
/// # Examples
///
/// ```
/// use inicfg::prelude::*;
///
/// # fn main() -> inicfg::domain::Result<()> {
/// let doc: IniDocument = "greeting = hello\n[colors]\nsky = blue\n".parse()?;
/// assert_eq!(doc.get("greeting")?.as_str(), "hello");
/// assert_eq!(doc.get_from("colors", "sky")?.as_str(), "blue");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IniDocument {
    /// Entries preceding the first section header
    defaults: HashMap<String, ConfigValue>,
    /// Named sections, each a key/value map
    sections: HashMap<String, HashMap<String, ConfigValue>>,
}

impl IniDocument {
    pub(crate) fn from_parts(
        defaults: HashMap<String, ConfigValue>,
        sections: HashMap<String, HashMap<String, ConfigValue>>,
    ) -> Self {
        Self { defaults, sections }
    }

    /// Parses a document from a buffered reader.
    ///
    /// Parsing is all-or-nothing: a malformed line fails with
    /// [`ConfigError::Syntax`] and no document is returned. A read failure
    /// from the underlying source fails with [`ConfigError::Io`].
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::prelude::*;
    ///
    /// let doc = IniDocument::from_reader("a = 1\n".as_bytes()).unwrap();
    /// assert_eq!(doc.get("a").unwrap().as_str(), "1");
    /// ```
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        parser::parse_document(reader)
    }

    /// Parses a document from a file on disk.
    ///
    /// Refuses files larger than 10 MB before reading anything.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use inicfg::prelude::*;
    ///
    /// let doc = IniDocument::from_file("/etc/myapp/config.ini").unwrap();
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let metadata = fs::metadata(path)?;
        if metadata.len() > MAX_INI_FILE_SIZE {
            return Err(ConfigError::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_INI_FILE_SIZE
                ),
            )));
        }

        tracing::debug!(path = %path.display(), "loading INI file");
        let file = fs::File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parses `config.ini` from the OS-appropriate configuration directory
    /// for the given application.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use inicfg::prelude::*;
    ///
    /// let doc = IniDocument::from_default_location("myapp", "com.example").unwrap();
    /// ```
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        let proj_dirs = ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| {
            ConfigError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine a configuration directory",
            ))
        })?;

        Self::from_file(proj_dirs.config_dir().join("config.ini"))
    }

    /// Retrieves a value from the default section.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownEntry`] if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::prelude::*;
    ///
    /// # fn main() -> inicfg::domain::Result<()> {
    /// let doc: IniDocument = "a = 1\n".parse()?;
    /// assert_eq!(doc.get("a")?.as_str(), "1");
    /// assert!(doc.get("b").is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn get(&self, key: &str) -> Result<ConfigValue> {
        self.defaults
            .get(key)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownEntry {
                key: key.to_string(),
                section: None,
            })
    }

    /// Retrieves a value from a named section.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownSection`] if the section was never declared,
    /// [`ConfigError::UnknownEntry`] if the section exists but the key is
    /// absent from it.
    pub fn get_from(&self, section: &str, key: &str) -> Result<ConfigValue> {
        let entries = self
            .sections
            .get(section)
            .ok_or_else(|| ConfigError::UnknownSection {
                section: section.to_string(),
            })?;

        entries
            .get(key)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownEntry {
                key: key.to_string(),
                section: Some(section.to_string()),
            })
    }

    /// Retrieves a value from the default section, or `default` if the key
    /// is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::prelude::*;
    ///
    /// # fn main() -> inicfg::domain::Result<()> {
    /// let doc: IniDocument = "".parse()?;
    /// assert_eq!(doc.get_or("missing", "fallback").as_str(), "fallback");
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_or(&self, key: &str, default: &str) -> ConfigValue {
        or_default(self.get(key), default)
    }

    /// Retrieves a value from a named section, or `default` if the section
    /// or the key is absent.
    pub fn get_from_or(&self, section: &str, key: &str, default: &str) -> ConfigValue {
        or_default(self.get_from(section, key), default)
    }

    /// Parses a value from the default section into `T`, or returns
    /// `fallback` if the key is absent or the value does not parse.
    ///
    /// The conversion goes through [`FromStr`] and must consume the whole
    /// stored value, so `"42x"` does not parse as an integer. Booleans
    /// accept exactly `true` and `false`. This method never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::prelude::*;
    ///
    /// # fn main() -> inicfg::domain::Result<()> {
    /// let doc: IniDocument = "port = 8080\nflag = notabool\n".parse()?;
    /// assert_eq!(doc.parse_or("port", 0u16), 8080);
    /// assert_eq!(doc.parse_or("flag", false), false);
    /// assert_eq!(doc.parse_or("missing", 7i64), 7);
    /// # Ok(())
    /// # }
    /// ```
    pub fn parse_or<T: FromStr>(&self, key: &str, fallback: T) -> T {
        match self.get(key) {
            Ok(value) => value.as_str().parse().unwrap_or(fallback),
            Err(_) => fallback,
        }
    }

    /// Parses a value from a named section into `T`, or returns `fallback`
    /// if the section or key is absent or the value does not parse.
    pub fn parse_from_or<T: FromStr>(&self, section: &str, key: &str, fallback: T) -> T {
        match self.get_from(section, key) {
            Ok(value) => value.as_str().parse().unwrap_or(fallback),
            Err(_) => fallback,
        }
    }

    /// Returns a [`SectionView`] scoped to one named section.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownSection`] if the section was never declared.
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::prelude::*;
    ///
    /// # fn main() -> inicfg::domain::Result<()> {
    /// let doc: IniDocument = "[server]\nhost = localhost\n".parse()?;
    /// let server = doc.section("server")?;
    /// assert_eq!(server.get("host")?.as_str(), "localhost");
    /// assert!(doc.section("client").is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn section(&self, name: &str) -> Result<SectionView<'_>> {
        let (stored_name, _) =
            self.sections
                .get_key_value(name)
                .ok_or_else(|| ConfigError::UnknownSection {
                    section: name.to_string(),
                })?;

        Ok(SectionView::new(stored_name, self))
    }

    /// Returns `true` if the default section contains `key`.
    pub fn has(&self, key: &str) -> bool {
        self.defaults.contains_key(key)
    }

    /// Returns `true` if section `section` exists and contains `key`.
    pub fn has_from(&self, section: &str, key: &str) -> bool {
        self.sections
            .get(section)
            .is_some_and(|entries| entries.contains_key(key))
    }

    /// Iterates over the keys of the default section, in no particular
    /// order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.defaults.keys().map(String::as_str)
    }

    /// Iterates over the declared section names, in no particular order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Returns `true` if the document has no entries and no sections.
    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty() && self.sections.is_empty()
    }

    pub(crate) fn section_entries(&self, name: &str) -> Option<&HashMap<String, ConfigValue>> {
        self.sections.get(name)
    }
}

impl FromStr for IniDocument {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes())
    }
}

/// Maps the two not-found error kinds to the fallback; anything else is
/// unexpected at this layer and is logged before falling back.
fn or_default(lookup: Result<ConfigValue>, default: &str) -> ConfigValue {
    match lookup {
        Ok(value) => value,
        Err(err) if err.is_not_found() => ConfigValue::from(default),
        Err(err) => {
            tracing::debug!("lenient lookup failed: {err}");
            ConfigValue::from(default)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_doc(text: &str) -> IniDocument {
        text.parse().expect("test input failed to parse")
    }

    #[test]
    fn test_get_default_section() {
        let doc = parse_doc("a = 1\n[s]\nb = 2\n");
        assert_eq!(doc.get("a").unwrap().as_str(), "1");
        let err = doc.get("b").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownEntry { section: None, .. }));
    }

    #[test]
    fn test_get_from_named_section() {
        let doc = parse_doc("a = 1\n[s]\nb = 2\n");
        assert_eq!(doc.get_from("s", "b").unwrap().as_str(), "2");

        let err = doc.get_from("missing", "b").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownSection { .. }));

        // The key exists in the default section but not in [s].
        let err = doc.get_from("s", "a").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownEntry { section: Some(_), .. }
        ));
    }

    #[test]
    fn test_get_or() {
        let doc = parse_doc("");
        assert_eq!(doc.get_or("missing", "fallback").as_str(), "fallback");
        assert_eq!(doc.get_from_or("nowhere", "k", "fb").as_str(), "fb");

        let doc = parse_doc("a = 1\n");
        assert_eq!(doc.get_or("a", "fallback").as_str(), "1");
    }

    #[test]
    fn test_parse_or_typed() {
        let doc = parse_doc("flag = true\nbad = notabool\nport = 8080\npartial = 42x\n");
        assert!(doc.parse_or("flag", false));
        assert!(!doc.parse_or("bad", false));
        assert_eq!(doc.parse_or("port", 0i64), 8080);
        // Whole-input conversion: trailing characters mean fallback.
        assert_eq!(doc.parse_or("partial", -1i64), -1);
        assert_eq!(doc.parse_or("missing", 3u32), 3);
    }

    #[test]
    fn test_parse_or_does_not_accept_lenient_booleans() {
        // The strict ConfigValue::as_bool convenience accepts "yes"; the
        // fallback-based typed lookup accepts only true/false.
        let doc = parse_doc("flag = yes\n");
        assert!(!doc.parse_or("flag", false));
        assert!(doc.get("flag").unwrap().as_bool("flag").unwrap());
    }

    #[test]
    fn test_parse_from_or() {
        let doc = parse_doc("[limits]\nmax = 10\n");
        assert_eq!(doc.parse_from_or("limits", "max", 0u64), 10);
        assert_eq!(doc.parse_from_or("limits", "min", 5u64), 5);
        assert_eq!(doc.parse_from_or("absent", "max", 1u64), 1);
    }

    #[test]
    fn test_section_view_creation() {
        let doc = parse_doc("[s]\na = 1\n");
        assert!(doc.section("s").is_ok());
        assert!(matches!(
            doc.section("t").unwrap_err(),
            ConfigError::UnknownSection { .. }
        ));
    }

    #[test]
    fn test_has_and_keys() {
        let doc = parse_doc("a = 1\n[s]\nb = 2\n");
        assert!(doc.has("a"));
        assert!(!doc.has("b"));
        assert!(doc.has_from("s", "b"));
        assert!(!doc.has_from("s", "a"));
        assert!(!doc.has_from("missing", "a"));

        let mut keys: Vec<&str> = doc.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, ["a"]);

        let names: Vec<&str> = doc.section_names().collect();
        assert_eq!(names, ["s"]);
    }

    #[test]
    fn test_is_empty() {
        assert!(parse_doc("").is_empty());
        assert!(parse_doc("# only comments\n\n").is_empty());
        assert!(!parse_doc("a = 1\n").is_empty());
        assert!(!parse_doc("[s]\n").is_empty());
    }

    #[test]
    fn test_reparse_is_deterministic() {
        let text = "a = 1\n[s]\nb = 2\nc = 3\n[t]\nd = 4\n";
        assert_eq!(parse_doc(text), parse_doc(text));
    }

    #[test]
    fn test_from_file_missing() {
        let result = IniDocument::from_file("/nonexistent/path/config.ini");
        assert!(matches!(result.unwrap_err(), ConfigError::Io(_)));
    }
}
