// SPDX-License-Identifier: MIT OR Apache-2.0

//! A borrowed view scoping queries to one section.

use std::str::FromStr;

use crate::domain::errors::Result;
use crate::domain::{ConfigValue, IniDocument};

/// A non-owning handle over one section of an [`IniDocument`].
///
/// A view is created through [`IniDocument::section`], which fails if the
/// section was never declared, so a view always refers to a section that
/// existed when it was created. It borrows from its document; the borrow
/// checker keeps the document alive for as long as any view is in use.
///
/// Views are cheap to copy and intended to be short-lived.
///
/// # Examples
///
/// ```
/// use inicfg::prelude::*;
///
/// # fn main() -> inicfg::domain::Result<()> {
/// let doc: IniDocument = "[server]\nhost = localhost\nport = 8080\n".parse()?;
/// let server = doc.section("server")?;
///
/// assert_eq!(server.name(), "server");
/// assert_eq!(server.get("host")?.as_str(), "localhost");
/// assert_eq!(server.parse_or("port", 0u16), 8080);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SectionView<'a> {
    /// The captured section name, borrowed from the document
    name: &'a str,
    /// The document this view reads from
    document: &'a IniDocument,
}

impl<'a> SectionView<'a> {
    pub(crate) fn new(name: &'a str, document: &'a IniDocument) -> Self {
        Self { name, document }
    }

    /// Returns the name of the section this view is scoped to.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Retrieves a value from this section.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownEntry`](crate::domain::ConfigError::UnknownEntry)
    /// if the key is absent from the section.
    pub fn get(&self, key: &str) -> Result<ConfigValue> {
        self.document.get_from(self.name, key)
    }

    /// Retrieves a value from this section, or `default` if the key is
    /// absent.
    pub fn get_or(&self, key: &str, default: &str) -> ConfigValue {
        self.document.get_from_or(self.name, key, default)
    }

    /// Parses a value from this section into `T`, or returns `fallback` if
    /// the key is absent or the value does not parse. Never fails.
    pub fn parse_or<T: FromStr>(&self, key: &str, fallback: T) -> T {
        self.document.parse_from_or(self.name, key, fallback)
    }

    /// Returns `true` if this section contains `key`.
    pub fn has(&self, key: &str) -> bool {
        self.document.has_from(self.name, key)
    }

    /// Iterates over the keys of this section, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> {
        self.document
            .section_entries(self.name)
            .into_iter()
            .flat_map(|entries| entries.keys().map(String::as_str))
    }
}
