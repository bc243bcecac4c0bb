// SPDX-License-Identifier: MIT OR Apache-2.0

//! A minimal INI configuration parsing and access crate.
//!
//! This crate parses INI-style configuration text — bracketed sections of
//! `key = value` entries, with an implicit default section for entries that
//! appear before the first header — and exposes typed, fallback-aware
//! lookups over the parsed result.
//!
//! # Architecture
//!
//! - **Domain Layer**: core types and query logic ([`IniDocument`],
//!   [`SectionView`], [`ConfigValue`], errors)
//! - **Parser Layer**: the line-oriented document parser and its
//!   whitespace/comment normalizer
//!
//! A document is parsed exactly once, in a single pass over the input, and
//! is immutable afterwards. Queries never mutate it, so a parsed document
//! can be shared freely between readers.
//!
//! [`IniDocument`]: domain::IniDocument
//! [`SectionView`]: domain::SectionView
//! [`ConfigValue`]: domain::ConfigValue
//!
//! # Format
//!
//! - Section headers are `[name]`; entries before any header belong to the
//!   default section.
//! - Entries split at the first `=`; later `=` characters stay in the value.
//! - `#` and `;` introduce comments anywhere on a line. There is no quoting
//!   or escaping mechanism.
//! - Keys, values, and section names are trimmed of spaces, tabs, newlines,
//!   carriage returns, form feeds, and vertical tabs.
//!
//! # Quick Start
//!
//! ```rust
//! use inicfg::prelude::*;
//!
//! # fn main() -> inicfg::domain::Result<()> {
//! let doc: IniDocument = "\
//! retries = 3
//! [server]
//! host = localhost  ; development default
//! port = 8080
//! "
//! .parse()?;
//!
//! assert_eq!(doc.get("retries")?.as_str(), "3");
//!
//! let server = doc.section("server")?;
//! assert_eq!(server.get("host")?.as_str(), "localhost");
//! assert_eq!(server.parse_or("port", 0u16), 8080);
//! assert_eq!(server.get_or("user", "anonymous").as_str(), "anonymous");
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod domain;
pub mod parser;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types for convenient access.
pub mod prelude {
    pub use crate::domain::{ConfigError, ConfigValue, IniDocument, Result, SectionView};
}
