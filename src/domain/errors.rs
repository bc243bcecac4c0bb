// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for parsing and lookups.
//!
//! All errors use `thiserror`. Parsing fails with [`ConfigError::Syntax`]
//! and aborts the whole parse; lookups fail with
//! [`ConfigError::UnknownSection`] or [`ConfigError::UnknownEntry`]; strict
//! typed conversions fail with [`ConfigError::TypeConversion`].

use std::num::{ParseFloatError, ParseIntError};
use std::str::ParseBoolError;
use thiserror::Error;

/// The error type for all operations in this crate.
///
/// Marked `#[non_exhaustive]` to allow future additions without breaking
/// backwards compatibility.
///
/// # Examples
///
/// ```
/// use inicfg::domain::errors::ConfigError;
///
/// let err = ConfigError::UnknownSection {
///     section: "server".to_string(),
/// };
/// assert_eq!(err.to_string(), "Unknown section 'server'");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A line could not be parsed as a section header or a `key = value`
    /// entry. Raised during parsing; no partial document is produced.
    #[error("Syntax error at line {line}: {message}")]
    Syntax {
        /// 1-based line number of the offending line
        line: usize,
        /// What was wrong with the line
        message: String,
    },

    /// A lookup or section-view creation referenced a section name that was
    /// never declared in the source.
    #[error("Unknown section '{section}'")]
    UnknownSection {
        /// The section name that was not found
        section: String,
    },

    /// A lookup referenced a key absent from the (otherwise valid) target
    /// section, or from the default section when no section was given.
    #[error("Unknown entry '{key}' in {}", entry_scope(.section))]
    UnknownEntry {
        /// The key that was not found
        key: String,
        /// The section that was searched; `None` means the default section
        section: Option<String>,
    },

    /// A strict typed conversion on a value failed.
    #[error("Failed to convert value for key '{key}' to {target_type}: {source}")]
    TypeConversion {
        /// The key whose value was being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The underlying text source failed while being read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn entry_scope(section: &Option<String>) -> String {
    match section {
        Some(name) => format!("section '{name}'"),
        None => String::from("the default section"),
    }
}

impl ConfigError {
    /// Creates a [`ConfigError::TypeConversion`] from a [`ParseIntError`].
    pub fn from_parse_int_error(key: &str, err: ParseIntError) -> Self {
        ConfigError::TypeConversion {
            key: key.to_string(),
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a [`ConfigError::TypeConversion`] from a [`ParseFloatError`].
    pub fn from_parse_float_error(key: &str, err: ParseFloatError) -> Self {
        ConfigError::TypeConversion {
            key: key.to_string(),
            target_type: "float".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a [`ConfigError::TypeConversion`] from a [`ParseBoolError`].
    pub fn from_parse_bool_error(key: &str, err: ParseBoolError) -> Self {
        ConfigError::TypeConversion {
            key: key.to_string(),
            target_type: "boolean".to_string(),
            source: Box::new(err),
        }
    }

    /// Returns `true` for the two lookup-failure kinds that the lenient
    /// (`*_or`) lookups substitute with a fallback value.
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::domain::errors::ConfigError;
    ///
    /// let err = ConfigError::UnknownEntry {
    ///     key: "host".to_string(),
    ///     section: None,
    /// };
    /// assert!(err.is_not_found());
    /// ```
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConfigError::UnknownSection { .. } | ConfigError::UnknownEntry { .. }
        )
    }
}

/// A specialized Result type for this crate's operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
