// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed access to raw configuration values.
//!
//! Parsed values are stored as strings. [`ConfigValue`] wraps one stored
//! string and provides strict, `Result`-returning conversions to common
//! Rust types at the point of use.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A raw configuration value with typed conversion methods.
///
/// Every conversion must consume the whole stored string; trailing
/// characters make it fail. The value is stored exactly as it appeared in
/// the source after trimming, so `"42"` converts to an integer but
/// `"42 # ..."` never occurs (comments are stripped during parsing).
///
/// # Examples
///
/// ```
/// use inicfg::domain::config_value::ConfigValue;
///
/// let value = ConfigValue::from("42");
/// assert_eq!(value.as_str(), "42");
/// assert_eq!(value.as_i64("answer").unwrap(), 42);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigValue(String);

impl ConfigValue {
    /// Creates a new `ConfigValue` from a `String`.
    pub fn new(value: String) -> Self {
        ConfigValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value, returning the inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Converts the value to a boolean.
    ///
    /// Recognizes, case-insensitively, `true`/`yes`/`1`/`on` and
    /// `false`/`no`/`0`/`off`. Note that the fallback-based
    /// [`parse_or`](crate::domain::IniDocument::parse_or) lookups go through
    /// [`str::parse`] instead and accept exactly `true` and `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::domain::config_value::ConfigValue;
    ///
    /// assert!(ConfigValue::from("yes").as_bool("flag").unwrap());
    /// assert!(!ConfigValue::from("off").as_bool("flag").unwrap());
    /// assert!(ConfigValue::from("maybe").as_bool("flag").is_err());
    /// ```
    pub fn as_bool(&self, key: &str) -> Result<bool> {
        match self.0.to_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Ok(true),
            "false" | "no" | "0" | "off" => Ok(false),
            _ => self
                .0
                .parse::<bool>()
                .map_err(|e| ConfigError::from_parse_bool_error(key, e)),
        }
    }

    /// Converts the value to an `i64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::domain::config_value::ConfigValue;
    ///
    /// assert_eq!(ConfigValue::from("-7").as_i64("offset").unwrap(), -7);
    /// ```
    pub fn as_i64(&self, key: &str) -> Result<i64> {
        self.0
            .parse::<i64>()
            .map_err(|e| ConfigError::from_parse_int_error(key, e))
    }

    /// Converts the value to a `u64`.
    pub fn as_u64(&self, key: &str) -> Result<u64> {
        self.0
            .parse::<u64>()
            .map_err(|e| ConfigError::from_parse_int_error(key, e))
    }

    /// Converts the value to an `f64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::domain::config_value::ConfigValue;
    ///
    /// assert_eq!(ConfigValue::from("2.5").as_f64("ratio").unwrap(), 2.5);
    /// ```
    pub fn as_f64(&self, key: &str) -> Result<f64> {
        self.0
            .parse::<f64>()
            .map_err(|e| ConfigError::from_parse_float_error(key, e))
    }

    /// Parses the value into any type that implements [`FromStr`].
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::domain::config_value::ConfigValue;
    /// use std::net::IpAddr;
    ///
    /// let value = ConfigValue::from("127.0.0.1");
    /// let ip: IpAddr = value.parse("bind").unwrap();
    /// assert!(ip.is_loopback());
    /// ```
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.0
            .parse::<T>()
            .map_err(|e| ConfigError::TypeConversion {
                key: key.to_string(),
                target_type: std::any::type_name::<T>().to_string(),
                source: Box::new(e),
            })
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue(s.to_string())
    }
}

impl From<ConfigValue> for String {
    fn from(value: ConfigValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ConfigValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
