// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing the parsed document and its access types.
//!
//! This module holds the types a caller interacts with after parsing: the
//! owning [`IniDocument`], the borrowed [`SectionView`], the [`ConfigValue`]
//! wrapper with typed conversions, and the error types.

pub mod config_value;
pub mod document;
pub mod errors;
pub mod section;

// Re-export commonly used types
pub use config_value::ConfigValue;
pub use document::IniDocument;
pub use errors::{ConfigError, Result};
pub use section::SectionView;
