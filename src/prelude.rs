//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use trace_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`propagate!`], [`new_error!`], [`wrap!`], [`function_name!`]
//! - **Types**: [`TracedError`], [`Format`], [`TracedResult`]
//! - **Traits**: [`ResultExt`], [`OptionExt`]
//! - **Settings**: [`set_default_format`], [`set_source_root`]
//!
//! # Examples
//!
//! ```
//! use trace_rail::prelude::*;
//!
//! fn parse_port(raw: &str) -> TracedResult<u16> {
//!     raw.parse::<u16>().propagate("parsing port")
//! }
//!
//! let err = parse_port("http").unwrap_err();
//! assert_eq!(format!("{:#}", err), "parsing port: invalid digit found in string");
//! ```

// Macros
pub use crate::{function_name, new_error, new_error_with_code, propagate, propagate_with_code, wrap};

// Core types
pub use crate::types::{Format, TracedError, TracedResult};

// Traits
pub use crate::traits::{OptionExt, ResultExt};

// Settings
pub use crate::types::format::set_default_format;
pub use crate::types::location::set_source_root;
