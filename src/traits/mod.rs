//! Traits and free functions for building traced errors.
//!
//! - [`ResultExt`]: wraps the error of a `Result` at the call site
//! - [`OptionExt`]: turns `None` into a root error at the call site
//! - [`wrap`]: wraps an optional error, starting a new chain when absent
//!
//! # Examples
//!
//! ```
//! use trace_rail::traits::ResultExt;
//!
//! let result: Result<(), std::fmt::Error> = Err(std::fmt::Error);
//! let err = result.propagate("formatting report").unwrap_err();
//! assert_eq!(err.message(), "formatting report");
//! ```

pub mod result_ext;

pub use result_ext::{wrap, OptionExt, ResultExt};
