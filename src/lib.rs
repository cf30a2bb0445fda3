//! Errors that remember where they were wrapped.
//!
//! A [`TracedError`] pairs a message with the call site that produced it and
//! the error it wraps. Each wrap adds one node, so the chain of wraps reads
//! like a stack trace of the failure's path through the program. The chain
//! renders in two shapes:
//!
//! - **full**: every node on its own line with a ` --- at file:line (function) ---`
//!   marker, linked by `Caused by:`
//! - **brief**: the messages joined with `": "`
//!
//! `{:+}` forces full, `{:#}` forces brief, and a plain `{}` follows the
//! process-wide [`default_format`]. `{:?}` quotes the rendering. Widths pad the
//! finished text, right-justified unless `<` or `-` is given.
//!
//! # Examples
//!
//! ## Wrapping
//!
//! ```
//! use trace_rail::{new_error, propagate, TracedError};
//!
//! fn read_config() -> Result<String, TracedError> {
//!     Err(new_error!("file is empty"))
//! }
//!
//! fn start() -> Result<(), TracedError> {
//!     let _config = read_config().map_err(|e| propagate!(e, "starting service"))?;
//!     Ok(())
//! }
//!
//! let err = start().unwrap_err();
//! assert_eq!(format!("{:#}", err), "starting service: file is empty");
//!
//! let full = format!("{:+}", err);
//! assert!(full.starts_with("starting service\n --- at "));
//! assert!(full.contains("(start) ---\nCaused by: file is empty\n --- at "));
//! ```
//!
//! ## Walking the chain
//!
//! ```
//! use trace_rail::{get_code, root_cause, TracedError};
//!
//! let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
//! let err = TracedError::wrap_with_code(io, 403, "reading secrets");
//!
//! assert_eq!(get_code(&err), Some(403));
//! assert_eq!(root_cause(&err).to_string(), "denied");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Helpers for walking cause chains
pub mod convert;
/// Macros that capture the enclosing function name
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for `Result` and `Option`
pub mod traits;
/// TracedError, Location and rendering
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub mod tracing_ext;

pub use convert::{chain_contains, find_cause, get_code, is_caused_by, root_cause};
pub use traits::{wrap, OptionExt, ResultExt};
pub use types::location::{clear_source_root, set_source_root, source_root};
pub use types::{
    default_format, render, rendered, reset_default_format, set_default_format, Cause, ErrorCode,
    ErrorVec, Format, FormatSpec, Location, Rendered, TracedError, TracedResult,
};
