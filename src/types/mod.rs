//! Error types and utilities.
//!
//! This module provides the chain node [`TracedError`], the [`Location`] it
//! records, the rendering [`Format`] switch and the [`render`] machinery.
//!
//! # Examples
//!
//! ```
//! use trace_rail::TracedError;
//!
//! let err = TracedError::wrap(std::fmt::Error, "rendering invoice");
//!
//! println!("{:+}", err);
//! // Output:
//! // rendering invoice
//! //  --- at src/main.rs:5 (???) ---
//! // Caused by: an error occurred when formatting an argument
//! ```
use smallvec::SmallVec;

pub mod format;
pub mod location;
pub mod render;
pub mod traced_error;

pub use format::*;
pub use location::Location;
pub use render::{render, rendered, FormatSpec, Rendered};
pub use traced_error::*;

/// Integer classification attached to a [`TracedError`].
pub type ErrorCode = u32;

/// SmallVec-backed collection used when walking a chain.
///
/// Uses inline storage for up to 4 elements; most chains are a handful of
/// wraps deep.
pub type ErrorVec<E> = SmallVec<[E; 4]>;

/// Result alias that fails with a [`TracedError`].
pub type TracedResult<T> = Result<T, TracedError>;
