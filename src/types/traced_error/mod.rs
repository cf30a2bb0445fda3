//! Chain node: an error message plus the call site that produced it.
//!
//! This module provides [`TracedError`], a wrapper that enriches any error with:
//! - A human message describing what was being attempted
//! - The [`Location`] of the wrap, captured through `#[track_caller]`
//! - An optional [`ErrorCode`] classifying the failure
//!
//! Wrapping never mutates an existing error; it builds a new node whose cause
//! is the old one. The chain of wraps stands in for a stack trace.

use std::sync::Arc;

use crate::types::location::Location;
use crate::types::{ErrorCode, ErrorVec};

#[cfg(feature = "serde")]
mod snapshot;
mod traits;

#[cfg(feature = "serde")]
pub use snapshot::{CauseSnapshot, ErrorSnapshot};

/// Shared handle to the error a [`TracedError`] wraps.
///
/// Several nodes may point at the same cause, e.g. a sentinel reused across
/// call sites.
pub type Cause = Arc<dyn core::error::Error + Send + Sync + 'static>;

/// Error annotated with a message and the location it was raised or wrapped at.
#[must_use]
#[derive(Clone)]
pub struct TracedError {
    pub(crate) message: String,
    pub(crate) cause: Option<Cause>,
    pub(crate) location: Location,
    pub(crate) code: Option<ErrorCode>,
}

impl TracedError {
    /// Creates a root error without a cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use trace_rail::TracedError;
    ///
    /// let err = TracedError::new("config missing");
    /// assert_eq!(format!("{:#}", err), "config missing");
    /// assert!(err.cause().is_none());
    /// ```
    #[track_caller]
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_parts(Location::capture(None), message, None, None)
    }

    /// Creates a root error carrying a code.
    #[track_caller]
    #[inline]
    pub fn new_with_code(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::from_parts(Location::capture(None), message, None, Some(code))
    }

    /// Wraps `cause` with a message describing the failed operation.
    ///
    /// Records the caller's file and line; the function name renders as `???`.
    /// [`propagate!`](crate::propagate) and [`wrap!`](macro@crate::wrap) also
    /// record it.
    ///
    /// # Examples
    ///
    /// ```
    /// use trace_rail::TracedError;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    /// let err = TracedError::wrap(io, "loading settings");
    /// assert_eq!(format!("{:#}", err), "loading settings: no such file");
    /// ```
    #[track_caller]
    #[inline]
    pub fn wrap<E>(cause: E, message: impl Into<String>) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        Self::from_parts(Location::capture(None), message, Some(Arc::new(cause)), None)
    }

    /// Wraps `cause` and attaches a code to the new node.
    #[track_caller]
    #[inline]
    pub fn wrap_with_code<E>(cause: E, code: ErrorCode, message: impl Into<String>) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        Self::from_parts(Location::capture(None), message, Some(Arc::new(cause)), Some(code))
    }

    /// Wraps an already shared cause without re-allocating it.
    #[track_caller]
    #[inline]
    pub fn wrap_shared(cause: Cause, message: impl Into<String>) -> Self {
        Self::from_parts(Location::capture(None), message, Some(cause), None)
    }

    /// Wraps a bare error value; the message is left empty so renderings show
    /// the cause text directly after the location.
    #[track_caller]
    #[inline]
    pub fn from_error<E>(cause: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        Self::from_parts(Location::capture(None), String::new(), Some(Arc::new(cause)), None)
    }

    /// Assembles a node from a location that was captured elsewhere.
    ///
    /// Used by the macros, which capture the location together with the
    /// enclosing function name.
    #[inline]
    pub fn from_parts(
        location: Location,
        message: impl Into<String>,
        cause: Option<Cause>,
        code: Option<ErrorCode>,
    ) -> Self {
        Self { message: message.into(), cause, location, code }
    }

    /// Message given at construction, without location or cause.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Same as [`message`](Self::message); the building block renderers start from.
    #[inline]
    pub fn plain_text(&self) -> &str {
        &self.message
    }

    /// Where this node was built.
    #[inline]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Code attached to this node. See [`get_code`](crate::get_code) for
    /// a lookup that walks the chain.
    #[inline]
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// The wrapped error, one level down.
    #[inline]
    pub fn cause(&self) -> Option<&(dyn core::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Shared handle to the wrapped error.
    #[inline]
    pub fn shared_cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// The next traced node in the chain, if the cause is one.
    #[inline]
    pub fn traced_cause(&self) -> Option<&TracedError> {
        self.cause()?.downcast_ref::<TracedError>()
    }

    /// Locations of every traced node, outermost first.
    ///
    /// # Examples
    ///
    /// ```
    /// use trace_rail::TracedError;
    ///
    /// let inner = TracedError::new("inner");
    /// let outer = TracedError::wrap(inner, "outer");
    /// assert_eq!(outer.frames().len(), 2);
    /// ```
    pub fn frames(&self) -> ErrorVec<&Location> {
        let mut frames = ErrorVec::new();
        let mut current = Some(self);
        while let Some(node) = current {
            frames.push(&node.location);
            current = node.traced_cause();
        }
        frames
    }

    /// Number of traced nodes in the chain, this one included.
    #[inline]
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self;
        while let Some(next) = current.traced_cause() {
            depth += 1;
            current = next;
        }
        depth
    }
}
