//! Extension traits for wrapping failures as they propagate.
//!
//! # Examples
//!
//! ```
//! use trace_rail::traits::ResultExt;
//! use trace_rail::TracedResult;
//!
//! fn load_config() -> TracedResult<String> {
//!     std::fs::read_to_string("/definitely/not/here.toml").propagate("loading configuration")
//! }
//!
//! let err = load_config().unwrap_err();
//! assert!(format!("{:#}", err).starts_with("loading configuration: "));
//! ```

use crate::types::location::Location;
use crate::types::{ErrorCode, TracedError};
use std::sync::Arc;

/// Wraps the error of a `Result` in a [`TracedError`].
///
/// Every method is `#[track_caller]`: the recorded location is the line that
/// called it. The function name is not known to a method call and renders as
/// `???`; use [`propagate!`](crate::propagate) where it matters.
pub trait ResultExt<T> {
    /// Wraps the error with a fixed message.
    fn propagate(self, message: impl Into<String>) -> Result<T, TracedError>;

    /// Wraps the error with a message built only on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use trace_rail::traits::ResultExt;
    ///
    /// let user_id = 42;
    /// let result: Result<(), std::fmt::Error> = Err(std::fmt::Error);
    /// let err = result.propagate_with(|| format!("rendering profile {user_id}")).unwrap_err();
    /// assert_eq!(err.message(), "rendering profile 42");
    /// ```
    fn propagate_with<F, M>(self, message: F) -> Result<T, TracedError>
    where
        F: FnOnce() -> M,
        M: Into<String>;

    /// Wraps the error and tags the new node with `code`.
    fn propagate_code(self, code: ErrorCode, message: impl Into<String>) -> Result<T, TracedError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: core::error::Error + Send + Sync + 'static,
{
    #[track_caller]
    #[inline]
    fn propagate(self, message: impl Into<String>) -> Result<T, TracedError> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(TracedError::wrap(error, message)),
        }
    }

    #[track_caller]
    #[inline]
    fn propagate_with<F, M>(self, message: F) -> Result<T, TracedError>
    where
        F: FnOnce() -> M,
        M: Into<String>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(TracedError::wrap(error, message())),
        }
    }

    #[track_caller]
    #[inline]
    fn propagate_code(self, code: ErrorCode, message: impl Into<String>) -> Result<T, TracedError> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(TracedError::wrap_with_code(error, code, message)),
        }
    }
}

/// Turns a missing value into a root [`TracedError`].
pub trait OptionExt<T> {
    /// Returns the value, or a new error built at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use trace_rail::traits::OptionExt;
    ///
    /// let port: Option<u16> = None;
    /// let err = port.or_new_error("port not configured").unwrap_err();
    /// assert_eq!(format!("{:#}", err), "port not configured");
    /// ```
    fn or_new_error(self, message: impl Into<String>) -> Result<T, TracedError>;
}

impl<T> OptionExt<T> for Option<T> {
    #[track_caller]
    #[inline]
    fn or_new_error(self, message: impl Into<String>) -> Result<T, TracedError> {
        match self {
            Some(value) => Ok(value),
            None => Err(TracedError::new(message)),
        }
    }
}

/// Wraps `existing`, or starts a new chain when there is nothing to wrap.
///
/// A function call only learns the caller's file and line, so the function
/// name renders as `???`. The [`wrap!`](macro@crate::wrap) macro takes the
/// same arguments plus a format string and records the name too.
///
/// # Examples
///
/// ```
/// use trace_rail::wrap;
///
/// let root = wrap(None::<std::fmt::Error>, "nothing underneath");
/// assert!(root.cause().is_none());
///
/// let wrapped = wrap(Some(std::fmt::Error), "formatting");
/// assert!(wrapped.cause().is_some());
/// ```
#[track_caller]
#[inline]
pub fn wrap<E>(existing: Option<E>, message: impl Into<String>) -> TracedError
where
    E: core::error::Error + Send + Sync + 'static,
{
    let cause = existing.map(|e| Arc::new(e) as crate::Cause);
    TracedError::from_parts(Location::capture(None), message, cause, None)
}
