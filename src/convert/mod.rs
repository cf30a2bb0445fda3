//! Helpers for walking a cause chain.
//!
//! These work on any `dyn Error`, traced or not, by following
//! [`Error::source`](core::error::Error::source). A [`TracedError`] reports its
//! cause through `source`, so chains mixing traced nodes and foreign errors
//! (`std::io::Error` wrapping a custom error, for instance) are walked end to
//! end.
//!
//! # Examples
//!
//! ```
//! use trace_rail::convert::*;
//! use trace_rail::TracedError;
//!
//! let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
//! let err = TracedError::wrap_with_code(io, 504, "calling upstream");
//! let err = TracedError::wrap(err, "handling request");
//!
//! assert_eq!(get_code(&err), Some(504));
//! assert_eq!(root_cause(&err).to_string(), "timed out");
//! assert!(chain_contains::<std::io::Error>(&err));
//! ```

use crate::types::{ErrorCode, TracedError};
use core::error::Error;
use core::iter::FusedIterator;

type DynError = dyn Error + 'static;

/// Iterator over an error and its causes, outermost first.
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a DynError>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a DynError;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

/// Iterates over `error` and every error below it.
#[inline]
pub fn chain(error: &DynError) -> Chain<'_> {
    Chain { next: Some(error) }
}

/// Returns the innermost error of the chain; `error` itself when it has no
/// source.
pub fn root_cause(error: &DynError) -> &DynError {
    let mut current = error;
    while let Some(source) = current.source() {
        current = source;
    }
    current
}

/// Returns the first code found walking down from `error`.
///
/// Only traced nodes carry codes; foreign errors are skipped over.
pub fn get_code(error: &DynError) -> Option<ErrorCode> {
    chain(error)
        .filter_map(|e| e.downcast_ref::<TracedError>())
        .find_map(TracedError::code)
}

/// Returns the first error in the chain of type `E`.
///
/// # Examples
///
/// ```
/// use trace_rail::convert::find_cause;
/// use trace_rail::TracedError;
///
/// let err = TracedError::wrap(std::fmt::Error, "writing");
/// assert!(find_cause::<std::fmt::Error>(&err).is_some());
/// assert!(find_cause::<std::io::Error>(&err).is_none());
/// ```
pub fn find_cause<E>(error: &DynError) -> Option<&E>
where
    E: Error + 'static,
{
    chain(error).find_map(|e| e.downcast_ref::<E>())
}

/// Whether any error in the chain is of type `E`.
#[inline]
pub fn chain_contains<E>(error: &DynError) -> bool
where
    E: Error + 'static,
{
    find_cause::<E>(error).is_some()
}

/// Whether `sentinel` appears in the chain, compared by address.
///
/// Meant for sentinel errors shared through [`Cause`](crate::Cause) handles.
pub fn is_caused_by(error: &DynError, sentinel: &DynError) -> bool {
    let target = sentinel as *const DynError as *const ();
    chain(error).any(|e| core::ptr::eq(e as *const DynError as *const (), target))
}
