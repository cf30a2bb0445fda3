//! Tracing integration for trace-rail.
//!
//! Emits traced errors as structured `tracing` events and builds errors from
//! the current span.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! trace-rail = { version = "0.1", features = ["tracing"] }
//! ```

use std::sync::Arc;

use tracing::{Level, Span};

use crate::types::location::Location;
use crate::types::render::body;
use crate::types::{Format, TracedError};

/// Extension trait that records a [`TracedError`] as a `tracing` event.
pub trait TracedErrorExt {
    /// Emits one event at `level` carrying the message, location, code and the
    /// brief rendering of the whole chain.
    fn record(&self, level: Level);
}

macro_rules! emit {
    ($level:expr, $err:expr) => {{
        let err: &TracedError = $err;
        let location = err.location();
        let chain = body(err, Format::Brief);
        tracing::event!(
            $level,
            error.message = err.message(),
            error.file = location.file(),
            error.line = location.line(),
            error.function = location.function().unwrap_or("???"),
            error.code = err.code(),
            error.chain = %chain,
            "traced error"
        );
    }};
}

impl TracedErrorExt for TracedError {
    fn record(&self, level: Level) {
        match level {
            Level::ERROR => emit!(Level::ERROR, self),
            Level::WARN => emit!(Level::WARN, self),
            Level::INFO => emit!(Level::INFO, self),
            Level::DEBUG => emit!(Level::DEBUG, self),
            _ => emit!(Level::TRACE, self),
        }
    }
}

/// Extension trait for `Result` types that logs failures on the way through.
pub trait ResultTraceExt<T> {
    /// Records the error at `ERROR` level and returns the result unchanged.
    fn log_err(self) -> Self;

    /// Records the error at `level` and returns the result unchanged.
    fn log_err_at(self, level: Level) -> Self;
}

impl<T> ResultTraceExt<T> for Result<T, TracedError> {
    #[inline]
    fn log_err(self) -> Self {
        self.log_err_at(Level::ERROR)
    }

    fn log_err_at(self, level: Level) -> Self {
        if let Err(err) = &self {
            err.record(level);
        }
        self
    }
}

fn span_message(span: &Span) -> String {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    format!("in span '{}'", name)
}

/// Wraps `error` with a message naming the current span.
///
/// # Example
///
/// ```rust
/// use trace_rail::tracing_ext::instrument_error;
///
/// let err = instrument_error(std::fmt::Error);
/// assert!(err.message().starts_with("in span"));
/// ```
#[track_caller]
pub fn instrument_error<E>(error: E) -> TracedError
where
    E: core::error::Error + Send + Sync + 'static,
{
    let message = span_message(&Span::current());
    TracedError::from_parts(Location::capture(None), message, Some(Arc::new(error)), None)
}
