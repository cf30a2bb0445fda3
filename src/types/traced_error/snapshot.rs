use serde::Serialize;

use super::TracedError;
use crate::types::location::Location;
use crate::types::ErrorCode;

/// Serializable view of a traced chain, for structured logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorSnapshot {
    pub message: String,
    pub location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<CauseSnapshot>,
}

/// Next link of an [`ErrorSnapshot`]: another traced node or the display text
/// of an opaque error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CauseSnapshot {
    Traced(Box<ErrorSnapshot>),
    Plain(String),
}

impl TracedError {
    /// Captures the chain as plain data.
    ///
    /// # Examples
    ///
    /// ```
    /// use trace_rail::TracedError;
    ///
    /// let err = TracedError::wrap(std::fmt::Error, "writing report");
    /// let snapshot = err.snapshot();
    /// assert_eq!(snapshot.message, "writing report");
    /// ```
    pub fn snapshot(&self) -> ErrorSnapshot {
        let cause = self.cause().map(|cause| match cause.downcast_ref::<TracedError>() {
            Some(traced) => CauseSnapshot::Traced(Box::new(traced.snapshot())),
            None => CauseSnapshot::Plain(cause.to_string()),
        });
        ErrorSnapshot { message: self.message.clone(), location: self.location, code: self.code, cause }
    }
}
