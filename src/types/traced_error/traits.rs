use super::TracedError;
use crate::types::render::{render_to, FormatSpec};
use core::fmt::{Debug, Display};

/// `{}` renders with the `v` verb: `{:+}` forces the full trace, `{:#}` the
/// brief chain, width and alignment pad the finished text.
impl Display for TracedError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let spec = FormatSpec::from_formatter(f, 'v');
        render_to(f, self, &spec)
    }
}

/// `{:?}` renders with the quoting verb `q`.
impl Debug for TracedError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let spec = FormatSpec::from_formatter(f, 'q');
        render_to(f, self, &spec)
    }
}

impl core::error::Error for TracedError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(&**cause as &(dyn core::error::Error + 'static)),
            None => None,
        }
    }
}
