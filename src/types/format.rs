//! Process-wide rendering mode.
//!
//! Every rendering that carries neither the `+` nor the `#` flag falls back to
//! the mode stored here. The setting is meant to be written once during
//! start-up (or test setup); concurrent writes while errors are being rendered
//! are not coordinated beyond last-write-wins.

use core::fmt::{self, Display};
use core::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

static DEFAULT_FORMAT: AtomicU8 = AtomicU8::new(Format::Full as u8);

/// Rendering mode for a [`TracedError`](crate::TracedError) chain.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Format {
    /// Every wrap point on its own line with its location and a `Caused by:` link.
    #[default]
    Full = 0,
    /// The whole chain on one line, joined with `": "`.
    Brief = 1,
}

impl Format {
    #[inline]
    fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::Brief,
            _ => Self::Full,
        }
    }

    /// Reads a mode from an environment variable.
    ///
    /// Returns `None` when the variable is unset or holds something other
    /// than `full` / `brief`.
    ///
    /// # Examples
    ///
    /// ```
    /// use trace_rail::Format;
    ///
    /// assert_eq!(Format::from_env("TRACE_RAIL_SURELY_UNSET_VARIABLE"), None);
    /// ```
    pub fn from_env(var: &str) -> Option<Self> {
        std::env::var(var).ok()?.parse().ok()
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Brief => "brief",
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names neither `full` nor `brief`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFormatError {
    input: String,
}

impl Display for ParseFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown trace format '{}', expected 'full' or 'brief'", self.input)
    }
}

impl core::error::Error for ParseFormatError {}

impl FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("full") {
            Ok(Self::Full)
        } else if trimmed.eq_ignore_ascii_case("brief") {
            Ok(Self::Brief)
        } else {
            Err(ParseFormatError { input: s.to_owned() })
        }
    }
}

/// Sets the mode used by renderings that carry no override flag.
///
/// # Examples
///
/// ```
/// use trace_rail::{default_format, set_default_format, Format};
///
/// set_default_format(Format::Brief);
/// assert_eq!(default_format(), Format::Brief);
/// set_default_format(Format::Full);
/// ```
#[inline]
pub fn set_default_format(format: Format) {
    DEFAULT_FORMAT.store(format as u8, Ordering::Relaxed);
}

/// Returns the current process-wide mode.
#[inline]
pub fn default_format() -> Format {
    Format::from_u8(DEFAULT_FORMAT.load(Ordering::Relaxed))
}

/// Restores the process-wide mode to [`Format::Full`].
#[inline]
pub fn reset_default_format() {
    set_default_format(Format::default());
}
