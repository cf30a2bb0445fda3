//! Rendering of traced chains.
//!
//! [`render`] is the explicit entry point: it takes any error and a
//! [`FormatSpec`] and returns the finished text. The `Display` and `Debug`
//! impls of [`TracedError`] and the [`Rendered`] adapter route through it.
//!
//! Rendering runs in four steps:
//!
//! 1. Mode: `plus` selects [`Format::Full`], `hash` selects [`Format::Brief`],
//!    otherwise the process-wide [`default_format`] applies. `plus` wins when
//!    both are set.
//! 2. Body: the cause chain is walked until the first non-traced error or the
//!    first node without a cause.
//! 3. Verb: `s`/`v` keep the body, `q` quotes it as a whole, anything else is
//!    reported inline as `%!<verb>(...)`.
//! 4. Padding: the finished text is padded to the width as a single string.
//!
//! # Examples
//!
//! ```
//! use trace_rail::types::render::{render, FormatSpec};
//! use trace_rail::TracedError;
//!
//! let err = TracedError::wrap(std::fmt::Error, "writing report");
//! let text = render(&err, &FormatSpec::new('s').hash().width(40));
//! assert_eq!(text.trim_start(), "writing report: an error occurred when formatting an argument");
//! ```

use core::fmt::{self, Write};

use crate::types::format::{default_format, Format};
use crate::types::traced_error::TracedError;

pub mod spec;

pub use spec::{Align, FormatSpec, SpecParseError};

type DynError = dyn core::error::Error + 'static;

/// Renders `value` according to `spec`.
///
/// Never fails: unknown verbs produce a `%!<verb>(...)` marker in place of the
/// body.
pub fn render(value: &DynError, spec: &FormatSpec) -> String {
    let text = match spec.verb {
        's' | 'v' => body(value, resolve_format(spec)),
        'q' => quote(&body(value, resolve_format(spec))),
        verb => bad_verb(value, verb),
    };
    pad(text, spec)
}

/// Writes the rendering of `value` straight into a formatter.
pub(crate) fn render_to(f: &mut fmt::Formatter<'_>, value: &DynError, spec: &FormatSpec) -> fmt::Result {
    f.write_str(&render(value, spec))
}

/// Picks the mode for one rendering.
#[inline]
pub fn resolve_format(spec: &FormatSpec) -> Format {
    if spec.plus {
        Format::Full
    } else if spec.hash {
        Format::Brief
    } else {
        default_format()
    }
}

/// Unpadded, unquoted text of `value` in the given mode.
pub fn body(value: &DynError, format: Format) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_body(&mut out, value, format);
    out
}

fn write_body(out: &mut String, value: &DynError, format: Format) -> fmt::Result {
    let mut current = value;
    loop {
        let Some(node) = current.downcast_ref::<TracedError>() else {
            return write!(out, "{current}");
        };

        match format {
            Format::Full => {
                if !node.message.is_empty() {
                    out.push_str(&node.message);
                    out.push('\n');
                }
                write!(out, " --- at {} ---", node.location)?;
            },
            Format::Brief => out.push_str(&node.message),
        }

        let Some(cause) = node.cause.as_deref() else {
            return Ok(());
        };
        match format {
            Format::Full => out.push_str("\nCaused by: "),
            Format::Brief if !node.message.is_empty() => out.push_str(": "),
            Format::Brief => {},
        }
        current = cause as &DynError;
    }
}

/// Quotes `text` as a Rust string literal.
fn quote(text: &str) -> String {
    format!("{text:?}")
}

fn bad_verb(value: &DynError, verb: char) -> String {
    match value.downcast_ref::<TracedError>() {
        Some(_) => format!("%!{verb}(trace_rail::TracedError={})", body(value, Format::Brief)),
        None => format!("%!{verb}({value})"),
    }
}

fn pad(text: String, spec: &FormatSpec) -> String {
    let Some(width) = spec.width else {
        return text;
    };
    let len = text.chars().count();
    if len >= width {
        return text;
    }

    let padding = width - len;
    let (before, after) = match spec.align {
        Align::Right => (padding, 0),
        Align::Left => (0, padding),
        Align::Center => (padding / 2, padding - padding / 2),
    };

    let mut out = String::with_capacity(text.len() + padding * spec.fill.len_utf8());
    out.extend(core::iter::repeat(spec.fill).take(before));
    out.push_str(&text);
    out.extend(core::iter::repeat(spec.fill).take(after));
    out
}

/// Adapter that gives any error the same formatting behaviour as
/// [`TracedError`]: flags, quoting via `{:?}` and right-justified padding.
///
/// # Examples
///
/// ```
/// use trace_rail::rendered;
///
/// let plain = std::fmt::Error;
/// assert_eq!(format!("{:?}", rendered(&plain)), format!("{:?}", plain.to_string()));
/// ```
#[derive(Clone, Copy)]
pub struct Rendered<'a>(pub &'a DynError);

/// Wraps `value` in a [`Rendered`] adapter.
#[inline]
pub fn rendered(value: &DynError) -> Rendered<'_> {
    Rendered(value)
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_to(f, self.0, &FormatSpec::from_formatter(f, 'v'))
    }
}

impl fmt::Debug for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_to(f, self.0, &FormatSpec::from_formatter(f, 'q'))
    }
}
