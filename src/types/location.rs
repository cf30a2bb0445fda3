//! Call-site capture and path shortening.
//!
//! A [`Location`] is taken once, when a [`TracedError`](crate::TracedError) is
//! built, through `#[track_caller]`: every constructor on the wrapping path is
//! annotated, so the recorded frame is the user code that asked for the wrap
//! and never a function of this crate.
//!
//! File paths are shortened against a process-wide source root. Set it once
//! at start-up with [`set_source_root`]; paths outside the root are kept
//! as-is.

use core::fmt::{self, Display};
use std::sync::RwLock;

#[cfg(feature = "serde")]
use serde::Serialize;

static SOURCE_ROOT: RwLock<Option<String>> = RwLock::new(None);

const UNKNOWN: &str = "???";

/// Where a traced error was constructed.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    file: &'static str,
    line: u32,
    function: Option<&'static str>,
}

impl Location {
    /// Captures the location of the caller.
    ///
    /// `function` is filled in by the macros, which can name the enclosing
    /// function; plain method calls pass `None`.
    #[track_caller]
    #[inline]
    pub fn capture(function: Option<&'static str>) -> Self {
        let caller = core::panic::Location::caller();
        Self { file: shorten(caller.file()), line: caller.line(), function }
    }

    /// Placeholder used when no frame information is available.
    #[inline]
    pub const fn unknown() -> Self {
        Self { file: "", line: 0, function: None }
    }

    /// Builds a location from already known parts. The file is shortened
    /// against the configured source root.
    #[inline]
    pub fn new(file: &'static str, line: u32, function: Option<&'static str>) -> Self {
        Self { file: shorten(file), line, function }
    }

    /// Display path, empty when unknown.
    #[inline]
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// Line number, `0` when unknown.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Name of the enclosing function, when the capture knew it.
    #[inline]
    pub fn function(&self) -> Option<&'static str> {
        self.function
    }

    /// Whether this is the [`unknown`](Self::unknown) placeholder.
    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.file.is_empty() && self.line == 0
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = if self.file.is_empty() { UNKNOWN } else { self.file };
        write!(f, "{}:{} ({})", file, self.line, self.function.unwrap_or(UNKNOWN))
    }
}

/// Sets the root stripped from captured file paths.
///
/// Affects locations captured after the call; existing errors keep the path
/// they were built with.
pub fn set_source_root(root: impl Into<String>) {
    let root = root.into();
    let mut guard = SOURCE_ROOT.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = if root.is_empty() { None } else { Some(root) };
}

/// Removes the configured source root; paths are then kept verbatim.
pub fn clear_source_root() {
    let mut guard = SOURCE_ROOT.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = None;
}

/// Returns the configured source root.
pub fn source_root() -> Option<String> {
    SOURCE_ROOT.read().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
}

/// Shortens `path` against the configured source root.
///
/// # Examples
///
/// ```
/// use trace_rail::types::location::{clear_source_root, set_source_root, shorten};
///
/// set_source_root("/work/app");
/// assert_eq!(shorten("/work/app/src/db.rs"), "src/db.rs");
/// assert_eq!(shorten("/elsewhere/main.rs"), "/elsewhere/main.rs");
/// clear_source_root();
/// ```
pub fn shorten(path: &'static str) -> &'static str {
    let guard = SOURCE_ROOT.read().unwrap_or_else(|poisoned| poisoned.into_inner());
    match guard.as_deref() {
        Some(root) => strip_root(root, path),
        None => path,
    }
}

/// Strips `root` and the separator that follows it from `path`.
///
/// A root only matches at a path component boundary, so `/work/app` does not
/// shorten `/work/application/main.rs`.
pub fn strip_root<'a>(root: &str, path: &'a str) -> &'a str {
    let root = root.trim_end_matches(['/', '\\']);
    if root.is_empty() {
        return path;
    }
    match path.strip_prefix(root) {
        Some(rest) if rest.starts_with(['/', '\\']) => &rest[1..],
        _ => path,
    }
}

/// Reduces a `type_name` path to the bare function name.
///
/// Drops the marker item the [`function_name!`](crate::function_name) macro
/// declares, any `{{closure}}` segments, and the module path.
pub fn clean_function_name(raw: &'static str) -> &'static str {
    let mut name = raw.strip_suffix("::__trace_rail_marker").unwrap_or(raw);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    match name.rfind("::") {
        Some(idx) => &name[idx + 2..],
        None => name,
    }
}
