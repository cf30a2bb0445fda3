//! Macros that build traced errors with a complete location.
//!
//! Method calls can only learn the file and line of their caller. The macros
//! expand inside the calling function, so they also record its name:
//!
//! - [`macro@crate::propagate`] - Wraps an existing error with a formatted message.
//! - [`macro@crate::new_error`] - Starts a new chain with a formatted message.
//! - [`macro@crate::wrap`] - Wraps an `Option` of an error, starting a new chain on `None`.
//! - [`macro@crate::propagate_with_code`] / [`macro@crate::new_error_with_code`] -
//!   The same, tagging the node with an [`ErrorCode`](crate::ErrorCode).
//! - [`macro@crate::function_name`] - Name of the enclosing function.
//!
//! # Examples
//!
//! ```
//! use trace_rail::{new_error, propagate};
//!
//! fn open_db(path: &str) -> Result<(), trace_rail::TracedError> {
//!     let missing = new_error!("no database at {}", path);
//!     Err(propagate!(missing, "opening storage"))
//! }
//!
//! let err = open_db("/tmp/app.db").unwrap_err();
//! assert_eq!(format!("{:#}", err), "opening storage: no database at /tmp/app.db");
//! assert_eq!(err.location().function(), Some("open_db"));
//! ```

/// Expands to the name of the enclosing function, without its module path.
///
/// Closures and async blocks report the function they are written in.
///
/// # Examples
///
/// ```
/// fn load() -> &'static str {
///     trace_rail::function_name!()
/// }
///
/// assert_eq!(load(), "load");
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __trace_rail_marker() {}
        $crate::types::location::clean_function_name(::core::any::type_name_of_val(&__trace_rail_marker))
    }};
}

/// Captures the location of the macro call site, function name included.
#[doc(hidden)]
#[macro_export]
macro_rules! __here {
    () => {
        $crate::Location::capture(::core::option::Option::Some($crate::function_name!()))
    };
}

/// Wraps an error with a formatted message.
///
/// Accepts the cause followed by the same arguments as `format!`.
///
/// # Examples
///
/// ```
/// use trace_rail::propagate;
///
/// let attempt = 3;
/// let err = propagate!(std::fmt::Error, "render attempt {}", attempt);
/// assert_eq!(err.message(), "render attempt 3");
/// ```
#[macro_export]
macro_rules! propagate {
    ($cause:expr, $($arg:tt)+) => {
        $crate::TracedError::from_parts(
            $crate::__here!(),
            ::std::format!($($arg)+),
            ::core::option::Option::Some(::std::sync::Arc::new($cause) as $crate::Cause),
            ::core::option::Option::None,
        )
    };
}

/// Creates a root error with a formatted message.
#[macro_export]
macro_rules! new_error {
    ($($arg:tt)+) => {
        $crate::TracedError::from_parts(
            $crate::__here!(),
            ::std::format!($($arg)+),
            ::core::option::Option::None,
            ::core::option::Option::None,
        )
    };
}

/// Wraps an optional error with a formatted message; `None` starts a new
/// chain.
///
/// The macro form of [`wrap`](fn@crate::wrap). Unlike the function, it records
/// the name of the calling function.
///
/// # Examples
///
/// ```
/// use trace_rail::wrap;
///
/// fn read_header() -> trace_rail::TracedError {
///     let failure: Option<std::fmt::Error> = Some(std::fmt::Error);
///     wrap!(failure, "reading header {}", 1)
/// }
///
/// let err = read_header();
/// assert_eq!(err.location().function(), Some("read_header"));
/// assert!(format!("{:+}", err).contains("(read_header) ---"));
/// ```
#[macro_export]
macro_rules! wrap {
    ($existing:expr, $($arg:tt)+) => {{
        let location = $crate::__here!();
        $crate::TracedError::from_parts(
            location,
            ::std::format!($($arg)+),
            ::core::option::Option::map($existing, |cause| {
                ::std::sync::Arc::new(cause) as $crate::Cause
            }),
            ::core::option::Option::None,
        )
    }};
}

/// Wraps an error with a formatted message and a code.
///
/// # Examples
///
/// ```
/// use trace_rail::{get_code, propagate_with_code};
///
/// let err = propagate_with_code!(std::fmt::Error, 422, "invalid payload");
/// assert_eq!(get_code(&err), Some(422));
/// ```
#[macro_export]
macro_rules! propagate_with_code {
    ($cause:expr, $code:expr, $($arg:tt)+) => {
        $crate::TracedError::from_parts(
            $crate::__here!(),
            ::std::format!($($arg)+),
            ::core::option::Option::Some(::std::sync::Arc::new($cause) as $crate::Cause),
            ::core::option::Option::Some($code),
        )
    };
}

/// Creates a root error with a formatted message and a code.
#[macro_export]
macro_rules! new_error_with_code {
    ($code:expr, $($arg:tt)+) => {
        $crate::TracedError::from_parts(
            $crate::__here!(),
            ::std::format!($($arg)+),
            ::core::option::Option::None,
            ::core::option::Option::Some($code),
        )
    };
}
