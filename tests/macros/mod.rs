use crate::common::{settings, Plain};
use trace_rail::{
    function_name, get_code, new_error, new_error_with_code, propagate, propagate_with_code,
    wrap, TracedError,
};

#[test]
fn propagate_formats_its_message() {
    let table = "users";
    let err = propagate!(Plain("timeout"), "querying {} (attempt {})", table, 2);
    assert_eq!(format!("{:#}", err), "querying users (attempt 2): timeout");
}

#[test]
fn propagate_accepts_traced_causes() {
    let inner = new_error!("inner");
    let outer = propagate!(inner, "outer");
    assert_eq!(outer.depth(), 2);
    assert_eq!(outer.traced_cause().map(TracedError::message), Some("inner"));
}

#[test]
fn macros_capture_line_and_function() {
    let line = line!() + 1;
    let err = new_error!("boom");
    assert_eq!(err.location().line(), line);
    assert_eq!(err.location().function(), Some("macros_capture_line_and_function"));
}

#[test]
fn coded_macros_set_codes() {
    let root = new_error_with_code!(500, "internal {}", "failure");
    assert_eq!(root.code(), Some(500));
    assert_eq!(root.message(), "internal failure");

    let wrapped = propagate_with_code!(Plain("bad json"), 400, "parsing body");
    assert_eq!(get_code(&wrapped), Some(400));
}

#[test]
fn function_name_in_nested_fn() {
    fn helper() -> &'static str {
        function_name!()
    }
    assert_eq!(helper(), "helper");
    assert_eq!(function_name!(), "function_name_in_nested_fn");
}

#[test]
fn wrap_macro_renders_the_calling_function() {
    let _settings = settings();

    let line = line!() + 1;
    let err = wrap!(Some(Plain("plain")), "decorated");
    let text = format!("{:+}", err);

    assert_eq!(
        text,
        format!(
            "decorated\n --- at {}:{line} (wrap_macro_renders_the_calling_function) ---\nCaused by: plain",
            file!()
        )
    );
}

#[test]
fn wrap_macro_without_cause_starts_a_chain() {
    let err = wrap!(None::<Plain>, "starting {}", "fresh");
    assert!(err.cause().is_none());
    assert_eq!(err.message(), "starting fresh");
    assert_eq!(err.location().function(), Some("wrap_macro_without_cause_starts_a_chain"));
}

#[test]
fn wrap_function_leaves_the_name_unknown() {
    let err = wrap(Some(Plain("plain")), "decorated");
    assert_eq!(err.location().function(), None);
    assert!(format!("{:+}", err).contains(" (???) ---"));
}
