use crate::common::{settings, Plain};
use trace_rail::types::location::{clean_function_name, shorten, strip_root};
use trace_rail::{function_name, new_error, set_source_root, source_root, Location, TracedError};

#[test]
fn capture_records_the_calling_line() {
    let line = line!() + 1;
    let location = Location::capture(None);
    assert_eq!(location.line(), line);
    assert!(location.file().ends_with("location.rs"));
    assert_eq!(location.function(), None);
}

#[test]
fn constructors_record_their_caller_not_themselves() {
    let line = line!() + 1;
    let err = TracedError::wrap(Plain("plain"), "wrapped");
    assert_eq!(err.location().line(), line);
    assert!(!err.location().file().contains("traced_error"));
}

#[track_caller]
fn helper_that_wraps() -> TracedError {
    TracedError::new("from helper")
}

#[test]
fn track_caller_helpers_pass_the_location_through() {
    let line = line!() + 1;
    let err = helper_that_wraps();
    assert_eq!(err.location().line(), line);
}

#[test]
fn macros_record_the_function_name() {
    let err = new_error!("boom");
    assert_eq!(err.location().function(), Some("macros_record_the_function_name"));

    let from_closure = (|| new_error!("inside closure"))();
    assert_eq!(from_closure.location().function(), Some("macros_record_the_function_name"));
}

struct Repository;

impl Repository {
    fn name(&self) -> &'static str {
        function_name!()
    }
}

#[test]
fn function_name_inside_methods() {
    assert_eq!(Repository.name(), "name");
}

#[test]
fn source_root_shortens_new_captures_only() {
    let _settings = settings();
    let before = Location::capture(None);

    let dir = std::path::Path::new(file!()).parent().map(|p| p.to_string_lossy().into_owned());
    set_source_root(dir.clone().unwrap_or_default());
    assert_eq!(source_root(), dir);

    let after = Location::capture(None);
    assert_eq!(after.file(), "location.rs");
    assert_eq!(before.file(), file!());
}

#[test]
fn paths_outside_the_root_are_unchanged() {
    let _settings = settings();
    set_source_root("/definitely/not/a/prefix");
    assert_eq!(shorten(file!()), file!());
    assert_eq!(Location::capture(None).file(), file!());
}

#[test]
fn empty_root_clears_the_setting() {
    let _settings = settings();
    set_source_root("/some/root");
    set_source_root("");
    assert_eq!(source_root(), None);
}

#[test]
fn display_uses_placeholders_for_missing_parts() {
    let _settings = settings();
    assert_eq!(Location::new("src/db.rs", 7, None).to_string(), "src/db.rs:7 (???)");
    assert_eq!(Location::new("src/db.rs", 7, Some("connect")).to_string(), "src/db.rs:7 (connect)");
    assert_eq!(Location::unknown().to_string(), "???:0 (???)");
}

#[test]
fn strip_root_removes_prefix_and_separator() {
    assert_eq!(strip_root("/src/app", "/src/app/lib/db.rs"), "lib/db.rs");
    assert_eq!(strip_root("/src/app/", "/src/app/lib/db.rs"), "lib/db.rs");
    assert_eq!(strip_root(r"C:\app", r"C:\app\src\main.rs"), r"src\main.rs");
}

#[test]
fn strip_root_requires_component_boundary() {
    assert_eq!(strip_root("/src/app", "/src/application/db.rs"), "/src/application/db.rs");
    assert_eq!(strip_root("/src/app", "/src/app"), "/src/app");
    assert_eq!(strip_root("", "tests/mod.rs"), "tests/mod.rs");
}

#[test]
fn clean_function_name_keeps_last_segment() {
    assert_eq!(clean_function_name("my_crate::db::connect::__trace_rail_marker"), "connect");
    assert_eq!(
        clean_function_name("my_crate::db::connect::{{closure}}::{{closure}}::__trace_rail_marker"),
        "connect"
    );
    assert_eq!(clean_function_name("main"), "main");
}

#[test]
fn unknown_location_is_reported_as_such() {
    assert!(Location::unknown().is_unknown());
    assert!(!Location::capture(None).is_unknown());
}
