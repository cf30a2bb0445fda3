use std::io;
use std::sync::Arc;

use crate::common::Plain;
use trace_rail::convert::*;
use trace_rail::{Cause, TracedError};

#[test]
fn root_cause_reaches_through_foreign_errors() {
    let io = io::Error::new(io::ErrorKind::Other, Plain("innermost"));
    let err = TracedError::wrap(io, "middle");
    let err = TracedError::wrap(err, "outer");

    assert_eq!(root_cause(&err).to_string(), "innermost");
    assert!(root_cause(&err).downcast_ref::<io::Error>().is_some());
}

#[test]
fn root_cause_of_a_root_node_is_itself() {
    let err = TracedError::new("alone");
    assert_eq!(format!("{:#}", root_cause(&err)), "alone");
}

#[test]
fn chain_yields_outermost_first() {
    let err = TracedError::wrap(Plain("plain"), "inner");
    let err = TracedError::wrap(err, "outer");

    let messages: Vec<String> = chain(&err)
        .map(|e| match e.downcast_ref::<TracedError>() {
            Some(node) => node.message().to_string(),
            None => e.to_string(),
        })
        .collect();
    assert_eq!(messages, ["outer", "inner", "plain"]);
}

#[test]
fn get_code_skips_uncoded_nodes() {
    let err = TracedError::new_with_code(7, "coded root");
    let err = TracedError::wrap(err, "plain wrap");
    assert_eq!(get_code(&err), Some(7));
    assert_eq!(get_code(&TracedError::new("uncoded")), None);
}

#[test]
fn find_cause_matches_by_type() {
    let err = TracedError::wrap(Plain("sentinel"), "lookup");
    assert_eq!(find_cause::<Plain>(&err), Some(&Plain("sentinel")));
    assert!(chain_contains::<TracedError>(&err));
    assert!(!chain_contains::<io::Error>(&err));
}

#[test]
fn outermost_code_wins() {
    let inner = TracedError::new_with_code(1, "inner");
    let outer = TracedError::wrap_with_code(inner, 2, "outer");
    assert_eq!(get_code(&outer), Some(2));

    let uncoded = TracedError::wrap(outer, "no code here");
    assert_eq!(get_code(&uncoded), Some(2));
    assert_eq!(get_code(&Plain("plain")), None);
}

#[test]
fn shared_sentinel_is_found_by_address() {
    let sentinel: Cause = Arc::new(Plain("not found"));
    let a = TracedError::wrap_shared(Arc::clone(&sentinel), "first site");
    let b = TracedError::wrap_shared(Arc::clone(&sentinel), "second site");
    let other = TracedError::wrap(Plain("not found"), "unrelated");

    assert!(is_caused_by(&a, &*sentinel));
    assert!(is_caused_by(&b, &*sentinel));
    assert!(!is_caused_by(&other, &*sentinel));
}
