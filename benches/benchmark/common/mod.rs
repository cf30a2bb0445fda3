use criterion::Criterion;
use std::time::Duration;

use trace_rail::TracedError;

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum DomainError {
    Database(String),
    Network(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::Database(msg) => write!(f, "Database error: {msg}"),
            DomainError::Network(msg) => write!(f, "Network error: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}

/// Chain of `depth` traced nodes over a network error.
pub fn chain_of(depth: usize) -> TracedError {
    let mut err = TracedError::wrap(DomainError::Network("connection refused".into()), "connecting");
    for level in 1..depth {
        err = TracedError::wrap(err, format!("retry layer {level}"));
    }
    err
}

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}
