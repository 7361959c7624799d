//! Observability: ephemeral runtime counters for condition evaluation.
//!
//! Counters are advisory. Evaluation outcomes are carried by return
//! values, never by this module.

pub(crate) mod metrics;

pub use metrics::{EventOps, EventReport};

/// Snapshot the current counters for endpoint/test plumbing.
#[must_use]
pub fn metrics_report() -> EventReport {
    metrics::report()
}

/// Reset all counters.
pub fn metrics_reset_all() {
    metrics::reset_all();
}
