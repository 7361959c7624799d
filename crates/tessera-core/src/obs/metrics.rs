use serde::{Deserialize, Serialize};
use std::cell::RefCell;

///
/// Metrics
/// Ephemeral, in-memory counters for the condition lifecycle. State is
/// thread local; embedders that shard work across threads report per
/// shard.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EventOps {
    // Prepare outcomes
    pub prepared: u64,
    pub unsupported_targets: u64,

    // Binding
    pub attached: u64,

    // Evaluation outcomes
    pub evaluated: u64,
    pub held: u64,
    pub missed: u64,
}

thread_local! {
    static EVENT_STATE: RefCell<EventOps> = RefCell::new(EventOps::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventOps) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventOps) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters (useful in tests).
pub(crate) fn reset_all() {
    with_state_mut(|m| *m = EventOps::default());
}

pub(crate) fn record_prepare() {
    with_state_mut(|m| m.prepared = m.prepared.saturating_add(1));
}

pub(crate) fn record_unsupported_target() {
    with_state_mut(|m| m.unsupported_targets = m.unsupported_targets.saturating_add(1));
}

pub(crate) fn record_attach() {
    with_state_mut(|m| m.attached = m.attached.saturating_add(1));
}

pub(crate) fn record_evaluation(held: bool) {
    with_state_mut(|m| {
        m.evaluated = m.evaluated.saturating_add(1);
        if held {
            m.held = m.held.saturating_add(1);
        } else {
            m.missed = m.missed.saturating_add(1);
        }
    });
}

///
/// EventReport
/// Counter snapshot plus the derived hold ratio.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EventReport {
    pub ops: EventOps,
    pub hold_ratio: f64,
}

/// Build a metrics report by inspecting in-memory counters only.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub(crate) fn report() -> EventReport {
    let ops = with_state(Clone::clone);
    let hold_ratio = if ops.evaluated > 0 {
        ops.held as f64 / ops.evaluated as f64
    } else {
        0.0
    };

    EventReport { ops, hold_ratio }
}

///
/// TESTS
///
