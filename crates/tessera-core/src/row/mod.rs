use crate::{cell::Cell, types::Timestamp};

///
/// RowSnapshot
///
/// Contract over the freshly read row a condition is evaluated against.
/// The snapshot is pre-materialized by the read path; evaluation performs
/// no I/O of its own. Implementations must return cells in ascending
/// physical-name order under plain byte comparison.
///

pub trait RowSnapshot {
    /// Cell stored under exactly `name`, tombstones included.
    ///
    /// The caller applies the liveness predicate; a dead cell here still
    /// counts as absent.
    fn cell(&self, name: &[u8]) -> Option<&Cell>;

    /// Cells with `start <= name < end`, ascending by name, already
    /// filtered to those live at `now`.
    fn live_range(&self, start: &[u8], end: &[u8], now: Timestamp) -> Vec<&Cell>;
}
