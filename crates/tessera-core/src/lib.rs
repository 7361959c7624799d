//! Core runtime for Tessera: cell names, liveness, bound values, and the
//! compare-and-set `Condition` exported via the `prelude`.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod bind;
pub mod cell;
pub mod condition;
pub mod error;
pub mod name;
pub mod obs;
pub mod row;
pub mod term;
pub mod types;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// CONSTANTS
///

/// Maximum number of bound values a statement may carry.
///
/// The native protocol transmits the value count as an unsigned 16-bit
/// integer, so a larger batch could never have arrived on the wire.
pub const MAX_BIND_VALUES: usize = u16::MAX as usize;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, comparators, counters, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        bind::{BindValues, BindVariables},
        cell::{Cell, CellState},
        condition::Condition,
        name::Composite,
        row::RowSnapshot,
        term::{Expression, Literal, MapEntries, SetElements},
        types::Timestamp,
    };
    pub use tessera_primitives::{
        CollectionKind, ColumnDescriptor, ColumnKind, CqlType, ScalarKind,
    };
}
