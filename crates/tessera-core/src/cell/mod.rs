use crate::types::Timestamp;

///
/// CellState
///
/// Liveness state of one stored cell. Deliberate deletion (tombstone) and
/// natural expiration are distinct states in storage but equivalent to the
/// condition engine: a cell that is not live at `now` counts as absent.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CellState {
    /// Present with no expiration.
    Live,

    /// Present until `until`; dead at and after that instant.
    Expiring { until: Timestamp },

    /// Deleted marker.
    Tombstone,
}

///
/// Cell
///
/// One physical storage entry: composite name bytes, value bytes, and a
/// liveness state. Cells are produced by the row-snapshot collaborator;
/// this engine only reads them.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cell {
    name: Vec<u8>,
    value: Vec<u8>,
    state: CellState,
}

impl Cell {
    #[must_use]
    pub fn live(name: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            state: CellState::Live,
        }
    }

    #[must_use]
    pub fn expiring(
        name: impl Into<Vec<u8>>,
        value: impl Into<Vec<u8>>,
        until: Timestamp,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            state: CellState::Expiring { until },
        }
    }

    #[must_use]
    pub fn tombstone(name: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            value: Vec::new(),
            state: CellState::Tombstone,
        }
    }

    /// Physical composite name.
    #[must_use]
    pub fn name(&self) -> &[u8] {
        &self.name
    }

    /// Stored value bytes. Meaningless for tombstones.
    #[must_use]
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    #[must_use]
    pub const fn state(&self) -> CellState {
        self.state
    }

    /// Whether this cell counts as present at `now`.
    #[must_use]
    pub const fn is_live(&self, now: Timestamp) -> bool {
        match self.state {
            CellState::Live => true,
            CellState::Expiring { until } => now.as_micros() < until.as_micros(),
            CellState::Tombstone => false,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_cells_are_live_at_any_time() {
        let cell = Cell::live(b"n".to_vec(), b"v".to_vec());

        assert!(cell.is_live(Timestamp::EPOCH));
        assert!(cell.is_live(Timestamp::from_seconds(1)));
        assert!(cell.is_live(Timestamp::MAX));
    }

    #[test]
    fn expiring_cells_die_exactly_at_their_deadline() {
        let until = Timestamp::from_seconds(30);
        let cell = Cell::expiring(b"n".to_vec(), b"v".to_vec(), until);

        assert!(cell.is_live(Timestamp::EPOCH));
        assert!(cell.is_live(until - 1_u64));
        assert!(!cell.is_live(until));
        assert!(!cell.is_live(until + 1_u64));
    }

    #[test]
    fn tombstones_are_never_live() {
        let cell = Cell::tombstone(b"n".to_vec());

        assert!(!cell.is_live(Timestamp::EPOCH));
        assert!(!cell.is_live(Timestamp::MAX));
        assert_eq!(cell.state(), CellState::Tombstone);
        assert!(cell.value().is_empty());
    }
}
