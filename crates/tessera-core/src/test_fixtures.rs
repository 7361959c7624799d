use crate::{cell::Cell, name::Composite, row::RowSnapshot, types::Timestamp};
use tessera_primitives::{ColumnDescriptor, ColumnKind, CqlType, ScalarKind};

///
/// TestRow
///
/// In-memory row snapshot holding cells in ascending name order.
/// Inserting a cell with a name already present replaces the earlier one,
/// so a tombstone can overwrite a live cell in a fixture.
///

#[derive(Debug, Default)]
pub(crate) struct TestRow {
    cells: Vec<Cell>,
}

impl TestRow {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub(crate) fn with(mut self, cell: Cell) -> Self {
        match self
            .cells
            .binary_search_by(|existing| existing.name().cmp(cell.name()))
        {
            Ok(at) => self.cells[at] = cell,
            Err(at) => self.cells.insert(at, cell),
        }

        self
    }
}

impl RowSnapshot for TestRow {
    fn cell(&self, name: &[u8]) -> Option<&Cell> {
        self.cells
            .binary_search_by(|existing| existing.name().cmp(name))
            .ok()
            .map(|at| &self.cells[at])
    }

    fn live_range(&self, start: &[u8], end: &[u8], now: Timestamp) -> Vec<&Cell> {
        self.cells
            .iter()
            .filter(|cell| cell.name() >= start && cell.name() < end)
            .filter(|cell| cell.is_live(now))
            .collect()
    }
}

///
/// Column builders
///

pub(crate) fn scalar_column(name: &str, scalar: ScalarKind) -> ColumnDescriptor {
    ColumnDescriptor::new(name, ColumnKind::Ordinary, CqlType::Scalar(scalar))
}

pub(crate) fn static_column(name: &str, scalar: ScalarKind) -> ColumnDescriptor {
    ColumnDescriptor::new(name, ColumnKind::Static, CqlType::Scalar(scalar))
}

pub(crate) fn compact_column(name: &str, scalar: ScalarKind) -> ColumnDescriptor {
    ColumnDescriptor::new(name, ColumnKind::CompactValue, CqlType::Scalar(scalar))
}

pub(crate) fn list_column(name: &str, element: ScalarKind) -> ColumnDescriptor {
    ColumnDescriptor::new(name, ColumnKind::Ordinary, CqlType::List { element })
}

pub(crate) fn set_column(name: &str, element: ScalarKind) -> ColumnDescriptor {
    ColumnDescriptor::new(name, ColumnKind::Ordinary, CqlType::Set { element })
}

pub(crate) fn map_column(name: &str, key: ScalarKind, value: ScalarKind) -> ColumnDescriptor {
    ColumnDescriptor::new(name, ColumnKind::Ordinary, CqlType::Map { key, value })
}

///
/// Name builders
///

/// Row prefix assembled from raw clustering components.
pub(crate) fn row_prefix(components: &[&[u8]]) -> Composite {
    let mut prefix = Composite::new();
    for component in components {
        prefix = prefix.push(component).unwrap();
    }

    prefix
}

/// Cell name of a scalar `column` within the row at `prefix`.
pub(crate) fn scalar_cell_name(prefix: &Composite, column: &ColumnDescriptor) -> Vec<u8> {
    match column.kind() {
        ColumnKind::CompactValue => prefix.build(),
        ColumnKind::Static => Composite::static_prefix()
            .push(column.name_bytes())
            .unwrap()
            .build(),
        ColumnKind::Ordinary => prefix.clone().push(column.name_bytes()).unwrap().build(),
    }
}

/// Cell name of one element of the collection `column` within the row at
/// `prefix`. List elements key by position timeuuid, sets by element
/// bytes, maps by entry key; all three are just the trailing component.
pub(crate) fn element_cell_name(
    prefix: &Composite,
    column: &ColumnDescriptor,
    element: &[u8],
) -> Vec<u8> {
    let base = match column.kind() {
        ColumnKind::Static => Composite::static_prefix(),
        ColumnKind::Ordinary | ColumnKind::CompactValue => prefix.clone(),
    };

    base.push(column.name_bytes())
        .unwrap()
        .push(element)
        .unwrap()
        .build()
}
