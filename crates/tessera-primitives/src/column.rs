use crate::ScalarKind;
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// CollectionKind
///
/// Structural kind of a collection-typed column. Each kind carries its own
/// comparison semantics in the condition engine.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    List,
    Set,
    Map,
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::List => "list",
            Self::Set => "set",
            Self::Map => "map",
        })
    }
}

///
/// CqlType
///
/// Declared type of a column: a bare scalar or a collection parameterized
/// by scalar element kinds.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CqlType {
    Scalar(ScalarKind),
    List { element: ScalarKind },
    Set { element: ScalarKind },
    Map { key: ScalarKind, value: ScalarKind },
}

impl CqlType {
    /// Return the collection kind, or `None` for scalar types.
    #[must_use]
    pub const fn collection_kind(self) -> Option<CollectionKind> {
        match self {
            Self::Scalar(_) => None,
            Self::List { .. } => Some(CollectionKind::List),
            Self::Set { .. } => Some(CollectionKind::Set),
            Self::Map { .. } => Some(CollectionKind::Map),
        }
    }

    /// Return whether the type is collection-valued.
    #[must_use]
    pub const fn is_collection(self) -> bool {
        self.collection_kind().is_some()
    }

    /// Return whether every constituent kind has a byte-stable
    /// representation that conditional writes can compare against.
    ///
    /// Counter-typed columns do not; neither would a collection holding
    /// counter elements.
    #[must_use]
    pub const fn supports_conditions(self) -> bool {
        match self {
            Self::Scalar(kind) | Self::List { element: kind } | Self::Set { element: kind } => {
                kind.supports_conditions()
            }
            Self::Map { key, value } => key.supports_conditions() && value.supports_conditions(),
        }
    }
}

impl fmt::Display for CqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => write!(f, "{kind}"),
            Self::List { element } => write!(f, "list<{element}>"),
            Self::Set { element } => write!(f, "set<{element}>"),
            Self::Map { key, value } => write!(f, "map<{key}, {value}>"),
        }
    }
}

///
/// ColumnKind
///
/// Structural kind of a column within a row. The kind decides how the
/// physical cell name is built from the row prefix:
/// - `Ordinary` appends the column's own key to the row prefix,
/// - `Static` appends it to the fixed static-row prefix instead,
/// - `CompactValue` is the single value column of a compact-storage row,
///   whose cell name is the bare row prefix itself.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Ordinary,
    Static,
    CompactValue,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ordinary => "ordinary",
            Self::Static => "static",
            Self::CompactValue => "compact_value",
        })
    }
}

///
/// ColumnDescriptor
///
/// Identity of a condition's target column: declared name, structural
/// kind, and declared type. Also serves as the receiver metadata reported
/// for bind placeholders, so drivers can show the expected type and
/// position of each marker.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub struct ColumnDescriptor {
    name: String,
    kind: ColumnKind,
    cql_type: CqlType,
}

impl ColumnDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ColumnKind, cql_type: CqlType) -> Self {
        Self {
            name: name.into(),
            kind,
            cql_type,
        }
    }

    /// Declared column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Physical key component for this column, appended to name prefixes.
    #[must_use]
    pub fn name_bytes(&self) -> &[u8] {
        self.name.as_bytes()
    }

    #[must_use]
    pub const fn kind(&self) -> ColumnKind {
        self.kind
    }

    #[must_use]
    pub const fn cql_type(&self) -> CqlType {
        self.cql_type
    }
}

impl fmt::Display for ColumnDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.cql_type)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cql_type_display_covers_scalars_and_collections() {
        assert_eq!(CqlType::Scalar(ScalarKind::Int).to_string(), "int");
        assert_eq!(
            CqlType::List {
                element: ScalarKind::Text
            }
            .to_string(),
            "list<text>"
        );
        assert_eq!(
            CqlType::Set {
                element: ScalarKind::Uuid
            }
            .to_string(),
            "set<uuid>"
        );
        assert_eq!(
            CqlType::Map {
                key: ScalarKind::Text,
                value: ScalarKind::Bigint
            }
            .to_string(),
            "map<text, bigint>"
        );
    }

    #[test]
    fn counter_types_refuse_conditions_everywhere() {
        assert!(!CqlType::Scalar(ScalarKind::Counter).supports_conditions());
        assert!(
            !CqlType::List {
                element: ScalarKind::Counter
            }
            .supports_conditions()
        );
        assert!(
            !CqlType::Map {
                key: ScalarKind::Text,
                value: ScalarKind::Counter
            }
            .supports_conditions()
        );
        assert!(CqlType::Scalar(ScalarKind::Int).supports_conditions());
    }

    #[test]
    fn descriptor_exposes_name_component_bytes() {
        let column = ColumnDescriptor::new(
            "score",
            ColumnKind::Ordinary,
            CqlType::Scalar(ScalarKind::Int),
        );

        assert_eq!(column.name(), "score");
        assert_eq!(column.name_bytes(), b"score");
        assert_eq!(column.to_string(), "score int");
    }
}
