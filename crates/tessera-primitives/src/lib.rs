#[macro_use]
mod macros;

mod column;

pub use column::{CollectionKind, ColumnDescriptor, ColumnKind, CqlType};

use serde::{Deserialize, Serialize};
use std::fmt;

///
/// ScalarKind
///
/// Canonical scalar type vocabulary shared across the workspace.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    Ascii,
    Bigint,
    Blob,
    Boolean,
    Counter,
    Decimal,
    Double,
    Float,
    Inet,
    Int,
    Text,
    Timestamp,
    Timeuuid,
    Uuid,
    Varint,
}

impl ScalarKind {
    /// Return the full metadata descriptor for one scalar kind.
    #[must_use]
    pub const fn metadata(self) -> ScalarMetadata {
        scalar_kind_registry!(metadata_from_registry, self)
    }

    /// Return the query-language name of this scalar kind.
    #[must_use]
    pub const fn cql_name(self) -> &'static str {
        self.metadata().cql_name
    }

    /// Return whether values of this kind have a byte-stable representation
    /// that conditional writes can compare against.
    #[must_use]
    pub const fn supports_conditions(self) -> bool {
        self.metadata().supports_conditions
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cql_name())
    }
}

///
/// ScalarMetadata
///
/// Capability metadata shared across the primitive and core layers.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScalarMetadata {
    pub cql_name: &'static str,
    pub supports_conditions: bool,
}

/// Ordered list of all scalar kinds in registry order.
pub const ALL_SCALAR_KINDS: [ScalarKind; 15] = scalar_kind_registry!(all_kinds_from_registry);
