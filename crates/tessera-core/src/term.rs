use crate::bind::{BindError, BindValues};
use derive_more::Deref;
use tessera_primitives::{ColumnDescriptor, CqlType};

///
/// SetElements
///
/// Deterministic element set for a set literal.
/// Enforces unique elements in ascending byte order; the field is private
/// so the canonical form cannot be bypassed by direct construction.
///

#[derive(Clone, Debug, Default, Deref, Eq, PartialEq)]
#[repr(transparent)]
pub struct SetElements(Vec<Vec<u8>>);

impl SetElements {
    /// Create an empty element set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Build the canonical element set: sorted, duplicates dropped.
    #[must_use]
    pub fn from_vec(elements: Vec<Vec<u8>>) -> Self {
        let mut set = Self::new();
        for element in elements {
            set.insert(element);
        }

        set
    }

    /// Insert an element in order; returns `false` if it was already present.
    pub fn insert(&mut self, element: Vec<u8>) -> bool {
        match self.0.binary_search(&element) {
            Ok(_) => false,
            Err(at) => {
                self.0.insert(at, element);
                true
            }
        }
    }

    /// Return the number of elements in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

///
/// MapEntries
///
/// Deterministic key-ordered list of `(key, value)` entries for a map
/// literal. Enforces unique keys and sorts by ascending key order; the
/// field is private so the canonical form cannot be bypassed.
///

#[derive(Clone, Debug, Default, Deref, Eq, PartialEq)]
#[repr(transparent)]
pub struct MapEntries(Vec<(Vec<u8>, Vec<u8>)>);

impl MapEntries {
    /// Create an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Build the canonical mapping, keeping the last value for each key.
    #[must_use]
    pub fn from_vec(entries: Vec<(Vec<u8>, Vec<u8>)>) -> Self {
        let mut map = Self::new();
        for (key, value) in entries {
            map.insert(key, value);
        }

        map
    }

    /// Insert or replace the value for `key`, returning the old value if
    /// present.
    pub fn insert(&mut self, key: Vec<u8>, value: Vec<u8>) -> Option<Vec<u8>> {
        match self.0.binary_search_by(|(existing, _)| existing.cmp(&key)) {
            Ok(at) => Some(std::mem::replace(&mut self.0[at].1, value)),
            Err(at) => {
                self.0.insert(at, (key, value));
                None
            }
        }
    }

    /// Return the number of entries in the mapping.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the mapping is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

///
/// Literal
///
/// A resolved expected value. Set and map payloads are the sealed
/// canonical types above, so every literal reaches the comparators sorted
/// and unique however it was assembled.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Literal {
    Scalar(Vec<u8>),
    List(Vec<Vec<u8>>),
    Set(SetElements),
    Map(MapEntries),
}

impl Literal {
    #[must_use]
    pub fn scalar(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Scalar(bytes.into())
    }

    /// Ordered list literal; element order and duplicates are preserved.
    #[must_use]
    pub fn list(elements: Vec<Vec<u8>>) -> Self {
        Self::List(elements)
    }

    /// Set literal; elements are sorted and deduplicated.
    #[must_use]
    pub fn set(elements: Vec<Vec<u8>>) -> Self {
        Self::Set(SetElements::from_vec(elements))
    }

    /// Map literal; entries are sorted by key, a repeated key keeps the
    /// value supplied last.
    #[must_use]
    pub fn map(entries: Vec<(Vec<u8>, Vec<u8>)>) -> Self {
        Self::Map(MapEntries::from_vec(entries))
    }

    #[must_use]
    pub(crate) const fn kind_name(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::List(_) => "list",
            Self::Set(_) => "set",
            Self::Map(_) => "map",
        }
    }

    /// Whether this literal's shape fits a column of `cql_type`.
    #[must_use]
    pub(crate) const fn matches_type(&self, cql_type: CqlType) -> bool {
        matches!(
            (self, cql_type),
            (Self::Scalar(_), CqlType::Scalar(_))
                | (Self::List(_), CqlType::List { .. })
                | (Self::Set(_), CqlType::Set { .. })
                | (Self::Map(_), CqlType::Map { .. })
        )
    }
}

///
/// Expression
///
/// The prepared expected-value side of a condition. `Null` is the
/// explicit-absence form; a marker defers to the statement's bound values
/// at evaluation time.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Expression {
    Null,
    Literal(Literal),
    Marker { index: usize },
}

impl Expression {
    /// Resolve against the bound values. `None` means the condition
    /// expects no live value. Marker values are shape-checked against the
    /// receiver; constants were checked at prepare time.
    pub(crate) fn bind_and_get<'a>(
        &'a self,
        values: &'a BindValues,
        receiver: &ColumnDescriptor,
    ) -> Result<Option<&'a Literal>, BindError> {
        match self {
            Self::Null => Ok(None),
            Self::Literal(literal) => Ok(Some(literal)),
            Self::Marker { index } => {
                let Some(literal) = values.get(*index)? else {
                    return Ok(None);
                };

                if !literal.matches_type(receiver.cql_type()) {
                    return Err(BindError::Shape {
                        index: *index,
                        expected: receiver.cql_type().to_string(),
                        found: literal.kind_name(),
                    });
                }

                Ok(Some(literal))
            }
        }
    }
}

///
/// TESTS
///
