use crate::{MAX_BIND_VALUES, term::Literal};
use serde::Serialize;
use tessera_primitives::ColumnDescriptor;
use thiserror::Error as ThisError;

///
/// BindError
/// (bind boundary)
///

#[derive(Debug, ThisError, Eq, PartialEq)]
pub enum BindError {
    #[error("bind marker {index} is out of range for {len} bound values")]
    OutOfRange { index: usize, len: usize },

    #[error("bound value for marker {index} is a {found}, expected {expected}")]
    Shape {
        index: usize,
        expected: String,
        found: &'static str,
    },

    #[error("{len} bound values exceed the protocol bound of {max}", max = MAX_BIND_VALUES)]
    TooMany { len: usize },
}

///
/// BindValues
///
/// The statement's resolved bound-parameter sequence, by marker index.
/// An entry of `None` is an explicitly bound absence ("expect no live
/// value"), distinct from an out-of-range marker.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BindValues {
    values: Vec<Option<Literal>>,
}

impl BindValues {
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn try_from_values(values: Vec<Option<Literal>>) -> Result<Self, BindError> {
        if values.len() > MAX_BIND_VALUES {
            return Err(BindError::TooMany { len: values.len() });
        }

        Ok(Self { values })
    }

    /// Append one bound value, enforcing the protocol bound.
    pub fn push(mut self, value: Option<Literal>) -> Result<Self, BindError> {
        if self.values.len() >= MAX_BIND_VALUES {
            return Err(BindError::TooMany {
                len: self.values.len() + 1,
            });
        }

        self.values.push(value);
        Ok(self)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value bound at `index`, `None` meaning an explicitly bound absence.
    pub(crate) fn get(&self, index: usize) -> Result<Option<&Literal>, BindError> {
        match self.values.get(index) {
            Some(value) => Ok(value.as_ref()),
            None => Err(BindError::OutOfRange {
                index,
                len: self.values.len(),
            }),
        }
    }
}

///
/// BindVariables
///
/// Bind-metadata registry: the receiver descriptor reported for each
/// marker index, so drivers can show the expected type and position of
/// every placeholder in a prepared statement. Serializable for the
/// driver-facing layer; this core defines no transport.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct BindVariables {
    specs: Vec<Option<ColumnDescriptor>>,
}

impl BindVariables {
    /// Registry sized for a statement with `markers` placeholders.
    #[must_use]
    pub fn new(markers: usize) -> Self {
        Self {
            specs: vec![None; markers],
        }
    }

    /// Record the receiver for one marker index, growing if the statement
    /// under-declared its marker count.
    pub fn add(&mut self, index: usize, receiver: ColumnDescriptor) {
        if index >= self.specs.len() {
            self.specs.resize(index + 1, None);
        }

        self.specs[index] = Some(receiver);
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ColumnDescriptor> {
        self.specs.get(index).and_then(Option::as_ref)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.specs.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Whether every marker has a recorded receiver.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.specs.iter().all(Option::is_some)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_primitives::{ColumnKind, CqlType, ScalarKind};

    fn receiver(name: &str) -> ColumnDescriptor {
        ColumnDescriptor::new(name, ColumnKind::Ordinary, CqlType::Scalar(ScalarKind::Int))
    }

    #[test]
    fn get_distinguishes_bound_absence_from_out_of_range() {
        let values = BindValues::new()
            .push(None)
            .unwrap()
            .push(Some(Literal::scalar(b"1".to_vec())))
            .unwrap();

        assert_eq!(values.len(), 2);
        assert!(!values.is_empty());
        assert_eq!(values.get(0), Ok(None));
        assert_eq!(values.get(1), Ok(Some(&Literal::scalar(b"1".to_vec()))));
        assert_eq!(values.get(2), Err(BindError::OutOfRange { index: 2, len: 2 }));
    }

    #[test]
    fn try_from_values_enforces_the_protocol_bound() {
        let too_many = vec![None; MAX_BIND_VALUES + 1];

        assert_eq!(
            BindValues::try_from_values(too_many),
            Err(BindError::TooMany {
                len: MAX_BIND_VALUES + 1
            })
        );
        assert!(BindValues::try_from_values(vec![None; MAX_BIND_VALUES]).is_ok());
    }

    #[test]
    fn registry_records_and_grows_by_marker_index() {
        let mut registry = BindVariables::new(1);
        assert!(!registry.is_complete());

        registry.add(0, receiver("a"));
        assert!(registry.is_complete());

        registry.add(2, receiver("b"));
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_complete());
        assert_eq!(registry.get(2).map(ColumnDescriptor::name), Some("b"));
        assert_eq!(registry.get(1), None);
    }

    #[test]
    fn registry_serializes_receivers_by_position() {
        let mut registry = BindVariables::new(2);
        registry.add(1, receiver("score"));

        let json = serde_json::to_value(&registry).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "specs": [
                    null,
                    {
                        "name": "score",
                        "kind": "ordinary",
                        "cql_type": { "scalar": "int" },
                    },
                ],
            })
        );
    }
}
