use crate::{bind::BindError, name::NameError};
use std::fmt;
use tessera_primitives::ColumnDescriptor;
use thiserror::Error as ThisError;

///
/// ConditionError
///
/// Structured condition-engine error with a stable internal classification.
/// A failed condition check is never an error; it is the normal `Ok(false)`
/// verdict. Errors abort the enclosing CAS attempt.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct ConditionError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl ConditionError {
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
        }
    }

    /// Construct the canonical rejection for a condition targeting a
    /// column type with no byte-stable comparable representation.
    pub(crate) fn unsupported_condition_target(column: &ColumnDescriptor) -> Self {
        Self::new(
            ErrorClass::Unsupported,
            ErrorOrigin::Prepare,
            format!(
                "conditions are not supported on counter column '{}'",
                column.name()
            ),
        )
    }

    /// Construct a prepare-origin invalid-request error.
    pub(crate) fn prepare_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Invalid, ErrorOrigin::Prepare, message.into())
    }

    /// Construct a condition-origin invariant violation.
    pub(crate) fn condition_invariant(message: impl Into<String>) -> Self {
        Self::new(
            ErrorClass::InvariantViolation,
            ErrorOrigin::Condition,
            message.into(),
        )
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

impl From<NameError> for ConditionError {
    fn from(err: NameError) -> Self {
        Self::new(ErrorClass::Corruption, ErrorOrigin::Name, err.to_string())
    }
}

impl From<BindError> for ConditionError {
    fn from(err: BindError) -> Self {
        Self::new(ErrorClass::Invalid, ErrorOrigin::Bind, err.to_string())
    }
}

///
/// ErrorClass
/// Internal error taxonomy for runtime classification.
/// Not a stable API; may change without notice.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Corruption,
    Invalid,
    Unsupported,
    InvariantViolation,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Corruption => "corruption",
            Self::Invalid => "invalid",
            Self::Unsupported => "unsupported",
            Self::InvariantViolation => "invariant_violation",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Internal origin taxonomy for runtime classification.
/// Not a stable API; may change without notice.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Prepare,
    Bind,
    Condition,
    Name,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Prepare => "prepare",
            Self::Bind => "bind",
            Self::Condition => "condition",
            Self::Name => "name",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///
