use std::fmt;

use crate::value::ValueKind;

/// Error kind for document parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Field present with a value of the wrong kind.
    TypeMismatch,
    /// Field required in its context but absent.
    MissingRequiredField,
    /// Field of the right kind holding an illegal value.
    InvalidValue,
}

/// Parse error, returned by every typed extraction and by command parsers.
///
/// `field` is the dotted path of the offending field, relative to the
/// document the error was raised against. Parents prepend their own name
/// via [`ParseError::with_context`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("field '{field}' must be of type {expected}, found {actual}")]
    TypeMismatch {
        field: String,
        expected: ValueKind,
        actual: ValueKind,
    },

    #[error("missing required field '{field}'")]
    MissingRequiredField { field: String },

    #[error("invalid value for field '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ParseError {
    pub fn type_mismatch(field: impl Into<String>, expected: ValueKind, actual: ValueKind) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingRequiredField { field: field.into() }
    }

    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            ParseError::MissingRequiredField { .. } => ErrorKind::MissingRequiredField,
            ParseError::InvalidValue { .. } => ErrorKind::InvalidValue,
        }
    }

    /// Dotted path of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ParseError::TypeMismatch { field, .. }
            | ParseError::MissingRequiredField { field }
            | ParseError::InvalidValue { field, .. } => field,
        }
    }

    /// Prefix the field path with a parent field name, preserving the kind.
    ///
    /// Produces: `"parent.field"`.
    pub fn with_context(self, parent: impl fmt::Display) -> Self {
        let nest = |field: String| format!("{parent}.{field}");
        match self {
            ParseError::TypeMismatch {
                field,
                expected,
                actual,
            } => ParseError::TypeMismatch {
                field: nest(field),
                expected,
                actual,
            },
            ParseError::MissingRequiredField { field } => {
                ParseError::MissingRequiredField { field: nest(field) }
            }
            ParseError::InvalidValue { field, reason } => ParseError::InvalidValue {
                field: nest(field),
                reason,
            },
        }
    }
}
