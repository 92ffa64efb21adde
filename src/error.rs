//! Error types
//!
//! Two kinds of failure exist and they never mix:
//!
//! - [`FieldError`]: an input violated a constraint. Expected, reported as
//!   data inside [`Validation::Failure`](crate::Validation::Failure).
//! - [`SchemaError`]: a schema definition is malformed. Returned by
//!   [`SchemaBuilder::build`](crate::SchemaBuilder::build), so it surfaces
//!   at startup rather than per request.

use thiserror::Error;

use crate::nonempty::NonEmptyVec;
use crate::value::FieldKind;

/// A single constraint violation attributed to one field.
///
/// # Example
///
/// ```rust
/// use gudang::FieldError;
///
/// let err = FieldError::new("name", "Nama kategori wajib diisi");
/// assert_eq!(err.to_string(), "name: Nama kategori wajib diisi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{field}: {message}")]
pub struct FieldError {
    /// The field name
    pub field: String,
    /// Pre-localized, human-readable message
    pub message: String,
}

impl FieldError {
    /// Create a field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// The errors of an invalid record; never empty.
pub type FieldErrors = NonEmptyVec<FieldError>;

impl NonEmptyVec<FieldError> {
    /// The error reported for `field`, if any.
    ///
    /// At most one error is reported per field per validation.
    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.iter().find(|e| e.field == field)
    }

    /// Names of the failing fields, in schema order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|e| e.field.as_str())
    }

    /// Messages, in schema order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|e| e.message.as_str())
    }
}

/// A schema definition that can never validate anything correctly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The schema has no name.
    #[error("schema name must not be empty")]
    EmptySchemaName,

    /// A field was declared without a name.
    #[error("schema `{schema}` declares a field with an empty name")]
    EmptyFieldName {
        /// Schema being built
        schema: String,
    },

    /// The same field name was declared twice.
    #[error("schema `{schema}` declares field `{field}` more than once")]
    DuplicateField {
        /// Schema being built
        schema: String,
        /// Offending field
        field: String,
    },

    /// A constraint does not apply to the field's kind.
    #[error("field `{field}`: {constraint} constraint cannot apply to a {kind} field")]
    ConstraintKindMismatch {
        /// Offending field
        field: String,
        /// Constraint name
        constraint: &'static str,
        /// Declared kind
        kind: FieldKind,
    },

    /// Lower bound exceeds upper bound.
    #[error("field `{field}`: conflicting bounds, minimum {min} exceeds maximum {max}")]
    ConflictingBounds {
        /// Offending field
        field: String,
        /// Effective minimum
        min: String,
        /// Effective maximum
        max: String,
    },

    /// A numeric bound is NaN or infinite.
    #[error("field `{field}`: numeric bound must be finite")]
    NonFiniteBound {
        /// Offending field
        field: String,
    },

    /// An enumeration has no allowed values.
    #[error("field `{field}`: allowed value set is empty")]
    EmptyAllowedSet {
        /// Offending field
        field: String,
    },

    /// A regular expression failed to compile.
    #[error("field `{field}`: invalid pattern: {reason}")]
    InvalidPattern {
        /// Offending field
        field: String,
        /// Compiler message
        reason: String,
    },

    /// A rule has an empty message.
    #[error("field `{field}`: {rule} message must not be empty")]
    EmptyMessage {
        /// Offending field
        field: String,
        /// Which rule lacks a message
        rule: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_display() {
        let err = FieldError::new("email", "Format email tidak valid");
        assert_eq!(format!("{}", err), "email: Format email tidak valid");
    }

    #[test]
    fn test_field_errors_lookup() {
        let errors = NonEmptyVec::new(
            FieldError::new("name", "Nama supplier wajib diisi"),
            vec![FieldError::new("email", "Format email tidak valid")],
        );
        assert_eq!(
            errors.for_field("email").map(|e| e.message.as_str()),
            Some("Format email tidak valid")
        );
        assert!(errors.for_field("phone").is_none());
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["name", "email"]);
    }

    #[test]
    fn test_schema_error_display() {
        let err = SchemaError::ConstraintKindMismatch {
            field: "active".into(),
            constraint: "max_length",
            kind: FieldKind::Boolean,
        };
        assert_eq!(
            err.to_string(),
            "field `active`: max_length constraint cannot apply to a boolean field"
        );
    }
}
