//! Spare-part category

use once_cell::sync::Lazy;
use serde_json::Value;

use super::required_text;
use crate::error::{FieldErrors, SchemaError};
use crate::record::NormalizedRecord;
use crate::schema::{FieldRule, Schema};
use crate::validation::Validation;

/// Messages shown to users.
pub mod messages {
    /// Name missing or blank.
    pub const NAME_REQUIRED: &str = "Nama kategori wajib diisi";
    /// Name over 100 characters.
    pub const NAME_TOO_LONG: &str = "Nama kategori maksimal 100 karakter";
}

/// Maximum category name length, in characters.
pub const NAME_MAX_LEN: usize = 100;

static SCHEMA: Lazy<Schema> =
    Lazy::new(|| define().expect("category schema definition is well-formed"));

/// Declare the category schema.
pub fn define() -> Result<Schema, SchemaError> {
    Schema::builder("category")
        .field(
            FieldRule::text("name")
                .required(messages::NAME_REQUIRED)
                .min_length(1, messages::NAME_REQUIRED)
                .max_length(NAME_MAX_LEN, messages::NAME_TOO_LONG),
        )
        .build()
}

/// The category schema, built on first use.
pub fn category_schema() -> &'static Schema {
    &SCHEMA
}

/// A validated category.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CategoryInput {
    /// Trimmed name, 1 to 100 characters
    pub name: String,
}

impl CategoryInput {
    /// Validate an untyped record and decode it.
    pub fn validate(raw: &Value) -> Validation<Self, FieldErrors> {
        category_schema()
            .validate(raw)
            .and_then(|record| Self::try_from(&record).into())
    }
}

impl TryFrom<&NormalizedRecord> for CategoryInput {
    type Error = FieldErrors;

    fn try_from(record: &NormalizedRecord) -> Result<Self, Self::Error> {
        required_text(record, "name")
            .map(|name| CategoryInput { name })
            .into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_definition_is_well_formed() {
        assert!(define().is_ok());
    }

    #[test]
    fn test_valid_name_is_trimmed() {
        let category = CategoryInput::validate(&json!({"name": "  Filter  "}))
            .ok()
            .unwrap();
        assert_eq!(category.name, "Filter");
    }

    #[test]
    fn test_boundary_lengths() {
        let exact = "a".repeat(NAME_MAX_LEN);
        assert!(CategoryInput::validate(&json!({ "name": exact })).is_success());

        let over = "a".repeat(NAME_MAX_LEN + 1);
        let errors = CategoryInput::validate(&json!({ "name": over })).err().unwrap();
        assert_eq!(errors.head().message, messages::NAME_TOO_LONG);
    }

    #[test]
    fn test_blank_name_is_required_error() {
        for raw in [json!({}), json!({"name": ""}), json!({"name": "   "}), json!({"name": null})] {
            let errors = CategoryInput::validate(&raw).err().unwrap();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.head().field, "name");
            assert_eq!(errors.head().message, messages::NAME_REQUIRED);
        }
    }

    #[test]
    fn test_decode_reports_missing_field() {
        let other = Schema::builder("other")
            .field(FieldRule::text("title"))
            .build()
            .unwrap();
        let record = other.validate(&json!({"title": "x"})).ok().unwrap();
        let errors = CategoryInput::try_from(&record).unwrap_err();
        assert_eq!(errors.head().field, "name");
    }
}
