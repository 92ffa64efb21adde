//! Spare-part supplier
//!
//! Contact fields are optional. Forms submit untouched inputs as `""`, so
//! the empty string counts as "not provided" rather than as a zero-length
//! value.

use once_cell::sync::Lazy;
use serde_json::Value;

use super::{optional_text, required_text};
use crate::error::{FieldErrors, SchemaError};
use crate::record::NormalizedRecord;
use crate::schema::{FieldRule, Schema};
use crate::validation::Validation;

/// Messages shown to users.
pub mod messages {
    /// Name missing or blank.
    pub const NAME_REQUIRED: &str = "Nama supplier wajib diisi";
    /// Name over 100 characters.
    pub const NAME_TOO_LONG: &str = "Nama supplier maksimal 100 karakter";
    /// Phone over 20 characters.
    pub const PHONE_TOO_LONG: &str = "Nomor telepon maksimal 20 karakter";
    /// Email not an address.
    pub const EMAIL_INVALID: &str = "Format email tidak valid";
    /// Email over 100 characters.
    pub const EMAIL_TOO_LONG: &str = "Email maksimal 100 karakter";
    /// Address over 500 characters.
    pub const ADDRESS_TOO_LONG: &str = "Alamat maksimal 500 karakter";
}

/// Maximum name length, in characters.
pub const NAME_MAX_LEN: usize = 100;
/// Maximum phone length, in characters.
pub const PHONE_MAX_LEN: usize = 20;
/// Maximum email length, in characters.
pub const EMAIL_MAX_LEN: usize = 100;
/// Maximum address length, in characters.
pub const ADDRESS_MAX_LEN: usize = 500;

static SCHEMA: Lazy<Schema> =
    Lazy::new(|| define().expect("supplier schema definition is well-formed"));

/// Declare the supplier schema.
pub fn define() -> Result<Schema, SchemaError> {
    Schema::builder("supplier")
        .field(
            FieldRule::text("name")
                .required(messages::NAME_REQUIRED)
                .min_length(1, messages::NAME_REQUIRED)
                .max_length(NAME_MAX_LEN, messages::NAME_TOO_LONG),
        )
        .field(
            FieldRule::text("phone")
                .optional()
                .max_length(PHONE_MAX_LEN, messages::PHONE_TOO_LONG),
        )
        .field(
            FieldRule::text("email")
                .optional()
                .email(messages::EMAIL_INVALID)
                .max_length(EMAIL_MAX_LEN, messages::EMAIL_TOO_LONG),
        )
        .field(
            FieldRule::text("address")
                .optional()
                .max_length(ADDRESS_MAX_LEN, messages::ADDRESS_TOO_LONG),
        )
        .build()
}

/// The supplier schema, built on first use.
pub fn supplier_schema() -> &'static Schema {
    &SCHEMA
}

/// A validated supplier.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SupplierInput {
    /// Trimmed name, 1 to 100 characters
    pub name: String,
    /// Phone number, at most 20 characters
    pub phone: Option<String>,
    /// Email address, at most 100 characters
    pub email: Option<String>,
    /// Postal address, at most 500 characters
    pub address: Option<String>,
}

impl SupplierInput {
    /// Validate an untyped record and decode it.
    pub fn validate(raw: &Value) -> Validation<Self, FieldErrors> {
        supplier_schema()
            .validate(raw)
            .and_then(|record| Self::try_from(&record).into())
    }
}

impl TryFrom<&NormalizedRecord> for SupplierInput {
    type Error = FieldErrors;

    fn try_from(record: &NormalizedRecord) -> Result<Self, Self::Error> {
        required_text(record, "name")
            .and(optional_text(record, "phone"))
            .and(optional_text(record, "email"))
            .and(optional_text(record, "address"))
            .map(|(((name, phone), email), address)| SupplierInput {
                name,
                phone,
                email,
                address,
            })
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
    fn test_empty_contacts_are_absent() {
        let supplier = SupplierInput::validate(&json!({
            "name": "CV Hidrolik Prima",
            "phone": "",
            "email": "",
            "address": "",
        }))
        .ok()
        .unwrap();

        assert_eq!(
            supplier,
            SupplierInput {
                name: "CV Hidrolik Prima".into(),
                phone: None,
                email: None,
                address: None,
            }
        );
    }

    #[test]
    fn test_full_supplier() {
        let supplier = SupplierInput::validate(&json!({
            "name": "PT Sinar Teknik",
            "phone": "+62 21 555 0101",
            "email": "a@b.com",
            "address": "Jl. Industri Raya No. 7, Cikarang",
        }))
        .ok()
        .unwrap();

        assert_eq!(supplier.phone.as_deref(), Some("+62 21 555 0101"));
        assert_eq!(supplier.email.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_email_format_checked_before_length() {
        let long_bad = "x".repeat(EMAIL_MAX_LEN + 5);
        let errors = SupplierInput::validate(&json!({"name": "A", "email": long_bad}))
            .err()
            .unwrap();
        assert_eq!(errors.head().message, messages::EMAIL_INVALID);

        let long_good = format!("{}@gudang.co.id", "x".repeat(EMAIL_MAX_LEN));
        let errors = SupplierInput::validate(&json!({"name": "A", "email": long_good}))
            .err()
            .unwrap();
        assert_eq!(errors.head().message, messages::EMAIL_TOO_LONG);
    }

    #[test]
    fn test_address_limit() {
        let ok = "a".repeat(ADDRESS_MAX_LEN);
        assert!(SupplierInput::validate(&json!({"name": "A", "address": ok})).is_success());

        let over = "a".repeat(ADDRESS_MAX_LEN + 1);
        let errors = SupplierInput::validate(&json!({"name": "A", "address": over}))
            .err()
            .unwrap();
        assert_eq!(errors.head().field, "address");
        assert_eq!(errors.head().message, messages::ADDRESS_TOO_LONG);
    }

    #[test]
    fn test_non_text_contact_is_rejected() {
        let errors = SupplierInput::validate(&json!({"name": "A", "phone": 812345}))
            .err()
            .unwrap();
        assert_eq!(errors.head().field, "phone");
        assert_eq!(errors.head().message, crate::schema::DEFAULT_TYPE_MESSAGE);
    }
}
