//! The validation engine
//!
//! [`validate`] folds a [`Schema`] over an untyped record. Every field is
//! checked independently and in declaration order; within a field the
//! first failing check wins. Field failures are merged with
//! [`Semigroup`](crate::Semigroup), so the result lists at most one error per
//! field, ordered like the schema.
//!
//! The engine is pure: no I/O, no shared state, no panics on malformed
//! input. Any JSON value is accepted; a non-object is treated as a record
//! with no keys.

use serde_json::Value;

use crate::error::{FieldError, FieldErrors};
use crate::nonempty::NonEmptyVec;
use crate::predicate;
use crate::record::NormalizedRecord;
use crate::schema::{FieldRule, Presence, Schema};
use crate::validation::Validation;
use crate::value::FieldValue;

/// Outcome of validating one record.
///
/// `Success` carries the normalized record; `Failure` carries at least one
/// field error.
pub type ValidationResult = Validation<NormalizedRecord, FieldErrors>;

/// Validate `raw` against `schema`.
///
/// # Example
///
/// ```rust
/// use gudang::{entities, validate};
/// use serde_json::json;
///
/// let input = json!({"name": "", "phone": "12345678901234567890123", "email": "bad"});
/// let errors = validate(entities::supplier_schema(), &input).err().unwrap();
///
/// let fields: Vec<_> = errors.fields().collect();
/// assert_eq!(fields, vec!["name", "phone", "email"]);
/// ```
pub fn validate(schema: &Schema, raw: &Value) -> ValidationResult {
    let object = raw.as_object();

    let per_field = schema.fields().iter().map(|rule| {
        let raw_value = object.and_then(|o| o.get(rule.name()));
        validate_field(rule, raw_value).map(|value| (rule.name().to_owned(), value))
    });

    let result = Validation::all_vec(per_field).map(NormalizedRecord::from_entries);

    #[cfg(feature = "tracing")]
    match &result {
        Validation::Success(_) => {
            tracing::trace!(schema = %schema.name(), "record valid");
        }
        Validation::Failure(errors) => {
            tracing::debug!(
                schema = %schema.name(),
                errors = errors.len(),
                fields = ?errors.fields().collect::<Vec<_>>(),
                "record invalid"
            );
        }
    }

    result
}

/// Validate a single field.
///
/// `raw` is `None` when the key is missing. Success holds `None` for an
/// absent optional field.
pub fn validate_field(
    rule: &FieldRule,
    raw: Option<&Value>,
) -> Validation<Option<FieldValue>, FieldErrors> {
    let Some(raw) = raw.filter(|v| !rule.is_absent_raw(v)) else {
        return absent(rule);
    };

    let Some(value) = FieldValue::coerce(raw, rule.kind(), rule.trims()) else {
        return fail(rule, rule.resolved_type_message());
    };

    if rule.is_absent_value(&value) {
        return absent(rule);
    }

    rule.checks()
        .iter()
        .fold(Validation::success(&value), |acc, check| {
            acc.and_then(|v| {
                predicate::validate_with(v, check.constraint(), |_| {
                    field_errors(rule, check.message())
                })
            })
        })
        .map(|v| Some(v.clone()))
}

fn absent(rule: &FieldRule) -> Validation<Option<FieldValue>, FieldErrors> {
    match rule.presence() {
        Presence::Required { message } => fail(rule, message),
        Presence::Optional => Validation::success(None),
    }
}

fn fail<T>(rule: &FieldRule, message: &str) -> Validation<T, FieldErrors> {
    Validation::failure(field_errors(rule, message))
}

fn field_errors(rule: &FieldRule, message: &str) -> FieldErrors {
    NonEmptyVec::singleton(FieldError::new(rule.name(), message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sparepart() -> Schema {
        Schema::builder("sparepart")
            .field(
                FieldRule::text("code")
                    .required("Kode wajib diisi")
                    .min_length(3, "Kode minimal 3 karakter")
                    .pattern(r"^SP-\d+$", "Kode harus diawali SP-"),
            )
            .field(
                FieldRule::number("stock")
                    .required("Stok wajib diisi")
                    .type_message("Stok harus berupa angka")
                    .min(0.0, "Stok tidak boleh negatif"),
            )
            .field(FieldRule::boolean("active"))
            .field(
                FieldRule::enumeration("unit", ["PCS", "SET", "LITER"], "Satuan tidak valid")
                    .required("Satuan wajib diisi"),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_valid_record_is_normalized() {
        let record = validate(
            &sparepart(),
            &json!({"code": " SP-12 ", "stock": 4, "active": true, "unit": "SET"}),
        )
        .ok()
        .unwrap();

        assert_eq!(record.get_text("code"), Some("SP-12"));
        assert_eq!(record.get_number("stock"), Some(4.0));
        assert_eq!(record.get_bool("active"), Some(true));
        assert_eq!(record.get_text("unit"), Some("SET"));
    }

    #[test]
    fn test_extra_keys_are_dropped() {
        let record = validate(
            &sparepart(),
            &json!({"code": "SP-1", "stock": 0, "unit": "PCS", "injected": "x"}),
        )
        .ok()
        .unwrap();

        assert_eq!(record.len(), 4);
        assert!(!record.contains_field("injected"));
        assert!(!record.is_present("active"));
    }

    #[test]
    fn test_first_failing_check_wins() {
        let errors = validate(
            &sparepart(),
            &json!({"code": "X", "stock": 1, "unit": "PCS"}),
        )
        .err()
        .unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.head().message, "Kode minimal 3 karakter");
    }

    #[test]
    fn test_every_field_is_checked() {
        let errors = validate(&sparepart(), &json!({"stock": -1, "unit": "BOX"}))
            .err()
            .unwrap();
        let messages: Vec<_> = errors.messages().collect();
        assert_eq!(
            messages,
            vec!["Kode wajib diisi", "Stok tidak boleh negatif", "Satuan tidak valid"]
        );
    }

    #[test]
    fn test_wrong_kind_uses_type_message() {
        let errors = validate(
            &sparepart(),
            &json!({"code": {"$ne": ""}, "stock": "5", "active": "yes", "unit": ["PCS"]}),
        )
        .err()
        .unwrap();
        let pairs: Vec<_> = errors
            .iter()
            .map(|e| (e.field.as_str(), e.message.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("code", "Kode wajib diisi"),
                ("stock", "Stok harus berupa angka"),
                ("active", crate::schema::DEFAULT_TYPE_MESSAGE),
                ("unit", "Satuan wajib diisi"),
            ]
        );
    }

    #[test]
    fn test_non_object_input_means_all_absent() {
        for raw in [json!(null), json!("name"), json!(42), json!([1, 2])] {
            let errors = validate(&sparepart(), &raw).err().unwrap();
            let fields: Vec<_> = errors.fields().collect();
            assert_eq!(fields, vec!["code", "stock", "unit"]);
        }
    }

    #[test]
    fn test_null_and_sentinels_are_absent() {
        let rule = FieldRule::text("phone").empty_sentinel("-");
        for raw in [json!(null), json!(""), json!("-"), json!("   ")] {
            assert_eq!(
                validate_field(&rule, Some(&raw)),
                Validation::success(None)
            );
        }
        assert_eq!(validate_field(&rule, None), Validation::success(None));
    }

    #[test]
    fn test_whitespace_only_required_text_is_absent() {
        let rule = FieldRule::text("name").required("Nama wajib diisi");
        assert_eq!(
            validate_field(&rule, Some(&json!("   "))),
            Validation::failure(NonEmptyVec::singleton(FieldError::new(
                "name",
                "Nama wajib diisi"
            )))
        );
    }

    #[test]
    fn test_no_trim_keeps_whitespace() {
        let rule = FieldRule::text("note").no_trim().max_length(3, "Terlalu panjang");
        assert!(validate_field(&rule, Some(&json!(" ab "))).is_failure());
        assert_eq!(
            validate_field(&rule, Some(&json!(" a "))),
            Validation::success(Some(FieldValue::Text(" a ".into())))
        );
    }

    #[test]
    fn test_empty_schema_accepts_anything() {
        let schema = Schema::builder("empty").build().unwrap();
        let record = validate(&schema, &json!({"a": 1})).ok().unwrap();
        assert!(record.is_empty());
    }
}
