//! Schemas: ordered, immutable collections of field rules
//!
//! A [`Schema`] is built once, checked for internal consistency by
//! [`SchemaBuilder::build`], and never mutated afterwards. It is `Send +
//! Sync`, so a single instance can serve every request thread.
//!
//! # Example
//!
//! ```rust
//! use gudang::{FieldRule, Schema, Validation};
//! use serde_json::json;
//!
//! let schema = Schema::builder("sparepart")
//!     .field(
//!         FieldRule::text("code")
//!             .required("Kode wajib diisi")
//!             .pattern(r"^SP-\d{4}$", "Kode harus berformat SP-0000"),
//!     )
//!     .field(FieldRule::number("stock").min(0.0, "Stok tidak boleh negatif"))
//!     .build()
//!     .unwrap();
//!
//! let result = schema.validate(&json!({"code": "SP-0042", "stock": 3}));
//! assert!(result.is_success());
//! ```

mod constraint;
mod field;

use std::collections::HashSet;

use serde_json::Value;

pub use constraint::{Check, Constraint, Format};
pub use field::{FieldRule, Presence, DEFAULT_TYPE_MESSAGE};

use crate::engine::{self, ValidationResult};
use crate::error::SchemaError;

/// A named, ordered set of field rules.
#[derive(Debug, Clone)]
pub struct Schema {
    name: String,
    fields: Vec<FieldRule>,
}

impl Schema {
    /// Start declaring a schema.
    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Schema name, used in logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field rules, in declaration order.
    pub fn fields(&self) -> &[FieldRule] {
        &self.fields
    }

    /// Look up a field rule by name.
    pub fn field(&self, name: &str) -> Option<&FieldRule> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Validate an untyped record against this schema.
    ///
    /// Same as [`validate`](crate::validate).
    pub fn validate(&self, raw: &Value) -> ValidationResult {
        engine::validate(self, raw)
    }
}

/// Accumulates field rules until [`build`](SchemaBuilder::build).
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    name: String,
    fields: Vec<FieldRule>,
}

impl SchemaBuilder {
    /// Append a field rule.
    pub fn field(mut self, rule: FieldRule) -> Self {
        self.fields.push(rule);
        self
    }

    /// Check the declaration and freeze it into a [`Schema`].
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemaError`] found, checking fields in
    /// declaration order.
    pub fn build(self) -> Result<Schema, SchemaError> {
        if self.name.trim().is_empty() {
            return Err(SchemaError::EmptySchemaName);
        }

        {
            let mut seen = HashSet::new();
            for rule in &self.fields {
                if rule.name().trim().is_empty() {
                    return Err(SchemaError::EmptyFieldName {
                        schema: self.name.clone(),
                    });
                }
                if !seen.insert(rule.name()) {
                    return Err(SchemaError::DuplicateField {
                        schema: self.name.clone(),
                        field: rule.name().to_owned(),
                    });
                }
                check_rule(rule)?;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(schema = %self.name, fields = self.fields.len(), "schema built");

        Ok(Schema {
            name: self.name,
            fields: self.fields,
        })
    }
}

fn check_rule(rule: &FieldRule) -> Result<(), SchemaError> {
    let field = || rule.name().to_owned();

    if let Some(reason) = &rule.pattern_error {
        return Err(SchemaError::InvalidPattern {
            field: field(),
            reason: reason.clone(),
        });
    }

    if let Presence::Required { message } = rule.presence() {
        if message.trim().is_empty() {
            return Err(SchemaError::EmptyMessage {
                field: field(),
                rule: "required",
            });
        }
    }
    if rule.type_message.as_deref().is_some_and(|m| m.trim().is_empty()) {
        return Err(SchemaError::EmptyMessage {
            field: field(),
            rule: "type",
        });
    }

    let mut min_len: usize = 0;
    let mut max_len: usize = usize::MAX;
    let mut min_num = f64::NEG_INFINITY;
    let mut max_num = f64::INFINITY;
    let mut has_allowed_set = false;

    for check in rule.checks() {
        let constraint = check.constraint();
        if !constraint.applies_to(rule.kind()) {
            return Err(SchemaError::ConstraintKindMismatch {
                field: field(),
                constraint: constraint.name(),
                kind: rule.kind(),
            });
        }
        if check.message().trim().is_empty() {
            return Err(SchemaError::EmptyMessage {
                field: field(),
                rule: constraint.name(),
            });
        }

        match constraint {
            Constraint::MinLength(min) => min_len = min_len.max(*min),
            Constraint::MaxLength(max) => max_len = max_len.min(*max),
            Constraint::Range { min, max } => {
                for bound in min.iter().chain(max.iter()) {
                    if !bound.is_finite() {
                        return Err(SchemaError::NonFiniteBound { field: field() });
                    }
                }
                if let Some(min) = min {
                    min_num = min_num.max(*min);
                }
                if let Some(max) = max {
                    max_num = max_num.min(*max);
                }
            }
            Constraint::OneOf(allowed) => {
                if allowed.is_empty() {
                    return Err(SchemaError::EmptyAllowedSet { field: field() });
                }
                has_allowed_set = true;
            }
            Constraint::Format(_) => {}
        }
    }

    if min_len > max_len {
        return Err(SchemaError::ConflictingBounds {
            field: field(),
            min: min_len.to_string(),
            max: max_len.to_string(),
        });
    }
    if min_num > max_num {
        return Err(SchemaError::ConflictingBounds {
            field: field(),
            min: min_num.to_string(),
            max: max_num.to_string(),
        });
    }
    if rule.kind() == crate::FieldKind::Enumeration && !has_allowed_set {
        return Err(SchemaError::EmptyAllowedSet { field: field() });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldKind;

    fn build(rule: FieldRule) -> Result<Schema, SchemaError> {
        Schema::builder("test").field(rule).build()
    }

    #[test]
    fn test_build_keeps_declaration_order() {
        let schema = Schema::builder("supplier")
            .field(FieldRule::text("name").required("wajib"))
            .field(FieldRule::text("phone"))
            .field(FieldRule::text("email"))
            .build()
            .unwrap();
        let names: Vec<_> = schema.fields().iter().map(FieldRule::name).collect();
        assert_eq!(names, vec!["name", "phone", "email"]);
        assert_eq!(schema.name(), "supplier");
        assert!(schema.field("phone").is_some());
        assert!(schema.field("fax").is_none());
    }

    #[test]
    fn test_rejects_empty_names() {
        assert_eq!(
            Schema::builder(" ").build().unwrap_err(),
            SchemaError::EmptySchemaName
        );
        assert!(matches!(
            build(FieldRule::text("")),
            Err(SchemaError::EmptyFieldName { .. })
        ));
    }

    #[test]
    fn test_rejects_duplicate_field() {
        let err = Schema::builder("category")
            .field(FieldRule::text("name"))
            .field(FieldRule::text("name"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::DuplicateField {
                schema: "category".into(),
                field: "name".into(),
            }
        );
    }

    #[test]
    fn test_rejects_constraint_on_wrong_kind() {
        let err = build(FieldRule::number("stock").max_length(3, "x")).unwrap_err();
        assert_eq!(
            err,
            SchemaError::ConstraintKindMismatch {
                field: "stock".into(),
                constraint: "max_length",
                kind: FieldKind::Number,
            }
        );
        assert!(build(FieldRule::text("name").min(1.0, "x")).is_err());
        assert!(build(FieldRule::boolean("active").one_of(["true"], "x")).is_err());
        assert!(build(FieldRule::boolean("active").email("x")).is_err());
    }

    #[test]
    fn test_rejects_conflicting_bounds() {
        assert!(matches!(
            build(FieldRule::text("name").min_length(10, "a").max_length(5, "b")),
            Err(SchemaError::ConflictingBounds { .. })
        ));
        assert!(matches!(
            build(FieldRule::number("qty").range(10.0, 1.0, "a")),
            Err(SchemaError::ConflictingBounds { .. })
        ));
        assert!(matches!(
            build(FieldRule::number("qty").min(5.0, "a").max(4.0, "b")),
            Err(SchemaError::ConflictingBounds { .. })
        ));
        assert!(build(FieldRule::number("qty").range(1.0, 1.0, "a")).is_ok());
    }

    #[test]
    fn test_rejects_non_finite_bound() {
        assert_eq!(
            build(FieldRule::number("qty").max(f64::NAN, "a")).unwrap_err(),
            SchemaError::NonFiniteBound { field: "qty".into() }
        );
    }

    #[test]
    fn test_rejects_empty_allowed_set() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            build(FieldRule::enumeration("status", empty, "x")),
            Err(SchemaError::EmptyAllowedSet { .. })
        ));
    }

    #[test]
    fn test_rejects_invalid_pattern() {
        assert!(matches!(
            build(FieldRule::text("code").pattern("[a-", "x")),
            Err(SchemaError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_messages() {
        assert_eq!(
            build(FieldRule::text("name").required("")).unwrap_err(),
            SchemaError::EmptyMessage {
                field: "name".into(),
                rule: "required",
            }
        );
        assert_eq!(
            build(FieldRule::text("name").max_length(5, " ")).unwrap_err(),
            SchemaError::EmptyMessage {
                field: "name".into(),
                rule: "max_length",
            }
        );
        assert!(build(FieldRule::text("name").type_message("")).is_err());
    }

    #[test]
    fn test_schema_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Schema>();
    }
}
