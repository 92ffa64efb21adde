//! Coerced field values
//!
//! Raw input arrives as untyped JSON. After presence and type coercion each
//! present field holds one [`FieldValue`].

use std::fmt;

use serde_json::{Number, Value};

/// Primitive kind a field is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FieldKind {
    /// Free text, trimmed by default.
    Text,
    /// Finite floating-point number.
    Number,
    /// `true` / `false`.
    Boolean,
    /// Text restricted to an allowed set of codes.
    Enumeration,
}

impl FieldKind {
    /// Whether values of this kind are strings.
    pub fn is_textual(self) -> bool {
        matches!(self, FieldKind::Text | FieldKind::Enumeration)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Enumeration => "enumeration",
        };
        f.write_str(name)
    }
}

/// A present, coerced field value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FieldValue {
    /// Text or enumeration code.
    Text(String),
    /// Finite number.
    Number(f64),
    /// Boolean flag.
    Bool(bool),
}

impl FieldValue {
    /// Coerce a raw JSON value into `kind`.
    ///
    /// Returns `None` when the value has the wrong representational kind,
    /// including numbers that do not fit a finite `f64`.
    ///
    /// # Example
    ///
    /// ```
    /// use gudang::{FieldKind, FieldValue};
    /// use serde_json::json;
    ///
    /// assert_eq!(
    ///     FieldValue::coerce(&json!("  Hidrolik "), FieldKind::Text, true),
    ///     Some(FieldValue::Text("Hidrolik".into()))
    /// );
    /// assert_eq!(FieldValue::coerce(&json!(12), FieldKind::Text, true), None);
    /// ```
    pub fn coerce(raw: &Value, kind: FieldKind, trim: bool) -> Option<Self> {
        match (kind, raw) {
            (FieldKind::Text | FieldKind::Enumeration, Value::String(s)) => {
                let text = if trim { s.trim() } else { s.as_str() };
                Some(FieldValue::Text(text.to_owned()))
            }
            (FieldKind::Number, Value::Number(n)) => {
                n.as_f64().filter(|f| f.is_finite()).map(FieldValue::Number)
            }
            (FieldKind::Boolean, Value::Bool(b)) => Some(FieldValue::Bool(*b)),
            _ => None,
        }
    }

    /// The text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The number, if this is a numeric value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The flag, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Convert back to JSON.
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Text(s) => Value::String(s.clone()),
            // Finite by construction; NaN/inf never reach here.
            FieldValue::Number(n) => Number::from_f64(*n).map_or(Value::Null, Value::Number),
            FieldValue::Bool(b) => Value::Bool(*b),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Bool(b) => write!(f, "{}", b),
        }
    }
}
