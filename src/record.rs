//! Normalized output of a successful validation

use serde_json::{Map, Value};

use crate::value::FieldValue;

/// Field name to coerced value, in schema declaration order.
///
/// Holds exactly one entry per declared field: `Some` for present values,
/// `None` for optional fields that were absent (missing, `null`, or an
/// empty sentinel such as `""`). Only the engine builds these.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    entries: Vec<(String, Option<FieldValue>)>,
}

impl NormalizedRecord {
    pub(crate) fn from_entries(entries: Vec<(String, Option<FieldValue>)>) -> Self {
        Self { entries }
    }

    /// Value of `field`; `None` if absent or not declared.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .and_then(|(_, value)| value.as_ref())
    }

    /// Text value of `field`, if present and textual.
    pub fn get_text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_text)
    }

    /// Numeric value of `field`, if present and numeric.
    pub fn get_number(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(FieldValue::as_number)
    }

    /// Boolean value of `field`, if present and boolean.
    pub fn get_bool(&self, field: &str) -> Option<bool> {
        self.get(field).and_then(FieldValue::as_bool)
    }

    /// Whether `field` is declared by the schema this record came from.
    pub fn contains_field(&self, field: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == field)
    }

    /// Whether `field` holds a value.
    pub fn is_present(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Declared field names, in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// All entries, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&FieldValue>)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_ref()))
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schema declared no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// JSON object with exactly the declared keys; absent fields become `null`.
    ///
    /// Feeding the result back through the same schema yields an identical
    /// record.
    pub fn to_json(&self) -> Value {
        let object: Map<String, Value> = self
            .entries
            .iter()
            .map(|(name, value)| {
                let json = value.as_ref().map_or(Value::Null, FieldValue::to_json);
                (name.clone(), json)
            })
            .collect();
        Value::Object(object)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for NormalizedRecord {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
