//! Field rules
//!
//! A [`FieldRule`] is one entry of a schema: a name, a primitive kind, a
//! presence policy, and an ordered list of checks. Rules are plain data
//! built with chained methods and handed to
//! [`SchemaBuilder::field`](super::SchemaBuilder::field).
//!
//! ```rust
//! use gudang::FieldRule;
//!
//! let phone = FieldRule::text("phone")
//!     .optional()
//!     .max_length(20, "Nomor telepon maksimal 20 karakter");
//! assert!(!phone.is_required());
//! ```

use regex::Regex;
use serde_json::Value;

use super::constraint::{Check, Constraint, Format};
use crate::value::{FieldKind, FieldValue};

/// Message used for a mistyped optional field that configured none.
pub const DEFAULT_TYPE_MESSAGE: &str = "Tipe data tidak valid";

/// Whether a field must hold a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presence {
    /// Absent values fail with `message`.
    Required {
        /// Reported when the field is absent
        message: String,
    },
    /// Absent values normalize to "not present".
    Optional,
}

/// Declaration of one field.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub(crate) name: String,
    pub(crate) kind: FieldKind,
    pub(crate) presence: Presence,
    pub(crate) empty_sentinels: Vec<String>,
    pub(crate) trim: bool,
    pub(crate) type_message: Option<String>,
    pub(crate) checks: Vec<Check>,
    // First pattern that failed to compile; reported by `SchemaBuilder::build`.
    pub(crate) pattern_error: Option<String>,
}

impl FieldRule {
    fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            presence: Presence::Optional,
            empty_sentinels: vec![String::new()],
            trim: true,
            type_message: None,
            checks: Vec::new(),
            pattern_error: None,
        }
    }

    /// A text field, optional and trimmed until configured otherwise.
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    /// A numeric field.
    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Number)
    }

    /// A boolean field.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    /// A text field restricted to `allowed` codes.
    ///
    /// The membership check is declared first, ahead of any later checks.
    ///
    /// ```rust
    /// use gudang::FieldRule;
    ///
    /// let status = FieldRule::enumeration("status", ["AKTIF", "NONAKTIF"], "Status tidak valid")
    ///     .required("Status wajib diisi");
    /// assert_eq!(status.checks().len(), 1);
    /// ```
    pub fn enumeration<I, S>(name: impl Into<String>, allowed: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(name, FieldKind::Enumeration).one_of(allowed, message)
    }

    /// Make the field required; `message` is reported when it is absent.
    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.presence = Presence::Required {
            message: message.into(),
        };
        self
    }

    /// Make the field optional (the default).
    pub fn optional(mut self) -> Self {
        self.presence = Presence::Optional;
        self
    }

    /// Treat `sentinel` as absence, in addition to missing keys, `null`, and
    /// the empty string.
    pub fn empty_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.empty_sentinels.push(sentinel.into());
        self
    }

    /// Keep surrounding whitespace instead of trimming text.
    pub fn no_trim(mut self) -> Self {
        self.trim = false;
        self
    }

    /// Message for a value of the wrong representational kind.
    pub fn type_message(mut self, message: impl Into<String>) -> Self {
        self.type_message = Some(message.into());
        self
    }

    /// Add a check with its failure message.
    pub fn check(mut self, constraint: Constraint, message: impl Into<String>) -> Self {
        self.checks.push(Check {
            constraint,
            message: message.into(),
        });
        self
    }

    /// At least `min` characters.
    pub fn min_length(self, min: usize, message: impl Into<String>) -> Self {
        self.check(Constraint::MinLength(min), message)
    }

    /// At most `max` characters.
    pub fn max_length(self, max: usize, message: impl Into<String>) -> Self {
        self.check(Constraint::MaxLength(max), message)
    }

    /// Inclusive numeric range.
    pub fn range(self, min: f64, max: f64, message: impl Into<String>) -> Self {
        self.check(
            Constraint::Range {
                min: Some(min),
                max: Some(max),
            },
            message,
        )
    }

    /// Numeric lower bound.
    pub fn min(self, min: f64, message: impl Into<String>) -> Self {
        self.check(
            Constraint::Range {
                min: Some(min),
                max: None,
            },
            message,
        )
    }

    /// Numeric upper bound.
    pub fn max(self, max: f64, message: impl Into<String>) -> Self {
        self.check(
            Constraint::Range {
                min: None,
                max: Some(max),
            },
            message,
        )
    }

    /// Email format.
    pub fn email(self, message: impl Into<String>) -> Self {
        self.check(Constraint::Format(Format::Email), message)
    }

    /// Regular-expression format.
    ///
    /// An invalid pattern is not reported here; `SchemaBuilder::build` fails
    /// with [`SchemaError::InvalidPattern`](crate::SchemaError::InvalidPattern).
    pub fn pattern(mut self, pattern: &str, message: impl Into<String>) -> Self {
        match Regex::new(pattern) {
            Ok(regex) => self.check(Constraint::Format(Format::Pattern(regex)), message),
            Err(e) => {
                if self.pattern_error.is_none() {
                    self.pattern_error = Some(e.to_string());
                }
                self
            }
        }
    }

    /// Membership in an allowed set.
    pub fn one_of<I, S>(self, allowed: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed = allowed.into_iter().map(Into::into).collect();
        self.check(Constraint::OneOf(allowed), message)
    }

    /// Field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared kind.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Presence policy.
    pub fn presence(&self) -> &Presence {
        &self.presence
    }

    /// Whether the field is required.
    pub fn is_required(&self) -> bool {
        matches!(self.presence, Presence::Required { .. })
    }

    /// Whether text values are trimmed.
    pub fn trims(&self) -> bool {
        self.trim
    }

    /// Checks, in declaration order.
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Message for a mistyped value: the configured one, else the required
    /// message, else [`DEFAULT_TYPE_MESSAGE`].
    pub fn resolved_type_message(&self) -> &str {
        match (&self.type_message, &self.presence) {
            (Some(message), _) => message.as_str(),
            (None, Presence::Required { message }) => message.as_str(),
            (None, Presence::Optional) => DEFAULT_TYPE_MESSAGE,
        }
    }

    /// Whether a raw value counts as absent.
    pub(crate) fn is_absent_raw(&self, raw: &Value) -> bool {
        match raw {
            Value::Null => true,
            Value::String(s) => self.is_sentinel(s),
            _ => false,
        }
    }

    /// Whether a coerced value counts as absent; catches whitespace-only
    /// text that trims down to a sentinel.
    pub(crate) fn is_absent_value(&self, value: &FieldValue) -> bool {
        value.as_text().is_some_and(|s| self.is_sentinel(s))
    }

    fn is_sentinel(&self, s: &str) -> bool {
        self.empty_sentinels.iter().any(|sentinel| sentinel == s)
    }
}
