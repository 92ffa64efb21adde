//! Constraint kinds a field rule can declare

use regex::Regex;

use crate::predicate::{self, Predicate};
use crate::value::{FieldKind, FieldValue};

/// A string format check.
#[derive(Debug, Clone)]
pub enum Format {
    /// Email address.
    Email,
    /// Caller-supplied regular expression; must match somewhere in the value
    /// unless anchored.
    Pattern(Regex),
}

/// One declared constraint.
///
/// Evaluated against an already-coerced value. A constraint applied to a
/// value of a kind it does not understand fails, though schema construction
/// rejects such pairings before any value is seen.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// At least this many characters.
    MinLength(usize),
    /// At most this many characters.
    MaxLength(usize),
    /// Inclusive numeric bounds; `None` leaves that side open.
    Range {
        /// Lower bound
        min: Option<f64>,
        /// Upper bound
        max: Option<f64>,
    },
    /// Textual format.
    Format(Format),
    /// Membership in an allowed set.
    OneOf(Vec<String>),
}

impl Constraint {
    /// Short name used in schema errors.
    pub fn name(&self) -> &'static str {
        match self {
            Constraint::MinLength(_) => "min_length",
            Constraint::MaxLength(_) => "max_length",
            Constraint::Range { .. } => "range",
            Constraint::Format(Format::Email) => "email",
            Constraint::Format(Format::Pattern(_)) => "pattern",
            Constraint::OneOf(_) => "one_of",
        }
    }

    /// Whether this constraint can apply to values of `kind`.
    pub fn applies_to(&self, kind: FieldKind) -> bool {
        match self {
            Constraint::MinLength(_)
            | Constraint::MaxLength(_)
            | Constraint::Format(_)
            | Constraint::OneOf(_) => kind.is_textual(),
            Constraint::Range { .. } => kind == FieldKind::Number,
        }
    }

    fn check_text(&self, text: &str) -> bool {
        match self {
            Constraint::MinLength(min) => predicate::len_min(*min).check(text),
            Constraint::MaxLength(max) => predicate::len_max(*max).check(text),
            Constraint::Format(Format::Email) => predicate::is_email().check(text),
            Constraint::Format(Format::Pattern(regex)) => predicate::matches(regex).check(text),
            Constraint::OneOf(allowed) => predicate::one_of(allowed).check(text),
            Constraint::Range { .. } => false,
        }
    }

    fn check_number(&self, n: f64) -> bool {
        match self {
            Constraint::Range {
                min: Some(min),
                max: Some(max),
            } => predicate::between(*min, *max).check(&n),
            Constraint::Range {
                min: Some(min),
                max: None,
            } => predicate::at_least(*min).check(&n),
            Constraint::Range {
                min: None,
                max: Some(max),
            } => predicate::at_most(*max).check(&n),
            Constraint::Range {
                min: None,
                max: None,
            } => n.is_finite(),
            _ => false,
        }
    }
}

impl Predicate<FieldValue> for Constraint {
    fn check(&self, value: &FieldValue) -> bool {
        match value {
            FieldValue::Text(text) => self.check_text(text),
            FieldValue::Number(n) => self.check_number(*n),
            FieldValue::Bool(_) => false,
        }
    }
}

/// A constraint paired with the message reported when it fails.
#[derive(Debug, Clone)]
pub struct Check {
    pub(crate) constraint: Constraint,
    pub(crate) message: String,
}

impl Check {
    /// The constraint.
    pub fn constraint(&self) -> &Constraint {
        &self.constraint
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    #[test]
    fn test_lengths() {
        assert!(Constraint::MinLength(1).check(&text("a")));
        assert!(!Constraint::MinLength(1).check(&text("")));
        assert!(Constraint::MaxLength(20).check(&text("12345678901234567890")));
        assert!(!Constraint::MaxLength(20).check(&text("123456789012345678901")));
    }

    #[test]
    fn test_formats() {
        let email = Constraint::Format(Format::Email);
        assert!(email.check(&text("a@b.com")));
        assert!(!email.check(&text("bad")));

        let code = Constraint::Format(Format::Pattern(Regex::new(r"^SP-\d{4}$").unwrap()));
        assert!(code.check(&text("SP-0042")));
        assert!(!code.check(&text("SP-42")));
    }

    #[test]
    fn test_range() {
        let stock = Constraint::Range {
            min: Some(0.0),
            max: None,
        };
        assert!(stock.check(&FieldValue::Number(0.0)));
        assert!(!stock.check(&FieldValue::Number(-1.0)));

        let discount = Constraint::Range {
            min: Some(0.0),
            max: Some(100.0),
        };
        assert!(!discount.check(&FieldValue::Number(100.5)));
    }

    #[test]
    fn test_one_of() {
        let status = Constraint::OneOf(vec!["AKTIF".into(), "NONAKTIF".into()]);
        assert!(status.check(&text("AKTIF")));
        assert!(!status.check(&text("HAPUS")));
    }

    #[test]
    fn test_mismatched_value_kind_fails() {
        assert!(!Constraint::MaxLength(5).check(&FieldValue::Number(1.0)));
        assert!(!Constraint::Range { min: None, max: None }.check(&text("1")));
        assert!(!Constraint::OneOf(vec!["true".into()]).check(&FieldValue::Bool(true)));
    }

    #[test]
    fn test_applies_to() {
        assert!(Constraint::MaxLength(1).applies_to(FieldKind::Enumeration));
        assert!(!Constraint::MaxLength(1).applies_to(FieldKind::Number));
        assert!(Constraint::Range { min: None, max: None }.applies_to(FieldKind::Number));
        assert!(!Constraint::OneOf(vec![]).applies_to(FieldKind::Boolean));
    }
}
