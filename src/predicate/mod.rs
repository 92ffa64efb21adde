//! Predicate combinators for composable validation logic
//!
//! Every constraint a schema can declare (length, numeric bounds, email
//! format, regex pattern, set membership) is checked through one of these
//! predicates. They are also usable on their own:
//!
//! ```rust
//! use gudang::predicate::*;
//!
//! let phone = len_max(20).and(|s: &str| s.chars().all(|c| c.is_ascii_digit() || c == '+'));
//! assert!(phone.check("+6281234567890"));
//! assert!(!phone.check("0812-3456"));
//! ```

mod combinators;
mod membership;
mod number;
mod string;
mod validation;

pub use combinators::{And, Not, Or, Predicate, PredicateExt};

pub use string::{
    contains, is_email, len_between, len_max, len_min, matches, starts_with, Contains, IsEmail,
    LenBetween, Matches, StartsWith,
};

pub use number::{at_least, at_most, between, AtLeast, AtMost, Between};

pub use membership::{one_of, OneOf};

pub use validation::{validate, validate_with};
