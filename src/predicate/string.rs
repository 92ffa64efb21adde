//! String predicates
//!
//! Lengths are counted in characters (Unicode scalar values), not bytes, so
//! "Jalan Sudirman No. 5" and an address with accented or non-Latin
//! characters are measured the way a user would count them.

use once_cell::sync::Lazy;
use regex::Regex;

use super::combinators::{Predicate, PredicateExt};

/// Predicate that checks string length, in characters, is in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LenBetween {
    min: usize,
    max: usize,
}

impl Predicate<str> for LenBetween {
    #[inline]
    fn check(&self, value: &str) -> bool {
        let len = value.chars().count();
        len >= self.min && len <= self.max
    }
}

/// Create a predicate that checks if length is between min and max (inclusive).
///
/// # Example
///
/// ```rust
/// use gudang::predicate::*;
///
/// let p = len_between(1, 5);
/// assert!(!p.check(""));
/// assert!(p.check("Baut"));
/// assert!(p.check("Gésék"));
/// assert!(!p.check("Bearing"));
/// ```
pub fn len_between(min: usize, max: usize) -> LenBetween {
    LenBetween { min, max }
}

/// Create a predicate that checks if length is at least min.
pub fn len_min(min: usize) -> LenBetween {
    LenBetween {
        min,
        max: usize::MAX,
    }
}

/// Create a predicate that checks if length is at most max.
///
/// # Example
///
/// ```rust
/// use gudang::predicate::*;
///
/// assert!(len_max(20).check("081234567890"));
/// assert!(!len_max(20).check("12345678901234567890123"));
/// ```
pub fn len_max(max: usize) -> LenBetween {
    LenBetween { min: 0, max }
}

/// Predicate that checks if a string starts with a prefix.
#[derive(Clone, Debug)]
pub struct StartsWith<S>(pub S);

impl<S: AsRef<str> + Send + Sync> Predicate<str> for StartsWith<S> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.starts_with(self.0.as_ref())
    }
}

/// Create a predicate that checks if a string starts with prefix.
pub fn starts_with<S: AsRef<str> + Send + Sync>(prefix: S) -> StartsWith<S> {
    StartsWith(prefix)
}

/// Predicate that checks if a string contains a substring.
#[derive(Clone, Debug)]
pub struct Contains<S>(pub S);

impl<S: AsRef<str> + Send + Sync> Predicate<str> for Contains<S> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.contains(self.0.as_ref())
    }
}

/// Create a predicate that checks if a string contains substring.
pub fn contains<S: AsRef<str> + Send + Sync>(substring: S) -> Contains<S> {
    Contains(substring)
}

/// Predicate that checks a string against a regular expression.
#[derive(Clone, Debug)]
pub struct Matches<'a>(pub &'a Regex);

impl Predicate<str> for Matches<'_> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.0.is_match(value)
    }
}

/// Create a predicate that checks if the regex matches the string.
pub fn matches(regex: &Regex) -> Matches<'_> {
    Matches(regex)
}

// Local part may not start with a dot or end with one; domain labels need a
// TLD of at least two letters. Leading-dot and ".." are rejected separately
// since `regex` has no lookahead.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("Failed to compile email regex")
});

/// Predicate for a plausible email address.
#[derive(Clone, Copy, Debug, Default)]
pub struct IsEmail;

impl Predicate<str> for IsEmail {
    fn check(&self, value: &str) -> bool {
        starts_with(".")
            .not()
            .and(contains("..").not())
            .and(matches(&EMAIL_SHAPE))
            .check(value)
    }
}

/// Create a predicate that checks for an email address.
///
/// # Example
///
/// ```rust
/// use gudang::predicate::*;
///
/// assert!(is_email().check("a@b.com"));
/// assert!(is_email().check("purchasing+sparepart@pt-alat-berat.co.id"));
/// assert!(!is_email().check("not-an-email"));
/// assert!(!is_email().check(".budi@mail.com"));
/// ```
pub fn is_email() -> IsEmail {
    IsEmail
}
