//! Set-membership predicates

use super::combinators::Predicate;

/// Predicate that checks a string is one of an allowed set.
///
/// Comparison is exact (case-sensitive), matching how status and role codes
/// are stored.
#[derive(Clone, Debug)]
pub struct OneOf<'a>(pub &'a [String]);

impl Predicate<str> for OneOf<'_> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.0.iter().any(|allowed| allowed == value)
    }
}

/// Create a predicate that checks membership in `allowed`.
///
/// # Example
///
/// ```rust
/// use gudang::predicate::*;
///
/// let statuses = vec!["AKTIF".to_string(), "NONAKTIF".to_string()];
/// assert!(one_of(&statuses).check("AKTIF"));
/// assert!(!one_of(&statuses).check("aktif"));
/// ```
pub fn one_of(allowed: &[String]) -> OneOf<'_> {
    OneOf(allowed)
}
