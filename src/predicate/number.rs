//! Number predicates
//!
//! Numeric fields arrive as JSON numbers and are compared as `f64`, but the
//! predicates stay generic over `PartialOrd` so integer quantities work too.

use super::combinators::Predicate;
use std::cmp::PartialOrd;

/// Predicate for greater than or equal.
#[derive(Clone, Copy, Debug)]
pub struct AtLeast<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for AtLeast<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.0
    }
}

/// Create a predicate that checks if value is at least the bound.
///
/// # Example
///
/// ```rust
/// use gudang::predicate::*;
///
/// assert!(at_least(0).check(&0));
/// assert!(!at_least(0).check(&-1));
/// ```
pub fn at_least<T: PartialOrd + Send + Sync>(bound: T) -> AtLeast<T> {
    AtLeast(bound)
}

/// Predicate for less than or equal.
#[derive(Clone, Copy, Debug)]
pub struct AtMost<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for AtMost<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value <= self.0
    }
}

/// Create a predicate that checks if value is at most the bound.
pub fn at_most<T: PartialOrd + Send + Sync>(bound: T) -> AtMost<T> {
    AtMost(bound)
}

/// Predicate for an inclusive range.
#[derive(Clone, Copy, Debug)]
pub struct Between<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Send + Sync> Predicate<T> for Between<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }
}

/// Create a predicate that checks if value is in `[min, max]`.
///
/// # Example
///
/// ```rust
/// use gudang::predicate::*;
///
/// let stock = between(0.0, 9_999.0);
/// assert!(stock.check(&12.0));
/// assert!(!stock.check(&-1.0));
/// ```
pub fn between<T: PartialOrd + Send + Sync>(min: T, max: T) -> Between<T> {
    Between { min, max }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(between(1, 10).check(&1));
        assert!(between(1, 10).check(&10));
        assert!(!between(1, 10).check(&11));
        assert!(at_most(5.5).check(&5.5));
    }

    #[test]
    fn test_nan_fails_every_bound() {
        assert!(!at_least(0.0).check(&f64::NAN));
        assert!(!at_most(0.0).check(&f64::NAN));
        assert!(!between(0.0, 1.0).check(&f64::NAN));
    }
}
