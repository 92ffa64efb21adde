//! Validation integration for predicates

use super::combinators::Predicate;
use crate::Validation;

/// Validate a value using a predicate.
///
/// Returns `Validation::success(value)` if the predicate is satisfied,
/// otherwise returns `Validation::failure(error)`.
///
/// # Example
///
/// ```rust
/// use gudang::{Validation, predicate::*};
///
/// let result = validate("Filter Oli", &len_max(100), "terlalu panjang");
/// assert_eq!(result, Validation::success("Filter Oli"));
/// ```
pub fn validate<'a, T, E, P>(value: &'a T, predicate: &P, error: E) -> Validation<&'a T, E>
where
    T: ?Sized,
    P: Predicate<T> + ?Sized,
{
    if predicate.check(value) {
        Validation::success(value)
    } else {
        Validation::failure(error)
    }
}

/// Validate a value with an error factory.
///
/// The factory only runs on failure, so building the error can be as costly
/// as it needs to be.
pub fn validate_with<'a, T, E, P, F>(value: &'a T, predicate: &P, error_fn: F) -> Validation<&'a T, E>
where
    T: ?Sized,
    P: Predicate<T> + ?Sized,
    F: FnOnce(&T) -> E,
{
    if predicate.check(value) {
        Validation::success(value)
    } else {
        Validation::failure(error_fn(value))
    }
}
