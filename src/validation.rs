//! Validation type for accumulating errors
//!
//! [`Validation`] is like `Result`, except that combining two failures keeps
//! both error sets instead of stopping at the first. The engine builds one
//! `Validation` per field and folds them together, which is how a supplier
//! record with a blank name *and* a malformed email reports both problems at
//! once.
//!
//! # Examples
//!
//! ```
//! use gudang::Validation;
//!
//! let name = Validation::<_, Vec<&str>>::success("Hidrolik");
//! let phone = Validation::<&str, _>::failure(vec!["Nomor telepon maksimal 20 karakter"]);
//! let email = Validation::<&str, _>::failure(vec!["Format email tidak valid"]);
//!
//! let result = name.and(phone).and(email);
//! assert_eq!(
//!     result,
//!     Validation::Failure(vec![
//!         "Nomor telepon maksimal 20 karakter",
//!         "Format email tidak valid",
//!     ])
//! );
//! ```

use crate::Semigroup;

/// A validation that either succeeds with a value or fails with accumulated errors
///
/// `Success` corresponds to a valid input and `Failure` to an invalid one.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value (must implement `Semigroup` for accumulation)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", content = "data", rename_all = "lowercase"))]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Create a validation from a Result
    ///
    /// # Examples
    ///
    /// ```
    /// use gudang::Validation;
    ///
    /// let v = Validation::from_result(Ok::<_, String>(42));
    /// assert_eq!(v, Validation::Success(42));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Convert this validation to a Result
    ///
    /// Handy at the boundary where a handler wants `?`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// The success value, if any
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Validation::Success(value) => Some(value),
            Validation::Failure(_) => None,
        }
    }

    /// The errors, if any
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Validation::Success(_) => None,
            Validation::Failure(error) => Some(error),
        }
    }

    /// Borrow the contents
    #[inline]
    pub fn as_ref(&self) -> Validation<&T, &E> {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the success value if present
    ///
    /// # Examples
    ///
    /// ```
    /// use gudang::Validation;
    ///
    /// let v = Validation::<_, String>::success("  Filter Oli ");
    /// assert_eq!(v.map(str::trim), Validation::Success("Filter Oli"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error value if present
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }
}

impl<T, E> From<Result<T, E>> for Validation<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Validation::from_result(result)
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two validations, accumulating errors using the Semigroup instance
    ///
    /// If both succeed, returns a tuple of both values. If either fails, the
    /// errors are combined left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use gudang::Validation;
    ///
    /// let v1 = Validation::<i32, _>::failure(vec!["name"]);
    /// let v2 = Validation::<i32, _>::failure(vec!["email"]);
    /// assert_eq!(v1.and(v2), Validation::Failure(vec!["name", "email"]));
    /// ```
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) => Validation::Failure(e),
            (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }

    /// Chain a dependent validation
    ///
    /// The function only runs when this validation succeeded. Used for
    /// fail-fast steps, such as decoding a typed value from a record that
    /// already passed its schema.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Combine a sequence of validations
    ///
    /// Returns all success values in order if every validation succeeded.
    /// Otherwise returns every error, combined in iteration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use gudang::Validation;
    ///
    /// let validations = vec![
    ///     Validation::<i32, _>::failure(vec!["name"]),
    ///     Validation::success(2),
    ///     Validation::failure(vec!["email"]),
    /// ];
    /// let result = Validation::all_vec(validations);
    /// assert_eq!(result, Validation::Failure(vec!["name", "email"]));
    /// ```
    pub fn all_vec<I>(validations: I) -> Validation<Vec<T>, E>
    where
        I: IntoIterator<Item = Validation<T, E>>,
    {
        let mut successes = Vec::new();
        let mut failures: Option<E> = None;

        for validation in validations {
            match validation {
                Validation::Success(value) => successes.push(value),
                Validation::Failure(error) => {
                    failures = Some(match failures {
                        Some(acc) => acc.combine(error),
                        None => error,
                    });
                }
            }
        }

        match failures {
            None => Validation::Success(successes),
            Some(errors) => Validation::Failure(errors),
        }
    }
}
