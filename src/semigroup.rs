//! Semigroup trait for associative operations
//!
//! Field errors from independent fields are merged with [`Semigroup::combine`],
//! so a schema can keep checking every field after one of them fails and
//! still report the errors in declaration order.
//!
//! # Laws
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use gudang::{FieldError, NonEmptyVec, Semigroup};
//!
//! let name = NonEmptyVec::singleton(FieldError::new("name", "Nama supplier wajib diisi"));
//! let email = NonEmptyVec::singleton(FieldError::new("email", "Format email tidak valid"));
//!
//! let all = name.combine(email);
//! assert_eq!(all.len(), 2);
//! assert_eq!(all.head().field, "name");
//! ```

/// A type that supports an associative binary operation
///
/// `combine` takes both operands by value; clone first if the originals are
/// still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    ///
    /// # Examples
    ///
    /// ```
    /// use gudang::Semigroup;
    ///
    /// let v1 = vec!["name"];
    /// let v2 = vec!["phone"];
    /// assert_eq!(v1.combine(v2), vec!["name", "phone"]);
    /// ```
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}
