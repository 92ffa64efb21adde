//! Non-empty vector type
//!
//! A failed validation always carries at least one [`FieldError`](crate::FieldError).
//! [`NonEmptyVec`] puts that guarantee in the type, so callers rendering
//! errors never have to handle an empty `Invalid` result.
//!
//! # Examples
//!
//! ```
//! use gudang::NonEmptyVec;
//!
//! let fields = NonEmptyVec::new("name", vec!["phone", "email"]);
//! assert_eq!(fields.head(), &"name");
//! assert_eq!(fields.tail(), &["phone", "email"]);
//! assert_eq!(fields.len(), 3);
//! ```

use crate::Semigroup;

/// A vector guaranteed to contain at least one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyVec<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Create a non-empty vector from a head element and a tail.
    pub fn new(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Create a non-empty vector holding a single element.
    ///
    /// # Example
    ///
    /// ```
    /// use gudang::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::singleton("name");
    /// assert_eq!(nev.len(), 1);
    /// ```
    pub fn singleton(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// Try to create a non-empty vector from a `Vec`.
    ///
    /// Returns `None` if the vector is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use gudang::NonEmptyVec;
    ///
    /// assert!(NonEmptyVec::from_vec(vec![1, 2]).is_some());
    /// assert!(NonEmptyVec::from_vec(Vec::<i32>::new()).is_none());
    /// ```
    pub fn from_vec(vec: Vec<T>) -> Option<Self> {
        let mut iter = vec.into_iter();
        let head = iter.next()?;
        Some(Self::new(head, iter.collect()))
    }

    /// The first element.
    pub fn head(&self) -> &T {
        &self.head
    }

    /// All elements except the first.
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// Number of elements, always at least 1.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`; present for `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Append an element.
    pub fn push(&mut self, value: T) {
        self.tail.push(value);
    }

    /// Map a function over all elements, preserving order.
    ///
    /// # Example
    ///
    /// ```
    /// use gudang::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::new("name", vec!["email"]);
    /// let upper = nev.map(|s| s.to_uppercase());
    /// assert_eq!(upper.into_vec(), vec!["NAME".to_string(), "EMAIL".to_string()]);
    /// ```
    pub fn map<U, F>(self, mut f: F) -> NonEmptyVec<U>
    where
        F: FnMut(T) -> U,
    {
        let head = f(self.head);
        let tail = self.tail.into_iter().map(f).collect();
        NonEmptyVec::new(head, tail)
    }

    /// Convert to a regular `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        let mut vec = Vec::with_capacity(1 + self.tail.len());
        vec.push(self.head);
        vec.extend(self.tail);
        vec
    }

    /// Iterate over all elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }
}

impl<T> Semigroup for NonEmptyVec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::iter::Chain<std::iter::Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<T> std::ops::Index<usize> for NonEmptyVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        if index == 0 {
            &self.head
        } else {
            &self.tail[index - 1]
        }
    }
}

// Serialized as a plain JSON array so UI code sees an ordinary list.
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for NonEmptyVec<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for item in self.iter() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singleton() {
        let nev = NonEmptyVec::singleton("name");
        assert_eq!(nev.head(), &"name");
        assert!(nev.tail().is_empty());
        assert_eq!(nev.len(), 1);
        assert!(!nev.is_empty());
    }

    #[test]
    fn test_from_vec() {
        let nev = NonEmptyVec::from_vec(vec![1, 2, 3]).unwrap();
        assert_eq!(nev.head(), &1);
        assert_eq!(nev.tail(), &[2, 3]);

        assert!(NonEmptyVec::from_vec(Vec::<i32>::new()).is_none());
    }

    #[test]
    fn test_push_and_iter() {
        let mut nev = NonEmptyVec::singleton(1);
        nev.push(2);
        nev.push(3);
        let collected: Vec<_> = nev.iter().copied().collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }

    #[test]
    fn test_semigroup_preserves_order() {
        let left = NonEmptyVec::new("name", vec!["phone"]);
        let right = NonEmptyVec::singleton("email");
        assert_eq!(
            left.combine(right).into_vec(),
            vec!["name", "phone", "email"]
        );
    }

    #[test]
    fn test_into_iter() {
        let nev = NonEmptyVec::new(1, vec![2, 3]);
        let vec: Vec<_> = nev.into_iter().collect();
        assert_eq!(vec, vec![1, 2, 3]);
    }

    #[test]
    fn test_index() {
        let nev = NonEmptyVec::new(1, vec![2, 3]);
        assert_eq!(nev[0], 1);
        assert_eq!(nev[2], 3);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds() {
        let nev = NonEmptyVec::singleton(42);
        let _ = nev[1];
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serializes_as_array() {
        let nev = NonEmptyVec::new(1, vec![2]);
        assert_eq!(serde_json::to_value(&nev).unwrap(), serde_json::json!([1, 2]));
    }
}
