//! A vector that holds at least one element.
//!
//! Several sequences in an article (lemmas, paradigm info, article reference
//! lemmas, compound list elements) are required to be non-empty. Encoding that
//! in the type lets the renderer take the first element without a fallible
//! lookup.

use std::{ops::Deref, slice};

/// An ordered sequence with at least one element.
#[derive(Debug, Clone, PartialEq)]
pub struct NonEmpty<T>(Vec<T>);

impl<T> NonEmpty<T> {
    /// Wraps `items`, returning `None` when it is empty.
    pub fn new(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self(items))
        }
    }

    /// Creates a sequence holding exactly one element.
    pub fn one(item: T) -> Self {
        Self(vec![item])
    }

    /// Returns the first element.
    pub fn first(&self) -> &T {
        // Construction guarantees at least one element.
        &self.0[0]
    }

    /// Consumes the sequence and returns the underlying vector.
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> Deref for NonEmpty<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<'a, T> IntoIterator for &'a NonEmpty<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty() {
        assert!(NonEmpty::<u8>::new(Vec::new()).is_none());
    }

    #[test]
    fn test_first_and_order() {
        let items = NonEmpty::new(vec!["a", "b", "c"]).unwrap();

        assert_eq!(*items.first(), "a");
        assert_eq!(items.len(), 3);
        assert_eq!(items.iter().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
    }

    #[test]
    fn test_one() {
        let items = NonEmpty::one(7);
        assert_eq!(items.into_vec(), vec![7]);
    }
}
