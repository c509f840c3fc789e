//! Method syntax for the slice set operations.

use std::hash::Hash;

use super::{DuplicateInputError, contains, distinct, ensure_unique, intersection, unique_insert};

/// Set operations available as methods on any slice.
///
/// Implemented for `[T]`, so `Vec<T>` and arrays get the methods through
/// auto-deref. Each method delegates to the free function of the same name
/// in [`crate::set`], using [`DefaultBuildHasher`](crate::set::DefaultBuildHasher).
///
/// # Examples
///
/// ```rust
/// use uniqset::set::SliceSetExt;
///
/// let tags = vec!["red", "green", "blue"];
///
/// assert!(tags.contains_element(&"green"));
///
/// let extended = tags.unique_insert("black").unwrap();
/// assert_eq!(extended.len(), 4);
///
/// let common = tags.intersection(&["blue", "cyan", "blue"]);
/// assert_eq!(common, vec!["blue"]);
/// ```
pub trait SliceSetExt<T> {
    /// Returns `true` if `element` occurs at least once. See [`contains`].
    fn contains_element(&self, element: &T) -> bool
    where
        T: PartialEq;

    /// Returns the distinct elements of `self` plus `element`. See [`unique_insert`].
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateInputError`] if `self` contains two equal elements.
    fn unique_insert(&self, element: T) -> Result<Vec<T>, DuplicateInputError>
    where
        T: Clone + Eq + Hash;

    /// Returns the elements common to `self` and `other`. See [`intersection`].
    fn intersection(&self, other: &[T]) -> Vec<T>
    where
        T: Clone + Eq + Hash;

    /// Checks that no two elements are equal. See [`ensure_unique`].
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateInputError`] if `self` contains two equal elements.
    fn ensure_unique(&self) -> Result<(), DuplicateInputError>
    where
        T: Eq + Hash;

    /// Returns each element once. See [`distinct`].
    fn distinct(&self) -> Vec<T>
    where
        T: Clone + Eq + Hash;
}

impl<T> SliceSetExt<T> for [T] {
    #[inline]
    fn contains_element(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        contains(self, element)
    }

    #[inline]
    fn unique_insert(&self, element: T) -> Result<Vec<T>, DuplicateInputError>
    where
        T: Clone + Eq + Hash,
    {
        unique_insert(self, element)
    }

    #[inline]
    fn intersection(&self, other: &[T]) -> Vec<T>
    where
        T: Clone + Eq + Hash,
    {
        intersection(self, other)
    }

    #[inline]
    fn ensure_unique(&self) -> Result<(), DuplicateInputError>
    where
        T: Eq + Hash,
    {
        ensure_unique(self)
    }

    #[inline]
    fn distinct(&self) -> Vec<T>
    where
        T: Clone + Eq + Hash,
    {
        distinct(self)
    }
}
