//! Intersection of two slices.

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

use super::DefaultBuildHasher;
use super::hasher::initial_capacity;

fn distinct_references<'a, T, S>(slice: &'a [T], build_hasher: &S) -> HashSet<&'a T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Clone,
{
    let mut references =
        HashSet::with_capacity_and_hasher(initial_capacity(slice.len()), build_hasher.clone());
    references.extend(slice);
    references
}

/// Returns every element present in both `left` and `right`, each exactly once.
///
/// Duplicates in either input are tolerated and collapse in the result.
/// Neither input is modified. The result order is unspecified and callers
/// must not depend on it.
///
/// # Complexity
///
/// O(n + m) expected. Both inputs are reduced to hash sets and the smaller
/// one is probed against the larger.
///
/// # Examples
///
/// ```rust
/// use uniqset::set::intersection;
///
/// let mut common = intersection(&[1, 2, 3], &[2, 3, 4]);
/// common.sort_unstable();
/// assert_eq!(common, vec![2, 3]);
///
/// assert_eq!(intersection(&[1, 1, 2], &[2, 2, 3]), vec![2]);
/// assert!(intersection(&[1, 2], &[3, 4]).is_empty());
/// ```
#[inline]
#[must_use]
pub fn intersection<T: Clone + Eq + Hash>(left: &[T], right: &[T]) -> Vec<T> {
    intersection_with_hasher(left, right, &DefaultBuildHasher::default())
}

/// [`intersection`] with a caller-supplied hash builder.
#[must_use]
pub fn intersection_with_hasher<T, S>(left: &[T], right: &[T], build_hasher: &S) -> Vec<T>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Clone,
{
    if left.is_empty() || right.is_empty() {
        return Vec::new();
    }

    let left_distinct = distinct_references(left, build_hasher);
    let right_distinct = distinct_references(right, build_hasher);

    // HashSet::intersection iterates the smaller set and probes the larger
    left_distinct
        .intersection(&right_distinct)
        .map(|element| (*element).clone())
        .collect()
}
