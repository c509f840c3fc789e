//! Duplicate detection, distinct-reduction and duplicate-rejecting insertion.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

use super::hasher::initial_capacity;
use super::{DefaultBuildHasher, DuplicateInputError};

/// Maps every element of `slice` to the index of its only occurrence.
///
/// Fails on the first element equal to an earlier one.
fn first_occurrences<'a, T, S>(
    slice: &'a [T],
    build_hasher: &S,
) -> Result<HashMap<&'a T, usize, S>, DuplicateInputError>
where
    T: Eq + Hash,
    S: BuildHasher + Clone,
{
    let mut occurrences =
        HashMap::with_capacity_and_hasher(initial_capacity(slice.len()), build_hasher.clone());

    for (index, element) in slice.iter().enumerate() {
        match occurrences.entry(element) {
            Entry::Occupied(entry) => {
                let error = DuplicateInputError::new(*entry.get(), index);
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    first_index = error.first_index,
                    duplicate_index = error.duplicate_index,
                    length = slice.len(),
                    "rejecting slice with non-unique elements"
                );
                return Err(error);
            }
            Entry::Vacant(entry) => {
                entry.insert(index);
            }
        }
    }

    Ok(occurrences)
}

/// Checks that no two elements of `slice` are equal.
///
/// # Errors
///
/// Returns [`DuplicateInputError`] naming the first repeated element found
/// when scanning left to right.
///
/// # Examples
///
/// ```rust
/// use uniqset::set::{DuplicateInputError, ensure_unique};
///
/// assert!(ensure_unique(&[3, 1, 2]).is_ok());
/// assert_eq!(ensure_unique(&[3, 1, 3]), Err(DuplicateInputError::new(0, 2)));
/// ```
#[inline]
pub fn ensure_unique<T: Eq + Hash>(slice: &[T]) -> Result<(), DuplicateInputError> {
    ensure_unique_with_hasher(slice, &DefaultBuildHasher::default())
}

/// [`ensure_unique`] with a caller-supplied hash builder.
///
/// # Errors
///
/// Returns [`DuplicateInputError`] if `slice` contains two equal elements.
pub fn ensure_unique_with_hasher<T, S>(
    slice: &[T],
    build_hasher: &S,
) -> Result<(), DuplicateInputError>
where
    T: Eq + Hash,
    S: BuildHasher + Clone,
{
    first_occurrences(slice, build_hasher).map(|_| ())
}

/// Reduces `slice` to its distinct elements.
///
/// Every element of `slice` appears exactly once in the result. The order of
/// the result is unspecified and callers must not depend on it.
///
/// This is the way to sanitise input before [`unique_insert`], which rejects
/// slices that already contain duplicates.
///
/// # Examples
///
/// ```rust
/// use uniqset::set::{distinct, unique_insert};
///
/// let values = [1, 2, 2, 3, 1];
/// let mut reduced = distinct(&values);
/// reduced.sort_unstable();
/// assert_eq!(reduced, vec![1, 2, 3]);
///
/// assert!(unique_insert(&values, 4).is_err());
/// assert!(unique_insert(&distinct(&values), 4).is_ok());
/// ```
#[inline]
#[must_use]
pub fn distinct<T: Clone + Eq + Hash>(slice: &[T]) -> Vec<T> {
    distinct_with_hasher(slice, &DefaultBuildHasher::default())
}

/// [`distinct`] with a caller-supplied hash builder.
#[must_use]
pub fn distinct_with_hasher<T, S>(slice: &[T], build_hasher: &S) -> Vec<T>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Clone,
{
    let mut seen: HashSet<&T, S> =
        HashSet::with_capacity_and_hasher(initial_capacity(slice.len()), build_hasher.clone());

    slice
        .iter()
        .filter(|element| seen.insert(*element))
        .cloned()
        .collect()
}

/// Returns the distinct elements of `slice` together with `element`.
///
/// The input is first checked for duplicates; a slice that already repeats
/// an element is rejected rather than silently reduced, so no caller data is
/// dropped without notice. Adding an `element` that is already present is
/// not an error and leaves the length unchanged.
///
/// The result is a fresh `Vec` whose order is unspecified. `slice` is never
/// modified.
///
/// # Errors
///
/// Returns [`DuplicateInputError`] if `slice` contains two equal elements.
/// This is the only failure; an empty slice yields `vec![element]`.
///
/// # Complexity
///
/// O(n) expected.
///
/// # Examples
///
/// ```rust
/// use uniqset::set::unique_insert;
///
/// let mut inserted = unique_insert(&[1, 2, 3], 4).unwrap();
/// inserted.sort_unstable();
/// assert_eq!(inserted, vec![1, 2, 3, 4]);
///
/// // Already present: same content, no error
/// assert_eq!(unique_insert(&[1, 2, 3], 2).unwrap().len(), 3);
///
/// // Duplicates in the input are refused
/// assert!(unique_insert(&[1, 2, 2], 5).is_err());
/// ```
#[inline]
pub fn unique_insert<T: Clone + Eq + Hash>(
    slice: &[T],
    element: T,
) -> Result<Vec<T>, DuplicateInputError> {
    unique_insert_with_hasher(slice, element, &DefaultBuildHasher::default())
}

/// [`unique_insert`] with a caller-supplied hash builder.
///
/// # Errors
///
/// Returns [`DuplicateInputError`] if `slice` contains two equal elements.
pub fn unique_insert_with_hasher<T, S>(
    slice: &[T],
    element: T,
    build_hasher: &S,
) -> Result<Vec<T>, DuplicateInputError>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Clone,
{
    let occurrences = first_occurrences(slice, build_hasher)?;
    let is_new = !occurrences.contains_key(&element);

    let mut result = Vec::with_capacity(slice.len().saturating_add(usize::from(is_new)));
    result.extend_from_slice(slice);
    if is_new {
        result.push(element);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::hash_map::RandomState;

    fn sorted<T: Ord>(mut values: Vec<T>) -> Vec<T> {
        values.sort_unstable();
        values
    }

    // =========================================================================
    // ensure_unique
    // =========================================================================

    #[rstest]
    #[case(&[])]
    #[case(&[1])]
    #[case(&[3, 1, 2])]
    fn test_ensure_unique_accepts_distinct(#[case] slice: &[i32]) {
        assert_eq!(ensure_unique(slice), Ok(()));
    }

    #[rstest]
    #[case(&[1, 2, 2], 1, 2)]
    #[case(&[5, 5], 0, 1)]
    #[case(&[1, 2, 3, 1, 2], 0, 3)]
    #[case(&[9, 8, 7, 8, 9], 1, 3)]
    fn test_ensure_unique_reports_first_repeat(
        #[case] slice: &[i32],
        #[case] first_index: usize,
        #[case] duplicate_index: usize,
    ) {
        assert_eq!(
            ensure_unique(slice),
            Err(DuplicateInputError::new(first_index, duplicate_index))
        );
    }

    #[rstest]
    fn test_ensure_unique_on_huge_zero_sized_slice() {
        let units = [(); usize::MAX];
        assert_eq!(ensure_unique(&units), Err(DuplicateInputError::new(0, 1)));
        assert_eq!(unique_insert(&units, ()), Err(DuplicateInputError::new(0, 1)));
    }

    #[rstest]
    fn test_ensure_unique_with_explicit_hasher() {
        let build_hasher = RandomState::new();
        assert!(ensure_unique_with_hasher(&["a", "b"], &build_hasher).is_ok());
        assert!(ensure_unique_with_hasher(&["a", "a"], &build_hasher).is_err());
    }

    // =========================================================================
    // distinct
    // =========================================================================

    #[rstest]
    #[case(&[], &[])]
    #[case(&[1, 1, 1], &[1])]
    #[case(&[3, 1, 3, 2, 1], &[1, 2, 3])]
    #[case(&[4, 5, 6], &[4, 5, 6])]
    fn test_distinct(#[case] slice: &[i32], #[case] expected: &[i32]) {
        assert_eq!(sorted(distinct(slice)), expected.to_vec());
    }

    #[rstest]
    fn test_distinct_on_long_single_valued_slice() {
        let units = [(); 1 << 20];
        assert_eq!(distinct(&units), vec![()]);

        let sevens = vec![7_u8; 1 << 16];
        assert_eq!(distinct(&sevens), vec![7]);
    }

    #[rstest]
    fn test_distinct_output_passes_ensure_unique() {
        let values = [2, 7, 2, 7, 7, 1];
        assert!(ensure_unique(&distinct(&values)).is_ok());
    }

    // =========================================================================
    // unique_insert
    // =========================================================================

    #[rstest]
    fn test_unique_insert_new_element() {
        let result = unique_insert(&[1, 2, 3], 4).unwrap();
        assert_eq!(sorted(result), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_unique_insert_existing_element_is_not_an_error() {
        let result = unique_insert(&[1, 2, 3], 2).unwrap();
        assert_eq!(sorted(result), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_unique_insert_into_empty() {
        let empty: [i32; 0] = [];
        assert_eq!(unique_insert(&empty, 7).unwrap(), vec![7]);
    }

    #[rstest]
    #[case(&[1, 2, 2], 5)]
    #[case(&[1, 2, 2], 2)]
    #[case(&[0, 0], 0)]
    fn test_unique_insert_rejects_duplicate_input(#[case] slice: &[i32], #[case] element: i32) {
        assert!(unique_insert(slice, element).is_err());
    }

    #[rstest]
    fn test_unique_insert_leaves_input_untouched() {
        let input = vec!["x".to_string(), "y".to_string()];
        let snapshot = input.clone();
        let result = unique_insert(&input, "z".to_string()).unwrap();

        assert_eq!(input, snapshot);
        assert_eq!(result.len(), 3);
    }

    #[rstest]
    fn test_unique_insert_with_explicit_hasher() {
        let build_hasher = RandomState::new();
        let result = unique_insert_with_hasher(&[10, 20], 30, &build_hasher).unwrap();
        assert_eq!(sorted(result), vec![10, 20, 30]);
    }
}
