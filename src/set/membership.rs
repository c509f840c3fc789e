//! Membership test over a slice.

/// Returns `true` if `element` occurs at least once in `slice`.
///
/// Scans from the start and stops at the first equal element. Only
/// `PartialEq` is required, and duplicates in `slice` do not matter.
/// An empty slice never contains anything.
///
/// # Complexity
///
/// O(n), no allocation.
///
/// # Examples
///
/// ```rust
/// use uniqset::set::contains;
///
/// assert!(contains(&[1, 2, 2, 3], &2));
/// assert!(!contains(&[1, 2, 3], &9));
/// assert!(!contains::<i32>(&[], &1));
/// ```
#[inline]
#[must_use]
pub fn contains<T: PartialEq>(slice: &[T], element: &T) -> bool {
    slice.iter().any(|candidate| candidate == element)
}
