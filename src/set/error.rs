//! Error types for slice set operations.

/// Represents an input slice that already contains a repeated element.
///
/// Returned by [`ensure_unique`](crate::set::ensure_unique) and therefore by
/// [`unique_insert`](crate::set::unique_insert) when the *input* slice holds
/// two equal elements. Inserting an element that is already present is not
/// an error; only duplicates that were there before the call are rejected.
///
/// Both indices refer to the input slice, with `first_index < duplicate_index`.
///
/// # Examples
///
/// ```rust
/// use uniqset::set::{DuplicateInputError, unique_insert};
///
/// let error = unique_insert(&[1, 2, 2], 5).unwrap_err();
/// assert_eq!(error, DuplicateInputError::new(1, 2));
/// assert_eq!(
///     format!("{error}"),
///     "slice contains non-unique elements: index 2 repeats index 1"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DuplicateInputError {
    /// Position of the earlier occurrence of the repeated element.
    pub first_index: usize,
    /// Position at which the element occurs again.
    pub duplicate_index: usize,
}

impl DuplicateInputError {
    /// Creates an error for the element at `duplicate_index` repeating the one at `first_index`.
    #[inline]
    #[must_use]
    pub const fn new(first_index: usize, duplicate_index: usize) -> Self {
        Self {
            first_index,
            duplicate_index,
        }
    }
}

impl std::fmt::Display for DuplicateInputError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "slice contains non-unique elements: index {} repeats index {}",
            self.duplicate_index, self.first_index
        )
    }
}

impl std::error::Error for DuplicateInputError {}
