//! Hasher selection for the hash-backed set operations.
//!
//! The plain operations (`unique_insert`, `intersection`, `ensure_unique`,
//! `distinct`) build their internal hash collections with
//! [`DefaultBuildHasher`]. Which hasher that is depends on the enabled
//! feature flags:
//!
//! | Features            | `DefaultBuildHasher`                           |
//! |---------------------|------------------------------------------------|
//! | `fxhash`            | `rustc_hash::FxBuildHasher`                    |
//! | `ahash` only        | `ahash::RandomState`                           |
//! | neither             | `std::collections::hash_map::RandomState`      |
//!
//! `fxhash` wins when both are enabled. Callers who need a specific hasher
//! regardless of features use the `*_with_hasher` forms.

/// Hash builder used by the operations that do not take one explicitly.
#[cfg(feature = "fxhash")]
pub type DefaultBuildHasher = rustc_hash::FxBuildHasher;

/// Hash builder used by the operations that do not take one explicitly.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultBuildHasher = ahash::RandomState;

/// Hash builder used by the operations that do not take one explicitly.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultBuildHasher = std::collections::hash_map::RandomState;

/// Upper bound on the slots reserved before any element is hashed.
///
/// A slice may hold far fewer distinct values than elements, so tables start
/// at most this large and grow as distinct elements arrive.
const RESERVE_LIMIT: usize = 1 << 10;

/// Initial capacity for a hash collection built from `length` elements.
#[inline]
pub(crate) const fn initial_capacity(length: usize) -> usize {
    if length < RESERVE_LIMIT {
        length
    } else {
        RESERVE_LIMIT
    }
}
