//! Set semantics over plain slices.
//!
//! This module treats an ordinary `&[T]` as a set without introducing a set
//! type. Every operation borrows its input, allocates a fresh result and
//! keeps no state between calls:
//!
//! - [`contains`]: membership test, needs only `PartialEq`
//! - [`unique_insert`]: adds an element, refusing inputs that already repeat one
//! - [`intersection`]: common elements of two slices, duplicates tolerated
//! - [`ensure_unique`]: the duplicate check used by `unique_insert`
//! - [`distinct`]: reduces a slice to its distinct elements
//!
//! The same operations are available as methods through [`SliceSetExt`].
//!
//! # Result Order
//!
//! Results of `unique_insert`, `intersection` and `distinct` contain no
//! duplicates, but their order is **unspecified**. It may differ between
//! calls, hashers and platforms. Compare results as sets.
//!
//! # Duplicate Handling
//!
//! | Operation       | Duplicates in input      | Element already present |
//! |-----------------|--------------------------|-------------------------|
//! | `contains`      | ignored                  | n/a                     |
//! | `unique_insert` | [`DuplicateInputError`]  | no-op, not an error     |
//! | `intersection`  | collapsed                | n/a                     |
//! | `distinct`      | collapsed                | n/a                     |
//!
//! # Time Complexity
//!
//! | Operation       | Complexity         |
//! |-----------------|--------------------|
//! | `contains`      | O(n)               |
//! | `ensure_unique` | O(n) expected      |
//! | `distinct`      | O(n) expected      |
//! | `unique_insert` | O(n) expected      |
//! | `intersection`  | O(n + m) expected  |
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashSet;
//! use uniqset::set::{contains, intersection, unique_insert};
//!
//! let primes = [2, 3, 5, 7];
//! let odds = [1, 3, 5, 7, 9];
//!
//! assert!(contains(&primes, &5));
//!
//! let common: HashSet<i32> = intersection(&primes, &odds).into_iter().collect();
//! assert_eq!(common, HashSet::from([3, 5, 7]));
//!
//! let extended: HashSet<i32> = unique_insert(&primes, 11).unwrap().into_iter().collect();
//! assert_eq!(extended, HashSet::from([2, 3, 5, 7, 11]));
//! ```

mod error;
mod ext;
mod hasher;
mod intersection;
mod membership;
mod unique;

pub use error::DuplicateInputError;
pub use ext::SliceSetExt;
pub use hasher::DefaultBuildHasher;
pub use intersection::intersection;
pub use intersection::intersection_with_hasher;
pub use membership::contains;
pub use unique::distinct;
pub use unique::distinct_with_hasher;
pub use unique::ensure_unique;
pub use unique::ensure_unique_with_hasher;
pub use unique::unique_insert;
pub use unique::unique_insert_with_hasher;
