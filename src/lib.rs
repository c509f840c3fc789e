//! # uniqset
//!
//! Set semantics over plain slices.
//!
//! ## Overview
//!
//! Rust's standard library offers `HashSet` and `BTreeSet`, but code that
//! already holds a `Vec<T>` or `&[T]` often only needs a handful of set
//! questions answered without converting back and forth. This library
//! provides them as pure functions over borrowed slices:
//!
//! - **Membership**: `contains`, requiring only `PartialEq`
//! - **Unique-Insert**: `unique_insert`, which rejects inputs that already
//!   contain duplicates instead of silently dropping them
//! - **Intersection**: `intersection`, tolerant of duplicates on both sides
//! - **Helpers**: `ensure_unique` and `distinct` to check or sanitise input
//!
//! Results are freshly allocated and their element order is unspecified.
//!
//! ## Feature Flags
//!
//! - `fxhash`: use `rustc-hash`'s `FxBuildHasher` for internal hash sets
//! - `ahash`: use `ahash`'s `RandomState` for internal hash sets
//! - `serde`: `Serialize`/`Deserialize` for [`set::DuplicateInputError`]
//! - `tracing`: emit a `debug` event when a slice is rejected
//! - `full`: `serde` and `tracing`
//!
//! ## Example
//!
//! ```rust
//! use uniqset::prelude::*;
//!
//! let roles = vec!["admin", "editor"];
//!
//! assert!(roles.contains_element(&"admin"));
//! assert_eq!(roles.unique_insert("viewer").unwrap().len(), 3);
//! assert!(vec!["a", "a"].unique_insert("b").is_err());
//! assert_eq!(intersection(&roles, &["editor", "guest"]), vec!["editor"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the slice set operations, the extension trait and the error type.
///
/// # Usage
///
/// ```rust
/// use uniqset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::set::*;
}

pub mod set;
