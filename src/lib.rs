//! Associative arrays backed by a linear sequence of key-value pairs.
//!
//! # [`AssocArray`]
//! A generic key-value container that stores its pairs in a flat, dynamically growing array of
//! slots, and finds keys by scanning it.
//!
//! # [`Reporting`]
//! A wrapper around an [`AssocArray`] that emits a [`tracing`] event for every call.

#![warn(missing_docs, clippy::all, clippy::pedantic)]

mod assoc_array;
pub use assoc_array::{AssocArray, IntoIter, Iter, IterMut, DEFAULT_CAPACITY};

mod error;
pub use error::{Error, KeyNotFoundError, NullKeyError};

mod kv_pair;
pub use kv_pair::KVPair;

mod reporting;
pub use reporting::Reporting;

#[cfg(feature = "serde")]
mod serde;
