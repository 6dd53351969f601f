//! Experiments with [`AssocArray`](assoc_array::AssocArray), reported through
//! [`Reporting`](assoc_array::Reporting) wrappers.

#![warn(clippy::all, clippy::pedantic)]

pub mod experiments;
