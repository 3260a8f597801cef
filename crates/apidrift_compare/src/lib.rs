//! Recursive structural comparator and compatibility report for apidrift.
//!
//! This crate provides:
//! - [`compare_type`] - Ordered verdict for a pair of type shapes
//! - [`compare_pair`] - Ordered verdict for a matched declaration pair
//! - [`diff`] - End-to-end report over two snapshots
//! - [`summary`] - The release-gate join over a report

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod comparator;
pub mod report;

pub use comparator::{compare_pair, compare_type};
pub use report::{DiffEntry, diff, summary};
