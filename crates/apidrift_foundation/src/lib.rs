//! Verdicts, type model, and error types for apidrift.
//!
//! This crate provides:
//! - [`Verdict`] - The ordered compatibility verdict (Equal < Minor < Major)
//! - [`Outcome`] - A verdict or an explicit unsupported-comparison marker
//! - [`TypeNode`] - The recursive model of public type shapes
//! - [`DeclarationId`] - Stable identity pairing declarations across snapshots
//! - [`Error`] - Data-validity errors surfaced to the caller

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod ident;
pub mod types;
pub mod verdict;

pub use error::{Error, ErrorKind, Result, Snapshot};
pub use ident::DeclarationId;
pub use types::{Direction, Fields, Methods, Primitive, Signature, TypeNode};
pub use verdict::{Outcome, Unsupported, Verdict};
