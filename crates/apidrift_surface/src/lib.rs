//! Declaration model, identity, and snapshot matching for apidrift.
//!
//! This crate provides:
//! - [`Declaration`] - The closed set of public declaration kinds
//! - [`MatchedPair`] - An old/new declaration pair sharing an identity
//! - [`match_snapshots`] - Pairs two snapshots by [`DeclarationId`]
//!
//! [`DeclarationId`]: apidrift_foundation::DeclarationId

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod declaration;
pub mod matching;

pub use declaration::Declaration;
pub use matching::{MatchedPair, match_snapshots};
