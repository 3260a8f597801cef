//! apidrift - API-surface compatibility classifier
//!
//! This crate re-exports all layers of the apidrift system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: apidrift_compare    — Structural comparator, diff report
//! Layer 1: apidrift_surface    — Declarations, identity, matching
//! Layer 0: apidrift_foundation — Verdicts, type model, errors
//! ```

pub use apidrift_compare as compare;
pub use apidrift_foundation as foundation;
pub use apidrift_surface as surface;
