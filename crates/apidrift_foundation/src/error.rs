//! Error types for apidrift.
//!
//! Uses `thiserror` for ergonomic error definition. Every error here is a
//! data-validity failure in the caller-supplied snapshots; the comparator
//! itself is total and never fails.

use std::fmt;

use thiserror::Error;

use crate::ident::DeclarationId;

/// Result alias used throughout apidrift.
pub type Result<T> = std::result::Result<T, Error>;

/// Which snapshot an offending declaration was found in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Snapshot {
    /// The "old" (previously released) snapshot.
    Old,
    /// The "new" (candidate) snapshot.
    New,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Old => write!(f, "old"),
            Self::New => write!(f, "new"),
        }
    }
}

/// The main error type for apidrift operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Which snapshot the offense was found in, when known.
    pub snapshot: Option<Snapshot>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            snapshot: None,
        }
    }

    /// Records which snapshot the offense was found in.
    #[must_use]
    pub fn in_snapshot(mut self, snapshot: Snapshot) -> Self {
        self.snapshot = Some(snapshot);
        self
    }

    /// Creates a duplicate-declaration error.
    #[must_use]
    pub fn duplicate_declaration(id: DeclarationId) -> Self {
        Self::new(ErrorKind::DuplicateDeclaration(id))
    }

    /// Creates an empty-name error.
    #[must_use]
    pub fn empty_name() -> Self {
        Self::new(ErrorKind::EmptyName)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Two declarations in one snapshot share an identity, so old/new
    /// pairing would be ambiguous.
    #[error("duplicate declaration: {0}")]
    DuplicateDeclaration(DeclarationId),

    /// A declaration arrived with an empty name.
    #[error("declaration with empty name")]
    EmptyName,
}
