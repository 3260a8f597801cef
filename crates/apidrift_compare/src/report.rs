//! End-to-end compatibility report over two snapshots.

use std::fmt;

use apidrift_foundation::{DeclarationId, Outcome, Result};
use apidrift_surface::{Declaration, match_snapshots};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::comparator::compare_pair;

/// One line of a compatibility report.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffEntry {
    /// Identity of the declaration this entry is about.
    pub id: DeclarationId,
    /// The compatibility outcome for that declaration.
    pub outcome: Outcome,
}

impl fmt::Display for DiffEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.outcome)
    }
}

/// Compares two snapshots of a package's public declarations.
///
/// Entries come back sorted by [`DeclarationId`], one per declaration
/// present in either snapshot, so reports are stable and diffable.
///
/// # Errors
///
/// Returns an error if either snapshot violates the extractor contract
/// (duplicate identity or empty name); see
/// [`match_snapshots`](apidrift_surface::match_snapshots).
pub fn diff(old: &[Declaration], new: &[Declaration]) -> Result<Vec<DiffEntry>> {
    let pairs = match_snapshots(old, new)?;
    Ok(pairs
        .iter()
        .map(|pair| DiffEntry {
            id: pair.id().clone(),
            outcome: compare_pair(pair),
        })
        .collect())
}

/// Joins a report into the single release-gate outcome.
///
/// An empty report is `Equal`.
#[must_use]
pub fn summary(entries: &[DiffEntry]) -> Outcome {
    entries
        .iter()
        .map(|entry| entry.outcome)
        .fold(Outcome::EQUAL, Outcome::combine)
}
