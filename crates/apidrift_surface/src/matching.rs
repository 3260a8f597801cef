//! Pairing of old and new snapshots by declaration identity.
//!
//! Matching is a bijection-with-slack: every declaration in either snapshot
//! appears in exactly one output pair, with a synthetic
//! [`Declaration::Missing`] standing in for an absent counterpart.

use std::collections::BTreeMap;

use apidrift_foundation::{DeclarationId, Error, Result, Snapshot};

use crate::declaration::Declaration;

/// An old/new declaration pair sharing a [`DeclarationId`].
///
/// The fields are private and there is no public constructor: the only way
/// to obtain a pair is [`match_snapshots`], so the comparator's
/// precondition - both sides share an identity, or one is `Missing` - holds
/// by construction and never needs a runtime check.
#[derive(Clone, Debug)]
pub struct MatchedPair {
    id: DeclarationId,
    old: Declaration,
    new: Declaration,
}

impl MatchedPair {
    /// The shared identity of this pair.
    #[must_use]
    pub fn id(&self) -> &DeclarationId {
        &self.id
    }

    /// The old and new sides, in that order.
    #[must_use]
    pub fn sides(&self) -> (&Declaration, &Declaration) {
        (&self.old, &self.new)
    }
}

/// Pairs two snapshots of a package's declarations by identity.
///
/// Declarations present in both snapshots form real pairs; a declaration
/// present in only one is paired with a synthetic missing counterpart.
/// Output is sorted by [`DeclarationId`] so reports are deterministic and
/// diffable regardless of input order.
///
/// # Errors
///
/// Returns an error if either snapshot contains two declarations sharing
/// an identity, or a declaration with an empty name. Both are
/// extractor-contract violations surfaced as data-validity failures.
pub fn match_snapshots(
    old: &[Declaration],
    new: &[Declaration],
) -> Result<Vec<MatchedPair>> {
    let old_by_id = index_snapshot(old, Snapshot::Old)?;
    let new_by_id = index_snapshot(new, Snapshot::New)?;

    let mut ids: Vec<&DeclarationId> = old_by_id.keys().collect();
    for id in new_by_id.keys() {
        if !old_by_id.contains_key(id) {
            ids.push(id);
        }
    }
    ids.sort();

    let pairs = ids
        .into_iter()
        .map(|id| {
            let old_side = old_by_id
                .get(id)
                .map_or_else(|| Declaration::missing_for(id), |d| (*d).clone());
            let new_side = new_by_id
                .get(id)
                .map_or_else(|| Declaration::missing_for(id), |d| (*d).clone());
            MatchedPair {
                id: id.clone(),
                old: old_side,
                new: new_side,
            }
        })
        .collect();
    Ok(pairs)
}

/// Indexes one snapshot by identity, rejecting duplicates and empty names.
fn index_snapshot(
    decls: &[Declaration],
    snapshot: Snapshot,
) -> Result<BTreeMap<DeclarationId, &Declaration>> {
    let mut by_id = BTreeMap::new();
    for decl in decls {
        if decl.name().is_empty() {
            return Err(Error::empty_name().in_snapshot(snapshot));
        }
        let id = decl.identify();
        if by_id.insert(id.clone(), decl).is_some() {
            return Err(Error::duplicate_declaration(id).in_snapshot(snapshot));
        }
    }
    Ok(by_id)
}
