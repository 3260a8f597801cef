//! Compatibility verdicts and their join semilattice.

use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Compatibility verdict for a single comparison.
///
/// Verdicts are totally ordered by breaking severity, and the derived
/// [`Ord`] is the join: `a.combine(b)` is `max(a, b)`. Any `Major`
/// sub-comparison therefore forces the whole comparison to `Major`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Verdict {
    /// No observable change.
    Equal,
    /// Backward-compatible addition.
    Minor,
    /// Breaking change.
    Major,
}

impl Verdict {
    /// Joins two verdicts, keeping the more severe one.
    ///
    /// Commutative, associative, and idempotent, with `Equal` as identity.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        self.max(other)
    }

    /// Returns true if this verdict gates a release.
    #[must_use]
    pub const fn is_breaking(self) -> bool {
        matches!(self, Self::Major)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal => write!(f, "equal"),
            Self::Minor => write!(f, "minor"),
            Self::Major => write!(f, "major"),
        }
    }
}

/// A construct the comparator has no policy for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Unsupported {
    /// Constant literal values were not supplied by the extractor, so the
    /// value dimension of a constant pair cannot be classified.
    ConstantValue,
}

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConstantValue => write!(f, "constant value comparison"),
        }
    }
}

/// The comparator's return type: a verdict, or an explicit marker that a
/// sub-comparison could not be classified.
///
/// `Unsupported` must never collapse into `Equal` - a comparison the tool
/// cannot classify is not evidence of compatibility. Its join sits between
/// `Minor` and `Major`: it dominates every compatible verdict, while a part
/// already known to be breaking dominates it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    /// A classified verdict.
    Verdict(Verdict),
    /// An unclassifiable sub-comparison, with the construct that caused it.
    Unsupported(Unsupported),
}

impl Outcome {
    /// The identity element of [`Outcome::combine`].
    pub const EQUAL: Self = Self::Verdict(Verdict::Equal);
    /// Shorthand for a minor verdict.
    pub const MINOR: Self = Self::Verdict(Verdict::Minor);
    /// Shorthand for a major verdict.
    pub const MAJOR: Self = Self::Verdict(Verdict::Major);

    /// Joins two outcomes, keeping the more severe one.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        self.max(other)
    }

    /// Returns the verdict, or `None` for an unsupported outcome.
    #[must_use]
    pub const fn verdict(self) -> Option<Verdict> {
        match self {
            Self::Verdict(v) => Some(v),
            Self::Unsupported(_) => None,
        }
    }

    /// Returns true if this outcome gates a release.
    ///
    /// Unsupported outcomes gate too: an unclassifiable change cannot be
    /// waved through.
    #[must_use]
    pub const fn is_gating(self) -> bool {
        !matches!(self, Self::Verdict(Verdict::Equal | Verdict::Minor))
    }

    /// Severity rank used by the total order.
    const fn rank(self) -> u8 {
        match self {
            Self::Verdict(Verdict::Equal) => 0,
            Self::Verdict(Verdict::Minor) => 1,
            Self::Unsupported(_) => 2,
            Self::Verdict(Verdict::Major) => 3,
        }
    }
}

impl From<Verdict> for Outcome {
    fn from(v: Verdict) -> Self {
        Self::Verdict(v)
    }
}

impl Ord for Outcome {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank()).then_with(|| {
            match (self, other) {
                // Same rank and both unsupported: order by reason so the
                // total order stays consistent with equality.
                (Self::Unsupported(a), Self::Unsupported(b)) => a.cmp(b),
                _ => Ordering::Equal,
            }
        })
    }
}

impl PartialOrd for Outcome {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Verdict(v) => write!(f, "{v}"),
            Self::Unsupported(u) => write!(f, "unsupported ({u})"),
        }
    }
}
