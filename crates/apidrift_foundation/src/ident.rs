//! Stable declaration identity.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable key pairing a declaration across two snapshots.
///
/// The identity is the declared name plus, for methods, the textual name of
/// the receiver type. It is a plain value usable as a map key; within one
/// snapshot no two declarations may share one.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeclarationId {
    name: Arc<str>,
    /// Receiver type name, empty for everything but methods.
    receiver: Arc<str>,
}

impl DeclarationId {
    /// Identity of a top-level declaration (no receiver).
    #[must_use]
    pub fn plain(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            receiver: Arc::from(""),
        }
    }

    /// Identity of a method on the named receiver type.
    #[must_use]
    pub fn method(name: impl Into<Arc<str>>, receiver: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            receiver: receiver.into(),
        }
    }

    /// The declared name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The receiver type name, empty for non-methods.
    #[must_use]
    pub fn receiver(&self) -> &str {
        &self.receiver
    }

    /// Returns true if this identifies a method.
    #[must_use]
    pub fn is_method(&self) -> bool {
        !self.receiver.is_empty()
    }
}

impl fmt::Display for DeclarationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_method() {
            write!(f, "{}.{}", self.receiver, self.name)
        } else {
            f.write_str(&self.name)
        }
    }
}

impl fmt::Debug for DeclarationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeclarationId({self})")
    }
}
