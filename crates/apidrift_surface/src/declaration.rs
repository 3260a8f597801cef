//! The closed set of public declaration kinds.

use std::fmt;
use std::sync::Arc;

use apidrift_foundation::{DeclarationId, Signature, TypeNode};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A public declaration extracted from one snapshot of a package.
///
/// Declarations are immutable: the extractor produces them once per
/// analyzed version and the comparator reads them without mutation.
/// [`Declaration::Missing`] is synthetic - matching produces it as the
/// counterpart of a declaration present in only one snapshot, so that
/// addition and removal are handled by exhaustive matching rather than
/// null checks.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Declaration {
    /// A variable declaration.
    Variable {
        /// Declared name.
        name: Arc<str>,
        /// Declared type.
        ty: TypeNode,
    },
    /// A constant declaration.
    Constant {
        /// Declared name.
        name: Arc<str>,
        /// Declared type.
        ty: TypeNode,
        /// Literal value text, when the extractor supplies it. Without it
        /// the value dimension of a constant comparison is unsupported.
        value: Option<Arc<str>>,
    },
    /// A type declaration.
    TypeAlias {
        /// Declared name.
        name: Arc<str>,
        /// The declared type's shape.
        ty: TypeNode,
    },
    /// A function or method declaration.
    Function {
        /// Declared name.
        name: Arc<str>,
        /// Receiver type; [`TypeNode::Absent`] for free functions.
        receiver: TypeNode,
        /// The function signature.
        signature: Signature,
    },
    /// A missing counterpart, synthesized during matching.
    Missing {
        /// Name of the declaration that exists only on the other side.
        name: Arc<str>,
        /// Receiver type name, empty for non-methods.
        receiver: Arc<str>,
    },
}

impl Declaration {
    /// Creates a variable declaration.
    #[must_use]
    pub fn variable(name: impl Into<Arc<str>>, ty: TypeNode) -> Self {
        Self::Variable {
            name: name.into(),
            ty,
        }
    }

    /// Creates a constant declaration without a literal value.
    #[must_use]
    pub fn constant(name: impl Into<Arc<str>>, ty: TypeNode) -> Self {
        Self::Constant {
            name: name.into(),
            ty,
            value: None,
        }
    }

    /// Creates a constant declaration carrying its literal value text.
    #[must_use]
    pub fn constant_with_value(
        name: impl Into<Arc<str>>,
        ty: TypeNode,
        value: impl Into<Arc<str>>,
    ) -> Self {
        Self::Constant {
            name: name.into(),
            ty,
            value: Some(value.into()),
        }
    }

    /// Creates a type declaration.
    #[must_use]
    pub fn type_alias(name: impl Into<Arc<str>>, ty: TypeNode) -> Self {
        Self::TypeAlias {
            name: name.into(),
            ty,
        }
    }

    /// Creates a free function declaration.
    #[must_use]
    pub fn function(name: impl Into<Arc<str>>, signature: Signature) -> Self {
        Self::Function {
            name: name.into(),
            receiver: TypeNode::Absent,
            signature,
        }
    }

    /// Creates a method declaration on the given receiver type.
    #[must_use]
    pub fn method(
        name: impl Into<Arc<str>>,
        receiver: TypeNode,
        signature: Signature,
    ) -> Self {
        Self::Function {
            name: name.into(),
            receiver,
            signature,
        }
    }

    /// The missing counterpart of a declaration with the given identity.
    pub(crate) fn missing_for(id: &DeclarationId) -> Self {
        Self::Missing {
            name: Arc::from(id.name()),
            receiver: Arc::from(id.receiver()),
        }
    }

    /// The declared name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Variable { name, .. }
            | Self::Constant { name, .. }
            | Self::TypeAlias { name, .. }
            | Self::Function { name, .. }
            | Self::Missing { name, .. } => name,
        }
    }

    /// Returns true if this is the synthetic missing counterpart.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }

    /// Derives the stable identity used to pair this declaration across
    /// snapshots.
    ///
    /// Pure: depends only on the declared name and, for methods, the
    /// textual name of the receiver type - never on the receiver's
    /// structure.
    #[must_use]
    pub fn identify(&self) -> DeclarationId {
        match self {
            Self::Variable { name, .. }
            | Self::Constant { name, .. }
            | Self::TypeAlias { name, .. } => DeclarationId::plain(Arc::clone(name)),
            Self::Function { name, receiver, .. } => match receiver.named_as() {
                Some(recv) => DeclarationId::method(Arc::clone(name), recv),
                None => DeclarationId::plain(Arc::clone(name)),
            },
            Self::Missing { name, receiver } => {
                if receiver.is_empty() {
                    DeclarationId::plain(Arc::clone(name))
                } else {
                    DeclarationId::method(Arc::clone(name), Arc::clone(receiver))
                }
            }
        }
    }

    /// Human-readable kind name, used in debug output.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Variable { .. } => "var",
            Self::Constant { .. } => "const",
            Self::TypeAlias { .. } => "type",
            Self::Function { .. } => "func",
            Self::Missing { .. } => "missing",
        }
    }
}

impl fmt::Debug for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable { name, ty } => write!(f, "var {name} {ty:?}"),
            Self::Constant { name, ty, value } => {
                write!(f, "const {name} {ty:?}")?;
                if let Some(value) = value {
                    write!(f, " = {value}")?;
                }
                Ok(())
            }
            Self::TypeAlias { name, ty } => write!(f, "type {name} {ty:?}"),
            Self::Function {
                name,
                receiver,
                signature,
            } => {
                let rendered = format!("{signature:?}");
                if receiver.is_absent() {
                    write!(f, "func {name}{}", &rendered["func".len()..])
                } else {
                    write!(f, "func ({receiver:?}) {name}{}", &rendered["func".len()..])
                }
            }
            Self::Missing { .. } => write!(f, "missing {}", self.identify()),
        }
    }
}
