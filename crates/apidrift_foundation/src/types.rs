//! The recursive model of public type shapes.
//!
//! Every type expression the analyzed language can produce in a public
//! signature is represented by a [`TypeNode`] variant. The model is
//! tree-shaped and immutable; named references are kept as names and never
//! expanded to their definitions, so no cycle can occur.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered mapping of struct field names to their types.
///
/// Insertion-ordered with unique keys, so field-name uniqueness within one
/// struct holds by construction.
pub type Fields = IndexMap<Arc<str>, TypeNode>;

/// Ordered mapping of interface method names to their signatures.
pub type Methods = IndexMap<Arc<str>, Signature>;

/// Built-in primitive kind.
///
/// A closed enumeration: the comparator matches on it exhaustively, so an
/// unrecognized primitive is a compile error rather than a runtime panic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Primitive {
    /// Boolean.
    Bool,
    /// String.
    String,
    /// Platform-width signed integer.
    Int,
    /// 8-bit signed integer.
    Int8,
    /// 16-bit signed integer.
    Int16,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// Platform-width unsigned integer.
    Uint,
    /// 8-bit unsigned integer.
    Uint8,
    /// 16-bit unsigned integer.
    Uint16,
    /// 32-bit unsigned integer.
    Uint32,
    /// 64-bit unsigned integer.
    Uint64,
    /// Pointer-width unsigned integer.
    Uintptr,
    /// Byte (alias of `Uint8` at the surface, distinct in the model).
    Byte,
    /// Unicode code point.
    Rune,
    /// 32-bit float.
    Float32,
    /// 64-bit float.
    Float64,
    /// 64-bit complex number.
    Complex64,
    /// 128-bit complex number.
    Complex128,
    /// The built-in error type, modeled as an explicit tag rather than
    /// being silently folded into some other kind.
    ErrorValue,
}

impl Primitive {
    /// Surface-syntax name of this primitive.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::String => "string",
            Self::Int => "int",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint => "uint",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Uintptr => "uintptr",
            Self::Byte => "byte",
            Self::Rune => "rune",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
            Self::ErrorValue => "error",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Channel direction as a capability set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Send-only channel.
    Send,
    /// Receive-only channel.
    Receive,
    /// Bidirectional channel.
    SendReceive,
}

impl Direction {
    /// Returns true if the channel can be sent to.
    #[must_use]
    pub const fn can_send(self) -> bool {
        matches!(self, Self::Send | Self::SendReceive)
    }

    /// Returns true if the channel can be received from.
    #[must_use]
    pub const fn can_receive(self) -> bool {
        matches!(self, Self::Receive | Self::SendReceive)
    }

    /// Returns true if every capability of `self` is also in `other`.
    ///
    /// Capability narrowing (this returning false) is always breaking.
    #[must_use]
    pub const fn is_subset_of(self, other: Self) -> bool {
        (!self.can_send() || other.can_send())
            && (!self.can_receive() || other.can_receive())
    }
}

/// Ordered, positional function signature.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Signature {
    /// Input parameter types, in declaration order.
    pub inputs: Vec<TypeNode>,
    /// Output types, in declaration order.
    pub outputs: Vec<TypeNode>,
}

impl Signature {
    /// Creates a signature from input and output type lists.
    #[must_use]
    pub fn new(inputs: Vec<TypeNode>, outputs: Vec<TypeNode>) -> Self {
        Self { inputs, outputs }
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "func(")?;
        for (i, input) in self.inputs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{input:?}")?;
        }
        write!(f, ")")?;
        match self.outputs.as_slice() {
            [] => Ok(()),
            [single] => write!(f, " {single:?}"),
            outputs => {
                write!(f, " (")?;
                for (i, output) in outputs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{output:?}")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A type expression in a public signature.
///
/// Immutable and tree-shaped. [`TypeNode::Named`] references stay
/// unresolved, and [`TypeNode::Absent`] is a first-class "no type here"
/// sentinel so addition/removal logic is exhaustively checked rather than
/// null-checked.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TypeNode {
    /// A built-in primitive.
    Primitive(Primitive),
    /// Reference to a user-defined type by name.
    Named(Arc<str>),
    /// Sequence of a single element type.
    Array(Box<TypeNode>),
    /// Variadic tail parameter element type.
    Variadic(Box<TypeNode>),
    /// Map from key type to value type.
    Map(Box<TypeNode>, Box<TypeNode>),
    /// Struct literal with ordered, uniquely named fields.
    Struct(Fields),
    /// Function signature.
    Signature(Signature),
    /// Interface method set.
    Interface(Methods),
    /// Channel with element type and direction.
    Channel {
        /// Element type.
        elem: Box<TypeNode>,
        /// Direction capability set.
        dir: Direction,
    },
    /// No type here (declaration had no counterpart).
    Absent,
}

impl TypeNode {
    /// Creates an array of the given element type.
    #[must_use]
    pub fn array(elem: TypeNode) -> Self {
        Self::Array(Box::new(elem))
    }

    /// Creates a variadic element of the given type.
    #[must_use]
    pub fn variadic(elem: TypeNode) -> Self {
        Self::Variadic(Box::new(elem))
    }

    /// Creates a map type with the given key and value types.
    #[must_use]
    pub fn map(key: TypeNode, value: TypeNode) -> Self {
        Self::Map(Box::new(key), Box::new(value))
    }

    /// Creates a channel type with the given element type and direction.
    #[must_use]
    pub fn channel(elem: TypeNode, dir: Direction) -> Self {
        Self::Channel {
            elem: Box::new(elem),
            dir,
        }
    }

    /// Creates a named reference to a user-defined type.
    #[must_use]
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        Self::Named(name.into())
    }

    /// Creates a function signature type.
    #[must_use]
    pub fn signature(inputs: Vec<TypeNode>, outputs: Vec<TypeNode>) -> Self {
        Self::Signature(Signature::new(inputs, outputs))
    }

    /// Returns true if this is the absence sentinel.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The name of a [`TypeNode::Named`] reference, if that is what this is.
    #[must_use]
    pub fn named_as(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            _ => None,
        }
    }
}

impl From<Primitive> for TypeNode {
    fn from(p: Primitive) -> Self {
        Self::Primitive(p)
    }
}

impl fmt::Debug for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => write!(f, "{p}"),
            Self::Named(name) => f.write_str(name),
            Self::Array(elem) => write!(f, "[]{elem:?}"),
            Self::Variadic(elem) => write!(f, "...{elem:?}"),
            Self::Map(key, value) => write!(f, "map[{key:?}]{value:?}"),
            Self::Struct(fields) => {
                write!(f, "struct{{")?;
                for (i, (name, ty)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{name} {ty:?}")?;
                }
                write!(f, "}}")
            }
            Self::Signature(sig) => write!(f, "{sig:?}"),
            Self::Interface(methods) => {
                write!(f, "interface{{")?;
                for (i, (name, sig)) in methods.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    // Method renders as name + signature sans the func keyword.
                    let rendered = format!("{sig:?}");
                    write!(f, "{name}{}", &rendered["func".len()..])?;
                }
                write!(f, "}}")
            }
            Self::Channel { elem, dir } => match dir {
                Direction::Send => write!(f, "chan<- {elem:?}"),
                Direction::Receive => write!(f, "<-chan {elem:?}"),
                Direction::SendReceive => write!(f, "chan {elem:?}"),
            },
            Self::Absent => write!(f, "<absent>"),
        }
    }
}

impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
