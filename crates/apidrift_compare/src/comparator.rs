//! The recursive structural comparator.
//!
//! [`compare_type`] is total over every pair of type-shape variants and
//! [`compare_pair`] over every pair of declaration kinds: no combination
//! panics, and no unclassifiable combination defaults to `Equal`.
//! Comparison is a pure function of two immutable trees; recursion depth
//! is bounded by the nesting depth of the shallower tree, and named
//! references are compared by name without expansion, so no cycle can
//! occur.

use apidrift_foundation::{
    Direction, Fields, Methods, Outcome, Signature, TypeNode, Unsupported,
};
use apidrift_surface::{Declaration, MatchedPair};

/// Computes the compatibility outcome of replacing type shape `old` with
/// `new`.
///
/// The analyzed language has no implicit widening or subtyping, so any
/// change of top-level variant is `Major` - even numerically "safe" ones
/// like `int` to `int64`. The one softened cross-variant pairing is
/// array/variadic, which keeps existing call sites compiling.
#[must_use]
pub fn compare_type(old: &TypeNode, new: &TypeNode) -> Outcome {
    match (old, new) {
        (TypeNode::Absent, TypeNode::Absent) => Outcome::EQUAL,
        // Gained a type where none existed.
        (TypeNode::Absent, _) => Outcome::MINOR,
        // Lost the type entirely.
        (_, TypeNode::Absent) => Outcome::MAJOR,

        (TypeNode::Primitive(a), TypeNode::Primitive(b)) => {
            if a == b {
                Outcome::EQUAL
            } else {
                Outcome::MAJOR
            }
        }

        // References are compared by name, never expanded.
        (TypeNode::Named(a), TypeNode::Named(b)) => {
            if a == b {
                Outcome::EQUAL
            } else {
                Outcome::MAJOR
            }
        }

        (TypeNode::Array(a), TypeNode::Array(b))
        | (TypeNode::Variadic(a), TypeNode::Variadic(b)) => compare_type(a, b),

        // Array <-> variadic keeps call sites compiling, so the step itself
        // is minor. Three pairwise-minor steps (T -> ...T -> []T) compose
        // into a breaking change overall; a pairwise comparator cannot see
        // that chain, and this is a documented non-property rather than
        // something to special-case.
        (TypeNode::Array(a), TypeNode::Variadic(b))
        | (TypeNode::Variadic(a), TypeNode::Array(b)) => {
            Outcome::MINOR.combine(compare_type(a, b))
        }

        // Key and value contribute symmetrically.
        (TypeNode::Map(k1, v1), TypeNode::Map(k2, v2)) => {
            compare_type(k1, k2).combine(compare_type(v1, v2))
        }

        (TypeNode::Struct(a), TypeNode::Struct(b)) => compare_struct(a, b),
        (TypeNode::Signature(a), TypeNode::Signature(b)) => compare_signature(a, b),
        (TypeNode::Interface(a), TypeNode::Interface(b)) => compare_interface(a, b),

        (
            TypeNode::Channel { elem: e1, dir: d1 },
            TypeNode::Channel { elem: e2, dir: d2 },
        ) => compare_channel(e1, *d1, e2, *d2),

        // Any other change of top-level variant is breaking.
        _ => Outcome::MAJOR,
    }
}

/// Computes the compatibility outcome of a matched declaration pair.
///
/// The precondition that both sides share an identity (or one is
/// `Missing`) is guaranteed by [`MatchedPair`] construction.
#[must_use]
pub fn compare_pair(pair: &MatchedPair) -> Outcome {
    let (old, new) = pair.sides();
    match (old, new) {
        // Matching never produces a doubly-missing pair; kept for totality.
        (Declaration::Missing { .. }, Declaration::Missing { .. }) => Outcome::EQUAL,
        // Pure addition is backward-compatible. This does not model
        // indirect breakage such as a new interface method forcing
        // implementers to change.
        (Declaration::Missing { .. }, _) => Outcome::MINOR,
        // Removal is always breaking.
        (_, Declaration::Missing { .. }) => Outcome::MAJOR,

        (
            Declaration::Variable { ty: a, .. },
            Declaration::Variable { ty: b, .. },
        )
        | (
            Declaration::TypeAlias { ty: a, .. },
            Declaration::TypeAlias { ty: b, .. },
        ) => compare_type(a, b),

        (
            Declaration::Constant {
                ty: a, value: va, ..
            },
            Declaration::Constant {
                ty: b, value: vb, ..
            },
        ) => compare_type(a, b).combine(compare_const_value(va.as_deref(), vb.as_deref())),

        (
            Declaration::Function {
                receiver: r1,
                signature: s1,
                ..
            },
            Declaration::Function {
                receiver: r2,
                signature: s2,
                ..
            },
        ) => compare_type(r1, r2).combine(compare_signature(s1, s2)),

        // A declaration changing kind has no minor path.
        _ => Outcome::MAJOR,
    }
}

/// Constant value dimension: equal literals are equal, different literals
/// are breaking (callers may fold the value into constant expressions),
/// and a missing literal is explicitly unsupported - never `Equal`.
fn compare_const_value(old: Option<&str>, new: Option<&str>) -> Outcome {
    match (old, new) {
        (Some(a), Some(b)) if a == b => Outcome::EQUAL,
        (Some(_), Some(_)) => Outcome::MAJOR,
        _ => Outcome::Unsupported(Unsupported::ConstantValue),
    }
}

/// Struct fields compare as a name-keyed map; field order is ignored
/// because unkeyed composite literals are outside the compatibility
/// contract. Removing a field breaks readers; adding one is additive.
fn compare_struct(old: &Fields, new: &Fields) -> Outcome {
    let mut acc = Outcome::EQUAL;
    for (name, old_ty) in old {
        acc = acc.combine(match new.get(name) {
            Some(new_ty) => compare_type(old_ty, new_ty),
            None => Outcome::MAJOR,
        });
    }
    for name in new.keys() {
        if !old.contains_key(name) {
            acc = acc.combine(Outcome::MINOR);
        }
    }
    acc
}

/// Interface method sets have no minor growth path: removing a method
/// breaks callers, and adding one breaks every existing implementer.
fn compare_interface(old: &Methods, new: &Methods) -> Outcome {
    let mut acc = Outcome::EQUAL;
    for (name, old_sig) in old {
        acc = acc.combine(match new.get(name) {
            Some(new_sig) => compare_signature(old_sig, new_sig),
            None => Outcome::MAJOR,
        });
    }
    for name in new.keys() {
        if !old.contains_key(name) {
            acc = acc.combine(Outcome::MAJOR);
        }
    }
    acc
}

/// Signatures compare positionally. Output arity changes break multi-value
/// assignments outright; the only input arity change with a compatible
/// reading is appending one trailing variadic parameter.
fn compare_signature(old: &Signature, new: &Signature) -> Outcome {
    if old.outputs.len() != new.outputs.len() {
        return Outcome::MAJOR;
    }
    let outputs = compare_elementwise(&old.outputs, &new.outputs);
    compare_inputs(&old.inputs, &new.inputs).combine(outputs)
}

fn compare_inputs(old: &[TypeNode], new: &[TypeNode]) -> Outcome {
    if old.len() == new.len() {
        return compare_elementwise(old, new);
    }
    // Appending one trailing variadic keeps existing call sites compiling.
    if new.len() == old.len() + 1
        && matches!(new.last(), Some(TypeNode::Variadic(_)))
    {
        return Outcome::MINOR.combine(compare_elementwise(old, &new[..old.len()]));
    }
    Outcome::MAJOR
}

fn compare_elementwise(old: &[TypeNode], new: &[TypeNode]) -> Outcome {
    debug_assert_eq!(old.len(), new.len());
    old.iter()
        .zip(new)
        .map(|(a, b)| compare_type(a, b))
        .fold(Outcome::EQUAL, Outcome::combine)
}

/// Channel comparison: a removed capability is breaking, an added one is a
/// widening; either way the element comparison joins in.
fn compare_channel(
    old_elem: &TypeNode,
    old_dir: Direction,
    new_elem: &TypeNode,
    new_dir: Direction,
) -> Outcome {
    let directional = if !old_dir.is_subset_of(new_dir) {
        Outcome::MAJOR
    } else if old_dir == new_dir {
        Outcome::EQUAL
    } else {
        Outcome::MINOR
    };
    directional.combine(compare_type(old_elem, new_elem))
}
