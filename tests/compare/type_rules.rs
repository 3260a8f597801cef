//! Integration tests for type-level comparison rules
//!
//! Core scenarios: kind changes, channel narrowing and widening,
//! map symmetry, and the array/variadic hazard.

use apidrift_compare::compare_type;
use apidrift_foundation::{Direction, Fields, Outcome, Primitive, TypeNode};

fn int() -> TypeNode {
    Primitive::Int.into()
}

#[test]
fn primitive_to_struct_is_major() {
    let strukt = TypeNode::Struct(Fields::new());
    assert_eq!(compare_type(&int(), &strukt), Outcome::MAJOR);
}

#[test]
fn every_cross_variant_pair_except_array_variadic_is_major() {
    let shapes = [
        int(),
        TypeNode::named("T"),
        TypeNode::map(int(), int()),
        TypeNode::Struct(Fields::new()),
        TypeNode::signature(vec![], vec![]),
        TypeNode::channel(int(), Direction::SendReceive),
    ];
    for (i, a) in shapes.iter().enumerate() {
        for (j, b) in shapes.iter().enumerate() {
            if i != j {
                assert_eq!(
                    compare_type(a, b),
                    Outcome::MAJOR,
                    "expected major for {a} -> {b}"
                );
            }
        }
    }
}

#[test]
fn channel_narrowing_is_major_widening_is_minor() {
    let bi = TypeNode::channel(int(), Direction::SendReceive);
    let send = TypeNode::channel(int(), Direction::Send);
    assert_eq!(compare_type(&bi, &send), Outcome::MAJOR);
    assert_eq!(compare_type(&send, &bi), Outcome::MINOR);
    assert_eq!(compare_type(&send, &send), Outcome::EQUAL);
}

#[test]
fn map_value_kind_change_is_major() {
    let old = TypeNode::map(Primitive::String.into(), int());
    let new = TypeNode::map(Primitive::String.into(), Primitive::Int64.into());
    assert_eq!(compare_type(&old, &new), Outcome::MAJOR);
}

#[test]
fn deep_nesting_propagates_the_leaf_verdict() {
    // The single changed leaf is four levels down.
    let wrap = |leaf: TypeNode| {
        TypeNode::array(TypeNode::map(
            Primitive::String.into(),
            TypeNode::channel(TypeNode::array(leaf), Direction::Receive),
        ))
    };
    assert_eq!(compare_type(&wrap(int()), &wrap(int())), Outcome::EQUAL);
    assert_eq!(
        compare_type(&wrap(int()), &wrap(Primitive::Int64.into())),
        Outcome::MAJOR
    );
}

#[test]
fn array_variadic_hazard_single_step() {
    let old = TypeNode::signature(vec![TypeNode::array(int())], vec![]);
    let new = TypeNode::signature(vec![TypeNode::variadic(int())], vec![]);
    assert_eq!(compare_type(&old, &new), Outcome::MINOR);
}
