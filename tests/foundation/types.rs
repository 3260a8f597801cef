//! Integration tests for the type model
//!
//! Construction, equality, direction capabilities, and surface-syntax
//! rendering of `TypeNode`.

use apidrift_foundation::{Direction, Fields, Methods, Primitive, Signature, TypeNode};

#[test]
fn primitive_kinds_are_distinct() {
    // Byte and Uint8 alias at the language surface but stay distinct in
    // the model; folding them is the extractor's call.
    assert_ne!(
        TypeNode::from(Primitive::Byte),
        TypeNode::from(Primitive::Uint8)
    );
    assert_ne!(
        TypeNode::from(Primitive::Int32),
        TypeNode::from(Primitive::Rune)
    );
}

#[test]
fn error_is_an_explicit_kind() {
    // The built-in error type has its own tag instead of borrowing some
    // other primitive's.
    let err = TypeNode::from(Primitive::ErrorValue);
    assert_eq!(format!("{err}"), "error");
    assert_ne!(err, TypeNode::named("error"));
}

#[test]
fn nested_construction() {
    // map[string][]chan<- int
    let ty = TypeNode::map(
        Primitive::String.into(),
        TypeNode::array(TypeNode::channel(Primitive::Int.into(), Direction::Send)),
    );
    assert_eq!(format!("{ty}"), "map[string][]chan<- int");
}

#[test]
fn direction_capability_lattice() {
    for dir in [Direction::Send, Direction::Receive, Direction::SendReceive] {
        // Reflexive, and everything embeds into the bidirectional channel.
        assert!(dir.is_subset_of(dir));
        assert!(dir.is_subset_of(Direction::SendReceive));
    }
    assert!(!Direction::SendReceive.is_subset_of(Direction::Send));
    assert!(!Direction::SendReceive.is_subset_of(Direction::Receive));
}

#[test]
fn struct_fields_are_unique_by_construction() {
    let mut fields = Fields::new();
    fields.insert("A".into(), Primitive::Int.into());
    fields.insert("A".into(), Primitive::String.into());
    // The second insert replaces, never duplicates.
    assert_eq!(fields.len(), 1);
    assert_eq!(fields["A"], TypeNode::from(Primitive::String));
}

#[test]
fn interface_rendering() {
    let mut methods = Methods::new();
    methods.insert(
        "Close".into(),
        Signature::new(vec![], vec![Primitive::ErrorValue.into()]),
    );
    let iface = TypeNode::Interface(methods);
    assert_eq!(format!("{iface}"), "interface{Close() error}");
}

#[test]
fn absent_is_a_first_class_shape() {
    assert!(TypeNode::Absent.is_absent());
    assert!(!TypeNode::from(Primitive::Int).is_absent());
    assert_eq!(format!("{}", TypeNode::Absent), "<absent>");
}
