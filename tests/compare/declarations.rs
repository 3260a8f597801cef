//! Integration tests for declaration-level comparison
//!
//! Dispatch over matched pairs: kind changes, payload propagation, and
//! the constant-value policy.

use apidrift_compare::{compare_pair, diff};
use apidrift_foundation::{Outcome, Primitive, Signature, TypeNode, Unsupported};
use apidrift_surface::{Declaration, match_snapshots};

#[test]
fn variable_to_function_is_major() {
    let old = vec![Declaration::variable("Handler", Primitive::Int.into())];
    let new = vec![Declaration::function(
        "Handler",
        Signature::new(vec![], vec![]),
    )];
    let pairs = match_snapshots(&old, &new).unwrap();
    assert_eq!(compare_pair(&pairs[0]), Outcome::MAJOR);
}

#[test]
fn unchanged_function_is_equal() {
    let decl = Declaration::function(
        "Open",
        Signature::new(
            vec![Primitive::String.into()],
            vec![TypeNode::named("File"), Primitive::ErrorValue.into()],
        ),
    );
    let pairs = match_snapshots(&[decl.clone()], &[decl]).unwrap();
    assert_eq!(compare_pair(&pairs[0]), Outcome::EQUAL);
}

#[test]
fn constant_policy_via_report() {
    let old = vec![
        Declaration::constant_with_value("KeptValue", Primitive::Int.into(), "1"),
        Declaration::constant_with_value("Bumped", Primitive::Int.into(), "1"),
        Declaration::constant("Opaque", Primitive::Int.into()),
    ];
    let new = vec![
        Declaration::constant_with_value("KeptValue", Primitive::Int.into(), "1"),
        Declaration::constant_with_value("Bumped", Primitive::Int.into(), "2"),
        Declaration::constant("Opaque", Primitive::Int.into()),
    ];
    let report = diff(&old, &new).unwrap();
    let by_name = |name: &str| {
        report
            .iter()
            .find(|e| e.id.name() == name)
            .unwrap()
            .outcome
    };
    assert_eq!(by_name("KeptValue"), Outcome::EQUAL);
    assert_eq!(by_name("Bumped"), Outcome::MAJOR);
    // An unknown literal never passes as "no change".
    assert_eq!(
        by_name("Opaque"),
        Outcome::Unsupported(Unsupported::ConstantValue)
    );
}

#[test]
fn method_and_free_function_diverge_independently() {
    let sig = Signature::new(vec![], vec![]);
    let changed = Signature::new(vec![Primitive::Int.into()], vec![]);
    let old = vec![
        Declaration::function("Reset", sig.clone()),
        Declaration::method("Reset", TypeNode::named("Buffer"), sig.clone()),
    ];
    let new = vec![
        Declaration::function("Reset", sig),
        Declaration::method("Reset", TypeNode::named("Buffer"), changed),
    ];
    let report = diff(&old, &new).unwrap();
    assert_eq!(report.len(), 2);
    // Sorted order puts the free function first.
    assert_eq!(report[0].id.to_string(), "Reset");
    assert_eq!(report[0].outcome, Outcome::EQUAL);
    assert_eq!(report[1].id.to_string(), "Buffer.Reset");
    assert_eq!(report[1].outcome, Outcome::MAJOR);
}
