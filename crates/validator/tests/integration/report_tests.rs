//! Report serialization, fault containment, and sharing.

use std::sync::Arc;
use std::thread;

use fieldguard_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::values;

#[test]
fn outcome_serializes_with_valid_flag() {
    let rules = rules! { "a" => [required] };

    let invalid = serde_json::to_value(rules.validate(&ValueSet::new())).unwrap();
    assert_eq!(invalid, json!({"valid": false, "errors": {"a": ["must be present"]}}));

    let valid = serde_json::to_value(rules.validate(&values(json!({"a": 0})))).unwrap();
    assert_eq!(valid, json!({"valid": true, "errors": {}}));
}

#[test]
fn outcome_deserializes_from_report() {
    let outcome: ValidationOutcome = serde_json::from_value(json!({
        "valid": true,
        "errors": {"items": [{"0": {"x": ["must be present"]}}]},
    }))
    .unwrap();

    // `valid` is recomputed from the errors.
    assert!(!outcome.is_valid());
    let by_index = outcome.field("items").unwrap()[0].as_nested().unwrap();
    assert_eq!(by_index["0"].as_map().unwrap()["x"], vec![FieldError::message(MUST_BE_PRESENT)]);
}

#[test]
fn panicking_predicate_becomes_field_error() {
    let rules = rules! {
        "x" => [
            predicate(|v| v.as_array().unwrap().is_empty()).with_message("must be an empty list"),
            truthy(),
        ],
    };

    let outcome = rules.validate(&values(json!({"x": 0})));
    assert_eq!(
        outcome.field("x").unwrap(),
        &[
            FieldError::message("must be an empty list"),
            FieldError::message("must be True-equivalent value"),
        ]
    );
}

#[test]
fn into_result_keeps_report() {
    let rules = rules! { "a" => [required] };
    let err = rules.validate(&ValueSet::new()).into_result().unwrap_err();
    assert_eq!(err.errors["a"], vec![FieldError::message(MUST_BE_PRESENT)]);
}

#[test]
fn rule_set_is_shared_across_threads() {
    let rules = Arc::new(rules! {
        "n" => [required, range(0, 9)],
    });

    let results: Vec<bool> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let rules = Arc::clone(&rules);
                scope.spawn(move || rules.validate(&values(json!({"n": n * 2}))).is_valid())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, [true, true, true, true, true, false, false, false]);
}

#[test]
fn shared_validator_in_several_fields() {
    let digits = is_digit().shared();
    let rules = RuleSet::new()
        .field("zip", FieldRules::required().shared(Arc::clone(&digits)))
        .field("pin", FieldRules::required().shared(digits));

    let outcome = rules.validate(&values(json!({"zip": "12345", "pin": "12a4"})));
    assert_eq!(
        serde_json::to_value(outcome.errors()).unwrap(),
        json!({"pin": ["must be all numbers"]})
    );
}
