//! Per-element validation of arrays.

use fieldguard_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::values;

#[test]
fn flat_form_repeats_messages_per_element() {
    let rules = rules! {
        "tags" => [required, each(is_alpha()).and(length(1, 4).unwrap())],
    };

    let outcome = rules.validate(&values(json!({"tags": ["ok", "no1", "toolong"]})));
    assert_eq!(
        outcome.field("tags").unwrap(),
        &[
            FieldError::message("all values must be all letters"),
            FieldError::message("all values must be between 1 and 4 elements in length"),
        ]
    );
}

#[test]
fn rule_set_form_flags_failing_indices() {
    let rules = rules! {
        "items" => [each_rules(rules! { "x" => [required] })],
    };

    let outcome = rules.validate(&values(json!({"items": [{}, {"x": 1}, {"y": 2}]})));
    assert_eq!(
        serde_json::to_value(outcome.errors()).unwrap(),
        json!({
            "items": [{
                "0": {"x": ["must be present"]},
                "2": {"x": ["must be present"]},
            }]
        })
    );
}

#[test]
fn rule_set_form_passes_clean_arrays() {
    let rules = rules! {
        "items" => [each_rules(rules! { "qty" => [required, greater_than(0)] })],
    };
    assert!(
        rules
            .validate(&values(json!({"items": [{"qty": 1}, {"qty": "2"}]})))
            .is_valid()
    );
}

#[test]
fn non_array_reports_list_requirement() {
    let rules = rules! { "tags" => [each(is_alpha())] };

    let outcome = rules.validate(&values(json!({"tags": "abc"})));
    assert_eq!(outcome.field("tags").unwrap(), &[FieldError::message("must be a list")]);
}

#[test]
fn each_inside_nested_rule_set() {
    let rules = rules! {
        "order" => [rules! {
            "lines" => [required, each_rules(rules! { "sku" => [required, pattern("[A-Z]{3}-").unwrap()] })],
        }],
    };

    let outcome = rules.validate(&values(json!({
        "order": {"lines": [{"sku": "ABC-1"}, {"sku": "abc-1"}]}
    })));
    assert_eq!(
        serde_json::to_value(outcome.errors()).unwrap(),
        json!({
            "order": [{
                "lines": [{
                    "1": {"sku": ["must match regex pattern [A-Z]{3}-"]},
                }]
            }]
        })
    );
}

#[test]
fn validators_and_rule_set_both_apply() {
    let rules = rules! {
        "items" => [required, each_rules(rules! { "x" => [required] }).and(length(1, 0).unwrap())],
    };

    let outcome = rules.validate(&values(json!({"items": [{"y": 1}, {}]})));
    assert!(!outcome.is_valid());
    assert_eq!(
        serde_json::to_value(outcome.errors()).unwrap(),
        json!({
            "items": [
                "all values must be at least 1 elements in length",
                {
                    "0": {"x": ["must be present"]},
                    "1": {"x": ["must be present"]},
                },
            ]
        })
    );
}

#[test]
fn list_of_lists() {
    let rules = rules! { "grid" => [each(each(is_digit()))] };

    let outcome = rules.validate(&values(json!({"grid": [["1", "2"], ["3", "x"]]})));
    assert_eq!(
        outcome.field("grid").unwrap(),
        &[FieldError::message("all values all values must be all numbers")]
    );
}
