//! If/Then rules across sibling fields.

use fieldguard_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

use crate::values;

fn shipping_rules() -> RuleSet {
    rules! {
        "delivery" => [
            required,
            one_of(["pickup", "courier"]),
            when(equals("courier"), then(rules! {
                "address" => [required, length(5, 0).unwrap()],
                "phone" => [required, is_digit()],
            })),
        ],
    }
}

#[rstest]
#[case(json!({"delivery": "pickup"}))]
#[case(json!({"delivery": "courier", "address": "1 Main St", "phone": "5550100"}))]
fn dependent_rules_satisfied_or_inactive(#[case] input: Value) {
    assert!(shipping_rules().validate(&values(input)).is_valid());
}

#[test]
fn dependent_failures_nest_under_conditional_field() {
    let outcome = shipping_rules().validate(&values(json!({
        "delivery": "courier",
        "phone": "555-0100",
    })));

    assert_eq!(
        serde_json::to_value(outcome.errors()).unwrap(),
        json!({
            "delivery": [{
                "address": ["must be present"],
                "phone": ["must be all numbers"],
            }]
        })
    );
    assert!(outcome.field("address").is_none());
}

#[test]
fn condition_and_plain_rules_report_together() {
    let rules = rules! {
        "n" => [
            greater_than(10),
            when(greater_than(0), then(rules! { "unit" => [required] })),
        ],
    };

    let outcome = rules.validate(&values(json!({"n": 5})));
    assert_eq!(
        serde_json::to_value(outcome.errors()).unwrap(),
        json!({"n": ["must be greater than 10", {"unit": ["must be present"]}]})
    );
}

#[test]
fn condition_mismatch_does_not_hold() {
    let rules = rules! {
        "n" => [when(greater_than(0), then(rules! { "unit" => [required] }))],
    };
    assert!(rules.validate(&values(json!({"n": "many"}))).is_valid());
}

#[test]
fn absent_optional_field_skips_its_condition() {
    let rules = rules! {
        "flag" => [when(truthy(), then(rules! { "reason" => [required] }))],
    };
    assert!(rules.validate(&ValueSet::new()).is_valid());
}
