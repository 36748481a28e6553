//! Guard preparation and source merging.

use fieldguard_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::values;

fn signup_guard() -> Guard {
    Guard::new(rules! {
        "user" => [required, is_alnum(), length(3, 16).unwrap()],
        "age" => [required, range(13, 120)],
        "referrer" => [not(blank())],
    })
}

#[test]
fn strips_before_validating() {
    let accepted = signup_guard()
        .check(values(json!({"user": "  alice42 ", "age": " 30 "})))
        .unwrap();

    assert_eq!(accepted["user"], json!("alice42"));
    assert_eq!(accepted["age"], json!("30"));
}

#[test]
fn without_strip_whitespace_fails() {
    let guard = signup_guard().with_preparation(Preparation::none());
    let rejected = guard
        .check(values(json!({"user": " alice ", "age": 30})))
        .unwrap_err();

    assert_eq!(
        rejected.errors["user"],
        vec![FieldError::message("must be numbers and letters")]
    );
}

#[test]
fn blank_substitution_replaces_empty_strings() {
    let guard = signup_guard().with_preparation(Preparation::new().substitute_blank(Value::Null));

    // A whitespace-only referrer becomes null, which `not(blank())` accepts.
    let accepted = guard
        .check(values(json!({"user": "bob", "age": 40, "referrer": "   "})))
        .unwrap();
    assert_eq!(accepted["referrer"], Value::Null);
}

#[test]
fn empty_referrer_rejected_without_substitution() {
    let rejected = signup_guard()
        .check(values(json!({"user": "bob", "age": 40, "referrer": ""})))
        .unwrap_err();
    assert_eq!(
        rejected.errors["referrer"],
        vec![FieldError::message("must not be an empty string")]
    );
}

#[test]
fn transforms_feed_the_rules() {
    let guard = signup_guard().with_preparation(
        Preparation::new().transform("user", |v| match v {
            Value::String(s) => Ok(Value::String(s.to_lowercase())),
            other => Err(format!("expected text, got {other}")),
        }),
    );

    let accepted = guard
        .check(values(json!({"user": "ALICE", "age": 20})))
        .unwrap();
    assert_eq!(accepted["user"], json!("alice"));
}

#[test]
fn later_sources_override_earlier_ones() {
    let query = values(json!({"user": "alice", "age": "12"}));
    let body = values(json!({"age": "21"}));

    let accepted = signup_guard().check_sources([query, body]).unwrap();
    assert_eq!(accepted["age"], json!("21"));
}

#[test]
fn rejection_summarises_failing_fields() {
    let rejected = signup_guard().check(ValueSet::new()).unwrap_err();
    assert_eq!(
        rejected.to_string(),
        "validation failed for 2 field(s): user, age"
    );
    assert_eq!(rejected.into_errors().len(), 2);
}

#[test]
fn preparation_config_loads_from_json() {
    let config: PreparationConfig = serde_json::from_value(json!({
        "strip": false,
        "substitute_blank": true,
        "blank_default": 0,
    }))
    .unwrap();

    let prepared = Preparation::from_config(config)
        .apply(values(json!({"a": "", "b": " x "})))
        .unwrap();
    assert_eq!(Value::Object(prepared), json!({"a": 0, "b": " x "}));
}

#[test]
fn failing_transform_rejects_without_crashing() {
    let guard = signup_guard().with_preparation(Preparation::new().transform("age", |v: Value| {
        let age: u8 = v.as_str().unwrap_or_default().parse().unwrap();
        Ok::<_, String>(Value::from(age))
    }));

    let rejected = guard
        .check(values(json!({"user": "bob", "age": "abc"})))
        .unwrap_err();
    assert_eq!(
        rejected.errors["age"],
        vec![FieldError::message("could not be prepared")]
    );
}

#[test]
fn transform_error_text_is_reported() {
    let guard = signup_guard().with_preparation(
        Preparation::new().transform("user", |v| match v {
            Value::String(s) => Ok(Value::String(s.to_lowercase())),
            other => Err(format!("expected text, got {other}")),
        }),
    );

    let rejected = guard
        .check(values(json!({"user": 7, "age": 20})))
        .unwrap_err();
    assert_eq!(
        serde_json::to_value(&rejected.errors).unwrap(),
        json!({"user": ["expected text, got 7"]})
    );
}

#[test]
fn released_guard_passes_original_input_through() {
    let guard = signup_guard().with_preparation(
        Preparation::new()
            .transform("age", |v: Value| {
                v.as_str().unwrap_or_default().parse::<u8>().map(Value::from)
            })
            .release(true),
    );

    let released = guard
        .check(values(json!({"user": " bob ", "age": "abc"})))
        .unwrap();
    assert_eq!(Value::Object(released), json!({"user": " bob ", "age": "abc"}));
}

#[test]
fn padded_values_rejected_when_configured() {
    let config: PreparationConfig = serde_json::from_value(json!({"reject_padded": true})).unwrap();
    let guard = signup_guard().with_preparation(Preparation::from_config(config));

    let rejected = guard
        .check(values(json!({"user": "alice ", "age": 30})))
        .unwrap_err();
    assert_eq!(
        rejected.errors["user"],
        vec![FieldError::message("must not start or end with whitespace")]
    );
}
