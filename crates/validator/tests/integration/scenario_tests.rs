//! Full rule sets against form-style input.

use fieldguard_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use serde_json::json;

use crate::values;

#[fixture]
fn form_rules() -> RuleSet {
    rules! {
        "a" => [required, equals("123")],
        "b" => [required, truthy()],
        "c" => [one_of(["spam", "eggs", "bacon"])],
        "d" => [not(range(1, 100))],
        "e" => [length(0, 5).unwrap()],
        "f" => [required, type_of(Kind::String)],
        "g" => [required, not(one_of(["spam", "eggs", "bacon"]))],
        "h" => [required, pattern(r"\d\d%").unwrap()],
        "i" => [required, greater_than(1).inclusive()],
        "j" => [predicate(|v| v == "bar")],
        "k" => [required, is_alnum()],
        "l" => [required, is_alpha()],
        "m" => [required, is_digit()],
    }
}

#[rstest]
fn accepts_well_formed_form(form_rules: RuleSet) {
    let input = values(json!({
        "a": "123", "b": "123", "c": "spam", "d": "123", "e": "1236",
        "f": "123", "g": "spa1", "h": "11%", "i": "12", "j": "bar",
        "k": "32", "l": "abc", "m": "123",
    }));

    let outcome = validate(&form_rules, &input);
    assert!(outcome.is_valid());
    assert!(outcome.errors().is_empty());
}

#[rstest]
fn reports_every_failing_field(form_rules: RuleSet) {
    let input = values(json!({
        "a": "124", "b": "", "c": "ham", "d": "50", "e": "123456",
        "f": 1, "g": "spam", "h": "1%", "i": "0", "j": "nobar",
        "k": "a b", "l": "a1", "m": "1.5",
    }));

    let outcome = validate(&form_rules, &input);
    assert!(!outcome.is_valid());
    assert_eq!(
        serde_json::to_value(outcome.errors()).unwrap(),
        json!({
            "a": ["must be equal to '123'"],
            "b": ["must be True-equivalent value"],
            "c": ["must be one of ['spam', 'eggs', 'bacon']"],
            "d": ["must not fall between 1 and 100"],
            "e": ["must be at most 5 elements in length"],
            "f": ["must be of type string"],
            "g": ["must not be one of ['spam', 'eggs', 'bacon']"],
            "h": [r"must match regex pattern \d\d%"],
            "i": ["must be greater than 1"],
            "j": ["failed validation"],
            "k": ["must be numbers and letters"],
            "l": ["must be all letters"],
            "m": ["must be all numbers"],
        })
    );
}

#[rstest]
fn empty_input_reports_required_fields_only(form_rules: RuleSet) {
    let outcome = validate(&form_rules, &ValueSet::new());

    let failed: Vec<_> = outcome.errors().keys().map(String::as_str).collect();
    assert_eq!(failed, ["a", "b", "f", "g", "h", "i", "k", "l", "m"]);
    for errors in outcome.errors().values() {
        assert_eq!(errors, &vec![FieldError::message(MUST_BE_PRESENT)]);
    }
}

#[rstest]
#[case(json!({"a": "124", "d": "13"}), false, json!({
    "a": ["must be equal to '123'"],
    "d": ["must not fall between 1 and 100"],
}))]
#[case(json!({"a": "123", "d": "500"}), true, json!({}))]
#[case(json!({"a": "123"}), true, json!({}))]
#[case(json!({"d": 1}), false, json!({
    "a": ["must be present"],
    "d": ["must not fall between 1 and 100"],
}))]
fn required_and_negated_range(
    #[case] input: serde_json::Value,
    #[case] valid: bool,
    #[case] errors: serde_json::Value,
) {
    let rules = rules! {
        "a" => [required, equals("123")],
        "d" => [not(range(1, 100))],
    };

    let outcome = rules.validate(&values(input));
    assert_eq!(outcome.is_valid(), valid);
    assert_eq!(serde_json::to_value(outcome.errors()).unwrap(), errors);
}

#[test]
fn field_collects_all_failures_in_rule_order() {
    let rules = rules! {
        "code" => [required, is_digit(), length(4, 4).unwrap(), not(contains("0"))],
    };

    let outcome = rules.validate(&values(json!({"code": "a0"})));
    assert_eq!(
        outcome.field("code").unwrap(),
        &[
            FieldError::message("must be all numbers"),
            FieldError::message("must be between 4 and 4 elements in length"),
            FieldError::message("must not contain 0"),
        ]
    );
}

#[test]
fn unknown_input_fields_are_ignored() {
    let rules = rules! { "a" => [required] };
    assert!(rules.validate(&values(json!({"a": 1, "zzz": null}))).is_valid());
}

#[test]
fn nested_rule_sets_report_nested_maps() {
    let rules = rules! {
        "server" => [required, rules! {
            "host" => [required, length(1, 0).unwrap()],
            "port" => [required, greater_than(0).strict()],
        }],
    };

    let outcome = rules.validate(&values(json!({"server": {"host": "", "port": "80"}})));
    assert_eq!(
        serde_json::to_value(outcome.errors()).unwrap(),
        json!({
            "server": [{
                "host": ["must be at least 1 elements in length"],
                "port": ["must be greater than 0"],
            }]
        })
    );
}

#[cfg(feature = "temporal")]
#[test]
fn format_validators_use_fixed_messages() {
    let rules = rules! {
        "email" => [email()],
        "birthday" => [date()],
        "created" => [datetime()],
    };

    let outcome = rules.validate(&values(json!({
        "email": "nobody",
        "birthday": "1990-02-30",
        "created": "yesterday",
    })));
    assert_eq!(
        serde_json::to_value(outcome.errors()).unwrap(),
        json!({
            "email": ["Invalid Email"],
            "birthday": ["Invalid Date format"],
            "created": ["Invalid Datetime format"],
        })
    );
}
