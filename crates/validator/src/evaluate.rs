//! Recursive evaluator
//!
//! Walks a [`RuleSet`] against a [`ValueSet`] and collects every failure into
//! one [`ValidationOutcome`]. Per field, in rule-set order:
//!
//! 1. a required field that is absent reports [`MUST_BE_PRESENT`] and nothing
//!    else;
//! 2. an optional field that is absent is skipped;
//! 3. otherwise every rule runs in list order and all failures are kept.
//!
//! Validators run behind [`invoke`], which turns mismatches and panics into
//! the validator's failure message, so evaluation itself cannot fail.

use std::panic::{self, AssertUnwindSafe};

use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::foundation::{
    ErrorEntry, ErrorMap, FieldError, Validate, ValidationOutcome, ValueSet, Verdict,
};
use crate::rules::{FieldRules, Rule, RuleSet};

/// Reported for a required field that is absent.
pub const MUST_BE_PRESENT: &str = "must be present";

/// Reported when a nested rule set meets a value that is not a mapping.
pub const NOT_A_MAPPING: &str = "must be a mapping";

/// Evaluates `rules` against `values`.
///
/// # Examples
///
/// ```
/// use fieldguard_validator::prelude::*;
/// use serde_json::json;
///
/// let rules = rules! {
///     "a" => [required, equals("123")],
///     "d" => [not(range(1, 100))],
/// };
///
/// let values = json!({"a": "124", "d": "13"});
/// let outcome = validate(&rules, values.as_object().unwrap());
///
/// assert!(!outcome.is_valid());
/// assert_eq!(
///     serde_json::to_value(outcome.errors()).unwrap(),
///     json!({
///         "a": ["must be equal to '123'"],
///         "d": ["must not fall between 1 and 100"],
///     })
/// );
/// ```
pub fn validate(rules: &RuleSet, values: &ValueSet) -> ValidationOutcome {
    let errors = collect(rules, values);
    debug!(
        fields = rules.len(),
        failed = errors.len(),
        "evaluated rule set"
    );
    ValidationOutcome::from_errors(errors)
}

/// Builds the error report for one value set.
pub(crate) fn collect(rules: &RuleSet, values: &ValueSet) -> ErrorMap {
    rules
        .iter()
        .filter_map(|(name, field)| {
            let errors = check_field(field, values.get(name), values);
            if errors.is_empty() {
                None
            } else {
                trace!(field = name, count = errors.len(), "field failed");
                Some((name.to_owned(), ErrorEntry::List(errors)))
            }
        })
        .collect()
}

/// Evaluates a rule set against a value that should be a mapping.
///
/// Returns `None` if the value is not a mapping.
pub(crate) fn collect_nested(rules: &RuleSet, value: &Value) -> Option<ErrorMap> {
    value.as_object().map(|values| collect(rules, values))
}

fn check_field(field: &FieldRules, value: Option<&Value>, values: &ValueSet) -> Vec<FieldError> {
    let Some(value) = value else {
        return if field.is_required() {
            vec![FieldError::message(MUST_BE_PRESENT)]
        } else {
            Vec::new()
        };
    };

    field
        .rules()
        .iter()
        .flat_map(|rule| apply(rule, value, values))
        .collect()
}

fn apply(rule: &Rule, value: &Value, values: &ValueSet) -> Vec<FieldError> {
    match rule {
        Rule::Check(validator) => invoke(validator.as_ref(), value),
        Rule::If(conditional) => match conditional.apply(value, values) {
            (true, Some(dependent)) => vec![FieldError::Nested(dependent)],
            _ => Vec::new(),
        },
        Rule::Nested(rules) => match collect_nested(rules, value) {
            Some(errors) if errors.is_empty() => Vec::new(),
            Some(errors) => vec![FieldError::Nested(errors)],
            None => vec![FieldError::message(NOT_A_MAPPING)],
        },
    }
}

// ============================================================================
// FAULT BOUNDARY
// ============================================================================

/// Runs one validator against one value and returns the entries to report.
///
/// An empty vector means the value passed. A [`Mismatch`](crate::error::Mismatch)
/// or a panic inside the validator is reported with the validator's failure
/// message; neither reaches the caller.
pub fn invoke(validator: &dyn Validate, value: &Value) -> Vec<FieldError> {
    match guarded(validator, value) {
        Verdict::Pass => Vec::new(),
        Verdict::Fail => vec![FieldError::message(validator.messages().failure())],
        Verdict::Detailed(entries) => entries,
    }
}

/// Runs one validator, folding mismatches and panics into [`Verdict::Fail`].
pub(crate) fn guarded(validator: &dyn Validate, value: &Value) -> Verdict {
    match panic::catch_unwind(AssertUnwindSafe(|| validator.check(value))) {
        Ok(Ok(verdict)) => verdict,
        Ok(Err(mismatch)) => {
            trace!(%mismatch, "type mismatch reported as failure");
            Verdict::Fail
        }
        Err(_) => {
            warn!(?validator, "validator panicked; reported as failure");
            Verdict::Fail
        }
    }
}

/// Returns true if the validator accepts the value under [`invoke`] rules.
pub(crate) fn passes(validator: &dyn Validate, value: &Value) -> bool {
    invoke(validator, value).is_empty()
}
