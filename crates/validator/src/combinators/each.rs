//! EACH combinator - validates each element of a collection
//!
//! [`Each`] applies a list of validators to every element, a rule set that
//! treats every element as its own value set, or both.
//!
//! - Validators: each failing (element, validator) pair contributes
//!   `"all values " + failure message`. Repeats are kept, one per offending
//!   element. A validator that reports detail (another `Each`, say) has each
//!   of its messages prefixed the same way.
//! - Rule set: failing elements are reported by zero-based index inside one
//!   nested error map, each index holding that element's own report.
//!
//! A value that is not an array is a [`Mismatch`], reported with `Each`'s own
//! failure message (`must be a list`).

use std::sync::Arc;

use serde_json::Value;

use crate::error::Mismatch;
use crate::evaluate::{self, NOT_A_MAPPING};
use crate::foundation::{ErrorEntry, ErrorMap, FieldError, Messages, Validate, Verdict};
use crate::rules::RuleSet;

static EACH_MESSAGES: Messages = Messages::from_static("must be a list", "must not be a list");

// ============================================================================
// EACH COMBINATOR
// ============================================================================

/// Validates each element of an array.
///
/// # Examples
///
/// ```
/// use fieldguard_validator::prelude::*;
/// use serde_json::json;
///
/// let validator = each(is_digit()).and(length(1, 3).unwrap());
/// assert!(validator.check(&json!(["1", "22"])).unwrap().is_pass());
///
/// let errors = invoke(&validator, &json!(["1", "x", "4444"]));
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors[0].as_message(), Some("all values must be all numbers"));
///
/// // Validators and a rule set can be combined.
/// let validator = each_rules(rules! { "x" => [required] }).and(length(1, 0).unwrap());
/// let errors = invoke(&validator, &json!([{"y": 1}]));
/// assert_eq!(
///     serde_json::to_value(&errors).unwrap(),
///     json!([{"0": {"x": ["must be present"]}}])
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Each {
    validators: Vec<Arc<dyn Validate>>,
    rules: Option<RuleSet>,
}

impl Each {
    /// Creates an `Each` that checks nothing until validators or a rule set
    /// are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds another per-element validator.
    #[must_use = "builder methods must be chained or built"]
    pub fn and(mut self, validator: impl Validate + 'static) -> Self {
        self.validators.push(Arc::new(validator));
        self
    }

    /// Adds a shared per-element validator.
    #[must_use = "builder methods must be chained or built"]
    pub fn and_shared(mut self, validator: Arc<dyn Validate>) -> Self {
        self.validators.push(validator);
        self
    }

    /// Sets the rule set evaluated against every element, replacing any
    /// earlier one.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Per-element validators, in the order they run.
    pub fn validators(&self) -> &[Arc<dyn Validate>] {
        &self.validators
    }

    /// Per-element rule set, if any.
    pub fn rules(&self) -> Option<&RuleSet> {
        self.rules.as_ref()
    }

    fn check_validators(&self, items: &[Value], errors: &mut Vec<FieldError>) {
        for item in items {
            for validator in &self.validators {
                match evaluate::guarded(validator.as_ref(), item) {
                    Verdict::Pass => {}
                    Verdict::Fail => errors.push(all_values(validator.messages().failure())),
                    Verdict::Detailed(entries) => {
                        errors.extend(entries.into_iter().map(|entry| match entry {
                            FieldError::Message(message) => all_values(&message),
                            nested @ FieldError::Nested(_) => nested,
                        }));
                    }
                }
            }
        }
    }

    fn check_rules(rules: &RuleSet, items: &[Value]) -> ErrorMap {
        items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                let entry = match evaluate::collect_nested(rules, item) {
                    Some(errors) if errors.is_empty() => return None,
                    Some(errors) => ErrorEntry::Map(errors),
                    None => ErrorEntry::List(vec![FieldError::message(NOT_A_MAPPING)]),
                };
                Some((index.to_string(), entry))
            })
            .collect()
    }
}

fn all_values(message: &str) -> FieldError {
    FieldError::message(format!("all values {message}"))
}

impl Validate for Each {
    fn check(&self, value: &Value) -> Result<Verdict, Mismatch> {
        let items = value
            .as_array()
            .ok_or_else(|| Mismatch::new("array", value))?;

        let mut errors = Vec::new();
        self.check_validators(items, &mut errors);
        if let Some(rules) = &self.rules {
            let by_index = Self::check_rules(rules, items);
            if !by_index.is_empty() {
                errors.push(FieldError::Nested(by_index));
            }
        }

        Ok(if errors.is_empty() {
            Verdict::Pass
        } else {
            Verdict::Detailed(errors)
        })
    }

    fn messages(&self) -> &Messages {
        &EACH_MESSAGES
    }
}

/// Applies one validator to every element; add more with [`Each::and`].
pub fn each(validator: impl Validate + 'static) -> Each {
    Each::new().and(validator)
}

/// Applies a list of shared validators to every element.
pub fn each_all(validators: impl IntoIterator<Item = Arc<dyn Validate>>) -> Each {
    Each {
        validators: validators.into_iter().collect(),
        rules: None,
    }
}

/// Evaluates a rule set against every element.
pub fn each_rules(rules: RuleSet) -> Each {
    Each::new().with_rules(rules)
}

// ============================================================================
// TESTS
// ============================================================================
