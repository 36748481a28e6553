//! IF/THEN combinator - conditional dependent validation
//!
//! An [`If`] rule sits in one field's rule list. Its condition is checked
//! against that field's value; when it holds, the [`Then`] rule set is
//! evaluated against the *whole* value set, and any failures are reported
//! under the conditional field as a nested error map.
//!
//! # Examples
//!
//! ```
//! use fieldguard_validator::prelude::*;
//! use serde_json::json;
//!
//! let rules = rules! {
//!     "foo" => [when(equals(1), then(rules! { "bar" => [equals(2)] }))],
//! };
//!
//! let check = |v: serde_json::Value| rules.validate(v.as_object().unwrap()).is_valid();
//! assert!(check(json!({"foo": 1, "bar": 2})));
//! assert!(check(json!({"foo": 2, "bar": 3})));
//! assert!(!check(json!({"foo": 1, "bar": 3})));
//! ```

use std::sync::Arc;

use serde_json::Value;

use crate::evaluate;
use crate::foundation::{ErrorMap, Validate, ValueSet};
use crate::rules::RuleSet;

/// Dependent rules applied when an [`If`] condition holds.
#[derive(Debug, Clone, Default)]
pub struct Then {
    rules: RuleSet,
}

impl Then {
    /// Wraps a rule set.
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// The dependent rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Evaluates the dependent rules against the whole value set.
    pub fn apply(&self, values: &ValueSet) -> ErrorMap {
        evaluate::collect(&self.rules, values)
    }
}

/// Conditionally applies rules to sibling fields.
///
/// The condition holds when the validator passes on the field's value. A
/// value the condition cannot judge (a mismatch) does not hold.
#[derive(Debug, Clone)]
pub struct If {
    condition: Arc<dyn Validate>,
    then: Then,
}

impl If {
    /// Creates a new conditional rule.
    pub fn new(condition: impl Validate + 'static, then: Then) -> Self {
        Self {
            condition: Arc::new(condition),
            then,
        }
    }

    /// Returns the condition validator.
    pub fn condition(&self) -> &dyn Validate {
        self.condition.as_ref()
    }

    /// Returns the dependent clause.
    pub fn then(&self) -> &Then {
        &self.then
    }

    /// Checks the condition against `value` and, if it holds, the dependent
    /// rules against `values`.
    ///
    /// Returns whether the condition held and the dependent failures, if any.
    pub fn apply(&self, value: &Value, values: &ValueSet) -> (bool, Option<ErrorMap>) {
        if !evaluate::passes(self.condition.as_ref(), value) {
            return (false, None);
        }

        let errors = self.then.apply(values);
        (true, (!errors.is_empty()).then_some(errors))
    }
}

/// Creates an `If` rule.
pub fn when(condition: impl Validate + 'static, then: Then) -> If {
    If::new(condition, then)
}

/// Creates the dependent clause of an `If` rule.
pub fn then(rules: RuleSet) -> Then {
    Then::new(rules)
}
