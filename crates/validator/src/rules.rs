//! Rule sets
//!
//! A [`RuleSet`] maps field names to [`FieldRules`]: whether the field must be
//! present, and an ordered list of [`Rule`]s to run when it is. Presence is a
//! flag rather than an entry in the list, so it cannot be negated or
//! reordered by accident.
//!
//! ```
//! use fieldguard_validator::prelude::*;
//! use serde_json::json;
//!
//! let rules = RuleSet::new()
//!     .field("a", FieldRules::required().rule(equals("123")))
//!     .field("d", FieldRules::optional().rule(not(range(1, 100))));
//!
//! let values = json!({"a": "123", "d": "500"});
//! assert!(rules.validate(values.as_object().unwrap()).is_valid());
//! ```

use std::sync::Arc;

use indexmap::IndexMap;

use crate::combinators::when::If;
use crate::evaluate;
use crate::foundation::{Validate, ValidationOutcome, ValueSet};

// ============================================================================
// RULE
// ============================================================================

/// One entry in a field's rule list.
#[derive(Debug, Clone)]
pub enum Rule {
    /// A validator run against the field's value.
    Check(Arc<dyn Validate>),
    /// A condition on the field that activates rules on sibling fields.
    If(If),
    /// A rule set applied to the field's value, which must be a mapping.
    Nested(RuleSet),
}

impl Rule {
    /// Wraps an already shared validator without another allocation.
    pub fn shared(validator: Arc<dyn Validate>) -> Self {
        Self::Check(validator)
    }
}

impl<V: Validate + 'static> From<V> for Rule {
    fn from(validator: V) -> Self {
        Self::Check(Arc::new(validator))
    }
}

impl From<If> for Rule {
    fn from(conditional: If) -> Self {
        Self::If(conditional)
    }
}

impl From<RuleSet> for Rule {
    fn from(rules: RuleSet) -> Self {
        Self::Nested(rules)
    }
}

// ============================================================================
// FIELD RULES
// ============================================================================

/// Presence requirement plus ordered rules for one field.
#[derive(Debug, Clone, Default)]
pub struct FieldRules {
    required: bool,
    rules: Vec<Rule>,
}

impl FieldRules {
    /// The field must be present.
    pub fn required() -> Self {
        Self {
            required: true,
            rules: Vec::new(),
        }
    }

    /// The field may be absent; its rules only run when it is present.
    pub fn optional() -> Self {
        Self::default()
    }

    /// Appends a rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, rule: impl Into<Rule>) -> Self {
        self.rules.push(rule.into());
        self
    }

    /// Appends a shared validator.
    #[must_use = "builder methods must be chained or built"]
    pub fn shared(mut self, validator: Arc<dyn Validate>) -> Self {
        self.rules.push(Rule::shared(validator));
        self
    }

    /// Returns true if the field must be present.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The rules, in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// Ordered mapping from field name to its rules.
///
/// Fields are evaluated in insertion order. Fields of the value set that have
/// no entry here are never looked at.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    fields: IndexMap<String, FieldRules>,
}

impl RuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the rules for a field.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, name: impl Into<String>, rules: FieldRules) -> Self {
        self.insert(name, rules);
        self
    }

    /// Adds (or replaces) the rules for a field in place.
    ///
    /// A replaced field keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, rules: FieldRules) -> Option<FieldRules> {
        self.fields.insert(name.into(), rules)
    }

    /// Returns the rules for a field.
    pub fn get(&self, name: &str) -> Option<&FieldRules> {
        self.fields.get(name)
    }

    /// Iterates over fields in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRules)> {
        self.fields.iter().map(|(name, rules)| (name.as_str(), rules))
    }

    /// Number of fields with rules.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field has rules.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Evaluates the rule set against a value set.
    pub fn validate(&self, values: &ValueSet) -> ValidationOutcome {
        evaluate::validate(self, values)
    }
}

impl<K: Into<String>> FromIterator<(K, FieldRules)> for RuleSet {
    fn from_iter<I: IntoIterator<Item = (K, FieldRules)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, rules)| (name.into(), rules))
                .collect(),
        }
    }
}
