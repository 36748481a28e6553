//! Guard: prepare input, then validate it
//!
//! A [`Guard`] bundles a [`RuleSet`] with a [`Preparation`] step. Input from
//! several sources (query string, form body, JSON body) can be merged first
//! with [`merge_sources`].
//!
//! Preparation runs in a fixed order, before any rule:
//!
//! 1. `reject_padded` or `strip`: reject, or trim, top-level strings with
//!    leading or trailing whitespace
//! 2. `substitute_blank`: replace empty strings with `blank_default`
//! 3. per-field transforms, in registration order
//!
//! A transform may fail, by returning an error or by panicking. Preparation
//! failures are reported under the field like rule failures, unless
//! `release` is set, in which case the guard hands back the original input
//! unchecked.
//!
//! # Examples
//!
//! ```
//! use fieldguard_validator::prelude::*;
//! use serde_json::json;
//!
//! let guard = Guard::new(rules! {
//!     "name" => [required, length(1, 20)?],
//!     "age" => [required, greater_than(17)],
//! });
//!
//! let query = json!({"name": "  alice  ", "age": "30"});
//! let body = json!({"age": "12"});
//!
//! let rejected = guard
//!     .check_sources([query, body].map(|v| v.as_object().cloned().unwrap()))
//!     .unwrap_err();
//! assert_eq!(rejected.to_string(), "validation failed for 1 field(s): age");
//!
//! let accepted = guard.check(json!({"name": " bob ", "age": 40}).as_object().cloned().unwrap())?;
//! assert_eq!(accepted["name"], "bob");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::Rejected;
use crate::evaluate;
use crate::foundation::{ErrorEntry, ErrorMap, FieldError, ValueSet};
use crate::rules::RuleSet;

/// Reported for a string with leading or trailing whitespace when
/// `reject_padded` is set.
pub const PADDED: &str = "must not start or end with whitespace";

/// Reported for a field whose transform panicked.
pub const TRANSFORM_PANICKED: &str = "could not be prepared";

/// Merges value sets in order; a later source overwrites an earlier one on
/// key collision.
pub fn merge_sources(sources: impl IntoIterator<Item = ValueSet>) -> ValueSet {
    sources.into_iter().fold(ValueSet::new(), |mut merged, source| {
        merged.extend(source);
        merged
    })
}

// ============================================================================
// PREPARATION
// ============================================================================

/// Serializable preparation settings.
///
/// Missing keys take their defaults, so `{}` is a valid configuration.
///
/// ```
/// use fieldguard_validator::guard::PreparationConfig;
///
/// let config: PreparationConfig =
///     serde_json::from_str(r#"{"substitute_blank": true}"#).unwrap();
/// assert!(config.strip);
/// assert!(config.substitute_blank);
/// assert!(config.blank_default.is_null());
/// assert!(!config.release);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreparationConfig {
    /// Trim leading and trailing whitespace from top-level strings.
    pub strip: bool,

    /// Reject top-level strings with leading or trailing whitespace instead
    /// of trimming them. Takes precedence over `strip`.
    pub reject_padded: bool,

    /// Replace empty strings with `blank_default`.
    pub substitute_blank: bool,

    /// Replacement for empty strings when `substitute_blank` is set.
    pub blank_default: Value,

    /// On a preparation failure, return the original input unchecked
    /// instead of rejecting it.
    pub release: bool,
}

impl Default for PreparationConfig {
    fn default() -> Self {
        Self {
            strip: true,
            reject_padded: false,
            substitute_blank: false,
            blank_default: Value::Null,
            release: false,
        }
    }
}

/// A per-field value rewrite. An error is reported as the field's message.
pub type Transform = Arc<dyn Fn(Value) -> Result<Value, String> + Send + Sync>;

/// Rewrites a value set before validation.
#[derive(Clone, Default)]
pub struct Preparation {
    config: PreparationConfig,
    transforms: IndexMap<String, Transform>,
}

impl Preparation {
    /// Default preparation: strip only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Preparation from loaded settings.
    pub fn from_config(config: PreparationConfig) -> Self {
        Self {
            config,
            transforms: IndexMap::new(),
        }
    }

    /// Returns no-op preparation.
    pub fn none() -> Self {
        Self::from_config(PreparationConfig {
            strip: false,
            ..PreparationConfig::default()
        })
    }

    /// Enables or disables whitespace trimming.
    #[must_use = "builder methods must be chained or built"]
    pub fn strip(mut self, strip: bool) -> Self {
        self.config.strip = strip;
        self
    }

    /// Rejects padded strings instead of trimming them.
    #[must_use = "builder methods must be chained or built"]
    pub fn reject_padded(mut self) -> Self {
        self.config.reject_padded = true;
        self
    }

    /// Replaces empty strings with `default`.
    #[must_use = "builder methods must be chained or built"]
    pub fn substitute_blank(mut self, default: impl Into<Value>) -> Self {
        self.config.substitute_blank = true;
        self.config.blank_default = default.into();
        self
    }

    /// Passes the original input through when preparation fails.
    #[must_use = "builder methods must be chained or built"]
    pub fn release(mut self, release: bool) -> Self {
        self.config.release = release;
        self
    }

    /// Registers a rewrite for one field, replacing any earlier one.
    ///
    /// ```
    /// use fieldguard_validator::prelude::*;
    /// use serde_json::{Value, json};
    ///
    /// let preparation = Preparation::new().transform("age", |v: Value| {
    ///     v.as_str().unwrap_or_default().parse::<i64>().map(Value::from)
    /// });
    ///
    /// let prepared = preparation.apply(json!({"age": " 42 "}).as_object().cloned().unwrap());
    /// assert_eq!(prepared.unwrap()["age"], json!(42));
    ///
    /// let failed = preparation.apply(json!({"age": "old"}).as_object().cloned().unwrap());
    /// assert_eq!(failed.unwrap_err()["age"], vec![FieldError::message("invalid digit found in string")]);
    /// ```
    #[must_use = "builder methods must be chained or built"]
    pub fn transform<F, E>(mut self, field: impl Into<String>, transform: F) -> Self
    where
        F: Fn(Value) -> Result<Value, E> + Send + Sync + 'static,
        E: fmt::Display,
    {
        let transform: Transform =
            Arc::new(move |value| transform(value).map_err(|err| err.to_string()));
        self.transforms.insert(field.into(), transform);
        self
    }

    /// The current settings.
    pub fn config(&self) -> &PreparationConfig {
        &self.config
    }

    /// Applies every step to `values`.
    ///
    /// # Errors
    ///
    /// A report of every field that was padded (with `reject_padded`) or
    /// whose transform failed. A field that fails padding is not transformed.
    pub fn apply(&self, mut values: ValueSet) -> Result<ValueSet, ErrorMap> {
        let PreparationConfig {
            strip,
            reject_padded,
            substitute_blank,
            blank_default,
            ..
        } = &self.config;
        let mut errors = ErrorMap::new();

        for (field, value) in &mut values {
            if let Value::String(s) = value {
                let trimmed = s.trim();
                if trimmed.len() != s.len() {
                    if *reject_padded {
                        errors.insert(field.clone(), failure(PADDED));
                        continue;
                    }
                    if *strip {
                        *s = trimmed.to_owned();
                    }
                }
            }
            if *substitute_blank && value.as_str() == Some("") {
                *value = blank_default.clone();
            }
        }

        for (field, transform) in &self.transforms {
            if errors.contains_key(field) {
                continue;
            }
            let Some(value) = values.get_mut(field) else {
                continue;
            };
            let input = value.take();
            match panic::catch_unwind(AssertUnwindSafe(|| transform(input))) {
                Ok(Ok(prepared)) => *value = prepared,
                Ok(Err(message)) => {
                    errors.insert(field.clone(), failure(message));
                }
                Err(_) => {
                    warn!(%field, "transform panicked; reported as failure");
                    errors.insert(field.clone(), failure(TRANSFORM_PANICKED));
                }
            }
        }

        if errors.is_empty() {
            Ok(values)
        } else {
            Err(errors)
        }
    }
}

fn failure(message: impl Into<String>) -> ErrorEntry {
    ErrorEntry::List(vec![FieldError::message(message)])
}

impl fmt::Debug for Preparation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preparation")
            .field("config", &self.config)
            .field("transforms", &self.transforms.keys().collect::<Vec<_>>())
            .finish()
    }
}

// ============================================================================
// GUARD
// ============================================================================

/// A rule set plus the preparation applied before it.
#[derive(Debug, Clone)]
pub struct Guard {
    rules: RuleSet,
    preparation: Preparation,
}

impl Guard {
    /// Creates a guard with default preparation (strip only).
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            preparation: Preparation::default(),
        }
    }

    /// Replaces the preparation step.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_preparation(mut self, preparation: Preparation) -> Self {
        self.preparation = preparation;
        self
    }

    /// The rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// The preparation step.
    pub fn preparation(&self) -> &Preparation {
        &self.preparation
    }

    /// Prepares and validates `values`.
    ///
    /// Returns the prepared values, which are what the rules saw. With
    /// `release` set, a preparation failure returns the original values
    /// without running the rules.
    ///
    /// # Errors
    ///
    /// [`Rejected`] with the preparation report if preparation failed, or
    /// with the full error report if any rule failed.
    pub fn check(&self, values: ValueSet) -> Result<ValueSet, Rejected> {
        let original = self.preparation.config.release.then(|| values.clone());

        let prepared = match self.preparation.apply(values) {
            Ok(prepared) => prepared,
            Err(errors) => {
                if let Some(original) = original {
                    warn!(failed = errors.len(), "preparation failed; releasing original input");
                    return Ok(original);
                }
                debug!(failed = errors.len(), "guard rejected input during preparation");
                return Err(Rejected::new(errors));
            }
        };

        match evaluate::validate(&self.rules, &prepared).into_result() {
            Ok(()) => Ok(prepared),
            Err(rejected) => {
                debug!(failed = rejected.errors.len(), "guard rejected input");
                Err(rejected)
            }
        }
    }

    /// Merges `sources` with [`merge_sources`], then runs [`Guard::check`].
    ///
    /// # Errors
    ///
    /// See [`Guard::check`].
    pub fn check_sources(
        &self,
        sources: impl IntoIterator<Item = ValueSet>,
    ) -> Result<ValueSet, Rejected> {
        self.check(merge_sources(sources))
    }
}
