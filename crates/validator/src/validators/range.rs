//! Numeric comparison validators
//!
//! Both validators coerce numeric text (`"13"`) to a number by default, so
//! form-style input compares as expected. Call `.strict()` to accept JSON
//! numbers only. Anything that is not a number after coercion is a
//! [`Mismatch`].

use serde_json::Value;

use crate::error::Mismatch;
use crate::foundation::{Messages, Validate, Verdict};

/// Reads `value` as a number, parsing numeric text when `auto` is set.
pub(crate) fn numeric(value: &Value, auto: bool) -> Result<f64, Mismatch> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if auto => s.trim().parse::<f64>().ok().filter(|n| !n.is_nan()),
        _ => None,
    };
    parsed.ok_or_else(|| Mismatch::new("number", value))
}

// ============================================================================
// RANGE
// ============================================================================

/// Passes when a number falls between two bounds.
///
/// Inclusive by default; see [`Range::exclusive`].
///
/// # Examples
///
/// ```
/// use fieldguard_validator::prelude::*;
/// use serde_json::json;
///
/// let validator = range(1, 100);
/// assert!(validator.check(&json!(100)).unwrap().is_pass());
/// assert!(validator.check(&json!("13")).unwrap().is_pass());
/// assert!(!validator.check(&json!(500)).unwrap().is_pass());
/// assert_eq!(validator.messages().failure(), "must fall between 1 and 100");
///
/// assert!(!range(1, 100).exclusive().check(&json!(100)).unwrap().is_pass());
/// assert!(range(1, 100).strict().check(&json!("13")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Range {
    low: f64,
    high: f64,
    inclusive: bool,
    auto: bool,
    messages: Messages,
}

impl Range {
    /// Creates an inclusive range validator with numeric coercion.
    pub fn new(low: impl Into<f64>, high: impl Into<f64>) -> Self {
        let (low, high) = (low.into(), high.into());
        Self {
            low,
            high,
            inclusive: true,
            auto: true,
            messages: Messages::new(
                format!("must fall between {low} and {high}"),
                format!("must not fall between {low} and {high}"),
            ),
        }
    }

    /// Excludes both bounds.
    #[must_use = "builder methods must be chained or built"]
    pub fn exclusive(mut self) -> Self {
        self.inclusive = false;
        self
    }

    /// Disables coercion of numeric text.
    #[must_use = "builder methods must be chained or built"]
    pub fn strict(mut self) -> Self {
        self.auto = false;
        self
    }

    /// Returns `(low, high)`.
    pub fn bounds(&self) -> (f64, f64) {
        (self.low, self.high)
    }
}

impl Validate for Range {
    fn check(&self, value: &Value) -> Result<Verdict, Mismatch> {
        let n = numeric(value, self.auto)?;
        let within = if self.inclusive {
            self.low <= n && n <= self.high
        } else {
            self.low < n && n < self.high
        };
        Ok(Verdict::from_bool(within))
    }

    fn messages(&self) -> &Messages {
        &self.messages
    }
}

/// Creates an inclusive [`Range`] validator.
pub fn range(low: impl Into<f64>, high: impl Into<f64>) -> Range {
    Range::new(low, high)
}

// ============================================================================
// GREATER THAN
// ============================================================================

/// Passes when a number is greater than a bound.
///
/// Exclusive by default; see [`GreaterThan::inclusive`].
///
/// # Examples
///
/// ```
/// use fieldguard_validator::prelude::*;
/// use serde_json::json;
///
/// assert!(!greater_than(1).check(&json!(1)).unwrap().is_pass());
/// assert!(greater_than(1).inclusive().check(&json!(1)).unwrap().is_pass());
/// ```
#[derive(Debug, Clone)]
pub struct GreaterThan {
    bound: f64,
    inclusive: bool,
    auto: bool,
    messages: Messages,
}

impl GreaterThan {
    /// Creates an exclusive lower-bound validator with numeric coercion.
    pub fn new(bound: impl Into<f64>) -> Self {
        let bound = bound.into();
        Self {
            bound,
            inclusive: false,
            auto: true,
            messages: Messages::new(
                format!("must be greater than {bound}"),
                format!("must not be greater than {bound}"),
            ),
        }
    }

    /// Accepts the bound itself.
    #[must_use = "builder methods must be chained or built"]
    pub fn inclusive(mut self) -> Self {
        self.inclusive = true;
        self
    }

    /// Disables coercion of numeric text.
    #[must_use = "builder methods must be chained or built"]
    pub fn strict(mut self) -> Self {
        self.auto = false;
        self
    }

    /// The lower bound.
    pub fn bound(&self) -> f64 {
        self.bound
    }
}

impl Validate for GreaterThan {
    fn check(&self, value: &Value) -> Result<Verdict, Mismatch> {
        let n = numeric(value, self.auto)?;
        Ok(Verdict::from_bool(if self.inclusive {
            self.bound <= n
        } else {
            self.bound < n
        }))
    }

    fn messages(&self) -> &Messages {
        &self.messages
    }
}

/// Creates an exclusive [`GreaterThan`] validator.
pub fn greater_than(bound: impl Into<f64>) -> GreaterThan {
    GreaterThan::new(bound)
}

// ============================================================================
// TESTS
// ============================================================================
