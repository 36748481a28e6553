//! Length validator
//!
//! Length is the number of Unicode scalar values in a string, the number of
//! items in an array, or the number of keys in an object.

use serde_json::Value;

use crate::error::{Mismatch, RuleError};
use crate::foundation::{Messages, Validate, Verdict};

/// Measures `value`, or reports a mismatch for scalars.
fn measure(value: &Value) -> Result<usize, Mismatch> {
    match value {
        Value::String(s) => Ok(s.chars().count()),
        Value::Array(items) => Ok(items.len()),
        Value::Object(map) => Ok(map.len()),
        _ => Err(Mismatch::new("string, array or object", value)),
    }
}

/// Passes when the length lies between `min` and `max` inclusive.
///
/// A `max` of zero leaves the length unbounded above.
///
/// # Examples
///
/// ```
/// use fieldguard_validator::prelude::*;
/// use serde_json::json;
///
/// let validator = length(0, 5)?;
/// assert!(validator.check(&json!("hello")).unwrap().is_pass());
/// assert!(!validator.check(&json!("hello world")).unwrap().is_pass());
/// assert_eq!(validator.messages().failure(), "must be at most 5 elements in length");
///
/// assert!(length(0, 0).is_err());
/// # Ok::<(), fieldguard_validator::error::RuleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Length {
    min: usize,
    max: usize,
    messages: Messages,
}

impl Length {
    /// Creates a length validator.
    ///
    /// # Errors
    ///
    /// - [`RuleError::UnboundedLength`] if both bounds are zero
    /// - [`RuleError::InvertedLength`] if `max` is set and below `min`
    pub fn new(min: usize, max: usize) -> Result<Self, RuleError> {
        let messages = match (min, max) {
            (0, 0) => return Err(RuleError::UnboundedLength),
            (min, max) if max != 0 && min > max => {
                return Err(RuleError::InvertedLength { min, max });
            }
            (0, max) => Messages::new(
                format!("must be at most {max} elements in length"),
                format!(
                    "must be at least {} elements in length",
                    max.saturating_add(1)
                ),
            ),
            (min, 0) => Messages::new(
                format!("must be at least {min} elements in length"),
                format!("must be at most {} elements in length", min - 1),
            ),
            (min, max) => Messages::new(
                format!("must be between {min} and {max} elements in length"),
                format!("must not be between {min} and {max} elements in length"),
            ),
        };
        Ok(Self { min, max, messages })
    }

    /// Minimum length.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Maximum length, or `None` when unbounded.
    pub fn max(&self) -> Option<usize> {
        (self.max != 0).then_some(self.max)
    }
}

impl Validate for Length {
    fn check(&self, value: &Value) -> Result<Verdict, Mismatch> {
        let len = measure(value)?;
        let within = len >= self.min && self.max().is_none_or(|max| len <= max);
        Ok(Verdict::from_bool(within))
    }

    fn messages(&self) -> &Messages {
        &self.messages
    }
}

/// Creates a [`Length`] validator.
///
/// # Errors
///
/// See [`Length::new`].
pub fn length(min: usize, max: usize) -> Result<Length, RuleError> {
    Length::new(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(1, 5, "must be between 1 and 5 elements in length", "must not be between 1 and 5 elements in length")]
    #[case(3, 0, "must be at least 3 elements in length", "must be at most 2 elements in length")]
    #[case(0, 5, "must be at most 5 elements in length", "must be at least 6 elements in length")]
    fn message_templates(
        #[case] min: usize,
        #[case] max: usize,
        #[case] failure: &str,
        #[case] negated: &str,
    ) {
        let validator = length(min, max).unwrap();
        assert_eq!(validator.messages().failure(), failure);
        assert_eq!(validator.messages().negated(), negated);
    }

    #[test]
    fn counts_chars_items_and_keys() {
        let validator = length(2, 3).unwrap();
        assert_eq!(validator.check(&json!("日本")), Ok(Verdict::Pass));
        assert_eq!(validator.check(&json!([1])), Ok(Verdict::Fail));
        assert_eq!(validator.check(&json!({"a": 1, "b": 2})), Ok(Verdict::Pass));
    }

    #[test]
    fn unbounded_maximum() {
        let validator = length(2, 0).unwrap();
        assert_eq!(validator.max(), None);
        assert_eq!(validator.check(&json!("a".repeat(1000))), Ok(Verdict::Pass));
    }

    #[test]
    fn largest_maximum_builds() {
        let validator = length(0, usize::MAX).unwrap();
        assert!(validator.check(&json!("anything")).unwrap().is_pass());
        assert_eq!(
            validator.messages().failure(),
            format!("must be at most {} elements in length", usize::MAX)
        );
    }

    #[test]
    fn scalar_is_mismatch() {
        assert!(length(1, 2).unwrap().check(&json!(12)).is_err());
        assert!(length(1, 2).unwrap().check(&json!(null)).is_err());
    }

    #[test]
    fn invalid_bounds() {
        assert!(matches!(length(0, 0), Err(RuleError::UnboundedLength)));
        assert!(matches!(
            length(5, 2),
            Err(RuleError::InvertedLength { min: 5, max: 2 })
        ));
    }
}
