//! NOT combinator - logical negation of validators
//!
//! This module provides the [`Not`] combinator which inverts the verdict of a
//! validator and swaps its messages, so the negated validator reports what the
//! inner one would have reported under negation.
//!
//! # Examples
//!
//! ```
//! use fieldguard_validator::prelude::*;
//! use serde_json::json;
//!
//! let validator = not(range(1, 100));
//! assert!(validator.check(&json!(500)).unwrap().is_pass());
//! assert!(!validator.check(&json!(13)).unwrap().is_pass());
//! assert_eq!(validator.messages().failure(), "must not fall between 1 and 100");
//! ```
//!
//! Presence is not a validator, so a required field cannot be negated.

use serde_json::Value;

use crate::error::Mismatch;
use crate::foundation::{Messages, Validate, Verdict};

/// Inverts a validator with logical NOT.
///
/// - inner `Pass` becomes `Fail`;
/// - inner `Fail` or `Detailed` becomes `Pass`;
/// - a [`Mismatch`] stays a mismatch: a value the inner validator cannot judge
///   is not evidence for the opposite.
#[derive(Debug, Clone)]
pub struct Not<V> {
    inner: V,
    messages: Messages,
}

impl<V: Validate> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        let messages = inner.messages().swapped();
        Self { inner, messages }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Validate> Validate for Not<V> {
    fn check(&self, value: &Value) -> Result<Verdict, Mismatch> {
        Ok(Verdict::from_bool(!self.inner.check(value)?.is_pass()))
    }

    fn messages(&self) -> &Messages {
        &self.messages
    }
}

/// Creates a `Not` combinator from a validator.
pub fn not<V: Validate>(validator: V) -> Not<V> {
    Not::new(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{contains, length, one_of};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn not_inverts_success() {
        let validator = not(contains("forbidden"));
        assert_eq!(validator.check(&json!("this is forbidden")), Ok(Verdict::Fail));
    }

    #[test]
    fn not_inverts_failure() {
        let validator = not(contains("forbidden"));
        assert_eq!(validator.check(&json!("this is allowed")), Ok(Verdict::Pass));
    }

    #[test]
    fn not_swaps_messages() {
        let inner = one_of(["spam", "eggs", "bacon"]);
        let expected = inner.messages().swapped();
        let validator = inner.not();

        assert_eq!(validator.messages(), &expected);
        assert_eq!(
            validator.messages().failure(),
            "must not be one of ['spam', 'eggs', 'bacon']"
        );
    }

    #[test]
    fn double_negation_restores_messages() {
        let validator = contains("test").not().not();
        assert_eq!(validator.check(&json!("test")), Ok(Verdict::Pass));
        assert_eq!(validator.check(&json!("hello")), Ok(Verdict::Fail));
        assert_eq!(validator.messages().failure(), "must contain test");
    }

    #[test]
    fn mismatch_passes_through() {
        let validator = not(length(1, 3).unwrap());
        assert!(validator.check(&json!(5)).is_err());
    }
}
