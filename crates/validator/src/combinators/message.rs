//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use serde_json::Value;

use crate::error::Mismatch;
use crate::foundation::{Messages, Validate, Verdict};

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Replaces the messages of a validator.
///
/// Useful for user-facing or localized wording. The verdict is untouched, and
/// structured detail from combinators still takes precedence over the failure
/// message.
///
/// # Examples
///
/// ```
/// use fieldguard_validator::prelude::*;
///
/// let validator = greater_than(17).with_message("must be an adult");
/// assert_eq!(validator.messages().failure(), "must be an adult");
/// assert_eq!(validator.messages().negated(), "must not be greater than 17");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    messages: Messages,
}

impl<V: Validate> WithMessage<V> {
    /// Replaces the failure message, keeping the inner negated message.
    pub fn new(inner: V, failure: impl Into<Cow<'static, str>>) -> Self {
        let messages = inner.messages().clone().with_failure(failure);
        Self { inner, messages }
    }

    /// Replaces both messages.
    pub fn with_messages(inner: V, messages: Messages) -> Self {
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

impl<V: Validate> Validate for WithMessage<V> {
    fn check(&self, value: &Value) -> Result<Verdict, Mismatch> {
        self.inner.check(value)
    }

    fn messages(&self) -> &Messages {
        &self.messages
    }
}

/// Creates a WithMessage combinator.
pub fn with_message<V: Validate>(
    validator: V,
    failure: impl Into<Cow<'static, str>>,
) -> WithMessage<V> {
    WithMessage::new(validator, failure)
}
