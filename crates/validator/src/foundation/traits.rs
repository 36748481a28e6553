//! Core traits for the validation system
//!
//! Every validator implements [`Validate`]: a single check over one JSON
//! value that returns a [`Verdict`], plus the pair of messages used to report
//! a failure directly and when the validator sits under [`Not`].

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::Mismatch;
use crate::foundation::FieldError;

/// Message reported by validators that were not given one.
pub const DEFAULT_MESSAGE: &str = "failed validation";

// ============================================================================
// MESSAGES
// ============================================================================

/// The failure message of a validator and its negated counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Messages {
    failure: Cow<'static, str>,
    negated: Cow<'static, str>,
}

impl Messages {
    /// Creates a message pair.
    pub fn new(failure: impl Into<Cow<'static, str>>, negated: impl Into<Cow<'static, str>>) -> Self {
        Self {
            failure: failure.into(),
            negated: negated.into(),
        }
    }

    /// Creates a message pair from string literals, usable in statics.
    pub const fn from_static(failure: &'static str, negated: &'static str) -> Self {
        Self {
            failure: Cow::Borrowed(failure),
            negated: Cow::Borrowed(negated),
        }
    }

    /// Message reported when the validator fails.
    pub fn failure(&self) -> &str {
        &self.failure
    }

    /// Message reported when the negated validator fails.
    pub fn negated(&self) -> &str {
        &self.negated
    }

    /// Returns the pair with both messages exchanged.
    #[must_use]
    pub fn swapped(&self) -> Self {
        Self {
            failure: self.negated.clone(),
            negated: self.failure.clone(),
        }
    }

    /// Replaces the failure message, keeping the negated one.
    #[must_use]
    pub fn with_failure(mut self, failure: impl Into<Cow<'static, str>>) -> Self {
        self.failure = failure.into();
        self
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::from_static(DEFAULT_MESSAGE, DEFAULT_MESSAGE)
    }
}

// ============================================================================
// VERDICT
// ============================================================================

/// What a validator concluded about a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The value satisfies the validator.
    Pass,
    /// The value does not satisfy the validator; report its failure message.
    Fail,
    /// The value does not satisfy the validator; report these entries
    /// instead of the failure message. Used by combinators that recurse.
    Detailed(Vec<FieldError>),
}

impl Verdict {
    /// `Pass` for `true`, `Fail` for `false`.
    pub const fn from_bool(passed: bool) -> Self {
        if passed { Self::Pass } else { Self::Fail }
    }

    /// Returns true for `Pass`.
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

impl From<bool> for Verdict {
    fn from(passed: bool) -> Self {
        Self::from_bool(passed)
    }
}

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait all validators implement.
///
/// Validators are immutable after construction and shared across threads,
/// hence the `Send + Sync` bound.
///
/// `check` must not panic on ordinary type mismatches; return
/// [`Mismatch`] instead and the evaluator reports the validator's failure
/// message.
///
/// # Examples
///
/// ```
/// use fieldguard_validator::error::Mismatch;
/// use fieldguard_validator::foundation::{Messages, Validate, Verdict};
/// use serde_json::{Value, json};
///
/// #[derive(Debug)]
/// struct Even;
///
/// impl Validate for Even {
///     fn check(&self, value: &Value) -> Result<Verdict, Mismatch> {
///         let n = value.as_i64().ok_or_else(|| Mismatch::new("integer", value))?;
///         Ok(Verdict::from_bool(n % 2 == 0))
///     }
///
///     fn messages(&self) -> &Messages {
///         static MESSAGES: Messages = Messages::from_static("must be even", "must be odd");
///         &MESSAGES
///     }
/// }
///
/// assert!(Even.check(&json!(4)).unwrap().is_pass());
/// assert!(Even.check(&json!("4")).is_err());
/// ```
pub trait Validate: fmt::Debug + Send + Sync {
    /// Checks one value.
    fn check(&self, value: &Value) -> Result<Verdict, Mismatch>;

    /// Failure and negated failure messages.
    fn messages(&self) -> &Messages;
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    fn check(&self, value: &Value) -> Result<Verdict, Mismatch> {
        (**self).check(value)
    }

    fn messages(&self) -> &Messages {
        (**self).messages()
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    fn check(&self, value: &Value) -> Result<Verdict, Mismatch> {
        (**self).check(value)
    }

    fn messages(&self) -> &Messages {
        (**self).messages()
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension methods available on every validator.
pub trait ValidateExt: Validate + Sized {
    /// Inverts the validator, swapping its messages.
    ///
    /// ```
    /// use fieldguard_validator::prelude::*;
    /// use serde_json::json;
    ///
    /// let v = one_of(["spam", "eggs"]).not();
    /// assert!(v.check(&json!("ham")).unwrap().is_pass());
    /// assert_eq!(v.messages().failure(), "must not be one of ['spam', 'eggs']");
    /// ```
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Replaces the failure message.
    fn with_message(self, failure: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, failure)
    }

    /// Replaces both messages.
    fn with_messages(
        self,
        failure: impl Into<Cow<'static, str>>,
        negated: impl Into<Cow<'static, str>>,
    ) -> WithMessage<Self> {
        WithMessage::with_messages(self, Messages::new(failure, negated))
    }

    /// Erases the type so validators of different kinds can share a list.
    fn shared(self) -> Arc<dyn Validate>
    where
        Self: 'static,
    {
        Arc::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::message::WithMessage;
pub use crate::combinators::not::Not;
