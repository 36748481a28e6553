//! User-supplied predicates

use std::fmt;

use serde_json::Value;

use crate::error::Mismatch;
use crate::foundation::{Messages, Validate, Verdict};

/// Wraps a closure as a validator.
///
/// Reports [`DEFAULT_MESSAGE`](crate::foundation::DEFAULT_MESSAGE) unless
/// given messages through [`ValidateExt`](crate::foundation::ValidateExt). A
/// panic inside the closure is contained by the evaluator and reported as a
/// failure.
///
/// # Examples
///
/// ```
/// use fieldguard_validator::prelude::*;
/// use serde_json::json;
///
/// let bar = predicate(|v| v == "bar");
/// assert!(bar.check(&json!("bar")).unwrap().is_pass());
/// assert_eq!(bar.messages().failure(), "failed validation");
/// ```
pub struct Predicate<F> {
    test: F,
    messages: Messages,
}

impl<F> Predicate<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    /// Wraps `test`.
    pub fn new(test: F) -> Self {
        Self {
            test,
            messages: Messages::default(),
        }
    }
}

impl<F> fmt::Debug for Predicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("messages", &self.messages)
            .finish_non_exhaustive()
    }
}

impl<F> Validate for Predicate<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    fn check(&self, value: &Value) -> Result<Verdict, Mismatch> {
        Ok(Verdict::from_bool((self.test)(value)))
    }

    fn messages(&self) -> &Messages {
        &self.messages
    }
}

/// Creates a [`Predicate`] validator.
pub fn predicate<F>(test: F) -> Predicate<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    Predicate::new(test)
}
