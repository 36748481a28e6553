//! Error types
//!
//! Three kinds of error surface from this crate, none of them from
//! [`validate`](crate::validate) itself:
//!
//! - [`RuleError`]: a validator was misconfigured at construction time
//!   (zero-width length bounds, an invalid regex, an empty date format).
//! - [`Mismatch`]: a validator was handed a value of a shape it cannot judge.
//!   The evaluator converts it into an ordinary failure message.
//! - [`Rejected`]: a [`Guard`](crate::guard::Guard) check failed; carries the
//!   full error report.

use crate::foundation::{ErrorMap, Kind};
use serde_json::Value;

// ============================================================================
// CONSTRUCTION ERRORS
// ============================================================================

/// A validator could not be built from the given parameters.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RuleError {
    /// `length(0, 0)` places no constraint at all.
    #[error("length must have a non-zero minimum or maximum")]
    UnboundedLength,

    /// The minimum length exceeds the maximum length.
    #[error("length minimum {min} is greater than maximum {max}")]
    InvertedLength {
        /// Requested minimum.
        min: usize,
        /// Requested maximum.
        max: usize,
    },

    /// The regular expression failed to compile.
    #[error("invalid regex pattern `{pattern}`")]
    Pattern {
        /// The pattern as written.
        pattern: String,
        /// Compilation error from the regex engine.
        #[source]
        source: regex::Error,
    },

    /// A date or datetime format string was empty.
    #[error("{kind} format must not be empty")]
    EmptyFormat {
        /// Which validator rejected the format.
        kind: &'static str,
    },
}

// ============================================================================
// TYPE MISMATCH
// ============================================================================

/// A validator received a value it has no defined answer for.
///
/// Returned from [`Validate::check`](crate::foundation::Validate::check)
/// instead of panicking. The evaluator's fault boundary reports it with the
/// validator's own failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}, found {found}")]
pub struct Mismatch {
    /// What the validator can work with.
    pub expected: &'static str,
    /// The kind of value actually received.
    pub found: Kind,
}

impl Mismatch {
    /// Creates a mismatch for `value`.
    pub fn new(expected: &'static str, value: &Value) -> Self {
        Self {
            expected,
            found: Kind::of(value),
        }
    }
}

// ============================================================================
// GUARD REJECTION
// ============================================================================

/// A value set did not pass its rule set.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("validation failed for {} field(s): {}", .errors.len(), field_list(.errors))]
pub struct Rejected {
    /// Per-field error report, in the shape produced by the evaluator.
    pub errors: ErrorMap,
}

impl Rejected {
    /// Wraps an error report.
    pub fn new(errors: ErrorMap) -> Self {
        Self { errors }
    }

    /// Consumes the rejection, returning the error report.
    pub fn into_errors(self) -> ErrorMap {
        self.errors
    }
}

fn field_list(errors: &ErrorMap) -> String {
    errors
        .keys()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
