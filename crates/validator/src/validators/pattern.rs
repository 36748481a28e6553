//! Regular-expression validators

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::{Mismatch, RuleError};
use crate::foundation::{Messages, Validate, Verdict};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .expect("email regex is valid")
});

// ============================================================================
// PATTERN
// ============================================================================

/// Passes when a string matches a regular expression at its start.
///
/// The match is anchored at the beginning only: `\d\d%` accepts `"30%"` and
/// `"30% off"`, not `"x30%"`. Add `$` to anchor the end.
///
/// # Examples
///
/// ```
/// use fieldguard_validator::prelude::*;
/// use serde_json::json;
///
/// let validator = pattern(r"\d\d%")?;
/// assert!(validator.check(&json!("30%")).unwrap().is_pass());
/// assert!(!validator.check(&json!("30")).unwrap().is_pass());
/// assert_eq!(validator.messages().failure(), r"must match regex pattern \d\d%");
/// # Ok::<(), fieldguard_validator::error::RuleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    messages: Messages,
}

impl Pattern {
    /// Compiles the pattern.
    ///
    /// # Errors
    ///
    /// [`RuleError::Pattern`] if the regex does not compile.
    pub fn new(pattern: &str) -> Result<Self, RuleError> {
        let regex = Regex::new(pattern).map_err(|source| RuleError::Pattern {
            pattern: pattern.to_owned(),
            source,
        })?;
        Ok(Self {
            regex,
            messages: Messages::new(
                format!("must match regex pattern {pattern}"),
                format!("must not match regex pattern {pattern}"),
            ),
        })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Validate for Pattern {
    fn check(&self, value: &Value) -> Result<Verdict, Mismatch> {
        let text = value.as_str().ok_or_else(|| Mismatch::new("string", value))?;
        // Leftmost-first search: any match starting at 0 is the one found.
        let matched = self.regex.find(text).is_some_and(|m| m.start() == 0);
        Ok(Verdict::from_bool(matched))
    }

    fn messages(&self) -> &Messages {
        &self.messages
    }
}

/// Creates a [`Pattern`] validator.
///
/// # Errors
///
/// See [`Pattern::new`].
pub fn pattern(pattern: &str) -> Result<Pattern, RuleError> {
    Pattern::new(pattern)
}

// ============================================================================
// EMAIL
// ============================================================================

crate::validator! {
    /// Accepts `local@domain.tld` addresses. Non-strings fail.
    pub Email;
    rule(value) { value.as_str().is_some_and(|s| EMAIL_REGEX.is_match(s)) }
    messages("Invalid Email", "must not be an email");
    fn email();
}
