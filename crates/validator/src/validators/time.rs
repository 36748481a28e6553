//! Date and datetime validators
//!
//! Both parse the string with `chrono`. Non-strings and strings that do not
//! parse fail; neither is a mismatch, so `not(date())` accepts a number.

use chrono::{DateTime as ChronoDateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::error::{Mismatch, RuleError};
use crate::foundation::{Messages, Validate, Verdict};

/// Default format for [`date`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static DATE_MESSAGES: Messages = Messages::from_static("Invalid Date format", "must not be a date");
static DATETIME_MESSAGES: Messages =
    Messages::from_static("Invalid Datetime format", "must not be a datetime");

fn checked_format(format: &str, kind: &'static str) -> Result<String, RuleError> {
    if format.trim().is_empty() {
        Err(RuleError::EmptyFormat { kind })
    } else {
        Ok(format.to_owned())
    }
}

// ============================================================================
// DATE
// ============================================================================

/// Passes when a string parses as a calendar date.
///
/// # Examples
///
/// ```
/// use fieldguard_validator::prelude::*;
/// use serde_json::json;
///
/// assert!(date().check(&json!("2024-02-29")).unwrap().is_pass());
/// assert!(!date().check(&json!("2023-02-29")).unwrap().is_pass());
///
/// let german = date_with_format("%d.%m.%Y")?;
/// assert!(german.check(&json!("29.02.2024")).unwrap().is_pass());
/// # Ok::<(), fieldguard_validator::error::RuleError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Date {
    format: String,
}

impl Date {
    /// Creates a date validator using [`DATE_FORMAT`].
    pub fn new() -> Self {
        Self {
            format: DATE_FORMAT.to_owned(),
        }
    }

    /// Creates a date validator with a `strftime`-style format.
    ///
    /// # Errors
    ///
    /// [`RuleError::EmptyFormat`] if `format` is blank.
    pub fn with_format(format: &str) -> Result<Self, RuleError> {
        Ok(Self {
            format: checked_format(format, "date")?,
        })
    }

    /// The format in use.
    pub fn format(&self) -> &str {
        &self.format
    }
}

impl Default for Date {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Date {
    fn check(&self, value: &Value) -> Result<Verdict, Mismatch> {
        Ok(Verdict::from_bool(value.as_str().is_some_and(|s| {
            NaiveDate::parse_from_str(s, &self.format).is_ok()
        })))
    }

    fn messages(&self) -> &Messages {
        &DATE_MESSAGES
    }
}

/// Creates a [`Date`] validator for `YYYY-MM-DD`.
pub fn date() -> Date {
    Date::new()
}

/// Creates a [`Date`] validator with a custom format.
///
/// # Errors
///
/// See [`Date::with_format`].
pub fn date_with_format(format: &str) -> Result<Date, RuleError> {
    Date::with_format(format)
}

// ============================================================================
// DATETIME
// ============================================================================

/// Passes when a string parses as a date and time.
///
/// Without a format the string must be RFC 3339. With a format, both offset
/// and offset-free formats are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DateTime {
    format: Option<String>,
}

impl DateTime {
    /// Creates an RFC 3339 datetime validator.
    pub fn new() -> Self {
        Self { format: None }
    }

    /// Creates a datetime validator with a `strftime`-style format.
    ///
    /// # Errors
    ///
    /// [`RuleError::EmptyFormat`] if `format` is blank.
    pub fn with_format(format: &str) -> Result<Self, RuleError> {
        Ok(Self {
            format: Some(checked_format(format, "datetime")?),
        })
    }

    fn parses(&self, text: &str) -> bool {
        match &self.format {
            None => ChronoDateTime::parse_from_rfc3339(text).is_ok(),
            Some(format) => {
                NaiveDateTime::parse_from_str(text, format).is_ok()
                    || ChronoDateTime::parse_from_str(text, format).is_ok()
            }
        }
    }
}

impl Validate for DateTime {
    fn check(&self, value: &Value) -> Result<Verdict, Mismatch> {
        Ok(Verdict::from_bool(
            value.as_str().is_some_and(|s| self.parses(s)),
        ))
    }

    fn messages(&self) -> &Messages {
        &DATETIME_MESSAGES
    }
}

/// Creates an RFC 3339 [`DateTime`] validator.
pub fn datetime() -> DateTime {
    DateTime::new()
}

/// Creates a [`DateTime`] validator with a custom format.
///
/// # Errors
///
/// See [`DateTime::with_format`].
pub fn datetime_with_format(format: &str) -> Result<DateTime, RuleError> {
    DateTime::with_format(format)
}
