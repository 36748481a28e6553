//! Validation outcome and the structured error report

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Rejected;

/// Error report keyed by field name (or element index for per-element rule
/// sets) in order of first failure.
pub type ErrorMap = IndexMap<String, ErrorEntry>;

/// The value stored under one key of an [`ErrorMap`].
///
/// Fields always report a `List`. Element indices under a rule-set
/// [`Each`](crate::combinators::Each) report the element's own `Map`, or a
/// `List` when the element could not be evaluated at all:
///
/// ```json
/// {"user": ["must be present"], "items": [{"0": {"x": ["must be present"]}, "2": ["must be a mapping"]}]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorEntry {
    /// Entries reported for a field.
    List(Vec<FieldError>),
    /// The report of one element evaluated as a value set.
    Map(ErrorMap),
}

impl ErrorEntry {
    /// Returns the entry list, if this is one.
    pub fn as_list(&self) -> Option<&[FieldError]> {
        match self {
            Self::List(errors) => Some(errors),
            Self::Map(_) => None,
        }
    }

    /// Returns the element report, if this is one.
    pub fn as_map(&self) -> Option<&ErrorMap> {
        match self {
            Self::List(_) => None,
            Self::Map(map) => Some(map),
        }
    }

    /// Number of list entries or map keys.
    pub fn len(&self) -> usize {
        match self {
            Self::List(errors) => errors.len(),
            Self::Map(map) => map.len(),
        }
    }

    /// Returns true if nothing is recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<FieldError>> for ErrorEntry {
    fn from(errors: Vec<FieldError>) -> Self {
        Self::List(errors)
    }
}

impl From<ErrorMap> for ErrorEntry {
    fn from(map: ErrorMap) -> Self {
        Self::Map(map)
    }
}

impl PartialEq<Vec<FieldError>> for ErrorEntry {
    fn eq(&self, other: &Vec<FieldError>) -> bool {
        self.as_list() == Some(other.as_slice())
    }
}

/// One entry in a field's error list.
///
/// A field can fail on its own (`Message`) or because part of its structure
/// failed (`Nested`): a nested rule set, an `If`/`Then` dependency, or an
/// `Each` over a rule set. The two stay distinct when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldError {
    /// A human-readable failure message.
    Message(String),
    /// Failures of a nested structure.
    Nested(ErrorMap),
}

impl FieldError {
    /// Creates a message entry.
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Returns the message, if this entry is one.
    pub fn as_message(&self) -> Option<&str> {
        match self {
            Self::Message(message) => Some(message),
            Self::Nested(_) => None,
        }
    }

    /// Returns the nested report, if this entry is one.
    pub fn as_nested(&self) -> Option<&ErrorMap> {
        match self {
            Self::Message(_) => None,
            Self::Nested(map) => Some(map),
        }
    }
}

impl From<&str> for FieldError {
    fn from(message: &str) -> Self {
        Self::Message(message.to_owned())
    }
}

impl From<String> for FieldError {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<ErrorMap> for FieldError {
    fn from(map: ErrorMap) -> Self {
        Self::Nested(map)
    }
}

/// The result of evaluating a rule set against a value set.
///
/// `valid` is true exactly when `errors` is empty; the only constructor
/// enforces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    valid: bool,
    errors: ErrorMap,
}

impl ValidationOutcome {
    /// Builds an outcome from an error report.
    pub fn from_errors(errors: ErrorMap) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Returns true if no field failed.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the error report.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Returns the errors recorded for one field.
    pub fn field(&self, name: &str) -> Option<&[FieldError]> {
        self.errors.get(name).and_then(ErrorEntry::as_list)
    }

    /// Consumes the outcome, returning the error report.
    pub fn into_errors(self) -> ErrorMap {
        self.errors
    }

    /// Converts into a `Result`, keeping the report on failure.
    pub fn into_result(self) -> Result<(), Rejected> {
        if self.valid {
            Ok(())
        } else {
            Err(Rejected::new(self.errors))
        }
    }
}

impl<'de> Deserialize<'de> for ValidationOutcome {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            errors: ErrorMap,
        }

        // `valid` is derived, so a report that disagrees with itself cannot be built.
        Raw::deserialize(deserializer).map(|raw| Self::from_errors(raw.errors))
    }
}
