//! Equality and membership validators
//!
//! Numbers compare by value, so `1` and `1.0` are equal. Two integers are
//! compared exactly, never through a float. Everything else uses JSON
//! equality.

use serde_json::Value;

use crate::error::Mismatch;
use crate::foundation::render::{plain, repr};
use crate::foundation::{Messages, Validate, Verdict};

/// JSON equality with numeric values compared as numbers.
pub(crate) fn same(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
                return x == y;
            }
            if let (Some(x), Some(y)) = (x.as_u64(), y.as_u64()) {
                return x == y;
            }
            // Integers outside a shared integer type only meet a float here.
            (x.is_f64() || y.is_f64()) && x.as_f64() == y.as_f64()
        }
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| same(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| same(x, y)))
        }
        _ => a == b,
    }
}

// ============================================================================
// EQUALS
// ============================================================================

/// Passes when the value equals the expected value.
///
/// # Examples
///
/// ```
/// use fieldguard_validator::prelude::*;
/// use serde_json::json;
///
/// let validator = equals("123");
/// assert!(validator.check(&json!("123")).unwrap().is_pass());
/// assert!(!validator.check(&json!(123)).unwrap().is_pass());
/// assert_eq!(validator.messages().failure(), "must be equal to '123'");
/// ```
#[derive(Debug, Clone)]
pub struct Equals {
    expected: Value,
    messages: Messages,
}

impl Equals {
    /// Creates an equality validator.
    pub fn new(expected: impl Into<Value>) -> Self {
        let expected = expected.into();
        let shown = repr(&expected);
        Self {
            messages: Messages::new(
                format!("must be equal to {shown}"),
                format!("must not be equal to {shown}"),
            ),
            expected,
        }
    }

    /// The expected value.
    pub fn expected(&self) -> &Value {
        &self.expected
    }
}

impl Validate for Equals {
    fn check(&self, value: &Value) -> Result<Verdict, Mismatch> {
        Ok(Verdict::from_bool(same(value, &self.expected)))
    }

    fn messages(&self) -> &Messages {
        &self.messages
    }
}

/// Creates an [`Equals`] validator.
pub fn equals(expected: impl Into<Value>) -> Equals {
    Equals::new(expected)
}

// ============================================================================
// IN
// ============================================================================

/// Passes when the value is a member of a fixed collection.
#[derive(Debug, Clone)]
pub struct In {
    allowed: Vec<Value>,
    messages: Messages,
}

impl In {
    /// Creates a membership validator.
    pub fn new<T: Into<Value>>(allowed: impl IntoIterator<Item = T>) -> Self {
        let allowed: Vec<Value> = allowed.into_iter().map(Into::into).collect();
        let shown = repr(&Value::Array(allowed.clone()));
        Self {
            allowed,
            messages: Messages::new(
                format!("must be one of {shown}"),
                format!("must not be one of {shown}"),
            ),
        }
    }

    /// The allowed values.
    pub fn allowed(&self) -> &[Value] {
        &self.allowed
    }
}

impl Validate for In {
    fn check(&self, value: &Value) -> Result<Verdict, Mismatch> {
        Ok(Verdict::from_bool(
            self.allowed.iter().any(|allowed| same(value, allowed)),
        ))
    }

    fn messages(&self) -> &Messages {
        &self.messages
    }
}

/// Creates an [`In`] validator.
pub fn one_of<T: Into<Value>>(allowed: impl IntoIterator<Item = T>) -> In {
    In::new(allowed)
}

// ============================================================================
// CONTAINS
// ============================================================================

/// Passes when the value contains an element.
///
/// - string: `element` is a substring (a non-string element is a mismatch)
/// - array: some item equals `element`
/// - object: `element` is a key
///
/// Any other value is a mismatch.
#[derive(Debug, Clone)]
pub struct Contains {
    element: Value,
    messages: Messages,
}

impl Contains {
    /// Creates a containment validator.
    pub fn new(element: impl Into<Value>) -> Self {
        let element = element.into();
        let shown = plain(&element);
        Self {
            messages: Messages::new(
                format!("must contain {shown}"),
                format!("must not contain {shown}"),
            ),
            element,
        }
    }
}

impl Validate for Contains {
    fn check(&self, value: &Value) -> Result<Verdict, Mismatch> {
        let found = match (value, &self.element) {
            (Value::String(haystack), Value::String(needle)) => haystack.contains(needle.as_str()),
            (Value::String(_), _) => return Err(Mismatch::new("string element", &self.element)),
            (Value::Array(items), element) => items.iter().any(|item| same(item, element)),
            (Value::Object(map), Value::String(key)) => map.contains_key(key),
            (Value::Object(_), _) => false,
            _ => return Err(Mismatch::new("string, array or object", value)),
        };
        Ok(Verdict::from_bool(found))
    }

    fn messages(&self) -> &Messages {
        &self.messages
    }
}

/// Creates a [`Contains`] validator.
pub fn contains(element: impl Into<Value>) -> Contains {
    Contains::new(element)
}
