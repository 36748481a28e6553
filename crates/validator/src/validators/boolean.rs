//! Truthiness validator

use serde_json::Value;

/// Returns whether a value counts as true in a condition.
///
/// `null`, `false`, zero, and empty strings, arrays, and objects are false;
/// everything else is true.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

crate::validator! {
    /// Passes for true-equivalent values; see [`is_truthy`].
    pub Truthy;
    rule(value) { is_truthy(value) }
    messages("must be True-equivalent value", "must be False-equivalent value");
    fn truthy();
}
