//! Character-class validators
//!
//! Each accepts a non-empty string whose characters all belong to the class.
//! Any other value, including the empty string, fails.

use serde_json::Value;

fn all_chars(value: &Value, class: impl Fn(char) -> bool) -> bool {
    value
        .as_str()
        .is_some_and(|s| !s.is_empty() && s.chars().all(class))
}

crate::validator! {
    /// Letters and digits only.
    pub IsAlnum;
    rule(value) { all_chars(value, char::is_alphanumeric) }
    messages("must be numbers and letters", "must not be numbers and letters");
    fn is_alnum();
}

crate::validator! {
    /// Letters only, in any script.
    pub IsAlpha;
    rule(value) { all_chars(value, char::is_alphabetic) }
    messages("must be all letters", "must not be all letters");
    fn is_alpha();
}

crate::validator! {
    /// Digits only.
    pub IsDigit;
    rule(value) { all_chars(value, char::is_numeric) }
    messages("must be all numbers", "must not be all numbers");
    fn is_digit();
}

crate::validator! {
    /// The empty string.
    pub Blank;
    rule(value) { value.as_str() == Some("") }
    messages("must be an empty string", "must not be an empty string");
    fn blank();
}
