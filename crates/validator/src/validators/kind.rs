//! Type validator

use serde_json::Value;

use crate::error::Mismatch;
use crate::foundation::{Kind, Messages, Validate, Verdict};

/// Passes when the value has the given [`Kind`].
///
/// # Examples
///
/// ```
/// use fieldguard_validator::prelude::*;
/// use serde_json::json;
///
/// assert!(type_of(Kind::String).check(&json!("")).unwrap().is_pass());
/// assert!(type_of(Kind::Integer).check(&json!(3)).unwrap().is_pass());
/// assert!(!type_of(Kind::Integer).check(&json!(3.5)).unwrap().is_pass());
/// ```
#[derive(Debug, Clone)]
pub struct TypeOf {
    kind: Kind,
    messages: Messages,
}

impl TypeOf {
    /// Creates a type validator.
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            messages: Messages::new(
                format!("must be of type {kind}"),
                format!("must not be of type {kind}"),
            ),
        }
    }

    /// The required kind.
    pub fn kind(&self) -> Kind {
        self.kind
    }
}

impl Validate for TypeOf {
    fn check(&self, value: &Value) -> Result<Verdict, Mismatch> {
        Ok(Verdict::from_bool(self.kind.matches(value)))
    }

    fn messages(&self) -> &Messages {
        &self.messages
    }
}

/// Creates a [`TypeOf`] validator.
pub fn type_of(kind: Kind) -> TypeOf {
    TypeOf::new(kind)
}
