//! # fieldguard-validator
//!
//! Rule-based validation of named input values. A [`RuleSet`](rules::RuleSet)
//! declares, per field, whether the field must be present and which rules its
//! value must satisfy. [`validate`] checks a value set against it and reports
//! *every* violation, keyed by field, with nested reports for nested
//! structures.
//!
//! ## Quick Start
//!
//! ```
//! use fieldguard_validator::prelude::*;
//! use serde_json::json;
//!
//! let rules = rules! {
//!     "a" => [required, equals("123")],
//!     "b" => [required, truthy()],
//!     "c" => [one_of(["spam", "eggs", "bacon"])],
//!     "d" => [not(range(1, 100))],
//! };
//!
//! let values = json!({"a": "124", "b": 1, "d": "13"});
//! let outcome = validate(&rules, values.as_object().unwrap());
//!
//! assert!(!outcome.is_valid());
//! assert_eq!(
//!     serde_json::to_value(&outcome).unwrap(),
//!     json!({
//!         "valid": false,
//!         "errors": {
//!             "a": ["must be equal to '123'"],
//!             "d": ["must not fall between 1 and 100"],
//!         }
//!     })
//! );
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for stateless validators, [`predicate`](validators::predicate)
//! for closures, or implement [`Validate`](foundation::Validate) by hand.
//!
//! ## Built-in Validators
//!
//! - **Equality**: [`Equals`](validators::Equals), [`In`](validators::In),
//!   [`Contains`](validators::Contains)
//! - **Numeric**: [`Range`](validators::Range), [`GreaterThan`](validators::GreaterThan)
//! - **Shape**: [`Length`](validators::Length), [`TypeOf`](validators::TypeOf),
//!   [`Truthy`](validators::Truthy)
//! - **String**: [`Pattern`](validators::Pattern), [`IsAlnum`](validators::IsAlnum),
//!   [`IsAlpha`](validators::IsAlpha), [`IsDigit`](validators::IsDigit),
//!   [`Blank`](validators::Blank), [`Email`](validators::Email)
//!
//! ## Logging
//!
//! Evaluation emits `tracing` events: a `debug` summary per rule set, a
//! `trace` per failing field, and a `warn` when a validator panics.

pub mod combinators;
pub mod error;
pub mod evaluate;
pub mod foundation;
pub mod guard;
mod macros;
pub mod prelude;
pub mod rules;
pub mod validators;

pub use evaluate::validate;
