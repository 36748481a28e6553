//! Core validation types and traits
//!
//! This module contains the building blocks every other layer uses:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Results**: [`Verdict`], [`ValidationOutcome`], [`FieldError`], [`ErrorMap`], [`ErrorEntry`]
//! - **Values**: [`ValueSet`], [`Kind`]
//!
//! # Architecture
//!
//! ## 1. One value in, one verdict out
//!
//! A validator looks at a single [`serde_json::Value`] and answers with a
//! [`Verdict`]. Shapes it cannot judge come back as
//! [`Mismatch`](crate::error::Mismatch), never as a panic.
//!
//! ## 2. Messages travel with the validator
//!
//! Each validator carries a failure message and the message to use when it is
//! negated, so `not(range(1, 100))` reports `must not fall between 1 and 100`
//! without extra configuration.
//!
//! ## 3. Reports, not exceptions
//!
//! Evaluation never fails. Every violation is collected into an [`ErrorMap`]
//! that keeps nested structure intact.
//!
//! # Examples
//!
//! ```
//! use fieldguard_validator::prelude::*;
//! use serde_json::json;
//!
//! let v = length(1, 5).unwrap();
//! assert!(v.check(&json!("hello")).unwrap().is_pass());
//! assert_eq!(v.messages().failure(), "must be between 1 and 5 elements in length");
//! ```

pub mod kind;
pub mod outcome;
pub mod render;
pub mod traits;

pub use kind::Kind;
pub use outcome::{ErrorEntry, ErrorMap, FieldError, ValidationOutcome};
pub use traits::{DEFAULT_MESSAGE, Messages, Validate, ValidateExt, Verdict};

/// Named input values, as handed to the evaluator.
pub type ValueSet = serde_json::Map<String, serde_json::Value>;
