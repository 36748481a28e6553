//! Integration tests for fieldguard-validator
//!
//! Exercises the public API end to end:
//! - Rule sets against realistic form input
//! - Conditional and per-element rules
//! - Guard preparation and source merging
//! - Serialized report shape and sharing across threads

mod conditional_tests;
mod each_tests;
mod guard_tests;
mod report_tests;
mod scenario_tests;

use fieldguard_validator::prelude::ValueSet;
use serde_json::Value;

/// Converts a JSON object literal into a value set.
pub fn values(value: Value) -> ValueSet {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}
