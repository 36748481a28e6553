//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldguard_validator::prelude::*;` import that
//! brings in the traits, rule-set types, validators, and combinators.
//!
//! # Examples
//!
//! ```
//! use fieldguard_validator::prelude::*;
//!
//! let rules = rules! {
//!     "tags" => [required, each(length(1, 10)?)],
//!     "code" => [pattern(r"[A-Z]{3}")?.with_message("must be an uppercase code")],
//! };
//! assert_eq!(rules.len(), 2);
//! # Ok::<(), RuleError>(())
//! ```

// ============================================================================
// FOUNDATION: Core traits and results
// ============================================================================

pub use crate::foundation::{
    DEFAULT_MESSAGE, ErrorEntry, ErrorMap, FieldError, Kind, Messages, Validate, ValidateExt,
    ValidationOutcome, ValueSet, Verdict,
};

pub use crate::error::{Mismatch, Rejected, RuleError};

// ============================================================================
// EVALUATION
// ============================================================================

pub use crate::evaluate::{MUST_BE_PRESENT, NOT_A_MAPPING, invoke, validate};
pub use crate::guard::{Guard, Preparation, PreparationConfig, merge_sources};
pub use crate::rules::{FieldRules, Rule, RuleSet};
pub use crate::rules;

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    Each, If, Not, Then, WithMessage, each, each_all, each_rules, not, then, when, with_message,
};
