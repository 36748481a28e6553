//! Validator combinators
//!
//! Validators built from other validators or rule sets:
//!
//! - [`Not`]: inverts a verdict and swaps messages
//! - [`WithMessage`]: replaces messages
//! - [`Each`]: per-element validation of arrays
//! - [`If`] / [`Then`]: conditional rules on sibling fields
//!
//! Nested rule sets need no combinator: a [`RuleSet`](crate::rules::RuleSet)
//! placed in a field's rule list is applied to that field's mapping.

pub mod each;
pub mod message;
pub mod not;
pub mod when;

pub use each::{Each, each, each_all, each_rules};
pub use message::{WithMessage, with_message};
pub use not::{Not, not};
pub use when::{If, Then, then, when};
