//! Built-in validators
//!
//! # Categories
//!
//! - **Equality**: [`equals`], [`one_of`], [`contains`]
//! - **Numeric**: [`range`], [`greater_than`]
//! - **Shape**: [`length`], [`type_of`], [`truthy`]
//! - **String**: [`pattern`], [`is_alnum`], [`is_alpha`], [`is_digit`],
//!   [`blank`], [`email`]
//! - **Formats**: `url` (feature `network`), `date` / `datetime` (feature
//!   `temporal`)
//! - **Custom**: [`predicate`]
//!
//! # Examples
//!
//! ```
//! use fieldguard_validator::prelude::*;
//! use serde_json::json;
//!
//! let code = length(3, 3)?.with_message("must be three characters");
//! assert!(code.check(&json!("abc")).unwrap().is_pass());
//!
//! let errors = invoke(&code, &json!("ab"));
//! assert_eq!(errors[0].as_message(), Some("must be three characters"));
//! # Ok::<(), fieldguard_validator::error::RuleError>(())
//! ```

pub mod boolean;
pub mod character;
pub mod equality;
pub mod kind;
pub mod length;
#[cfg(feature = "network")]
pub mod network;
pub mod pattern;
pub mod predicate;
pub mod range;
#[cfg(feature = "temporal")]
pub mod time;

pub use boolean::{Truthy, is_truthy, truthy};
pub use character::{Blank, IsAlnum, IsAlpha, IsDigit, blank, is_alnum, is_alpha, is_digit};
pub use equality::{Contains, Equals, In, contains, equals, one_of};
pub use kind::{TypeOf, type_of};
pub use length::{Length, length};
#[cfg(feature = "network")]
pub use network::{Url, url};
pub use pattern::{Email, Pattern, email, pattern};
pub use predicate::{Predicate, predicate};
pub use range::{GreaterThan, Range, greater_than, range};
#[cfg(feature = "temporal")]
pub use time::{
    DATE_FORMAT, Date, DateTime, date, date_with_format, datetime, datetime_with_format,
};
