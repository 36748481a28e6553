//! Macros for building validators and rule sets with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`]: create a stateless validator (struct + `Validate` impl + factory fn)
//! - [`rules!`]: build a [`RuleSet`](crate::rules::RuleSet) from a field table
//!
//! # Examples
//!
//! ```
//! use fieldguard_validator::prelude::*;
//! use fieldguard_validator::validator;
//! use serde_json::json;
//!
//! validator! {
//!     /// Accepts even integers.
//!     pub Even;
//!     rule(value) { value.as_i64().is_some_and(|n| n % 2 == 0) }
//!     messages("must be even", "must not be even");
//!     fn even();
//! }
//!
//! let rules = rules! {
//!     "n" => [required, even()],
//!     "tag" => [one_of(["a", "b"])],
//! };
//!
//! let outcome = rules.validate(json!({"n": 3}).as_object().unwrap());
//! assert_eq!(outcome.field("n").unwrap()[0].as_message(), Some("must be even"));
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a stateless validator: a unit struct, its `Validate` impl with
/// static messages, and a factory function.
///
/// The rule block sees the value as `&serde_json::Value` and returns `bool`;
/// it should answer `false` for values of the wrong shape rather than panic.
///
/// ```rust,ignore
/// validator! {
///     /// Accepts non-empty strings of digits.
///     pub IsDigit;
///     rule(value) { value.as_str().is_some_and(|s| !s.is_empty() && s.chars().all(char::is_numeric)) }
///     messages("must be all numbers", "must not be all numbers");
///     fn is_digit();
/// }
/// ```
#[macro_export]
macro_rules! validator {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($value:ident) $rule:block
        messages($failure:expr, $negated:expr $(,)?);
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            fn check(
                &self,
                $value: &::serde_json::Value,
            ) -> ::core::result::Result<$crate::foundation::Verdict, $crate::error::Mismatch> {
                ::core::result::Result::Ok($crate::foundation::Verdict::from_bool($rule))
            }

            fn messages(&self) -> &$crate::foundation::Messages {
                static MESSAGES: $crate::foundation::Messages =
                    $crate::foundation::Messages::from_static($failure, $negated);
                &MESSAGES
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };
}

// ============================================================================
// RULES MACRO
// ============================================================================

/// Builds a [`RuleSet`](crate::rules::RuleSet) from `field => [rules...]`
/// entries.
///
/// A leading `required` marks the field as required; every other entry is
/// anything convertible into a [`Rule`](crate::rules::Rule): a validator, an
/// [`If`](crate::combinators::If), or a nested rule set.
///
/// ```
/// use fieldguard_validator::prelude::*;
///
/// let rules = rules! {
///     "a" => [required, equals("123")],
///     "b" => [required, truthy()],
///     "c" => [one_of(["spam", "eggs", "bacon"])],
///     "d" => [not(range(1, 100))],
///     "server" => [rules! { "port" => [required, greater_than(0)] }],
/// };
/// assert_eq!(rules.len(), 5);
/// assert!(rules.get("a").unwrap().is_required());
/// ```
#[macro_export]
macro_rules! rules {
    ($($field:expr => [$($rule:tt)*]),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut set = $crate::rules::RuleSet::new();
        $(
            set.insert($field, $crate::__field_rules!($($rule)*));
        )*
        set
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_rules {
    (required $(, $rule:expr)* $(,)?) => {
        $crate::rules::FieldRules::required() $(.rule($rule))*
    };
    ($($rule:expr),* $(,)?) => {
        $crate::rules::FieldRules::optional() $(.rule($rule))*
    };
}
