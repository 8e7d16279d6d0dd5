//! # friendly-validator
//!
//! Friendly, human-readable value validation.
//!
//! Given a value and a named list of validation rules, applies each
//! rule and collects a human-readable error message for every rule
//! that fails. The crate keeps a clean separation between the **core
//! dispatch engine** (typed, shape-safe) and the **dynamic input
//! layer** (loose JSON shape checking); the rule predicates themselves
//! live in the sibling `friendly-rules` crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use friendly_validator::validate;
//! use serde_json::json;
//!
//! let verdict = validate(&json!({ "value": "foo@bar.com", "rules": ["isEmail"] })).unwrap();
//! assert!(verdict.is_pass());
//!
//! let verdict = validate(&json!({ "value": "foofoo", "rules": ["isEmail"] })).unwrap();
//! assert_eq!(verdict.messages(), ["\"foofoo\" is not a valid email address."]);
//! ```
//!
//! A caller distinguishes three outcomes: a malformed call (an `Err`
//! with a [`ValidateError`]), a value that failed one or more rules
//! (`Ok` with [`Verdict::Fail`]), and a value that passed every rule
//! (`Ok` with [`Verdict::Pass`]).

mod dispatch;
mod error;
mod input;
pub mod output;
mod request;
mod verdict;

pub use dispatch::{validate_batch, validate_request};
pub use error::ValidateError;
pub use friendly_rules::{Rule, UnknownRuleName};
pub use request::Request;
pub use verdict::Verdict;

use serde_json::Value;

/// Validate loose JSON input: one `{value, rules}` record, or an
/// ordered sequence of them (batch mode).
///
/// This is the primary public API. Precondition gates fire in a fixed
/// order (type, shape, ruleset format, ruleset membership) and each
/// gate sweeps the whole input before the next runs, so callers can
/// rely on which fault fires first. Once the gates pass, each record's
/// rules run in declaration order against its value; batch results
/// concatenate in record order.
///
/// The call is a pure function of its input: no state is retained and
/// repeated calls yield identical results.
///
/// # Errors
///
/// Returns a [`ValidateError`] if the input is not an object or array,
/// if any record does not have exactly the fields `value` and `rules`,
/// if any ruleset is not a non-empty array of strings, or if any rule
/// name is unrecognized. Rule failures are not errors; they are
/// reported in the returned [`Verdict`].
pub fn validate(input: &Value) -> Result<Verdict, ValidateError> {
    let requests = input::decode(input)?;
    dispatch::validate_batch(&requests)
}

/// Variadic-style entry point for callers marshalling an argument list.
///
/// The underlying operation takes exactly one input; this wrapper
/// makes the arity check explicit for bindings where the argument
/// count is only known at runtime.
///
/// # Errors
///
/// Returns [`ValidateError::Arity`] unless `args` contains exactly one
/// element, then everything [`validate`] can return.
pub fn validate_args(args: &[Value]) -> Result<Verdict, ValidateError> {
    match args {
        [input] => validate(input),
        _ => Err(ValidateError::Arity { got: args.len() }),
    }
}
