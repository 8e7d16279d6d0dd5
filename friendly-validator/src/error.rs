//! Fault types for malformed `validate` calls.

use thiserror::Error;

/// A precondition violation in a `validate` call.
///
/// These are hard faults about the shape of the call itself, distinct
/// from rule failures, which are normal outcomes reported in the
/// returned [`Verdict`](crate::Verdict). Gates fire in a fixed order:
/// arity, type, shape, ruleset format, ruleset membership. The first
/// violation aborts the call; nothing is partially validated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidateError {
    /// [`validate_args`](crate::validate_args) was called with other
    /// than exactly one argument.
    #[error("invalid argument supplied: expected exactly 1 argument, got {got}")]
    Arity {
        /// Number of arguments actually supplied.
        got: usize,
    },

    /// The input is not a JSON object or array.
    #[error("invalid argument supplied: data must be an object or an array, got {found}")]
    Type {
        /// JSON type name of the rejected input.
        found: &'static str,
    },

    /// A record does not have exactly the fields `value` and `rules`.
    #[error(
        "invalid argument supplied: each record must have exactly the fields `value` and `rules`"
    )]
    Shape,

    /// A record's ruleset is missing, not an array, empty, or contains
    /// a non-string entry.
    #[error("invalid argument supplied: rulesets must be non-empty arrays of rule names")]
    RulesetFormat,

    /// A referenced rule name is not in the recognized rule set.
    ///
    /// Deliberately aggregate: the fault does not say which record or
    /// which rule. See `Rule::from_name` for a per-name check.
    #[error("invalid argument supplied: a referenced rule is not in the recognized rule set")]
    UnknownRule,
}
