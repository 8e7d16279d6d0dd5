//! Core dispatch engine: shape-safe rule execution over typed requests.
//!
//! The engine assumes the input gates have already run (or that the
//! caller built [`Request`]s directly); the only precondition it still
//! owns is ruleset non-emptiness, which the type system cannot express.

use crate::error::ValidateError;
use crate::request::Request;
use crate::verdict::Verdict;

/// Apply each of a request's rules to its value, in declaration order.
///
/// Rule failures are not faults: they are collected into the returned
/// [`Verdict`] as formatted messages.
///
/// # Errors
///
/// Returns [`ValidateError::RulesetFormat`] if the request's rule list
/// is empty. Empty rulesets are rejected uniformly, matching the
/// dynamic layer's gate.
pub fn validate_request(request: &Request) -> Result<Verdict, ValidateError> {
    validate_batch(std::slice::from_ref(request))
}

/// Apply [`validate_request`] semantics across a batch.
///
/// Messages concatenate in record order, then rule declaration order
/// within each record. An empty batch is a pass.
///
/// # Errors
///
/// Returns [`ValidateError::RulesetFormat`] if any record's rule list
/// is empty. The emptiness gate runs across the whole batch before any
/// rule executes, so a later record's empty ruleset still faults the
/// call with no partial result.
pub fn validate_batch(requests: &[Request]) -> Result<Verdict, ValidateError> {
    if requests.iter().any(|request| request.rules.is_empty()) {
        return Err(ValidateError::RulesetFormat);
    }

    let mut messages = Vec::new();
    for request in requests {
        for rule in &request.rules {
            if !rule.check(&request.value) {
                messages.push(rule.failure_message(&request.value));
            }
        }
    }
    Ok(Verdict::from_messages(messages))
}
