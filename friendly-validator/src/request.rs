//! The unit of validation work.

use friendly_rules::Rule;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A `{value, rules}` pair: what to check and with which rules.
///
/// This is the typed form used by the core engine. The serde derive
/// rejects unknown fields, keeping the typed layer aligned with the
/// dynamic layer's exact-shape gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Request {
    /// The datum to check. Any scalar a rule predicate can accept;
    /// null, arrays, and objects fail every rule.
    pub value: Value,
    /// The rules to apply, in declaration order. Must be non-empty.
    pub rules: Vec<Rule>,
}

impl Request {
    /// Build a request from a value and a rule list.
    #[must_use]
    pub fn new(value: impl Into<Value>, rules: impl Into<Vec<Rule>>) -> Self {
        Self {
            value: value.into(),
            rules: rules.into(),
        }
    }
}
