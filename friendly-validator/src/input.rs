//! Dynamic input layer: gate-checks loose JSON input and decodes it
//! into typed [`Request`]s for the dispatch engine.
//!
//! Callers may depend on which fault fires first when an input has
//! several problems, so each gate runs across ALL records before the
//! next gate is considered.

use friendly_rules::Rule;
use serde_json::{Map, Value};

use crate::error::ValidateError;
use crate::request::Request;

/// JSON type name, for `TypeError` messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decode loose input into typed requests, firing the precondition
/// gates in order: type, shape, ruleset format, ruleset membership.
pub(crate) fn decode(input: &Value) -> Result<Vec<Request>, ValidateError> {
    // Type gate: a single record or an ordered sequence of records.
    let records: Vec<&Map<String, Value>> = match input {
        Value::Object(map) => vec![map],
        Value::Array(items) => {
            let mut maps = Vec::with_capacity(items.len());
            for item in items {
                let Value::Object(map) = item else {
                    // A non-object element can never have the record shape.
                    return Err(ValidateError::Shape);
                };
                maps.push(map);
            }
            maps
        }
        other => {
            return Err(ValidateError::Type {
                found: json_type_name(other),
            });
        }
    };

    // Shape gate: exactly the fields `value` and `rules`, nothing else.
    for record in &records {
        if record.len() != 2 || !record.contains_key("value") || !record.contains_key("rules") {
            return Err(ValidateError::Shape);
        }
    }

    // Ruleset format gate: non-empty arrays of strings.
    let mut rule_names: Vec<Vec<&str>> = Vec::with_capacity(records.len());
    for record in &records {
        let Some(Value::Array(entries)) = record.get("rules") else {
            return Err(ValidateError::RulesetFormat);
        };
        if entries.is_empty() {
            return Err(ValidateError::RulesetFormat);
        }
        let mut names = Vec::with_capacity(entries.len());
        for entry in entries {
            let Some(name) = entry.as_str() else {
                return Err(ValidateError::RulesetFormat);
            };
            names.push(name);
        }
        rule_names.push(names);
    }

    // Ruleset membership gate. Aggregate by contract: the fault names
    // neither the offending record nor the offending rule.
    let mut requests = Vec::with_capacity(records.len());
    for (record, names) in records.iter().zip(&rule_names) {
        let mut rules = Vec::with_capacity(names.len());
        for &name in names {
            let Some(rule) = Rule::from_name(name) else {
                return Err(ValidateError::UnknownRule);
            };
            rules.push(rule);
        }
        requests.push(Request {
            value: record.get("value").cloned().unwrap_or(Value::Null),
            rules,
        });
    }

    Ok(requests)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_single_record() {
        let requests = decode(&json!({ "value": "foo@bar.com", "rules": ["isEmail"] })).unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].rules, [Rule::Email]);
    }

    #[test]
    fn test_decode_batch_preserves_order() {
        let requests = decode(&json!([
            { "value": "a", "rules": ["isAlpha"] },
            { "value": "1", "rules": ["isNumeric", "isInt"] },
        ]))
        .unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].rules, [Rule::Alpha]);
        assert_eq!(requests[1].rules, [Rule::Numeric, Rule::Int]);
    }

    #[test]
    fn test_decode_empty_batch() {
        assert_eq!(decode(&json!([])).unwrap(), []);
    }

    #[test]
    fn test_type_gate_names_the_json_type() {
        assert_eq!(
            decode(&json!(1)).unwrap_err(),
            ValidateError::Type { found: "number" }
        );
        assert_eq!(
            decode(&json!("x")).unwrap_err(),
            ValidateError::Type { found: "string" }
        );
        assert_eq!(
            decode(&json!(null)).unwrap_err(),
            ValidateError::Type { found: "null" }
        );
    }

    #[test]
    fn test_shape_gate_rejects_wrong_fields() {
        let input = json!({ "someIncorrectProp": "", "someOtherIncorrectProp": "" });
        assert_eq!(decode(&input).unwrap_err(), ValidateError::Shape);
    }

    #[test]
    fn test_shape_gate_rejects_extra_fields() {
        let input = json!({ "value": "", "rules": ["isEmail"], "extra": true });
        assert_eq!(decode(&input).unwrap_err(), ValidateError::Shape);
    }

    #[test]
    fn test_shape_gate_rejects_non_object_batch_element() {
        let input = json!([{ "value": "", "rules": ["isEmail"] }, 5]);
        assert_eq!(decode(&input).unwrap_err(), ValidateError::Shape);
    }

    #[test]
    fn test_shape_gate_runs_before_ruleset_gate() {
        // The first record's ruleset is malformed, but the second
        // record's shape problem fires first: shape is the earlier gate
        // and it sweeps the whole batch.
        let input = json!([
            { "value": "", "rules": 5 },
            { "wrong": "", "fields": "" },
        ]);
        assert_eq!(decode(&input).unwrap_err(), ValidateError::Shape);
    }

    #[test]
    fn test_ruleset_gate_rejects_non_array() {
        let input = json!({ "value": "", "rules": 5 });
        assert_eq!(decode(&input).unwrap_err(), ValidateError::RulesetFormat);
    }

    #[test]
    fn test_ruleset_gate_rejects_empty() {
        let input = json!({ "value": "", "rules": [] });
        assert_eq!(decode(&input).unwrap_err(), ValidateError::RulesetFormat);
    }

    #[test]
    fn test_ruleset_gate_rejects_non_string_entry() {
        let input = json!({ "value": "", "rules": ["isEmail", 5] });
        assert_eq!(decode(&input).unwrap_err(), ValidateError::RulesetFormat);
    }

    #[test]
    fn test_ruleset_gate_runs_before_membership_gate() {
        // An unknown rule in the first record loses to a format
        // problem in the second.
        let input = json!([
            { "value": "", "rules": ["isTotallyNotARule"] },
            { "value": "", "rules": [] },
        ]);
        assert_eq!(decode(&input).unwrap_err(), ValidateError::RulesetFormat);
    }

    #[test]
    fn test_membership_gate_is_aggregate() {
        let input = json!([{ "value": "foo@foo.com", "rules": ["isTotallyNotARule"] }]);
        assert_eq!(decode(&input).unwrap_err(), ValidateError::UnknownRule);
    }
}
