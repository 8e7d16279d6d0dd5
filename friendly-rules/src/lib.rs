//! Shared validation rule catalog and predicate primitives.
//!
//! This crate is the single source of truth for the recognized rule set:
//! the closed [`Rule`] enumeration, the canonical rule names, the per-rule
//! error message templates, and the boolean predicates that decide whether
//! a value satisfies a rule.
//!
//! Request shapes, batching, and dispatch live in the `friendly-validator`
//! crate; this crate deliberately knows nothing about them.

mod predicate;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Placeholder token in message templates, replaced by the quoted
/// failing value when a message is rendered.
pub const TEMPLATE_PLACEHOLDER: &str = "{}";

/// Error returned when a rule name is not in the recognized rule set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized rule name '{name}'")]
pub struct UnknownRuleName {
    /// The rule name that failed to resolve.
    pub name: String,
}

/// The closed set of recognized validation rules.
///
/// Each variant pairs a canonical `camelCase` name (the wire form used in
/// request payloads, e.g. `"isEmail"`), a message template, and a boolean
/// predicate. Dispatching over a closed enum instead of a string-keyed
/// lookup makes an unhandled rule a compile error rather than a runtime
/// lookup failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// Email address shape: `local@host.tld`.
    #[serde(rename = "isEmail")]
    Email,
    /// URL with optional scheme; bare registrable domains are accepted.
    #[serde(rename = "isURL")]
    Url,
    /// Fully qualified domain name (no scheme, alphabetic TLD).
    #[serde(rename = "isFQDN")]
    Fqdn,
    /// IPv4 or IPv6 address.
    #[serde(rename = "isIP")]
    Ip,
    /// ASCII letters only.
    #[serde(rename = "isAlpha")]
    Alpha,
    /// ASCII digits only, with an optional leading sign.
    #[serde(rename = "isNumeric")]
    Numeric,
    /// ASCII letters and digits only.
    #[serde(rename = "isAlphanumeric")]
    Alphanumeric,
    /// Hexadecimal digits only.
    #[serde(rename = "isHexadecimal")]
    Hexadecimal,
    /// Hex color: optional `#`, then 3 or 6 hex digits.
    #[serde(rename = "isHexColor")]
    HexColor,
    /// Fixed under lowercasing.
    #[serde(rename = "isLowercase")]
    Lowercase,
    /// Fixed under uppercasing.
    #[serde(rename = "isUppercase")]
    Uppercase,
    /// Integer number, or string of optionally-signed digits.
    #[serde(rename = "isInt")]
    Int,
    /// Any number, or string parsing as a finite float.
    #[serde(rename = "isFloat")]
    Float,
    /// Calendar date or date-time in a common textual format.
    #[serde(rename = "isDate")]
    Date,
    /// Credit card number (Luhn checksum).
    #[serde(rename = "isCreditCard")]
    CreditCard,
    /// ISBN-10 or ISBN-13 (checksum verified).
    #[serde(rename = "isISBN")]
    Isbn,
    /// Phone number: digits plus common separators.
    #[serde(rename = "isMobilePhone")]
    MobilePhone,
    /// String containing a JSON object or array.
    #[serde(rename = "isJSON")]
    Json,
    /// ASCII characters only.
    #[serde(rename = "isAscii")]
    Ascii,
    /// Mongo `ObjectId`: exactly 24 hex characters.
    #[serde(rename = "isMongoId")]
    MongoId,
}

impl Rule {
    /// Every recognized rule, in canonical catalog order.
    pub const ALL: [Self; 20] = [
        Self::Email,
        Self::Url,
        Self::Fqdn,
        Self::Ip,
        Self::Alpha,
        Self::Numeric,
        Self::Alphanumeric,
        Self::Hexadecimal,
        Self::HexColor,
        Self::Lowercase,
        Self::Uppercase,
        Self::Int,
        Self::Float,
        Self::Date,
        Self::CreditCard,
        Self::Isbn,
        Self::MobilePhone,
        Self::Json,
        Self::Ascii,
        Self::MongoId,
    ];

    /// The canonical `camelCase` rule name, as it appears in request payloads.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "isEmail",
            Self::Url => "isURL",
            Self::Fqdn => "isFQDN",
            Self::Ip => "isIP",
            Self::Alpha => "isAlpha",
            Self::Numeric => "isNumeric",
            Self::Alphanumeric => "isAlphanumeric",
            Self::Hexadecimal => "isHexadecimal",
            Self::HexColor => "isHexColor",
            Self::Lowercase => "isLowercase",
            Self::Uppercase => "isUppercase",
            Self::Int => "isInt",
            Self::Float => "isFloat",
            Self::Date => "isDate",
            Self::CreditCard => "isCreditCard",
            Self::Isbn => "isISBN",
            Self::MobilePhone => "isMobilePhone",
            Self::Json => "isJSON",
            Self::Ascii => "isAscii",
            Self::MongoId => "isMongoId",
        }
    }

    /// Resolve a canonical rule name to its [`Rule`], or `None` if the
    /// name is not in the recognized set. Matching is exact: rule names
    /// are case-sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|rule| rule.name() == name)
    }

    /// The error message template for this rule.
    ///
    /// Each template contains exactly one [`TEMPLATE_PLACEHOLDER`], which
    /// [`failure_message`](Self::failure_message) replaces with the quoted
    /// failing value.
    #[must_use]
    pub fn message_template(self) -> &'static str {
        match self {
            Self::Email => "{} is not a valid email address.",
            Self::Url => "{} is not in valid URL format.",
            Self::Fqdn => "{} is not a fully qualified domain name.",
            Self::Ip => "{} is not in valid IP Address format.",
            Self::Alpha => "{} contains non-alpha characters.",
            Self::Numeric => "{} contains non-numeric characters.",
            Self::Alphanumeric => "{} contains non-alphanumeric characters.",
            Self::Hexadecimal => "{} is not a hexadecimal number.",
            Self::HexColor => "{} is not a valid hex color.",
            Self::Lowercase => "{} contains uppercase characters.",
            Self::Uppercase => "{} contains lowercase characters.",
            Self::Int => "{} is not an integer.",
            Self::Float => "{} is not a floating-point number.",
            Self::Date => "{} is not a valid date.",
            Self::CreditCard => "{} is not a valid credit card number.",
            Self::Isbn => "{} is not a valid ISBN.",
            Self::MobilePhone => "{} is not a valid phone number.",
            Self::Json => "{} is not valid JSON.",
            Self::Ascii => "{} contains non-ASCII characters.",
            Self::MongoId => "{} is not a valid MongoDB ObjectId.",
        }
    }

    /// Render the failure message for `value` under this rule.
    ///
    /// The value is double-quoted and substituted into the message
    /// template. Non-scalar values (null, arrays, objects) render via
    /// their JSON form.
    #[must_use]
    pub fn failure_message(self, value: &Value) -> String {
        let text = predicate::scalar_text(value).unwrap_or_else(|| Cow::Owned(value.to_string()));
        let quoted = format!("\"{text}\"");
        self.message_template()
            .replacen(TEMPLATE_PLACEHOLDER, &quoted, 1)
    }

    /// Apply this rule's predicate to `value`.
    ///
    /// String-oriented rules coerce scalar values to text (numbers and
    /// bools via their display form); null, arrays, and objects fail
    /// every rule.
    #[must_use]
    pub fn check(self, value: &Value) -> bool {
        predicate::check(self, value)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rule {
    type Err = UnknownRuleName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownRuleName { name: s.to_owned() })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    // ---- names ----

    #[test]
    fn test_name_round_trip() {
        for rule in Rule::ALL {
            assert_eq!(Rule::from_name(rule.name()), Some(rule));
        }
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(Rule::from_name("isTotallyNotARule"), None);
        assert_eq!(Rule::from_name(""), None);
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert_eq!(Rule::from_name("isemail"), None);
        assert_eq!(Rule::from_name("ISEMAIL"), None);
    }

    #[test]
    fn test_from_str_error_names_the_rule() {
        let err = "isBogus".parse::<Rule>().unwrap_err();
        assert_eq!(err.name, "isBogus");
        assert!(err.to_string().contains("isBogus"), "got: {err}");
    }

    #[test]
    fn test_all_names_are_distinct() {
        for (i, a) in Rule::ALL.iter().enumerate() {
            for b in &Rule::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    // ---- serde ----

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&Rule::Email).unwrap();
        assert_eq!(json, "\"isEmail\"");
        let rule: Rule = serde_json::from_str("\"isURL\"").unwrap();
        assert_eq!(rule, Rule::Url);
    }

    #[test]
    fn test_serde_rejects_unknown_name() {
        assert!(serde_json::from_str::<Rule>("\"isBogus\"").is_err());
    }

    // ---- templates ----

    #[test]
    fn test_every_template_has_one_placeholder() {
        for rule in Rule::ALL {
            let template = rule.message_template();
            assert_eq!(
                template.matches(TEMPLATE_PLACEHOLDER).count(),
                1,
                "template for {rule} must have exactly one placeholder"
            );
        }
    }

    #[test]
    fn test_failure_message_quotes_string_value() {
        let msg = Rule::Email.failure_message(&json!("foofoo"));
        assert_eq!(msg, "\"foofoo\" is not a valid email address.");
    }

    #[test]
    fn test_failure_message_renders_number_value() {
        let msg = Rule::Alpha.failure_message(&json!(42));
        assert_eq!(msg, "\"42\" contains non-alpha characters.");
    }
}
