//! Boolean predicates behind each [`Rule`](crate::Rule).
//!
//! Pattern-shaped rules (email, URL, FQDN) use compiled-once regex
//! statics; everything else is plain character and checksum arithmetic.

use std::borrow::Cow;
use std::net::IpAddr;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde_json::Value;

use crate::Rule;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid email regex: {err}"),
    }
});

/// Accepts scheme-less registrable domains (`example.com`) as well as
/// full URLs; a bare word with no dot is rejected.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(concat!(
        r"^(?:(?:https?|ftp)://)?", // optional scheme
        r"(?:[A-Za-z0-9-]+\.)+",    // dotted host labels
        r"[A-Za-z]{2,}",            // alphabetic TLD
        r"(?::[0-9]{2,5})?",        // optional port
        r"(?:[/?#]\S*)?$",          // optional path/query/fragment
    )) {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid URL regex: {err}"),
    }
});

static FQDN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(concat!(
        r"^(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+", // dotted labels
        r"[A-Za-z]{2,}$",                                         // alphabetic TLD
    )) {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid FQDN regex: {err}"),
    }
});

/// Date formats tried by the `isDate` rule, after RFC 3339.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y"];

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Coerce a scalar JSON value to its text form.
///
/// Strings pass through borrowed; numbers and bools use their display
/// form. Null, arrays, and objects have no text form.
pub(crate) fn scalar_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Apply `rule` to `value`.
pub(crate) fn check(rule: Rule, value: &Value) -> bool {
    // Native JSON numbers satisfy the numeric-type rules directly,
    // without a round-trip through their text form.
    if let Value::Number(n) = value {
        match rule {
            Rule::Int => return n.is_i64() || n.is_u64(),
            Rule::Float => return true,
            _ => {}
        }
    }

    let Some(text) = scalar_text(value) else {
        return false;
    };

    match rule {
        Rule::Email => EMAIL_PATTERN.is_match(&text),
        Rule::Url => URL_PATTERN.is_match(&text),
        Rule::Fqdn => FQDN_PATTERN.is_match(&text),
        Rule::Ip => text.parse::<IpAddr>().is_ok(),
        Rule::Alpha => !text.is_empty() && text.chars().all(|c| c.is_ascii_alphabetic()),
        Rule::Numeric => is_numeric(&text),
        Rule::Alphanumeric => !text.is_empty() && text.chars().all(|c| c.is_ascii_alphanumeric()),
        Rule::Hexadecimal => !text.is_empty() && text.chars().all(|c| c.is_ascii_hexdigit()),
        Rule::HexColor => is_hex_color(&text),
        Rule::Lowercase => text == text.to_lowercase(),
        Rule::Uppercase => text == text.to_uppercase(),
        Rule::Int => is_int(&text),
        Rule::Float => is_float(&text),
        Rule::Date => is_date(&text),
        Rule::CreditCard => is_credit_card(&text),
        Rule::Isbn => is_isbn(&text),
        Rule::MobilePhone => is_mobile_phone(&text),
        Rule::Json => is_json(&text),
        Rule::Ascii => text.is_ascii(),
        Rule::MongoId => text.len() == 24 && text.chars().all(|c| c.is_ascii_hexdigit()),
    }
}

/// Optionally-signed run of ASCII digits.
fn is_numeric(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Optionally-signed integer without leading zeros, within `i64` range.
fn is_int(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return false;
    }
    text.parse::<i64>().is_ok()
}

fn is_float(text: &str) -> bool {
    text.parse::<f64>().is_ok_and(f64::is_finite)
}

fn is_hex_color(text: &str) -> bool {
    let hex = text.strip_prefix('#').unwrap_or(text);
    (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

fn is_date(text: &str) -> bool {
    if DateTime::parse_from_rfc3339(text).is_ok() {
        return true;
    }
    if DATE_TIME_FORMATS
        .iter()
        .any(|fmt| NaiveDateTime::parse_from_str(text, fmt).is_ok())
    {
        return true;
    }
    DATE_FORMATS
        .iter()
        .any(|fmt| NaiveDate::parse_from_str(text, fmt).is_ok())
}

/// 12 to 19 digits after stripping spaces and dashes, passing the Luhn
/// checksum.
fn is_credit_card(text: &str) -> bool {
    let digits: String = text.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    if digits.len() < 12 || digits.len() > 19 {
        return false;
    }
    luhn_checksum(&digits)
}

fn luhn_checksum(digits: &str) -> bool {
    let mut sum = 0u32;
    for (i, ch) in digits.chars().rev().enumerate() {
        let Some(d) = ch.to_digit(10) else {
            return false;
        };
        let d = if i % 2 == 1 {
            let doubled = d * 2;
            if doubled > 9 { doubled - 9 } else { doubled }
        } else {
            d
        };
        sum += d;
    }
    sum % 10 == 0
}

/// ISBN-10 or ISBN-13 after stripping separators, checksum verified.
fn is_isbn(text: &str) -> bool {
    let compact: String = text.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    match compact.len() {
        10 => isbn10_checksum(&compact),
        13 => isbn13_checksum(&compact),
        _ => false,
    }
}

fn isbn10_checksum(compact: &str) -> bool {
    let mut sum = 0u32;
    let mut weight = 10u32;
    for (i, ch) in compact.chars().enumerate() {
        let digit = match ch.to_digit(10) {
            Some(d) => d,
            // 'X' stands for 10, but only in the check-digit position.
            None if i == 9 && ch.eq_ignore_ascii_case(&'X') => 10,
            None => return false,
        };
        sum += digit * weight;
        weight -= 1;
    }
    sum % 11 == 0
}

fn isbn13_checksum(compact: &str) -> bool {
    let mut sum = 0u32;
    for (i, ch) in compact.chars().enumerate() {
        let Some(digit) = ch.to_digit(10) else {
            return false;
        };
        sum += digit * if i % 2 == 0 { 1 } else { 3 };
    }
    sum % 10 == 0
}

/// Digits plus common separators, 7 to 20 characters, at least 7 digits.
fn is_mobile_phone(text: &str) -> bool {
    let len = text.chars().count();
    if !(7..=20).contains(&len) {
        return false;
    }
    let allowed = text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '(' | ')' | '+' | '.' | '-'));
    allowed && text.chars().filter(|c| c.is_ascii_digit()).count() >= 7
}

/// Parses as a JSON object or array. Bare scalars do not count.
fn is_json(text: &str) -> bool {
    matches!(
        serde_json::from_str::<Value>(text),
        Ok(Value::Object(_) | Value::Array(_))
    )
}
