//! Shared output formatting for verdicts.
//!
//! Provides JSON and plain-text formatters for [`Verdict`]. The JSON
//! form preserves the legacy wire contract: `false` for a pass, an
//! array of message strings otherwise. Color/terminal formatting is
//! intentionally excluded from this module; that concern belongs to
//! embedders.

use std::io::Write;

use crate::verdict::Verdict;

/// Format a [`Verdict`] as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(verdict: &Verdict, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(verdict)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a [`Verdict`] as human-readable plain text to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(verdict: &Verdict, writer: &mut dyn Write) -> anyhow::Result<()> {
    match verdict {
        Verdict::Pass => {
            writeln!(writer, "\u{2713} all rules passed")?;
        }
        Verdict::Fail(messages) => {
            writeln!(writer, "\u{2717} {} validation error(s) found", messages.len())?;
            for message in messages {
                writeln!(writer, "  - {message}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_write_json_pass_is_false() {
        let mut buf = Vec::new();
        write_json(&Verdict::Pass, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "false\n");
    }

    #[test]
    fn test_write_json_fail_is_array() {
        let mut buf = Vec::new();
        let verdict = Verdict::Fail(vec!["\"x\" is not a valid email address.".to_owned()]);
        write_json(&verdict, &mut buf).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed.as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_write_human_lists_messages() {
        let mut buf = Vec::new();
        let verdict = Verdict::Fail(vec!["first".to_owned(), "second".to_owned()]);
        write_human(&verdict, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("2 validation error(s)"), "got: {text}");
        assert!(text.contains("  - first"), "got: {text}");
        assert!(text.contains("  - second"), "got: {text}");
    }

    #[test]
    fn test_write_human_pass() {
        let mut buf = Vec::new();
        write_human(&Verdict::Pass, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("all rules passed"), "got: {text}");
    }
}
