//! Validation outcome type.

use serde::ser::{Serialize, Serializer};

/// Outcome of a successful `validate` call.
///
/// Serializes to the legacy JSON contract: [`Pass`](Self::Pass) is the
/// sentinel `false`, [`Fail`](Self::Fail) is the ordered array of
/// failure message strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Every rule passed on every record.
    Pass,
    /// At least one rule failed. Messages are ordered by record, then
    /// by rule declaration order within each record.
    Fail(Vec<String>),
}

impl Verdict {
    /// Collapse an accumulated message list into a verdict: empty
    /// means a full pass.
    pub(crate) fn from_messages(messages: Vec<String>) -> Self {
        if messages.is_empty() {
            Self::Pass
        } else {
            Self::Fail(messages)
        }
    }

    /// Whether every rule passed.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// The collected failure messages; empty for a pass.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        match self {
            Self::Pass => &[],
            Self::Fail(messages) => messages,
        }
    }
}

impl Serialize for Verdict {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Pass => serializer.serialize_bool(false),
            Self::Fail(messages) => messages.serialize(serializer),
        }
    }
}
