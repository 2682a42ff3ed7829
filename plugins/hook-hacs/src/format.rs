//! JSON indentation detection.
//!
//! Rewriting a manifest with a different indentation than the one it was
//! authored with produces a noisy diff, so the indentation of the first
//! quoted key line is detected and reused when the file is written back.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde::ser::Error as _;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Upper bound on the space indent, matching common JSON serializers.
const MAX_SPACE_INDENT: usize = 10;

static FIRST_KEY_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?m)^\{?([\t ]*)""#).expect("invalid regex"));

/// Indentation detected in a JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonIndent {
    /// Nothing detectable, serialize compactly.
    Default,
    /// Indent with this many spaces.
    Spaces(usize),
    /// Indent with a single tab, however many the source used.
    Tab,
}

impl JsonIndent {
    /// Serializes `value` using this indentation.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized.
    pub fn render(self, value: &Value) -> serde_json::Result<String> {
        let unit = match self {
            Self::Default => return serde_json::to_string(value),
            Self::Spaces(n) => " ".repeat(n.min(MAX_SPACE_INDENT)),
            Self::Tab => "\t".to_string(),
        };

        let mut buf = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(unit.as_bytes()));
        value.serialize(&mut serializer)?;

        String::from_utf8(buf).map_err(serde_json::Error::custom)
    }
}

/// Detects the indentation of the first quoted key line in `text`.
///
/// A line made only of an optional `{` and tabs/spaces before a `"` is
/// searched for. Space indentation is reported by width, tab indentation as
/// a single [`JsonIndent::Tab`] no matter how many tabs were matched.
#[must_use]
pub fn detect_json_indent(text: &str) -> JsonIndent {
    let Some(group) = FIRST_KEY_LINE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
    else {
        return JsonIndent::Default;
    };

    match group.chars().next() {
        None => JsonIndent::Default,
        Some(' ') => JsonIndent::Spaces(group.chars().count()),
        Some(_) => JsonIndent::Tab,
    }
}
