//! Tokens produced by the [`Tokenizer`](crate::Tokenizer).

use serde::{Deserialize, Serialize};

/// The kind of an inline markdown scope.
///
/// Single delimiters (`*text*`, `_text_`) open an emphasis scope, doubled
/// delimiters (`**text**`, `__text__`) open a strong scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkdownKind {
    Emphasis,
    Strong,
}

impl MarkdownKind {
    /// The short suffix used in composite style keys (`"em"` or `"st"`).
    pub fn key(self) -> &'static str {
        match self {
            MarkdownKind::Emphasis => "em",
            MarkdownKind::Strong => "st",
        }
    }

    /// Parses a composite key suffix back into a kind.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "em" => Some(MarkdownKind::Emphasis),
            "st" => Some(MarkdownKind::Strong),
            _ => None,
        }
    }
}

impl std::fmt::Display for MarkdownKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A single lexical unit of style markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Token {
    /// Literal content, with escapes already resolved.
    Text(String),
    /// `<name>`
    TagOpen(String),
    /// `</name>`
    TagClose(String),
    MarkdownOpen(MarkdownKind),
    MarkdownClose(MarkdownKind),
}
