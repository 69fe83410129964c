//! Style keys identifying the scope of an element.
//!
//! A key pairs an optional tag name with an optional markdown kind. Its string
//! form is the composite key understood by theme lookups:
//!
//! | tag       | markdown   | string     |
//! |-----------|------------|------------|
//! | `title`   | none       | `title`    |
//! | `title`   | emphasis   | `title:em` |
//! | none      | strong     | `st`       |
//! | none      | none       | (empty)    |

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KeyError;
use crate::token::MarkdownKind;

/// Separator between the tag name and the markdown suffix.
pub const KEY_SEPARATOR: char = ':';

/// Typed form of a composite style key such as `"title:em"`.
///
/// Keys serialize as their string form. A tag literally named `em` or `st`
/// has the same string form as standalone markdown and reads back as
/// markdown; both have the same [`base_name`](StyleKey::base_name), so theme
/// lookups are unaffected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct StyleKey {
    tag: Option<String>,
    markdown: Option<MarkdownKind>,
}

impl StyleKey {
    /// The empty key, used by scopes that were never opened.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Key for a plain tag scope. An empty name (`<>`) names no tag.
    pub fn tag(name: impl Into<String>) -> Self {
        Self {
            tag: non_empty(name.into()),
            markdown: None,
        }
    }

    /// Key for markdown that occurs outside any tag.
    pub fn markdown(kind: MarkdownKind) -> Self {
        Self {
            tag: None,
            markdown: Some(kind),
        }
    }

    /// Key for markdown nested inside the tag `name`.
    pub fn nested(name: impl Into<String>, kind: MarkdownKind) -> Self {
        Self {
            tag: non_empty(name.into()),
            markdown: Some(kind),
        }
    }

    /// Returns this key's tag with `kind` as its markdown.
    pub fn with_markdown(&self, kind: MarkdownKind) -> Self {
        Self {
            tag: self.tag.clone(),
            markdown: Some(kind),
        }
    }

    pub fn tag_name(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn markdown_kind(&self) -> Option<MarkdownKind> {
        self.markdown
    }

    /// True when the key names a tag scope.
    pub fn has_tag(&self) -> bool {
        self.tag.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.tag.is_none() && self.markdown.is_none()
    }

    /// The name a theme selects its base style by.
    ///
    /// This is the tag name, or `"em"`/`"st"` for standalone markdown.
    pub fn base_name(&self) -> &str {
        match (&self.tag, self.markdown) {
            (Some(tag), _) => tag,
            (None, Some(kind)) => kind.key(),
            (None, None) => "",
        }
    }
}

fn non_empty(name: String) -> Option<String> {
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

impl std::fmt::Display for StyleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.tag, self.markdown) {
            (Some(tag), Some(kind)) => write!(f, "{}{}{}", tag, KEY_SEPARATOR, kind),
            (Some(tag), None) => f.write_str(tag),
            (None, Some(kind)) => f.write_str(kind.key()),
            (None, None) => Ok(()),
        }
    }
}

impl FromStr for StyleKey {
    type Err = KeyError;

    /// Reads a composite key.
    ///
    /// A bare `"em"` or `"st"` reads as standalone markdown, so a tag
    /// literally named `em` comes back as emphasis. Both select the same base
    /// style.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::empty());
        }
        match s.split_once(KEY_SEPARATOR) {
            Some((tag, suffix)) => {
                let kind =
                    MarkdownKind::from_key(suffix).ok_or_else(|| KeyError::UnknownMarkdown {
                        key: s.to_string(),
                        suffix: suffix.to_string(),
                    })?;
                Ok(Self::nested(tag, kind))
            }
            None => Ok(match MarkdownKind::from_key(s) {
                Some(kind) => Self::markdown(kind),
                None => Self::tag(s),
            }),
        }
    }
}

impl From<StyleKey> for String {
    fn from(key: StyleKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for StyleKey {
    type Error = KeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_forms() {
        assert_eq!(StyleKey::tag("title").to_string(), "title");
        assert_eq!(
            StyleKey::nested("title", MarkdownKind::Emphasis).to_string(),
            "title:em"
        );
        assert_eq!(StyleKey::markdown(MarkdownKind::Strong).to_string(), "st");
        assert_eq!(StyleKey::empty().to_string(), "");
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!("title".parse::<StyleKey>().unwrap(), StyleKey::tag("title"));
        assert_eq!(
            "body:st".parse::<StyleKey>().unwrap(),
            StyleKey::nested("body", MarkdownKind::Strong)
        );
        assert_eq!(
            "em".parse::<StyleKey>().unwrap(),
            StyleKey::markdown(MarkdownKind::Emphasis)
        );
        assert!("".parse::<StyleKey>().unwrap().is_empty());
    }

    #[test]
    fn test_parse_unknown_suffix() {
        let err = "title:xx".parse::<StyleKey>().unwrap_err();
        assert_eq!(
            err,
            KeyError::UnknownMarkdown {
                key: "title:xx".to_string(),
                suffix: "xx".to_string()
            }
        );
    }

    #[test]
    fn test_empty_tag_name_is_no_tag() {
        assert!(StyleKey::tag("").is_empty());
        assert!(!StyleKey::tag("").has_tag());
        assert_eq!(
            StyleKey::nested("", MarkdownKind::Emphasis),
            StyleKey::markdown(MarkdownKind::Emphasis)
        );
        assert_eq!(
            ":em".parse::<StyleKey>().unwrap(),
            StyleKey::markdown(MarkdownKind::Emphasis)
        );
    }

    #[test]
    fn test_base_name() {
        assert_eq!(StyleKey::nested("title", MarkdownKind::Strong).base_name(), "title");
        assert_eq!(StyleKey::markdown(MarkdownKind::Emphasis).base_name(), "em");
        assert_eq!(StyleKey::empty().base_name(), "");
    }

    #[test]
    fn test_with_markdown_keeps_tag() {
        let key = StyleKey::tag("body").with_markdown(MarkdownKind::Emphasis);
        assert_eq!(key.tag_name(), Some("body"));
        assert_eq!(key.markdown_kind(), Some(MarkdownKind::Emphasis));
    }

    #[test]
    fn test_tag_named_like_markdown_reads_back_as_markdown() {
        let key = StyleKey::tag("em");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, r#""em""#);

        let back: StyleKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, StyleKey::markdown(MarkdownKind::Emphasis));
        assert_eq!(back.base_name(), key.base_name());
        assert_eq!(back.to_string(), key.to_string());
    }

    #[test]
    fn test_serde_uses_string_form() {
        let key = StyleKey::nested("title", MarkdownKind::Emphasis);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, r#""title:em""#);
        let back: StyleKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
