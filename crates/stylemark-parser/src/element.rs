//! Resolved styled runs.

use serde::{Deserialize, Serialize};

use crate::error::ElementError;
use crate::key::StyleKey;
use crate::token::MarkdownKind;

/// One contiguous run of text with a single resolved scope.
///
/// Elements are produced by the [`ElementParser`](crate::ElementParser) and
/// are immutable once emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    #[serde(rename = "open_tag")]
    open: StyleKey,
    content: String,
    #[serde(rename = "close_tag")]
    close: StyleKey,
}

impl Element {
    pub fn new(open: StyleKey, content: impl Into<String>, close: StyleKey) -> Self {
        Self {
            open,
            content: content.into(),
            close,
        }
    }

    /// The key the element was opened with.
    pub fn open_key(&self) -> &StyleKey {
        &self.open
    }

    /// The key the element was closed with.
    pub fn close_key(&self) -> &StyleKey {
        &self.close
    }

    /// Composite string form of the open key, e.g. `"title:em"`.
    pub fn open_tag(&self) -> String {
        self.open.to_string()
    }

    /// Composite string form of the close key.
    pub fn close_tag(&self) -> String {
        self.close.to_string()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Checks that the element was opened and closed with the same key.
    ///
    /// Elements closed by markdown always pass. A close tag naming a different
    /// tag (`<a>x</b>`) does not.
    pub fn validate(&self) -> Result<(), ElementError> {
        if self.open == self.close {
            Ok(())
        } else {
            Err(ElementError::UnconsistentOpenCloseTag {
                open: self.open_tag(),
                close: self.close_tag(),
            })
        }
    }

    /// Re-emits the element as markup that parses back to the same key and
    /// content.
    ///
    /// Markdown is written as delimiters inside the base tag, so a `title:st`
    /// element becomes `<title>**Hi**</title>` and a standalone `em` element
    /// becomes `*Hi*`. The content is escaped.
    pub fn to_markup(&self) -> String {
        let delimiter = self.open.markdown_kind().map_or("", |kind| match kind {
            MarkdownKind::Emphasis => "*",
            MarkdownKind::Strong => "**",
        });

        let mut markup = String::new();
        if let Some(tag) = self.open.tag_name() {
            markup.push_str(&format!("<{}>", tag));
        }
        markup.push_str(delimiter);
        markup.push_str(&escape(&self.content));
        markup.push_str(delimiter);
        if let Some(tag) = self.close.tag_name() {
            markup.push_str(&format!("</{}>", tag));
        }
        markup
    }
}

/// Concatenates [`Element::to_markup`] for every element.
pub fn to_markup(elements: &[Element]) -> String {
    elements.iter().map(Element::to_markup).collect()
}

/// Backslash-escapes every character that has markup meaning.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '\\' | '<' | '>' | '*' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_matching() {
        let element = Element::new(StyleKey::tag("title"), "hi", StyleKey::tag("title"));
        assert!(element.validate().is_ok());
    }

    #[test]
    fn test_validate_mismatch() {
        let element = Element::new(StyleKey::tag("title"), "hi", StyleKey::tag("body"));
        assert_eq!(
            element.validate(),
            Err(ElementError::UnconsistentOpenCloseTag {
                open: "title".to_string(),
                close: "body".to_string()
            })
        );
    }

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(escape(r"a*b_c<d>e\f"), r"a\*b\_c\<d\>e\\f");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_to_markup_nested_key() {
        let key = StyleKey::nested("title", MarkdownKind::Emphasis);
        let element = Element::new(key.clone(), "2 * 3", key);
        assert_eq!(element.to_markup(), r"<title>*2 \* 3*</title>");

        let key = StyleKey::nested("title", MarkdownKind::Strong);
        let element = Element::new(key.clone(), "Hi", key);
        assert_eq!(element.to_markup(), "<title>**Hi**</title>");
    }

    #[test]
    fn test_to_markup_standalone_markdown() {
        let key = StyleKey::markdown(MarkdownKind::Strong);
        let element = Element::new(key.clone(), "x", key);
        assert_eq!(element.to_markup(), "**x**");

        let key = StyleKey::markdown(MarkdownKind::Emphasis);
        let element = Element::new(key.clone(), "x", key);
        assert_eq!(element.to_markup(), "*x*");
    }

    #[test]
    fn test_to_markup_keeps_mismatched_close() {
        let element = Element::new(StyleKey::tag("a"), "x", StyleKey::tag("b"));
        assert_eq!(element.to_markup(), "<a>x</b>");

        let stray = Element::new(StyleKey::empty(), "x", StyleKey::tag("b"));
        assert_eq!(stray.to_markup(), "x</b>");
    }

    #[test]
    fn test_to_markup_reparses_to_same_elements() {
        let elements = vec![
            Element::new(
                StyleKey::nested("title", MarkdownKind::Emphasis),
                "a",
                StyleKey::nested("title", MarkdownKind::Emphasis),
            ),
            Element::new(
                StyleKey::markdown(MarkdownKind::Emphasis),
                "b",
                StyleKey::markdown(MarkdownKind::Emphasis),
            ),
            Element::new(
                StyleKey::markdown(MarkdownKind::Strong),
                "c_d",
                StyleKey::markdown(MarkdownKind::Strong),
            ),
            Element::new(StyleKey::tag("body"), "e", StyleKey::tag("body")),
        ];
        let markup = to_markup(&elements);
        assert_eq!(crate::parse(&markup).unwrap(), elements);
    }

    #[test]
    fn test_serialize_uses_tag_strings() {
        let key = StyleKey::nested("body", MarkdownKind::Strong);
        let element = Element::new(key.clone(), "x", key);
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"open_tag": "body:st", "content": "x", "close_tag": "body:st"})
        );
    }
}
