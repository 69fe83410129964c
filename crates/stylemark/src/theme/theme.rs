//! Theme struct for building style collections.

use console::Style;
use stylemark_parser::{MarkdownKind, StyleKey};

use crate::style::{StyleValidationError, StyleValue, Styles};

/// A named collection of styles that parsed markup is rendered with.
///
/// Tags look up the style of the same name. Markdown inside a tag keeps the
/// tag's style and adds italic (emphasis) or bold (strong). Markdown outside
/// any tag looks up the styles named `em` and `st`.
///
/// # Example
///
/// ```rust
/// use stylemark::Theme;
/// use console::Style;
///
/// let theme = Theme::new()
///     .add("accent", Style::new().cyan())
///     .add("title", "accent")
///     .add("em", Style::new().italic());
///
/// assert!(theme.resolve("title:st").is_some());
/// assert!(theme.resolve("body").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: Styles,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a theme from an existing [`Styles`] collection.
    pub fn from_styles(styles: Styles) -> Self {
        Self { styles }
    }

    /// Adds a named style, returning an updated theme for chaining.
    ///
    /// The value can be either a concrete `Style` or a `&str`/`String` alias
    /// to another style name.
    pub fn add<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.styles = self.styles.add(name, value);
        self
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    /// Validates that all style aliases in this theme resolve.
    ///
    /// [`Renderer::new`](crate::Renderer::new) calls this, so a renderer
    /// never holds a theme with broken aliases.
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        self.styles.validate()
    }

    /// Looks up the style for a parsed key.
    ///
    /// The markdown kind adds italic (emphasis) or bold (strong) to the base
    /// style. Attributes the base style already has are kept, so a bold base
    /// looked up as `:em` renders bold and italic.
    ///
    /// Returns `None` when no style is registered under the key's base name.
    pub fn resolve_key(&self, key: &StyleKey) -> Option<Style> {
        let style = self.styles.resolve(key.base_name())?;
        Some(match key.markdown_kind() {
            Some(MarkdownKind::Emphasis) => style.italic(),
            Some(MarkdownKind::Strong) => style.bold(),
            None => style,
        })
    }

    /// Looks up the style for a composite key string such as `"title:em"`.
    ///
    /// Returns `None` for unknown base names and for keys whose suffix is
    /// neither `em` nor `st`.
    pub fn resolve(&self, key: &str) -> Option<Style> {
        let key: StyleKey = key.parse().ok()?;
        self.resolve_key(&key)
    }
}
