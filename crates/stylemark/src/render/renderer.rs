//! Theme-aware markup renderer.

use console::Style;
use stylemark_parser::{parse, parse_with_diagnostics, to_markup, Diagnostics, Element, StyleKey};

use super::error::RenderError;
use super::transform::TagTransform;
use crate::theme::Theme;

/// One element with the style its key resolved to.
#[derive(Debug, Clone)]
pub struct StyledRun {
    pub key: StyleKey,
    pub content: String,
    pub style: Style,
}

impl StyledRun {
    /// The content wrapped in the style's escape codes.
    ///
    /// Styling is forced on; choosing whether to style at all is the job of
    /// [`TagTransform`].
    pub fn render(&self) -> String {
        self.style
            .clone()
            .force_styling(true)
            .apply_to(&self.content)
            .to_string()
    }
}

/// Renders markup such as `<title>*Hello*</title>` for the terminal.
///
/// # Example
///
/// ```rust
/// use stylemark::{Renderer, TagTransform, Theme};
/// use console::Style;
///
/// let theme = Theme::new().add("title", Style::new().bold());
/// let renderer = Renderer::new(theme).unwrap();
///
/// let styled = renderer.render("<title>Report</title>").unwrap();
/// assert_eq!(styled, "\x1b[1mReport\x1b[0m");
///
/// let plain = renderer.with_transform(TagTransform::Remove);
/// assert_eq!(plain.render("<title>Report</title>").unwrap(), "Report");
/// ```
#[derive(Debug, Clone)]
pub struct Renderer {
    theme: Option<Theme>,
    transform: TagTransform,
}

impl Renderer {
    /// Creates a renderer that applies `theme`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Style`] if any style aliases are invalid
    /// (dangling or cyclic).
    pub fn new(theme: Theme) -> Result<Self, RenderError> {
        theme.validate()?;
        Ok(Self {
            theme: Some(theme),
            transform: TagTransform::Apply,
        })
    }

    /// Creates a renderer with no theme that strips markup.
    pub fn plain() -> Self {
        Self {
            theme: None,
            transform: TagTransform::Remove,
        }
    }

    pub fn with_transform(mut self, transform: TagTransform) -> Self {
        self.transform = transform;
        self
    }

    pub fn transform(&self) -> TagTransform {
        self.transform
    }

    pub fn theme(&self) -> Option<&Theme> {
        self.theme.as_ref()
    }

    /// Parses `text` and pairs every element with its style.
    ///
    /// # Errors
    ///
    /// Fails on invalid markup, on a renderer without a theme, on a key the
    /// theme has no style for, and on an element closed with a different tag
    /// than it was opened with. The style lookup happens first.
    pub fn resolve(&self, text: &str) -> Result<Vec<StyledRun>, RenderError> {
        self.resolve_elements(parse(text)?)
    }

    /// Pairs already parsed elements with their styles.
    pub fn resolve_elements(&self, elements: Vec<Element>) -> Result<Vec<StyledRun>, RenderError> {
        let theme = self.theme.as_ref().ok_or(RenderError::MissingTheme)?;
        elements
            .into_iter()
            .map(|element| -> Result<StyledRun, RenderError> {
                let style = theme.resolve_key(element.open_key()).ok_or_else(|| {
                    RenderError::MissingStyle {
                        name: element.open_tag(),
                    }
                })?;
                element.validate()?;
                Ok(StyledRun {
                    key: element.open_key().clone(),
                    content: element.content().to_string(),
                    style,
                })
            })
            .collect()
    }

    /// Renders `text` according to the renderer's [`TagTransform`].
    pub fn render(&self, text: &str) -> Result<String, RenderError> {
        self.render_with_diagnostics(text).map(|(output, _)| output)
    }

    /// Like [`render`](Renderer::render), also returning what the parser had
    /// to discard or reinterpret.
    ///
    /// A renderer that applies styles without a theme fails with
    /// [`RenderError::MissingTheme`] before the markup is parsed.
    pub fn render_with_diagnostics(
        &self,
        text: &str,
    ) -> Result<(String, Diagnostics), RenderError> {
        if self.transform.needs_theme() && self.theme.is_none() {
            return Err(RenderError::MissingTheme);
        }
        let (elements, diagnostics) = parse_with_diagnostics(text)?;
        let output: String = match self.transform {
            TagTransform::Apply => self
                .resolve_elements(elements)?
                .iter()
                .map(StyledRun::render)
                .collect(),
            TagTransform::Remove => {
                let mut output = String::new();
                for element in &elements {
                    element.validate()?;
                    output.push_str(element.content());
                }
                output
            }
            TagTransform::Keep => to_markup(&elements),
        };
        Ok((output, diagnostics))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use stylemark_parser::escape;

    proptest! {
        #[test]
        fn removed_markup_leaves_the_text(
            name in "[a-z]{1,8}",
            content in "\\PC{1,30}",
        ) {
            let markup = format!("<{name}>{}</{name}>", escape(&content));
            let output = Renderer::plain().render(&markup).unwrap();
            prop_assert_eq!(output, content);
        }

        #[test]
        fn applied_styles_wrap_the_text(content in "[a-zA-Z0-9 ]{1,30}") {
            let theme = Theme::new().add("t", Style::new().green());
            let renderer = Renderer::new(theme).unwrap();
            let output = renderer.render(&format!("<t>{}</t>", content)).unwrap();
            prop_assert_eq!(output, format!("\x1b[32m{}\x1b[0m", content));
        }
    }
}
