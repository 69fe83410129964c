use stylemark_parser::{ElementError, ParseError};
use thiserror::Error;

use crate::style::StyleValidationError;

/// Error returned by [`Renderer`](crate::Renderer).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// An element's key has no style in the theme.
    #[error("no style registered for '{name}'")]
    MissingStyle { name: String },
    /// Styles were requested from a renderer built without a theme.
    #[error("applying styles requires a theme")]
    MissingTheme,
    #[error(transparent)]
    Element(#[from] ElementError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("invalid theme: {0}")]
    Style(#[from] StyleValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylemark_parser::TagFault;

    #[test]
    fn test_missing_style_display() {
        let err = RenderError::MissingStyle {
            name: "title:em".to_string(),
        };
        assert_eq!(err.to_string(), "no style registered for 'title:em'");
    }

    #[test]
    fn test_parse_error_is_transparent() {
        let parse = ParseError::InvalidTag {
            name: "title".to_string(),
            fault: TagFault::NeverClosed,
        };
        let err = RenderError::from(parse.clone());
        assert_eq!(err.to_string(), parse.to_string());
    }

    #[test]
    fn test_style_error_wraps() {
        let err = RenderError::from(StyleValidationError::UnresolvedAlias {
            from: "a".to_string(),
            to: "b".to_string(),
        });
        assert!(err.to_string().starts_with("invalid theme:"));
    }
}
