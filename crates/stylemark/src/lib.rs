//! Terminal styling for tag and emphasis style markup.
//!
//! Markup is parsed by [`stylemark_parser`] into elements keyed by tag and
//! markdown kind (`title`, `title:em`, `st`). A [`Theme`] maps tag names to
//! [`console::Style`]s; a [`Renderer`] puts the two together.
//!
//! ```rust
//! use stylemark::{Renderer, Theme};
//! use console::Style;
//!
//! let theme = Theme::new()
//!     .add("accent", Style::new().cyan())
//!     .add("title", "accent");
//!
//! let renderer = Renderer::new(theme).unwrap();
//! let output = renderer.render("<title>*Hello*</title>").unwrap();
//! assert!(output.contains("Hello"));
//! ```
//!
//! Inside a tag, emphasis renders the tag's style in italic and strong renders
//! it in bold. Markdown outside any tag uses the styles named `em` and `st`.

pub mod render;
pub mod style;
pub mod theme;

pub use render::{RenderError, Renderer, StyledRun, TagTransform};
pub use style::{StyleValidationError, StyleValue, Styles};
pub use theme::Theme;

pub use stylemark_parser::{
    parse, parse_with_diagnostics, Diagnostic, Diagnostics, Element, MarkdownKind, ParseError,
    StyleKey,
};
