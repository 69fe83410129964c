//! Rendering parsed markup through a [`Theme`](crate::Theme).
//!
//! - [`Renderer`]: parses markup and produces terminal output
//! - [`TagTransform`]: whether styles are applied, stripped, or kept as markup
//! - [`StyledRun`]: one element paired with its resolved style
//! - [`RenderError`]: everything that can stop a render

mod error;
mod renderer;
mod transform;

pub use error::RenderError;
pub use renderer::{Renderer, StyledRun};
pub use transform::TagTransform;
