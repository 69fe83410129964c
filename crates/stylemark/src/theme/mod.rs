//! Themes: named style collections that style keys resolve against.

#[allow(clippy::module_inception)]
mod theme;

pub use theme::Theme;
