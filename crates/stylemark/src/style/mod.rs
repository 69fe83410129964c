//! Named styles and aliases.
//!
//! - [`StyleValue`]: a concrete `console::Style` or an alias to another name
//! - [`Styles`]: a registry of named style values
//! - [`StyleValidationError`]: dangling or cyclic aliases
//!
//! Aliases let a semantic name (`title`) point at a presentation name
//! (`heading`) that finally carries the concrete formatting.

mod error;
mod registry;
mod value;

pub use error::StyleValidationError;
pub use registry::Styles;
pub use value::StyleValue;
