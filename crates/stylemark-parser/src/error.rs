//! Error types for tokenizing, parsing and validating elements.

use thiserror::Error;

/// Fatal error raised while tokenizing or parsing markup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid tag '{name}': {fault}")]
    InvalidTag { name: String, fault: TagFault },
}

/// Why a tag is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TagFault {
    /// The `<` at this byte offset is never followed by `>`.
    #[error("'<' at byte {offset} is never closed with '>'")]
    Unterminated { offset: usize },
    /// The tag scope is still open at end of input.
    #[error("no close tag before end of input")]
    NeverClosed,
}

/// Error raised by consumers validating an [`Element`](crate::Element).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElementError {
    /// The element was opened and closed with different tag names.
    #[error("element opened with '{open}' but closed with '{close}'")]
    UnconsistentOpenCloseTag { open: String, close: String },
}

/// Error raised when a composite key string cannot be read back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("unknown markdown suffix '{suffix}' in style key '{key}' (expected 'em' or 'st')")]
    UnknownMarkdown { key: String, suffix: String },
}
