//! Tokenizer and parser for tag and emphasis style markup.
//!
//! Markup is made of named tag scopes, optionally holding inline markdown:
//!
//! ```text
//! <title>Hello *world*</title><body>__Bold__ \*not emphasis\*</body>
//! ```
//!
//! | Markup            | Meaning                                    |
//! |-------------------|--------------------------------------------|
//! | `<name>…</name>`  | tag scope                                  |
//! | `*x*` or `_x_`    | emphasis                                   |
//! | `**x**` or `__x__`| strong                                     |
//! | `\c`              | the character `c`, with no markup meaning  |
//!
//! Parsing produces a flat list of [`Element`]s, each one run of text with a
//! single [`StyleKey`]. Markdown inside a tag is keyed `tag:em` or `tag:st`;
//! markdown outside any tag is keyed `em` or `st`.
//!
//! ```
//! use stylemark_parser::parse;
//!
//! let elements = parse("<title>*Hello world !*</title>").unwrap();
//! assert_eq!(elements.len(), 1);
//! assert_eq!(elements[0].open_tag(), "title:em");
//! assert_eq!(elements[0].content(), "Hello world !");
//! ```
//!
//! Only an invalid tag is an error: a `<` with no `>`, or a tag scope still
//! open at end of input. Every other malformed input resolves to a
//! deterministic result; use [`parse_with_diagnostics`] to find out what was
//! dropped or reinterpreted.

mod cursor;
mod diagnostics;
mod element;
mod error;
mod key;
mod parser;
mod token;
mod tokenizer;

pub use diagnostics::{Diagnostic, Diagnostics};
pub use element::{escape, to_markup, Element};
pub use error::{ElementError, KeyError, ParseError, TagFault};
pub use key::{StyleKey, KEY_SEPARATOR};
pub use parser::ElementParser;
pub use token::{MarkdownKind, Token};
pub use tokenizer::{tokenize, Tokenizer};

/// Parses markup into elements.
///
/// # Errors
///
/// Returns [`ParseError::InvalidTag`] when a `<` is never followed by `>` or
/// a tag is never closed. No partial result is returned.
pub fn parse(text: &str) -> Result<Vec<Element>, ParseError> {
    ElementParser::new().parse(Tokenizer::new(text))
}

/// Parses markup, also returning the diagnostics from both the tokenizer and
/// the parser.
///
/// ```
/// let (elements, diagnostics) =
///     stylemark_parser::parse_with_diagnostics("<b>x</b>*unfinished").unwrap();
/// assert_eq!(elements.len(), 2);
/// assert_eq!(elements[1].open_tag(), "em");
/// assert_eq!(diagnostics.len(), 1);
/// ```
pub fn parse_with_diagnostics(text: &str) -> Result<(Vec<Element>, Diagnostics), ParseError> {
    let mut tokenizer = Tokenizer::new(text);
    let (elements, parser_diagnostics) =
        ElementParser::new().parse_with_diagnostics(tokenizer.by_ref())?;

    let mut diagnostics = tokenizer.take_diagnostics();
    diagnostics.extend(parser_diagnostics);
    Ok((elements, diagnostics))
}
