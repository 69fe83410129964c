//! Character-level tokenizer for style markup.
//!
//! The tokenizer turns markup such as `<title>*Hello* world</title>` into a
//! lazy stream of [`Token`]s. It owns all escaping and delimiter resolution:
//!
//! - `\x` yields `x` literally, whatever `x` is.
//! - `*` and `_` open or close an inline scope. A doubled delimiter (`**`,
//!   `__`) is strong, a single one is emphasis.
//! - `<name>` and `</name>` delimit a named tag scope.
//!
//! Inline scopes do not nest. Whatever scope is open is closed by the next
//! delimiter, regardless of which character or count that delimiter uses.
//! When emphasis is open and a doubled delimiter arrives, only the first
//! character closes the scope and the second is read again, so `*a**b*` is
//! two emphasis runs. A run of identical delimiters is otherwise consumed in
//! pairs: `____` opens and immediately closes a strong scope.

use crate::cursor::Cursor;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::{ParseError, TagFault};
use crate::token::{MarkdownKind, Token};

/// Which inline scope, if any, is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum MarkdownState {
    #[default]
    Closed,
    OpenEmphasis,
    OpenStrong,
}

impl MarkdownState {
    fn open_kind(self) -> Option<MarkdownKind> {
        match self {
            MarkdownState::Closed => None,
            MarkdownState::OpenEmphasis => Some(MarkdownKind::Emphasis),
            MarkdownState::OpenStrong => Some(MarkdownKind::Strong),
        }
    }
}

impl From<MarkdownKind> for MarkdownState {
    fn from(kind: MarkdownKind) -> Self {
        match kind {
            MarkdownKind::Emphasis => MarkdownState::OpenEmphasis,
            MarkdownKind::Strong => MarkdownState::OpenStrong,
        }
    }
}

/// Lazy tokenizer over a markup string.
///
/// Call [`next_token`](Tokenizer::next_token) until it returns `Ok(None)`, or
/// use the [`Iterator`] impl. The stream is fused: after the end of input or
/// an error, no further tokens are produced.
///
/// ```
/// use stylemark_parser::{MarkdownKind, Token, Tokenizer};
///
/// let tokens: Result<Vec<_>, _> = Tokenizer::new("<b>**hi**</b>").collect();
/// assert_eq!(
///     tokens.unwrap(),
///     vec![
///         Token::TagOpen("b".into()),
///         Token::MarkdownOpen(MarkdownKind::Strong),
///         Token::Text("hi".into()),
///         Token::MarkdownClose(MarkdownKind::Strong),
///         Token::TagClose("b".into()),
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    buffer: String,
    markdown: MarkdownState,
    diagnostics: Diagnostics,
    done: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            buffer: String::new(),
            markdown: MarkdownState::Closed,
            diagnostics: Diagnostics::new(),
            done: false,
        }
    }

    /// Diagnostics recorded so far.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Takes the recorded diagnostics, leaving an empty collection behind.
    pub fn take_diagnostics(&mut self) -> Diagnostics {
        std::mem::take(&mut self.diagnostics)
    }

    /// Produces the next token, `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidTag`] when a `<` is never followed by `>`.
    pub fn next_token(&mut self) -> Result<Option<Token>, ParseError> {
        if self.done {
            return Ok(None);
        }

        while let Some(ch) = self.cursor.bump() {
            match ch {
                '\\' => {
                    let offset = self.cursor.offset() - 1;
                    match self.cursor.bump() {
                        Some(escaped) => self.buffer.push(escaped),
                        None => self.diagnostics.push(Diagnostic::TrailingEscape { offset }),
                    }
                }
                '*' | '_' => {
                    if let Some(text) = self.flush_before_delimiter() {
                        return Ok(Some(text));
                    }
                    return Ok(Some(self.markdown(ch)));
                }
                '<' => {
                    if let Some(text) = self.flush_before_delimiter() {
                        return Ok(Some(text));
                    }
                    return self.tag().map(Some);
                }
                _ => self.buffer.push(ch),
            }
        }

        if !self.buffer.is_empty() {
            return Ok(Some(Token::Text(std::mem::take(&mut self.buffer))));
        }

        if let Some(kind) = self.markdown.open_kind() {
            self.markdown = MarkdownState::Closed;
            self.diagnostics.push(Diagnostic::UnclosedMarkdown { kind });
            return Ok(Some(Token::MarkdownClose(kind)));
        }

        self.done = true;
        Ok(None)
    }

    /// Emits the buffered text, un-reading the delimiter just consumed so it
    /// is handled on the next call.
    fn flush_before_delimiter(&mut self) -> Option<Token> {
        if self.buffer.is_empty() {
            return None;
        }
        self.cursor.unbump();
        Some(Token::Text(std::mem::take(&mut self.buffer)))
    }

    fn markdown(&mut self, delimiter: char) -> Token {
        let doubled = match self.cursor.bump() {
            Some(next) if next == delimiter => true,
            Some(_) => {
                self.cursor.unbump();
                false
            }
            None => false,
        };

        match (self.markdown, doubled) {
            (MarkdownState::Closed, _) => {
                let kind = if doubled {
                    MarkdownKind::Strong
                } else {
                    MarkdownKind::Emphasis
                };
                self.markdown = kind.into();
                Token::MarkdownOpen(kind)
            }
            (MarkdownState::OpenEmphasis, doubled) => {
                if doubled {
                    self.cursor.unbump();
                }
                self.markdown = MarkdownState::Closed;
                Token::MarkdownClose(MarkdownKind::Emphasis)
            }
            (MarkdownState::OpenStrong, _) => {
                self.markdown = MarkdownState::Closed;
                Token::MarkdownClose(MarkdownKind::Strong)
            }
        }
    }

    fn tag(&mut self) -> Result<Token, ParseError> {
        let offset = self.cursor.offset() - 1;
        let mut name = String::new();

        loop {
            match self.cursor.bump() {
                Some('>') => break,
                Some(ch) => name.push(ch),
                None => {
                    self.done = true;
                    return Err(ParseError::InvalidTag {
                        name,
                        fault: TagFault::Unterminated { offset },
                    });
                }
            }
        }

        if name.contains(':') {
            self.diagnostics.push(Diagnostic::ReservedSeparator { name: name.clone() });
        }

        match name.strip_prefix('/') {
            Some(closed) => Ok(Token::TagClose(closed.to_string())),
            None => Ok(Token::TagOpen(name)),
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl std::iter::FusedIterator for Tokenizer<'_> {}

/// Creates a [`Tokenizer`] over `text`.
pub fn tokenize(text: &str) -> Tokenizer<'_> {
    Tokenizer::new(text)
}
