//! Assembles a token stream into [`Element`]s.
//!
//! The parser keeps a stack of pending scopes that is at most two deep: the
//! base scope (a tag, or markdown outside any tag) and a markdown scope nested
//! inside the base tag. Markdown inside a tag is keyed `tag:em` or `tag:st`.
//!
//! ```text
//! <title>*Hello*</title>
//!   TagOpen(title)      base.open   = title
//!   MarkdownOpen(em)    push nested = title:em
//!   Text(Hello)         nested.content
//!   MarkdownClose(em)   emit title:em "Hello", pop
//!   TagClose(title)     emit title "" (dropped, empty)
//! ```
//!
//! A tag whose body is made only of markdown runs leaves an empty base
//! element behind; empty elements are dropped from the result.

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::element::Element;
use crate::error::{ParseError, TagFault};
use crate::key::StyleKey;
use crate::token::{MarkdownKind, Token};

/// Grammar bound: one tag scope and one markdown scope inside it.
const MAX_DEPTH: usize = 2;

#[derive(Debug, Default)]
struct PendingElement {
    open: StyleKey,
    content: String,
    close: StyleKey,
}

impl PendingElement {
    fn opened(open: StyleKey) -> Self {
        Self {
            open,
            ..Self::default()
        }
    }

    fn into_element(self) -> Element {
        Element::new(self.open, self.content, self.close)
    }
}

/// Pending scopes, base first. The base slot always exists.
#[derive(Debug)]
struct ScopeStack {
    scopes: Vec<PendingElement>,
}

impl ScopeStack {
    fn new() -> Self {
        Self {
            scopes: vec![PendingElement::default()],
        }
    }

    fn base(&self) -> &PendingElement {
        &self.scopes[0]
    }

    fn base_mut(&mut self) -> &mut PendingElement {
        &mut self.scopes[0]
    }

    fn top_mut(&mut self) -> &mut PendingElement {
        let top = self.scopes.len() - 1;
        &mut self.scopes[top]
    }

    fn has_nested(&self) -> bool {
        self.scopes.len() > 1
    }

    fn take_base(&mut self) -> PendingElement {
        std::mem::take(self.base_mut())
    }

    /// Opens a nested scope, or re-keys the existing one at full depth.
    fn push_nested(&mut self, key: StyleKey) {
        if self.scopes.len() < MAX_DEPTH {
            self.scopes.push(PendingElement::opened(key));
        } else {
            self.top_mut().open = key;
        }
    }

    fn pop_nested(&mut self) -> Option<PendingElement> {
        if self.has_nested() {
            self.scopes.pop()
        } else {
            None
        }
    }
}

/// Builds elements from tokens.
///
/// A parser is single use: [`parse`](ElementParser::parse) consumes it along
/// with the token stream.
///
/// ```
/// use stylemark_parser::{ElementParser, Tokenizer};
///
/// let elements = ElementParser::new()
///     .parse(Tokenizer::new("<title>**Hi**</title>"))
///     .unwrap();
/// assert_eq!(elements.len(), 1);
/// assert_eq!(elements[0].open_tag(), "title:st");
/// assert_eq!(elements[0].content(), "Hi");
/// ```
#[derive(Debug)]
pub struct ElementParser {
    stack: ScopeStack,
    elements: Vec<Element>,
    diagnostics: Diagnostics,
}

impl ElementParser {
    pub fn new() -> Self {
        Self {
            stack: ScopeStack::new(),
            elements: Vec::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Consumes `tokens` and returns the resolved elements in document order.
    ///
    /// # Errors
    ///
    /// The first error yielded by `tokens` aborts the parse. A tag scope still
    /// open when the tokens run out fails with [`ParseError::InvalidTag`].
    pub fn parse<I>(self, tokens: I) -> Result<Vec<Element>, ParseError>
    where
        I: IntoIterator<Item = Result<Token, ParseError>>,
    {
        self.parse_with_diagnostics(tokens)
            .map(|(elements, _)| elements)
    }

    /// Like [`parse`](ElementParser::parse), also returning what the parser
    /// had to discard or reinterpret along the way.
    pub fn parse_with_diagnostics<I>(
        mut self,
        tokens: I,
    ) -> Result<(Vec<Element>, Diagnostics), ParseError>
    where
        I: IntoIterator<Item = Result<Token, ParseError>>,
    {
        for token in tokens {
            self.feed(token?);
        }
        self.finish()
    }

    fn feed(&mut self, token: Token) {
        match token {
            Token::TagOpen(name) => self.open_tag(name),
            Token::TagClose(name) => self.close_tag(name),
            Token::Text(text) => self.text(text),
            Token::MarkdownOpen(kind) => self.open_markdown(kind),
            Token::MarkdownClose(_) => self.close_markdown(),
        }
    }

    fn open_tag(&mut self, name: String) {
        let base = self.stack.base_mut();
        if base.open.has_tag() {
            self.diagnostics.push(Diagnostic::UnclosedTag {
                name: base.open.to_string(),
            });
        }
        base.open = StyleKey::tag(name);
    }

    fn close_tag(&mut self, name: String) {
        let mut base = self.stack.take_base();
        if base.open.is_empty() {
            self.diagnostics
                .push(Diagnostic::StrayCloseTag { name: name.clone() });
        } else if base.open.tag_name() != Some(name.as_str()) || base.open.markdown_kind().is_some()
        {
            self.diagnostics.push(Diagnostic::MismatchedCloseTag {
                open: base.open.to_string(),
                close: name.clone(),
            });
        }
        base.close = StyleKey::tag(name);
        self.emit(base);
    }

    fn text(&mut self, text: String) {
        let previous = std::mem::replace(&mut self.stack.top_mut().content, text);
        if !previous.is_empty() {
            self.diagnostics
                .push(Diagnostic::DiscardedText { text: previous });
        }
    }

    fn open_markdown(&mut self, kind: MarkdownKind) {
        if self.stack.base().open.is_empty() {
            self.stack.base_mut().open = StyleKey::markdown(kind);
        } else {
            let key = self.stack.base().open.with_markdown(kind);
            self.stack.push_nested(key);
        }
    }

    fn close_markdown(&mut self) {
        let scope = if self.stack.base().open.is_empty() {
            None
        } else {
            self.stack.pop_nested()
        };
        let mut scope = match scope {
            Some(nested) => nested,
            None => self.stack.take_base(),
        };
        scope.close = scope.open.clone();
        self.emit(scope);
    }

    fn emit(&mut self, scope: PendingElement) {
        self.elements.push(scope.into_element());
    }

    fn finish(mut self) -> Result<(Vec<Element>, Diagnostics), ParseError> {
        let base = self.stack.base();
        if let (Some(name), None) = (base.open.tag_name(), base.open.markdown_kind()) {
            return Err(ParseError::InvalidTag {
                name: name.to_string(),
                fault: TagFault::NeverClosed,
            });
        }

        for scope in self.stack.scopes {
            if !scope.content.is_empty() {
                self.diagnostics
                    .push(Diagnostic::DiscardedText { text: scope.content });
            }
        }

        let elements = self
            .elements
            .into_iter()
            .filter(|element| !element.content().is_empty())
            .collect();
        Ok((elements, self.diagnostics))
    }
}

impl Default for ElementParser {
    fn default() -> Self {
        Self::new()
    }
}
