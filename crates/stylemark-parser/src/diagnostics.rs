//! Recoverable problems found while resolving markup.
//!
//! Malformed markup never aborts a parse except for an invalid tag.
//! Everything else degrades into a deterministic result, and the places where
//! input was dropped or reinterpreted are recorded here so callers can surface
//! them (see [`parse_with_diagnostics`](crate::parse_with_diagnostics)).

use crate::token::MarkdownKind;

/// A single recoverable problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A markdown scope was still open at end of input and was closed there.
    UnclosedMarkdown { kind: MarkdownKind },
    /// The input ended with a lone backslash, which was dropped.
    TrailingEscape { offset: usize },
    /// A tag name contains the `:` reserved for composite keys.
    ReservedSeparator { name: String },
    /// Text was replaced by a later run in the same scope.
    DiscardedText { text: String },
    /// A close tag named a different tag than the one open.
    MismatchedCloseTag { open: String, close: String },
    /// A close tag arrived with no tag open.
    StrayCloseTag { name: String },
    /// An open tag was replaced by another open tag before being closed.
    UnclosedTag { name: String },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::UnclosedMarkdown { kind } => {
                write!(f, "unclosed '{}' markdown closed at end of input", kind)
            }
            Diagnostic::TrailingEscape { offset } => {
                write!(f, "dangling escape at byte {} was dropped", offset)
            }
            Diagnostic::ReservedSeparator { name } => {
                write!(f, "tag '{}' contains the reserved ':' separator", name)
            }
            Diagnostic::DiscardedText { text } => {
                write!(f, "text '{}' was discarded", text)
            }
            Diagnostic::MismatchedCloseTag { open, close } => {
                write!(f, "unexpected close tag '{}' for open tag '{}'", close, open)
            }
            Diagnostic::StrayCloseTag { name } => {
                write!(f, "unexpected close tag '{}' with no open tag", name)
            }
            Diagnostic::UnclosedTag { name } => {
                write!(f, "unbalanced tag '{}' is never closed", name)
            }
        }
    }
}

/// An ordered collection of [`Diagnostic`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }
}

impl std::fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, diagnostic) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", diagnostic)?;
        }
        Ok(())
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostics_display_joins_lines() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(Diagnostic::StrayCloseTag {
            name: "bold".to_string(),
        });
        diagnostics.push(Diagnostic::UnclosedTag {
            name: "red".to_string(),
        });

        let text = diagnostics.to_string();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("unexpected close tag 'bold'"));
        assert!(text.contains("unbalanced tag 'red'"));
    }

    #[test]
    fn test_diagnostics_extend_keeps_order() {
        let mut first = Diagnostics::new();
        first.push(Diagnostic::TrailingEscape { offset: 3 });
        let mut second = Diagnostics::new();
        second.push(Diagnostic::UnclosedMarkdown {
            kind: MarkdownKind::Strong,
        });

        first.extend(second);
        assert_eq!(first.len(), 2);
        assert!(matches!(
            first.iter().last(),
            Some(Diagnostic::UnclosedMarkdown { .. })
        ));
    }
}
