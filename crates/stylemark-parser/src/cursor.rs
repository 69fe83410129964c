//! Character cursor with a single character of lookback.

/// A forward-only cursor over a string slice.
///
/// The cursor can un-consume the most recently read character exactly once.
/// A second [`unbump`](Cursor::unbump) without an intervening
/// [`bump`](Cursor::bump) is a no-op.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    last: Option<char>,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            last: None,
        }
    }

    /// Byte offset of the next character to be read.
    pub(crate) fn offset(&self) -> usize {
        self.pos
    }

    /// Reads the next character and advances past it.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let Some(ch) = self.input[self.pos..].chars().next() else {
            self.last = None;
            return None;
        };
        self.pos += ch.len_utf8();
        self.last = Some(ch);
        Some(ch)
    }

    /// Steps back over the character returned by the last `bump`.
    pub(crate) fn unbump(&mut self) {
        if let Some(ch) = self.last.take() {
            self.pos -= ch.len_utf8();
        }
    }
}
