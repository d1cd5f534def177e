//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It handles UTF-8 encoding
//! correctly and tracks line/column information for error reporting.
//!
//! The cursor moves through three states:
//!
//! ```text
//! At(offset) --advance past last char--> Exhausted --mark_eof_reported--> EofReported
//! ```
//!
//! An empty text starts out `Exhausted`. Both terminal states report the
//! text length as their position, so an end-of-file span is always
//! `[len, len)`.

use ternc_util::SourceName;

use crate::chars::BOM;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// On the character starting at this byte offset.
    At(usize),
    /// Past the last character; end of file not handed out yet.
    Exhausted,
    /// End of file has been handed out.
    EofReported,
}

/// A cursor for traversing source code character by character.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use ternc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("fun", Arc::from("main.tn"));
/// assert_eq!(cursor.current(), Some('f'));
/// cursor.advance();
/// assert_eq!(cursor.current(), Some('u'));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Name of the source unit, shared with every token.
    name: SourceName,

    state: State,

    /// Character at the current position, `None` once exhausted.
    current: Option<char>,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor on the first character of `source`.
    pub fn new(source: &'a str, name: SourceName) -> Self {
        let current = source.chars().next();
        let state = if current.is_some() {
            State::At(0)
        } else {
            State::Exhausted
        };
        Self {
            source,
            name,
            state,
            current,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character, or `None` once the text is exhausted.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Returns the character `offset` characters ahead (0 = current).
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use ternc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("ab", Arc::from("t"));
    /// assert_eq!(cursor.peek(1), Some('b'));
    /// assert_eq!(cursor.peek(2), None);
    /// ```
    pub fn peek(&self, offset: usize) -> Option<char> {
        match self.state {
            State::At(pos) => self.source[pos..].chars().nth(offset),
            State::Exhausted | State::EofReported => None,
        }
    }

    /// Advances the cursor to the next character.
    ///
    /// Updates line and column tracking. `\n`, `\r\n` and a lone `\r` each
    /// count as one line break. A byte order mark at the start of the text
    /// is zero-width. Does nothing once exhausted.
    pub fn advance(&mut self) {
        let (pos, c) = match (self.state, self.current) {
            (State::At(pos), Some(c)) => (pos, c),
            _ => return,
        };

        let next = pos + c.len_utf8();
        let rest = &self.source[next..];

        let ends_line = c == '\n' || (c == '\r' && !rest.starts_with('\n'));
        if ends_line {
            self.line += 1;
            self.column = 1;
        } else if !(pos == 0 && c == BOM) {
            self.column += 1;
        }

        self.current = rest.chars().next();
        self.state = if self.current.is_some() {
            State::At(next)
        } else {
            State::Exhausted
        };
    }

    /// Advances while `predicate` holds for the current character.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.current {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    /// Matches and consumes the expected character if present.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use ternc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("<=", Arc::from("t"));
    /// assert!(cursor.match_char('<'));
    /// assert!(!cursor.match_char('<'));
    /// assert_eq!(cursor.current(), Some('='));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips a byte order mark at the very start of the text.
    ///
    /// The mark does not occupy a column. Returns true if one was skipped.
    pub fn skip_bom(&mut self) -> bool {
        if self.state == State::At(0) && self.current == Some(BOM) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true once every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Moves an exhausted cursor into its final state.
    ///
    /// Has no effect while characters remain.
    pub fn mark_eof_reported(&mut self) {
        if self.state == State::Exhausted {
            self.state = State::EofReported;
        }
    }

    /// Returns true once end of file has been handed out.
    #[inline]
    pub fn is_eof_reported(&self) -> bool {
        self.state == State::EofReported
    }

    /// Returns the current byte position, the text length once exhausted.
    #[inline]
    pub fn position(&self) -> usize {
        match self.state {
            State::At(pos) => pos,
            State::Exhausted | State::EofReported => self.source.len(),
        }
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the source text from `start` to the current position.
    ///
    /// `start` must be a position this cursor has already passed.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.source.get(start..self.position()).unwrap_or("")
    }

    /// Returns the full source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Returns the shared source name.
    #[inline]
    pub fn name(&self) -> &SourceName {
        &self.name
    }
}
