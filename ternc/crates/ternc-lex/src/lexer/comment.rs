//! Trivia skipping.
//!
//! Blanks and `//` line comments carry no tokens. Line breaks are never
//! trivia: they are significant and lexed as [`TokenKind::Newline`].
//!
//! [`TokenKind::Newline`]: crate::TokenKind::Newline

use crate::chars::{is_blank, is_line_break};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips blanks and line comments before the next token.
    ///
    /// A line comment runs up to, but not including, the next line break.
    pub fn skip_trivia(&mut self) {
        loop {
            match self.cursor.current() {
                Some(c) if is_blank(c) => self.cursor.eat_while(is_blank),
                Some('/') if self.cursor.peek(1) == Some('/') => self.skip_line_comment(),
                _ => return,
            }
        }
    }

    fn skip_line_comment(&mut self) {
        self.cursor.eat_while(|c| !is_line_break(c));
    }
}
