//! Number literal lexing.
//!
//! This module handles lexing of integer and floating-point literals.

use ternc_util::DiagnosticCode;

use crate::token::{LiteralValue, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// # Number Formats
    ///
    /// - Integer: `0`, `42`, decoded to `i64`
    /// - Float: `2.75`, a single `.` between two digit runs
    ///
    /// A `.` not followed by a digit ends the literal and is left for the
    /// next token. A run with a second `.` between digits, such as `1.2.3`,
    /// is one illegal token covering the whole run.
    pub fn lex_number(&mut self) -> Token {
        self.cursor.eat_while(|c| c.is_ascii_digit());

        let mut dots = 0usize;
        while self.cursor.current() == Some('.')
            && self.cursor.peek(1).map_or(false, |c| c.is_ascii_digit())
        {
            dots += 1;
            self.cursor.advance();
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }

        self.number_end = Some(self.cursor.position());
        let text = self.cursor.slice_from(self.token_start);
        match dots {
            0 => match text.parse::<i64>() {
                Ok(value) => self.make_literal(LiteralValue::Int(value)),
                Err(_) => self.illegal(
                    DiagnosticCode::E_LEXER_INVALID_NUMBER,
                    format!("integer literal `{}` does not fit in 64 bits", text),
                ),
            },
            1 => match text.parse::<f64>() {
                Ok(value) if value.is_finite() => self.make_literal(LiteralValue::Float(value)),
                _ => self.illegal(
                    DiagnosticCode::E_LEXER_INVALID_NUMBER,
                    format!("floating point literal `{}` is not finite", text),
                ),
            },
            _ => self.illegal(
                DiagnosticCode::E_LEXER_INVALID_NUMBER,
                format!("numeric literal `{}` has more than one decimal point", text),
            ),
        }
    }
}
