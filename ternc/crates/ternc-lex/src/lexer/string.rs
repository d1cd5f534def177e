//! String and character literal lexing.
//!
//! Both literal forms share one scanner. Escapes are decoded while
//! scanning, so tokens never carry raw escaped text.

use ternc_util::DiagnosticCode;

use crate::chars::{decode_escape, is_line_break};
use crate::token::{LiteralValue, Token};
use crate::Lexer;

/// Outcome of scanning a quoted literal.
enum Quoted {
    /// Closing quote found; decoded contents.
    Closed(String),
    /// Closing quote found, but an escape was not recognised.
    UnknownEscape(char),
    /// Line break or end of file before the closing quote.
    Unterminated,
}

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// An unterminated string becomes an illegal token from the opening
    /// quote up to the line break or end of file; the line break itself is
    /// left for the next token.
    pub fn lex_string(&mut self) -> Token {
        match self.scan_quoted('"') {
            Quoted::Closed(content) => self.make_literal(LiteralValue::Str(content)),
            Quoted::UnknownEscape(c) => self.unknown_escape(c),
            Quoted::Unterminated => self.illegal(
                DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
                "unterminated string literal".to_string(),
            ),
        }
    }

    /// Lexes a character literal.
    ///
    /// Exactly one, possibly escaped, character must sit between the quotes.
    pub fn lex_char(&mut self) -> Token {
        match self.scan_quoted('\'') {
            Quoted::Closed(content) => {
                let mut chars = content.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => self.make_literal(LiteralValue::Char(c)),
                    (None, _) => self.illegal(
                        DiagnosticCode::E_LEXER_INVALID_CHAR_LITERAL,
                        "empty character literal".to_string(),
                    ),
                    (Some(_), Some(_)) => self.illegal(
                        DiagnosticCode::E_LEXER_INVALID_CHAR_LITERAL,
                        "character literal may only contain one character".to_string(),
                    ),
                }
            },
            Quoted::UnknownEscape(c) => self.unknown_escape(c),
            Quoted::Unterminated => self.illegal(
                DiagnosticCode::E_LEXER_UNTERMINATED_CHAR,
                "unterminated character literal".to_string(),
            ),
        }
    }

    fn unknown_escape(&mut self, c: char) -> Token {
        self.illegal(
            DiagnosticCode::E_LEXER_UNKNOWN_ESCAPE,
            format!("unknown escape sequence `\\{}`", c),
        )
    }

    /// Scans from the opening `quote` through the matching closing quote.
    ///
    /// Stops without consuming at a line break or end of file.
    fn scan_quoted(&mut self, quote: char) -> Quoted {
        self.cursor.advance();

        let mut content = String::new();
        let mut bad_escape = None;

        loop {
            let c = match self.cursor.current() {
                Some(c) if !is_line_break(c) => c,
                _ => return Quoted::Unterminated,
            };
            self.cursor.advance();

            if c == quote {
                return match bad_escape {
                    Some(e) => Quoted::UnknownEscape(e),
                    None => Quoted::Closed(content),
                };
            }

            if c != '\\' {
                content.push(c);
                continue;
            }

            let escaped = match self.cursor.current() {
                Some(e) if !is_line_break(e) => e,
                _ => return Quoted::Unterminated,
            };
            self.cursor.advance();
            match decode_escape(escaped) {
                Some(decoded) => content.push(decoded),
                None if bad_escape.is_none() => bad_escape = Some(escaped),
                None => {},
            }
        }
    }
}
