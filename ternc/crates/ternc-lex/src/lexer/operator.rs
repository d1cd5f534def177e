//! Operator and punctuation lexing.
//!
//! Multi-character operators always win over their single-character
//! prefixes: `**` before `*`, `==` before `=`, `<=`/`<<` before `<`,
//! `>=`/`>>` before `>`. `!` is only valid as part of `!=`.

use ternc_util::DiagnosticCode;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an operator or punctuation character, or an illegal character.
    ///
    /// Always consumes at least one full character.
    pub fn lex_operator(&mut self, c: char) -> Token {
        let kind = match c {
            '*' => self.lex_star(),
            '=' => self.lex_equals(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '!' => return self.lex_bang(),
            _ => {
                self.cursor.advance();
                match single_char_kind(c) {
                    Some(kind) => kind,
                    None => {
                        return self.illegal(
                            DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
                            format!("unexpected character `{}`", c.escape_debug()),
                        )
                    },
                }
            },
        };
        self.make(kind)
    }

    /// Handles: `*`, `**`
    fn lex_star(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('*') {
            TokenKind::DblAsterisk
        } else {
            TokenKind::Asterisk
        }
    }

    /// Handles: `=`, `==`
    fn lex_equals(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::DoubleEqu
        } else {
            TokenKind::Equ
        }
    }

    /// Handles: `<`, `<=`, `<<`
    fn lex_less(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::LessThanEqu
        } else if self.cursor.match_char('<') {
            TokenKind::LeftShift
        } else {
            TokenKind::LessThan
        }
    }

    /// Handles: `>`, `>=`, `>>`
    fn lex_greater(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::GreaterThanEqu
        } else if self.cursor.match_char('>') {
            TokenKind::RightShift
        } else {
            TokenKind::GreaterThan
        }
    }

    /// Handles: `!=`; a bare `!` is illegal.
    fn lex_bang(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make(TokenKind::NotEqu)
        } else {
            self.illegal(
                DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
                "unexpected character `!`".to_string(),
            )
        }
    }
}

/// Kinds spelled by exactly one character with no longer alternative.
fn single_char_kind(c: char) -> Option<TokenKind> {
    let kind = match c {
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '/' => TokenKind::FwdSlash,
        '%' => TokenKind::Percent,
        '&' => TokenKind::Ampersand,
        '|' => TokenKind::Pipe,
        '\\' => TokenKind::Backslash,
        '~' => TokenKind::Tilde,
        '^' => TokenKind::Caret,
        ';' => TokenKind::Semicolon,
        ':' => TokenKind::Colon,
        '#' => TokenKind::Octothorpe,
        '$' => TokenKind::Dollar,
        ',' => TokenKind::Comma,
        _ => return None,
    };
    Some(kind)
}
