//! Identifier, keyword, member field reference and directive lexing.
//!
//! A dot is told apart purely by position. It leads the token for
//! directives (`.nonruntime`) and trails a name for member field
//! references (`point.`).

use std::sync::Arc;

use ternc_util::DiagnosticCode;

use crate::chars::is_ident_continue;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier, keyword or member field reference.
    ///
    /// Reads a maximal `[A-Za-z_][A-Za-z0-9_]*` run and looks it up in the
    /// keyword registry. A name that is not a keyword and is immediately
    /// followed by `.` takes the dot as well and becomes a
    /// [`TokenKind::MemberFieldRef`].
    pub fn lex_identifier(&mut self) -> Token {
        self.cursor.eat_while(is_ident_continue);

        let text = self.cursor.slice_from(self.token_start);
        if let Some(keyword) = self.keywords().lookup(text) {
            return Token::keyword(keyword, self.current_span(), Arc::clone(self.cursor.name()));
        }

        if self.cursor.match_char('.') {
            return self.make(TokenKind::MemberFieldRef);
        }

        self.make(TokenKind::Identifier)
    }

    /// Lexes a token starting with `.`.
    ///
    /// `.` followed by an ASCII letter is a directive candidate: the whole
    /// `.word` is looked up and is either a directive keyword or illegal.
    /// Any other dot, including one directly after a numeric literal, has
    /// no meaning on its own and is illegal.
    pub fn lex_dot(&mut self) -> Token {
        let follows_number = self.number_end == Some(self.token_start);
        let starts_word = !follows_number
            && self
                .cursor
                .peek(1)
                .map_or(false, |c| c.is_ascii_alphabetic());

        self.cursor.advance();
        if !starts_word {
            return self.illegal(
                DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
                "unexpected `.`".to_string(),
            );
        }

        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(self.token_start);
        match self.keywords().lookup(text) {
            Some(keyword) if keyword.is_directive() => {
                Token::keyword(keyword, self.current_span(), Arc::clone(self.cursor.name()))
            },
            _ => self.illegal(
                DiagnosticCode::E_LEXER_UNKNOWN_DIRECTIVE,
                format!("unknown directive `{}`", text),
            ),
        }
    }
}
