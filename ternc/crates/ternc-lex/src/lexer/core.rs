//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its core methods.

use std::iter::FusedIterator;
use std::sync::Arc;

use ternc_util::{DiagnosticBuilder, DiagnosticCode, Handler, SourceFile, Span};
use tracing::{debug, trace};

use crate::chars::is_ident_start;
use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::keyword::Keywords;
use crate::token::{LiteralValue, Token, TokenKind};

/// Largest source the lexer accepts, in bytes.
pub const MAX_SOURCE_LEN: usize = u32::MAX as usize;

/// Lexer for the tern programming language.
///
/// The lexer transforms source code text into a stream of tokens, one per
/// [`next_token`](Lexer::next_token) call. Malformed input becomes
/// [`TokenKind::Illegal`] tokens and never stops the scan. After the last
/// character it returns a single end-of-file token, and keeps returning one
/// on every later call.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub cursor: Cursor<'a>,

    /// File being lexed, used for diagnostic snippets.
    file: &'a SourceFile,

    /// Reserved word table.
    keywords: &'a Keywords,

    /// Error handler for reporting lexical errors.
    pub handler: &'a Handler,

    config: LexerConfig,

    /// Starting position of the current token (byte offset).
    pub token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Diagnostics reported so far by this lexer.
    reported: usize,

    /// Byte offset just past the most recent numeric literal.
    pub(crate) number_end: Option<usize>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer with the default configuration.
    ///
    /// # Errors
    ///
    /// Fails if the source is longer than [`MAX_SOURCE_LEN`] bytes or has an
    /// empty name.
    pub fn new(file: &'a SourceFile, keywords: &'a Keywords, handler: &'a Handler) -> LexResult<Self> {
        Self::with_config(file, keywords, handler, LexerConfig::default())
    }

    /// Creates a new lexer with an explicit configuration.
    pub fn with_config(
        file: &'a SourceFile,
        keywords: &'a Keywords,
        handler: &'a Handler,
        config: LexerConfig,
    ) -> LexResult<Self> {
        if file.len() > MAX_SOURCE_LEN {
            return Err(LexError::SourceTooLarge {
                len: file.len(),
                max: MAX_SOURCE_LEN,
            });
        }
        if file.name().is_empty() {
            return Err(LexError::EmptySourceName);
        }

        let mut cursor = Cursor::new(file.content(), file.name_arc());
        if config.skip_bom && cursor.skip_bom() {
            debug!(source = file.name(), "skipped byte order mark");
        }
        debug!(source = file.name(), len = file.len(), "lexer created");

        Ok(Self {
            token_start: cursor.position(),
            cursor,
            file,
            keywords,
            handler,
            config,
            token_start_line: 1,
            token_start_column: 1,
            reported: 0,
            number_end: None,
        })
    }

    /// Returns the next token from the source code.
    ///
    /// This is the main entry point for tokenization. It skips blanks and
    /// comments, then dispatches on the current character.
    pub fn next_token(&mut self) -> Token {
        self.skip_trivia();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        let token = self.scan_token();
        trace!(kind = ?token.kind(), start = token.span().start, end = token.span().end, "token");
        token
    }

    fn scan_token(&mut self) -> Token {
        let c = match self.cursor.current() {
            Some(c) => c,
            None => return self.eof_token(),
        };

        match c {
            '\n' | '\r' => self.lex_newline(),
            '"' => self.lex_string(),
            '\'' => self.lex_char(),
            '.' => self.lex_dot(),
            c if c.is_ascii_digit() => self.lex_number(),
            c if is_ident_start(c) => self.lex_identifier(),
            _ => self.lex_operator(c),
        }
    }

    fn eof_token(&mut self) -> Token {
        if !self.cursor.is_eof_reported() {
            debug!(source = self.file.name(), "end of file");
            self.cursor.mark_eof_reported();
        }
        Token::eof(self.current_span(), Arc::clone(self.cursor.name()))
    }

    fn lex_newline(&mut self) -> Token {
        if self.cursor.match_char('\r') {
            self.cursor.match_char('\n');
        } else {
            self.cursor.advance();
        }
        self.make(TokenKind::Newline)
    }

    /// Span from the start of the current token to the cursor.
    pub(crate) fn current_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Builds a payload-less token over the current span.
    pub(crate) fn make(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.current_span(), Arc::clone(self.cursor.name()))
    }

    /// Builds a literal token over the current span.
    pub(crate) fn make_literal(&self, value: LiteralValue) -> Token {
        Token::literal(value, self.current_span(), Arc::clone(self.cursor.name()))
    }

    /// Builds an illegal token over the current span and reports it.
    pub(crate) fn illegal(&mut self, code: DiagnosticCode, message: String) -> Token {
        let token = self.make(TokenKind::Illegal);
        debug!(%code, start = token.span().start, end = token.span().end, "{}", message);
        self.report_error(code, message);
        token
    }

    /// Reports a lexical error at the current token position.
    ///
    /// Respects `report_illegal` and `error_limit` from the configuration.
    pub fn report_error(&mut self, code: DiagnosticCode, message: String) {
        if !self.config.allows_report(self.reported) {
            return;
        }
        self.reported += 1;

        let span = self.current_span();
        DiagnosticBuilder::error(message)
            .code(code)
            .span(span)
            .maybe_snippet(self.file.snippet(span, None))
            .emit(self.handler);
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the keyword registry in use.
    pub fn keywords(&self) -> &'a Keywords {
        self.keywords
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }
}

/// Yields every token including the end-of-file token, then `None`.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.is_eof_reported() {
            None
        } else {
            Some(self.next_token())
        }
    }
}

impl<'a> FusedIterator for Lexer<'a> {}

static_assertions::assert_not_impl_any!(Lexer<'static>: Sync);
