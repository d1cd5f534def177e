//! Shared helpers for the ternc-lex integration tests.

#![allow(dead_code)]

use ternc_lex::{tokenize, Keywords, Token, TokenKind};
use ternc_util::{Handler, SourceFile};

/// Source name used by every fixture.
pub const SOURCE_NAME: &str = "fixture.tn";

/// Installs a tracing subscriber once; filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Tokenizes `source`, returning the tokens and the handler that collected
/// the diagnostics.
pub fn lex(source: &str) -> (Vec<Token>, Handler) {
    let file = SourceFile::new(SOURCE_NAME, source);
    let keywords = Keywords::new();
    let handler = Handler::new();
    let tokens = tokenize(&file, &keywords, &handler).unwrap();
    (tokens, handler)
}

/// Kinds of every token, EOF included.
pub fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).0.iter().map(Token::kind).collect()
}

/// Source text of every token before EOF.
pub fn lexemes(source: &str) -> Vec<String> {
    lex(source)
        .0
        .iter()
        .filter(|t| !t.is_eof())
        .map(|t| t.lexeme(source).to_string())
        .collect()
}
