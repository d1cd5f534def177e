//! ternc-lex - Lexical Analyzer for the tern Programming Language
//!
//! This crate turns the text of one source unit into a stream of tokens for
//! the parser. Every token carries its kind, an optional decoded literal or
//! keyword tag, a half-open byte span and the name of the source unit.
//!
//! # Example Usage
//!
//! ```
//! use ternc_lex::{tokenize, Keywords, TokenKind};
//! use ternc_util::{Handler, SourceFile};
//!
//! let file = SourceFile::new("main.tn", ".nonruntime\nfun area(p) p.w * p.h\n.end");
//! let keywords = Keywords::new();
//! let handler = Handler::new();
//!
//! let tokens = tokenize(&file, &keywords, &handler).unwrap();
//! assert_eq!(tokens[0].kind(), TokenKind::Keyword);
//! assert_eq!(tokens.last().map(|t| t.kind()), Some(TokenKind::Eof));
//! assert!(!handler.has_errors());
//! ```
//!
//! Tokens can also be pulled one at a time:
//!
//! ```
//! use ternc_lex::{Keywords, Lexer, TokenKind};
//! use ternc_util::{Handler, SourceFile};
//!
//! let file = SourceFile::new("main.tn", "a ** 2");
//! let keywords = Keywords::new();
//! let handler = Handler::new();
//! let mut lexer = Lexer::new(&file, &keywords, &handler).unwrap();
//!
//! assert_eq!(lexer.next_token().kind(), TokenKind::Identifier);
//! assert_eq!(lexer.next_token().kind(), TokenKind::DblAsterisk);
//! assert_eq!(lexer.next_token().kind(), TokenKind::Integer);
//! assert!(lexer.next_token().is_eof());
//! assert!(lexer.next_token().is_eof());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, literal values and tokens
//! - [`keyword`] - Reserved words and the keyword registry
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classes and escape decoding
//! - [`config`] - Lexer configuration file
//! - [`error`] - Construction and configuration errors
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! **Logical**: `and`, `or`, `not`
//!
//! **Conditional**: `if`, `elif`, `else`
//!
//! **Primitive types**: `i8` to `i64`, `u8` to `u64`, `f32`, `f64`, `Iexp`,
//! `Fexp`, `char`, `bool`, `ref`, `str`, `String`
//!
//! **Declarators**: `while`, `for`, `fun`, `struct`, `enum`
//!
//! **Directives**: `.nonruntime`, `.end`, `.available`, `.unavailable`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`. A name immediately followed by `.`
//! is a member field reference (`point.`).
//!
//! ## Literals
//!
//! - **Integer**: `42`
//! - **Float**: `2.75`
//! - **String**: `"hello\n"`
//! - **Character**: `'a'`, `'\t'`
//!
//! ## Operators
//!
//! `( ) + - * ** / == % & | \ ~ ^ != < > <= >= << >> = ; : # $ ,`
//!
//! ## Special
//!
//! - **Newline**: line breaks are significant
//! - **EOF**: End of file marker, returned again on every later request
//! - **Illegal**: Unrecognized characters and malformed literals

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod config;
pub mod cursor;
pub mod error;
pub mod keyword;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use config::{LexerConfig, CONFIG_FILE_NAME};
pub use cursor::Cursor;
pub use error::{ConfigError, ConfigResult, LexError, LexResult};
pub use keyword::{Keyword, KeywordFamily, Keywords};
pub use lexer::{Lexer, MAX_SOURCE_LEN};
pub use token::{LiteralValue, Token, TokenKind};

use ternc_util::{Handler, SourceFile};

/// Tokenizes a whole source unit with the default configuration.
///
/// The returned vector always ends with exactly one EOF token. Malformed
/// input shows up as [`TokenKind::Illegal`] tokens and diagnostics in
/// `handler`, never as an `Err`.
///
/// # Errors
///
/// Fails only when the lexer cannot be constructed, see [`Lexer::new`].
pub fn tokenize(file: &SourceFile, keywords: &Keywords, handler: &Handler) -> LexResult<Vec<Token>> {
    let lexer = Lexer::new(file, keywords, handler)?;
    let tokens: Vec<Token> = lexer.collect();
    tracing::debug!(
        source = file.name(),
        tokens = tokens.len(),
        errors = handler.error_count(),
        "tokenized"
    );
    Ok(tokens)
}
