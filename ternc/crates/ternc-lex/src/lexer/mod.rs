//! Lexer module.
//!
//! The lexer implementation is split into focused components:
//! - `core` - Main Lexer struct, dispatch and error reporting
//! - `identifier` - Identifiers, keywords, member field references and directives
//! - `number` - Integer and float literals
//! - `string` - String and character literals
//! - `operator` - Operators and punctuation
//! - `comment` - Blanks and line comments

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::{Lexer, MAX_SOURCE_LEN};
