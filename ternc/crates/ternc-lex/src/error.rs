//! Error types for ternc-lex.
//!
//! Malformed source text is never an error here: it becomes an
//! [`Illegal`](crate::TokenKind::Illegal) token. The types below cover the
//! remaining failures, which are caller mistakes at lexer construction and
//! problems reading a [`LexerConfig`](crate::LexerConfig).

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a lexer cannot be constructed for a source unit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// Offsets and line counters are 32-bit in diagnostics.
    #[error("source is {len} bytes long, the lexer accepts at most {max}")]
    SourceTooLarge {
        /// Length of the rejected source in bytes
        len: usize,
        /// Largest accepted length
        max: usize,
    },

    /// Every token carries its source name, so an unnamed unit is rejected.
    #[error("source name must not be empty")]
    EmptySourceName,
}

/// Result type alias for lexer construction.
pub type LexResult<T> = std::result::Result<T, LexError>;

/// Error type for loading and saving [`LexerConfig`](crate::LexerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file does not exist.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration text is not valid TOML for this schema.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration could not be rendered as TOML.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
