//! Lexer configuration.
//!
//! Settings are read from a TOML document such as:
//!
//! ```toml
//! skip_bom = true
//! report_illegal = true
//! error_limit = 50
//! ```
//!
//! Every field is optional; an empty document yields the defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "ternc-lex.toml";

/// Options that tune a [`Lexer`](crate::Lexer).
///
/// Only `skip_bom` changes the token stream. The other fields control the
/// diagnostics reported alongside illegal tokens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LexerConfig {
    /// Treat a leading U+FEFF as trivia.
    #[serde(default = "default_true")]
    pub skip_bom: bool,

    /// Report every illegal token to the diagnostic handler.
    #[serde(default = "default_true")]
    pub report_illegal: bool,

    /// Stop reporting after this many diagnostics.
    #[serde(default)]
    pub error_limit: Option<usize>,
}

fn default_true() -> bool {
    true
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            skip_bom: true,
            report_illegal: true,
            error_limit: None,
        }
    }
}

impl LexerConfig {
    /// Parse configuration from TOML text.
    ///
    /// # Example
    ///
    /// ```
    /// use ternc_lex::LexerConfig;
    ///
    /// let config = LexerConfig::from_toml_str("error_limit = 3").unwrap();
    /// assert_eq!(config.error_limit, Some(3));
    /// assert!(config.skip_bom);
    /// ```
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a specific path.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    pub fn load_from_path(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Render the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save configuration to a specific path.
    ///
    /// Missing parent directories are created.
    pub fn save_to_path(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Returns true if another diagnostic may be reported after `reported`.
    #[inline]
    pub fn allows_report(&self, reported: usize) -> bool {
        self.report_illegal && self.error_limit.map_or(true, |limit| reported < limit)
    }
}
