//! Diagnostic codes for categorizing lexer errors.
//!
//! Codes are grouped by phase: `E1xxx` belongs to the lexer. Numbers are
//! never reused once published.
//!
//! # Examples
//!
//! ```
//! use ternc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNKNOWN_DIRECTIVE;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1007);
//! assert_eq!(code.as_str(), "E1007");
//! ```

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where `prefix` is
/// "E" for errors or "W" for warnings and `number` is padded to four digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use ternc_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("W", 7);
    /// assert_eq!(code.as_str(), "W0007");
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER ERROR CODES (E1001-E1999)
    // =========================================================================

    /// E1001: Lexer - Character with no meaning in the language
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// E1002: Lexer - Unterminated string literal
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// E1003: Lexer - Invalid numeric literal
    pub const E_LEXER_INVALID_NUMBER: Self = Self::new("E", 1003);
    /// E1004: Lexer - Unterminated character literal
    pub const E_LEXER_UNTERMINATED_CHAR: Self = Self::new("E", 1004);
    /// E1005: Lexer - Character literal without exactly one character
    pub const E_LEXER_INVALID_CHAR_LITERAL: Self = Self::new("E", 1005);
    /// E1006: Lexer - Unknown escape sequence
    pub const E_LEXER_UNKNOWN_ESCAPE: Self = Self::new("E", 1006);
    /// E1007: Lexer - Dotted word that is not a directive
    pub const E_LEXER_UNKNOWN_DIRECTIVE: Self = Self::new("E", 1007);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
