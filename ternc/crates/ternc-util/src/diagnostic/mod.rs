//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, formatting, and collecting
//! diagnostics (errors, warnings, notes, and help messages). Phases never
//! print anything themselves; they push diagnostics into a shared [`Handler`]
//! and keep going.
//!
//! # Examples
//!
//! ```
//! use ternc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use ternc_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unterminated string literal")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .span(Span::new(4, 9, 1, 5))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use ternc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// An error that prevents compilation
    Error,
    /// A warning that doesn't prevent compilation
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Add a source snippet
    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }
}

/// Renders the headline plus every snippet, note and help
///
/// ```text
/// error[E1002]: unterminated string literal
///   1 | s = "abc
///     |     ^^^^ string starts here
///   = note: ...
/// ```
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message)?,
            None => write!(f, "{}: {}", self.level, self.message)?,
        }
        for snippet in &self.snippets {
            write!(f, "\n{}", snippet.format())?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {}", note)?;
        }
        for help in &self.helps {
            write!(f, "\n  = help: {}", help)?;
        }
        Ok(())
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The `Handler` collects diagnostics behind a `RefCell`, so every phase can
/// report through a shared reference. It can be configured to panic on
/// errors for testing.
///
/// # Examples
///
/// ```
/// use ternc_util::diagnostic::{Diagnostic, Handler};
/// use ternc_util::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("unexpected character", Span::DUMMY));
/// assert_eq!(handler.error_count(), 1);
/// ```
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
    /// Whether to panic on errors (for testing)
    panic_on_error: bool,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: false,
        }
    }

    /// Create a handler that panics on errors (for testing)
    pub fn new_panicking() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: true,
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        if self.panic_on_error && diagnostic.level == Level::Error {
            panic!("Diagnostic error: {}", diagnostic.message);
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Create a diagnostic builder for an error at `span`
    ///
    /// # Examples
    ///
    /// ```
    /// use ternc_util::diagnostic::{DiagnosticCode, Handler};
    /// use ternc_util::Span;
    ///
    /// let handler = Handler::new();
    /// handler
    ///     .build_error(Span::DUMMY, "invalid numeric literal")
    ///     .code(DiagnosticCode::E_LEXER_INVALID_NUMBER)
    ///     .emit(&handler);
    /// assert!(handler.has_errors());
    /// ```
    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    /// Create a diagnostic builder for a warning at `span`
    pub fn build_warning(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::warning(message).span(span)
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Get all diagnostics, in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("errors", &self.error_count())
            .field("warnings", &self.warning_count())
            .field("panic_on_error", &self.panic_on_error)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(format!("{}", Level::Error), "error");
        assert_eq!(format!("{}", Level::Warning), "warning");
        assert_eq!(format!("{}", Level::Note), "note");
        assert_eq!(format!("{}", Level::Help), "help");
    }

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::new(Level::Error, "test", Span::DUMMY);
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "test");
        assert!(diag.code.is_none());
    }

    #[test]
    fn test_diagnostic_warning() {
        let diag = Diagnostic::warning("warning message", Span::DUMMY);
        assert_eq!(diag.level, Level::Warning);
    }

    #[test]
    fn test_diagnostic_with_code() {
        let code = DiagnosticCode::E_LEXER_UNEXPECTED_CHAR;
        let diag = Diagnostic::error("test", Span::DUMMY).with_code(code);
        assert_eq!(diag.code, Some(code));
    }

    #[test]
    fn test_diagnostic_with_note_and_help() {
        let diag = Diagnostic::error("test", Span::DUMMY)
            .with_note("note 1")
            .with_help("help 1");
        assert_eq!(diag.notes, vec!["note 1"]);
        assert_eq!(diag.helps, vec!["help 1"]);
    }

    #[test]
    fn test_diagnostic_display_headline() {
        let diag = Diagnostic::error("unexpected character `!`", Span::DUMMY)
            .with_code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR);
        assert_eq!(diag.to_string(), "error[E1001]: unexpected character `!`");

        let plain = Diagnostic::warning("unused", Span::DUMMY);
        assert_eq!(plain.to_string(), "warning: unused");
    }

    #[test]
    fn test_diagnostic_display_full() {
        let diag = Diagnostic::error("bad", Span::DUMMY)
            .with_snippet(SourceSnippet::point("x ! y", 1, 3))
            .with_note("n")
            .with_help("h");
        let text = diag.to_string();
        assert!(text.starts_with("error: bad\n"));
        assert!(text.contains("x ! y"));
        assert!(text.contains("= note: n"));
        assert!(text.ends_with("= help: h"));
    }

    #[test]
    fn test_handler_new() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
        assert_eq!(handler.warning_count(), 0);
    }

    #[test]
    fn test_handler_emit_diagnostic() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("test", Span::DUMMY));
        assert!(handler.has_errors());
    }

    #[test]
    fn test_handler_counts() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("e1", Span::DUMMY));
        handler.emit_diagnostic(Diagnostic::warning("w1", Span::DUMMY));
        handler.emit_diagnostic(Diagnostic::error("e2", Span::DUMMY));
        assert_eq!(handler.error_count(), 2);
        assert_eq!(handler.warning_count(), 1);
        assert_eq!(handler.diagnostics().len(), 3);
        assert_eq!(handler.diagnostics()[1].message, "w1");
    }

    #[test]
    fn test_handler_clear() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("test", Span::DUMMY));
        handler.clear();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
    }

    #[test]
    fn test_handler_panicking() {
        let handler = Handler::new_panicking();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            handler.emit_diagnostic(Diagnostic::error("test", Span::DUMMY));
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_handler_panicking_allows_warnings() {
        let handler = Handler::new_panicking();
        handler.emit_diagnostic(Diagnostic::warning("fine", Span::DUMMY));
        assert_eq!(handler.warning_count(), 1);
    }

    #[test]
    fn test_handler_build_error() {
        let handler = Handler::new();
        handler
            .build_error(Span::DUMMY, "test error")
            .code(DiagnosticCode::E_LEXER_INVALID_NUMBER)
            .emit(&handler);

        let diags = handler.diagnostics();
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEXER_INVALID_NUMBER));
    }

    #[test]
    fn test_handler_build_warning() {
        let handler = Handler::new();
        handler.build_warning(Span::DUMMY, "test warning").emit(&handler);
        assert!(!handler.has_errors());
        assert_eq!(handler.warning_count(), 1);
    }
}
