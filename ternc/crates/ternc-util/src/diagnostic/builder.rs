//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and [`SourceSnippet`] for the single
//! highlighted source line shown under a diagnostic.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::Span;

/// A source code snippet for display in diagnostics
///
/// # Examples
///
/// ```
/// use ternc_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("x = 1 ! 2", 1, 7, 8, Some("here"));
/// assert_eq!(snippet.format(), "  1 | x = 1 ! 2\n    |       ^ here");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column just past the issue (1-based, exclusive)
    pub end_column: usize,
    /// Optional label to display under the highlighted range
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(Into::into),
        }
    }

    /// Create a snippet pointing at a single column
    pub fn point(line: impl Into<String>, line_number: usize, column: usize) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column: column,
            end_column: column,
            label: None,
        }
    }

    /// Set the label for this snippet
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Format the snippet for display
    ///
    /// Returns the source line with carets (^) under the highlighted range.
    /// An empty range still gets one caret.
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let mut result = String::new();

        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = width
        ));
        result.push_str(&format!("{:>width$} | ", "", width = width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        if let Some(ref label) = self.label {
            result.push_str(&format!(" {}", label));
        }

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use ternc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use ternc_util::Span;
///
/// let diag = DiagnosticBuilder::error("unknown escape sequence `\\q`")
///     .code(DiagnosticCode::E_LEXER_UNKNOWN_ESCAPE)
///     .span(Span::new(4, 9, 1, 5))
///     .help("supported escapes are \\n \\t \\r \\0 \\\\ \\\" \\'")
///     .build();
/// assert_eq!(diag.level, Level::Error);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note to the diagnostic
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Add a source code snippet
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Add a snippet if one is available
    ///
    /// Convenient with [`SourceFile::snippet`](crate::SourceFile::snippet),
    /// which returns `None` for spans it cannot show.
    pub fn maybe_snippet(self, snippet: Option<SourceSnippet>) -> Self {
        match snippet {
            Some(snippet) => self.snippet(snippet),
            None => self,
        }
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
            snippets: self.snippets,
        }
    }

    /// Build and emit the diagnostic to the given handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_snippet_new() {
        let snippet = SourceSnippet::new("x = 42", 1, 5, 7, Some("literal"));
        assert_eq!(snippet.line, "x = 42");
        assert_eq!(snippet.line_number, 1);
        assert_eq!(snippet.start_column, 5);
        assert_eq!(snippet.end_column, 7);
        assert_eq!(snippet.label, Some("literal".to_string()));
    }

    #[test]
    fn test_source_snippet_point() {
        let snippet = SourceSnippet::point("x = 42", 1, 3);
        assert_eq!(snippet.start_column, 3);
        assert_eq!(snippet.end_column, 3);
        assert_eq!(snippet.label, None);
    }

    #[test]
    fn test_source_snippet_with_label() {
        let snippet = SourceSnippet::new("x", 1, 1, 2, None::<String>).with_label("test");
        assert_eq!(snippet.label, Some("test".to_string()));
    }

    #[test]
    fn test_source_snippet_format() {
        let snippet = SourceSnippet::new("x = 42", 12, 5, 7, Some("here"));
        assert_eq!(snippet.format(), " 12 | x = 42\n    |     ^^ here");
    }

    #[test]
    fn test_source_snippet_format_point() {
        let snippet = SourceSnippet::point("abc", 1, 4);
        assert_eq!(snippet.format(), "  1 | abc\n    |    ^");
    }

    #[test]
    fn test_builder_error() {
        let diag = DiagnosticBuilder::error("test error").build();
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "test error");
        assert_eq!(diag.span, Span::DUMMY);
    }

    #[test]
    fn test_builder_warning() {
        let diag = DiagnosticBuilder::warning("test warning").build();
        assert_eq!(diag.level, Level::Warning);
    }

    #[test]
    fn test_builder_fluent() {
        let code = DiagnosticCode::E_LEXER_UNTERMINATED_CHAR;
        let snippet = SourceSnippet::new("c = 'a", 1, 5, 7, Some("here"));

        let diag = DiagnosticBuilder::error("unterminated character literal")
            .code(code)
            .span(Span::new(4, 6, 1, 5))
            .note("character literals end at the line break")
            .help("add a closing `'`")
            .snippet(snippet)
            .build();

        assert_eq!(diag.code, Some(code));
        assert_eq!(diag.span, Span::new(4, 6, 1, 5));
        assert_eq!(diag.notes.len(), 1);
        assert_eq!(diag.helps.len(), 1);
        assert_eq!(diag.snippets.len(), 1);
    }

    #[test]
    fn test_builder_maybe_snippet() {
        let with = DiagnosticBuilder::error("e")
            .maybe_snippet(Some(SourceSnippet::point("x", 1, 1)))
            .build();
        let without = DiagnosticBuilder::error("e").maybe_snippet(None).build();
        assert_eq!(with.snippets.len(), 1);
        assert!(without.snippets.is_empty());
    }

    #[test]
    fn test_builder_emit() {
        let handler = Handler::new();
        DiagnosticBuilder::error("test error")
            .code(DiagnosticCode::E_LEXER_UNKNOWN_DIRECTIVE)
            .emit(&handler);

        let diags = handler.diagnostics();
        assert_eq!(handler.error_count(), 1);
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEXER_UNKNOWN_DIRECTIVE));
    }
}
