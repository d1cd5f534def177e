//! Source files handed to the lexer and line/column lookup.
//!
//! This module provides the [`SourceFile`] type: the complete decoded text of
//! one source unit together with its identifying name, and the line table
//! used to turn byte offsets back into human coordinates.

use std::ops::Range;
use std::sync::Arc;

use super::{SourceName, Span};
use crate::diagnostic::SourceSnippet;
use crate::error::{SourceMapError, SourceMapResult};

/// Byte order mark; zero-width when it starts the file.
const BOM: char = '\u{FEFF}';

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use ternc_util::span::SourceFile;
///
/// let file = SourceFile::new("main.tn", "fun main()");
/// assert_eq!(file.name(), "main.tn");
/// assert_eq!(file.content(), "fun main()");
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: SourceName,
    /// File content
    content: Arc<str>,
    /// Byte offset of the first character of every line
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line, matching what the lexer
    /// reports as a newline.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.tn", "a\r\nb\rc");
    /// assert_eq!(file.line_count(), 3);
    /// ```
    pub fn new(name: impl Into<SourceName>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        let bytes = content.as_bytes();
        let mut line_starts = vec![0];

        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\n' => line_starts.push(i + 1),
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                    line_starts.push(i + 2);
                    i += 1;
                },
                b'\r' => line_starts.push(i + 1),
                _ => {},
            }
            i += 1;
        }

        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a shared handle to the file name
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use ternc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.tn", "");
    /// let a = file.name_arc();
    /// let b = file.name_arc();
    /// assert!(Arc::ptr_eq(&a, &b));
    /// ```
    #[inline]
    pub fn name_arc(&self) -> SourceName {
        Arc::clone(&self.name)
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Length of the content in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns true if the file has no content
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Get the total number of lines
    ///
    /// An empty file has one (empty) line.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    ///
    /// Returns `None` if the line number is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.tn", "line1\nline2\nline3");
    /// assert_eq!(file.line_start(0), Some(0));
    /// assert_eq!(file.line_start(1), Some(6));
    /// assert_eq!(file.line_start(10), None);
    /// ```
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Convert a byte offset to (line, column) coordinates
    ///
    /// Both are 1-indexed. The column counts characters from the start of the
    /// line, so a multi-byte character occupies a single column. A byte order
    /// mark at the start of the file does not count.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.tn", "fun main()");
    /// assert_eq!(file.offset_to_line_col(4), (1, 5));
    /// ```
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => return (line + 1, 1),
            Err(insert_point) => insert_point.saturating_sub(1),
        };
        let line_start = self.line_starts[line];
        let col = match self.content.get(line_start..offset) {
            Some(prefix) if line == 0 => prefix.strip_prefix(BOM).unwrap_or(prefix).chars().count(),
            Some(prefix) => prefix.chars().count(),
            None => offset.saturating_sub(line_start),
        };
        (line + 1, col + 1)
    }

    /// Get the source line containing a byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use ternc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.tn", "line1\nline2\nline3");
    /// assert_eq!(file.line_at_offset(8), Some("line2"));
    /// ```
    pub fn line_at_offset(&self, offset: usize) -> Option<&str> {
        let (line, _) = self.offset_to_line_col(offset);
        self.line_at(line)
    }

    /// Get a specific source line (1-indexed), without its terminator
    ///
    /// A byte order mark starting the file is not part of line 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.tn", "line1\r\nline2");
    /// assert_eq!(file.line_at(1), Some("line1"));
    /// assert_eq!(file.line_at(2), Some("line2"));
    /// assert_eq!(file.line_at(3), None);
    /// ```
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.content.len());

        let line_content = self.content.get(start..end)?;
        let line_content = if line == 1 {
            line_content.strip_prefix(BOM).unwrap_or(line_content)
        } else {
            line_content
        };
        Some(line_content.trim_end_matches(['\n', '\r']))
    }

    /// Extract a substring from the file content with bounds checking
    ///
    /// # Examples
    ///
    /// ```
    /// use ternc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.tn", "fun main()");
    /// assert_eq!(file.extract_range(0, 3).unwrap(), "fun");
    /// assert!(file.extract_range(3, 0).is_err());
    /// ```
    pub fn extract_range(&self, start: usize, end: usize) -> SourceMapResult<&str> {
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }
        for offset in [start, end] {
            if !self.content.is_char_boundary(offset) {
                return Err(SourceMapError::NotCharBoundary { offset });
            }
        }

        Ok(&self.content[start..end])
    }

    /// Extract a substring from the file content
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds or not on character boundaries.
    pub fn extract(&self, range: Range<usize>) -> &str {
        &self.content[range]
    }

    /// Build a single-line snippet highlighting `span`
    ///
    /// A span that runs past the end of its first line is underlined up to
    /// the end of that line. Returns `None` for spans outside the file.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternc_util::span::{SourceFile, Span};
    ///
    /// let file = SourceFile::new("main.tn", "x = 1 ! 2");
    /// let snippet = file.snippet(Span::new(6, 7, 1, 7), Some("here")).unwrap();
    /// assert_eq!(snippet.start_column, 7);
    /// assert_eq!(snippet.end_column, 8);
    /// ```
    pub fn snippet(&self, span: Span, label: Option<&str>) -> Option<SourceSnippet> {
        if span.end > self.content.len() || span.start > span.end {
            return None;
        }
        let (line, start_column) = self.offset_to_line_col(span.start);
        let text = self.line_at(line)?;

        let (end_line, end_column) = self.offset_to_line_col(span.end);
        let end_column = if end_line == line {
            end_column
        } else {
            text.chars().count() + 1
        };

        Some(SourceSnippet::new(
            text,
            line,
            start_column,
            end_column.max(start_column),
            label,
        ))
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("len", &self.content.len())
            .field("line_count", &self.line_count())
            .finish()
    }
}
