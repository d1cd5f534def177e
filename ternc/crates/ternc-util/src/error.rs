//! Core error types for ternc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for source file operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceMapError {
    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan { start: usize, end: usize },

    /// Span out of bounds for file
    #[error("Span out of bounds: file has {file_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        file_len: usize,
        span_start: usize,
        span_end: usize,
    },

    /// Offset falls inside a multi-byte character
    #[error("Offset {offset} is not on a character boundary")]
    NotCharBoundary { offset: usize },
}

/// Result type alias for source file operations
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_span_display() {
        let err = SourceMapError::InvalidSpan { start: 5, end: 2 };
        assert_eq!(err.to_string(), "Invalid span: start 5 > end 2");
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = SourceMapError::SpanOutOfBounds {
            file_len: 3,
            span_start: 1,
            span_end: 9,
        };
        assert_eq!(
            err.to_string(),
            "Span out of bounds: file has 3 bytes, span is 1..9"
        );
    }

    #[test]
    fn test_extract_range_errors_are_all_variants() {
        use crate::span::SourceFile;

        let file = SourceFile::new("test.tn", "é");
        let errors = [
            file.extract_range(1, 0),
            file.extract_range(0, 9),
            file.extract_range(0, 1),
        ];
        let kinds: Vec<_> = errors
            .iter()
            .map(|result| match result {
                Err(SourceMapError::InvalidSpan { .. }) => "span",
                Err(SourceMapError::SpanOutOfBounds { .. }) => "bounds",
                Err(SourceMapError::NotCharBoundary { .. }) => "boundary",
                Ok(_) => "ok",
            })
            .collect();
        assert_eq!(kinds, vec!["span", "bounds", "boundary"]);
    }

    #[test]
    fn test_char_boundary_display() {
        let err = SourceMapError::NotCharBoundary { offset: 1 };
        assert_eq!(err.to_string(), "Offset 1 is not on a character boundary");
    }
}
