//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations:
//! half-open byte ranges with the line/column of their first byte, and the
//! shared name every token of one source unit points at.
//!
//! # Examples
//!
//! ```
//! use ternc_util::span::Span;
//!
//! // `fun` at the very start of a file
//! let span = Span::new(0, 3, 1, 1);
//! assert_eq!(&"fun main"[span.range()], "fun");
//! ```

mod source_map;

use std::ops::Range;
use std::sync::Arc;

pub use source_map::SourceFile;

/// Shared, cheaply cloned name of a source unit.
///
/// Tokens keep a clone of this instead of owning a copy of the file name.
pub type SourceName = Arc<str>;

/// Source location span
///
/// A `Span` represents the half-open range `[start, end)` of byte offsets in
/// a source text, plus the 1-based line and column of `start`.
///
/// # Examples
///
/// ```
/// use ternc_util::span::Span;
///
/// let span = Span::new(10, 20, 1, 5);
/// assert_eq!(span.len(), 10);
///
/// let point = Span::point(7, 2, 3);
/// assert!(point.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source (inclusive)
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number of `start` (1-based)
    pub line: u32,
    /// Column number of `start` (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use ternc_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset, never smaller than `start`
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        debug_assert!(end >= start, "span end {} before start {}", end, start);
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at a single offset
    ///
    /// # Examples
    ///
    /// ```
    /// use ternc_util::span::Span;
    ///
    /// let point = Span::point(4, 1, 5);
    /// assert_eq!(point.start, 4);
    /// assert_eq!(point.start, point.end);
    /// ```
    #[inline]
    pub fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// The byte range of this span, ready for slicing the source text
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Check if this span contains a byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use ternc_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert!(span.contains(15));
    /// assert!(!span.contains(20));
    /// ```
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Check if this span contains another span
    #[inline]
    pub fn contains_span(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Merge two spans into a single span covering both
    ///
    /// Line and column follow whichever span starts first.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternc_util::span::Span;
    ///
    /// let span1 = Span::new(10, 20, 1, 5);
    /// let span2 = Span::new(25, 35, 2, 1);
    /// let merged = span1.merge(span2);
    /// assert_eq!(merged.start, 10);
    /// assert_eq!(merged.end, 35);
    /// assert_eq!(merged.line, 1);
    /// ```
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        let first = if other.start < self.start { other } else { self };
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
        }
    }

    /// Join two adjacent spans into a single span
    ///
    /// Returns `None` if the spans are not adjacent (self.end != other.start).
    #[inline]
    pub fn join(self, other: Span) -> Option<Span> {
        if self.end == other.start {
            Some(Span {
                end: other.end,
                ..self
            })
        } else {
            None
        }
    }
}
