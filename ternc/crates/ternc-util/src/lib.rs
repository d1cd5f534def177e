//! ternc-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! This crate holds the plain-data types every ternc phase shares:
//!
//! - [`span`] - byte-offset spans, shared source names and the
//!   [`SourceFile`] handed over by the loader
//! - [`diagnostic`] - error/warning records, the fluent
//!   [`DiagnosticBuilder`] and the collecting [`Handler`]
//! - [`error`] - error enums for the fallible operations above
//!
//! DESIGN PRINCIPLES:
//! ------------------
//! 1. PLAIN DATA
//!    Nothing here performs I/O. Source text arrives fully decoded and is
//!    only ever borrowed or shared through `Arc<str>`.
//!
//! 2. PHASE INDEPENDENCE
//!    The lexer, and whatever consumes its tokens, agree on spans and
//!    diagnostics through this crate only.
//
// ============================================================================
// SPANS AND OFFSETS
// ============================================================================
//
// All offsets are byte offsets into the UTF-8 source text, so a span can be
// used directly to slice the original buffer:
//
// ```text
// source:  f u n   m a i n
// offset:  0 1 2 3 4 5 6 7
//          [-----)             Span { start: 0, end: 3 }  -> "fun"
//                  [-------)   Span { start: 4, end: 8 }  -> "main"
// ```
//
// Line and column are 1-based and describe `start` only; they exist for
// diagnostics and are never used to slice.

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{SourceFile, SourceName, Span};
