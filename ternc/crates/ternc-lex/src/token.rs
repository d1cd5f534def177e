//! Token definitions.
//!
//! A [`Token`] is an immutable record of one lexeme: its [`TokenKind`], an
//! optional payload (a decoded [`LiteralValue`] or a [`Keyword`] tag), the
//! byte [`Span`] it covers and the name of the source unit it came from.
//! Tokens own their payloads, so they stay valid after the lexer has moved
//! on.

use std::fmt;

use ternc_util::{SourceName, Span};

use crate::keyword::Keyword;

/// Kind of a token.
///
/// [`TokenKind::Any`] and [`TokenKind::None`] are comparison sentinels for
/// parser lookup tables; the lexer never produces them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ===== Literals =====
    /// Integer literal, e.g. `42`
    Integer,
    /// Floating point literal, e.g. `3.14`
    Float,
    /// String literal, e.g. `"hi"`
    String,
    /// Character literal, e.g. `'a'`
    Char,

    /// Reserved word; the token carries the [`Keyword`] tag
    Keyword,

    // ===== Expression operators =====
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `**`
    DblAsterisk,
    /// `/`
    FwdSlash,
    /// `==`
    DoubleEqu,
    /// `%`
    Percent,
    /// `&`
    Ampersand,
    /// `|`
    Pipe,
    /// `\`
    Backslash,
    /// `~`
    Tilde,
    /// `^`
    Caret,
    /// `!=`
    NotEqu,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `<=`
    LessThanEqu,
    /// `>=`
    GreaterThanEqu,
    /// `<<`
    LeftShift,
    /// `>>`
    RightShift,

    // ===== Standalone =====
    /// Floor division marker `//`
    DblFwdSlash,
    /// `=`
    Equ,
    /// Plain name
    Identifier,
    /// Name directly followed by `.`, e.g. `point.`
    MemberFieldRef,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `#`
    Octothorpe,
    /// Line break
    Newline,
    /// `$`
    Dollar,
    /// `,`
    Comma,
    /// Unrecognized or malformed input
    Illegal,
    /// End of input
    Eof,

    // ===== Sentinels =====
    /// Matches every kind
    Any,
    /// Matches no kind, not even itself
    None,
}

impl TokenKind {
    /// Lookup-table comparison.
    ///
    /// `None` on either side never matches; otherwise `Any` on either side
    /// always matches; otherwise plain equality.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternc_lex::TokenKind;
    ///
    /// assert!(TokenKind::Plus.matches(TokenKind::Any));
    /// assert!(!TokenKind::Any.matches(TokenKind::None));
    /// assert!(!TokenKind::None.matches(TokenKind::None));
    /// ```
    pub fn matches(self, other: TokenKind) -> bool {
        match (self, other) {
            (TokenKind::None, _) | (_, TokenKind::None) => false,
            (TokenKind::Any, _) | (_, TokenKind::Any) => true,
            (a, b) => a == b,
        }
    }

    /// Returns true for the operators that may appear inside an expression.
    pub fn is_expression_operator(self) -> bool {
        matches!(
            self,
            TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Asterisk
                | TokenKind::DblAsterisk
                | TokenKind::FwdSlash
                | TokenKind::DoubleEqu
                | TokenKind::Percent
                | TokenKind::Ampersand
                | TokenKind::Pipe
                | TokenKind::Backslash
                | TokenKind::Tilde
                | TokenKind::Caret
                | TokenKind::NotEqu
                | TokenKind::LessThan
                | TokenKind::GreaterThan
                | TokenKind::LessThanEqu
                | TokenKind::GreaterThanEqu
                | TokenKind::LeftShift
                | TokenKind::RightShift
        )
    }

    /// Returns true for kinds that carry a [`LiteralValue`].
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Integer | TokenKind::Float | TokenKind::String | TokenKind::Char
        )
    }

    /// Returns true for [`TokenKind::Any`] and [`TokenKind::None`].
    pub fn is_sentinel(self) -> bool {
        matches!(self, TokenKind::Any | TokenKind::None)
    }

    /// Canonical spelling, or a short description for variable lexemes.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::String => "string",
            TokenKind::Char => "char",
            TokenKind::Keyword => "keyword",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Asterisk => "*",
            TokenKind::DblAsterisk => "**",
            TokenKind::FwdSlash => "/",
            TokenKind::DoubleEqu => "==",
            TokenKind::Percent => "%",
            TokenKind::Ampersand => "&",
            TokenKind::Pipe => "|",
            TokenKind::Backslash => "\\",
            TokenKind::Tilde => "~",
            TokenKind::Caret => "^",
            TokenKind::NotEqu => "!=",
            TokenKind::LessThan => "<",
            TokenKind::GreaterThan => ">",
            TokenKind::LessThanEqu => "<=",
            TokenKind::GreaterThanEqu => ">=",
            TokenKind::LeftShift => "<<",
            TokenKind::RightShift => ">>",
            TokenKind::DblFwdSlash => "//",
            TokenKind::Equ => "=",
            TokenKind::Identifier => "identifier",
            TokenKind::MemberFieldRef => "member field reference",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Octothorpe => "#",
            TokenKind::Newline => "newline",
            TokenKind::Dollar => "$",
            TokenKind::Comma => ",",
            TokenKind::Illegal => "illegal",
            TokenKind::Eof => "end of file",
            TokenKind::Any => "any",
            TokenKind::None => "none",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded value of a literal token.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    /// Integer magnitude; width checks happen later
    Int(i64),
    /// IEEE-754 double
    Float(f64),
    /// String with escapes already decoded
    Str(String),
    /// Single decoded character
    Char(char),
}

impl LiteralValue {
    /// The token kind a literal of this variant has.
    pub fn kind(&self) -> TokenKind {
        match self {
            LiteralValue::Int(_) => TokenKind::Integer,
            LiteralValue::Float(_) => TokenKind::Float,
            LiteralValue::Str(_) => TokenKind::String,
            LiteralValue::Char(_) => TokenKind::Char,
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Int(v) => write!(f, "{}", v),
            LiteralValue::Float(v) => write!(f, "{:?}", v),
            LiteralValue::Str(s) => write!(f, "{:?}", s),
            LiteralValue::Char(c) => write!(f, "{:?}", c),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Payload {
    Empty,
    Literal(LiteralValue),
    Keyword(Keyword),
}

/// A token produced by the lexer.
///
/// Construct through [`Token::new`], [`Token::literal`], [`Token::keyword`] or
/// [`Token::eof`]; the payload always agrees with the kind.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use ternc_lex::{LiteralValue, Token, TokenKind};
/// use ternc_util::Span;
///
/// let name: Arc<str> = Arc::from("main.tn");
/// let token = Token::literal(LiteralValue::Int(42), Span::new(4, 6, 1, 5), name);
/// assert_eq!(token.kind(), TokenKind::Integer);
/// assert_eq!(token.lexeme("x = 42"), "42");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    kind: TokenKind,
    payload: Payload,
    span: Span,
    source: SourceName,
}

impl Token {
    /// Token of a kind that carries no payload.
    pub fn new(kind: TokenKind, span: Span, source: SourceName) -> Self {
        debug_assert!(
            !kind.is_literal() && kind != TokenKind::Keyword,
            "{:?} tokens need a payload",
            kind
        );
        Self {
            kind,
            payload: Payload::Empty,
            span,
            source,
        }
    }

    /// Literal token; the kind follows from the value.
    pub fn literal(value: LiteralValue, span: Span, source: SourceName) -> Self {
        Self {
            kind: value.kind(),
            payload: Payload::Literal(value),
            span,
            source,
        }
    }

    /// Keyword token carrying its tag.
    pub fn keyword(keyword: Keyword, span: Span, source: SourceName) -> Self {
        Self {
            kind: TokenKind::Keyword,
            payload: Payload::Keyword(keyword),
            span,
            source,
        }
    }

    /// End-of-file token; `span` must be empty and sit at the source length.
    pub fn eof(span: Span, source: SourceName) -> Self {
        debug_assert!(span.is_empty(), "EOF span must be empty");
        Self::new(TokenKind::Eof, span, source)
    }

    /// Kind of this token.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Decoded literal, present iff the kind is a literal kind.
    #[inline]
    pub fn literal_value(&self) -> Option<&LiteralValue> {
        match &self.payload {
            Payload::Literal(value) => Some(value),
            _ => None,
        }
    }

    /// Keyword tag, present iff the kind is [`TokenKind::Keyword`].
    #[inline]
    pub fn keyword_tag(&self) -> Option<Keyword> {
        match self.payload {
            Payload::Keyword(keyword) => Some(keyword),
            _ => None,
        }
    }

    /// Byte span in the source text.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Name of the source unit.
    #[inline]
    pub fn source(&self) -> &SourceName {
        &self.source
    }

    /// Returns true for the end-of-file token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// The exact text this token was scanned from.
    ///
    /// `text` must be the source the token came from; an unrelated text
    /// that is too short yields `""`.
    pub fn lexeme<'t>(&self, text: &'t str) -> &'t str {
        text.get(self.span.range()).unwrap_or("")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            Payload::Literal(value) => write!(f, "{} {}", self.kind, value)?,
            Payload::Keyword(keyword) => write!(f, "keyword `{}`", keyword)?,
            Payload::Empty => write!(f, "{}", self.kind)?,
        }
        write!(
            f,
            " at {}:{}:{}",
            self.source, self.span.line, self.span.column
        )
    }
}

static_assertions::assert_impl_all!(Token: Send, Sync, Clone);
static_assertions::assert_impl_all!(TokenKind: Send, Sync, Copy);
