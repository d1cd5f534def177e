//! Reserved words and the keyword registry.
//!
//! Every reserved spelling maps to one [`Keyword`] tag. All of them lex to
//! [`TokenKind::Keyword`](crate::TokenKind::Keyword); the tag on the token is
//! what tells `if` from `i32` afterwards.
//!
//! Directive keywords (`.nonruntime`, `.end`, `.available`, `.unavailable`)
//! include their leading dot in the spelling.

use std::fmt;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// Semantic group a keyword belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeywordFamily {
    /// `and`, `or`, `not`
    Logical,
    /// `if`, `elif`, `else`
    Conditional,
    /// Built-in type names such as `i32` or `String`
    PrimitiveType,
    /// Dot-prefixed compile-time directive markers
    Directive,
    /// `while`, `for`, `fun`, `struct`, `enum`
    Declarator,
}

macro_rules! keywords {
    ($($variant:ident => $spelling:literal, $family:ident;)*) => {
        /// A reserved word of the language.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Keyword {
            $(
                #[doc = concat!("`", $spelling, "`")]
                $variant,
            )*
        }

        impl Keyword {
            /// Every keyword, in registry order.
            pub const ALL: &'static [Keyword] = &[$(Keyword::$variant),*];

            /// Exact source spelling.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Keyword::$variant => $spelling,)*
                }
            }

            /// Family this keyword belongs to.
            pub const fn family(self) -> KeywordFamily {
                match self {
                    $(Keyword::$variant => KeywordFamily::$family,)*
                }
            }
        }
    };
}

keywords! {
    And => "and", Logical;
    Or => "or", Logical;
    Not => "not", Logical;

    If => "if", Conditional;
    Elif => "elif", Conditional;
    Else => "else", Conditional;

    I8 => "i8", PrimitiveType;
    I16 => "i16", PrimitiveType;
    I32 => "i32", PrimitiveType;
    I64 => "i64", PrimitiveType;
    U8 => "u8", PrimitiveType;
    U16 => "u16", PrimitiveType;
    U32 => "u32", PrimitiveType;
    U64 => "u64", PrimitiveType;
    F32 => "f32", PrimitiveType;
    F64 => "f64", PrimitiveType;
    Iexp => "Iexp", PrimitiveType;
    Fexp => "Fexp", PrimitiveType;
    Char => "char", PrimitiveType;
    Bool => "bool", PrimitiveType;
    Ref => "ref", PrimitiveType;
    Str => "str", PrimitiveType;
    String => "String", PrimitiveType;

    NonRuntime => ".nonruntime", Directive;
    End => ".end", Directive;
    Available => ".available", Directive;
    Unavailable => ".unavailable", Directive;

    While => "while", Declarator;
    For => "for", Declarator;
    Fun => "fun", Declarator;
    Struct => "struct", Declarator;
    Enum => "enum", Declarator;
}

impl Keyword {
    /// Returns true for the dot-prefixed directive markers.
    #[inline]
    pub fn is_directive(self) -> bool {
        self.family() == KeywordFamily::Directive
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only table from spelling to [`Keyword`].
///
/// Build it once and hand a reference to every lexer; it is `Send + Sync`,
/// so one registry can serve lexers running on different threads.
///
/// # Examples
///
/// ```
/// use ternc_lex::{Keyword, Keywords};
///
/// let keywords = Keywords::new();
/// assert_eq!(keywords.lookup("struct"), Some(Keyword::Struct));
/// assert_eq!(keywords.lookup(".end"), Some(Keyword::End));
/// assert_eq!(keywords.lookup("Struct"), None);
/// ```
#[derive(Clone, Debug)]
pub struct Keywords {
    table: IndexMap<&'static str, Keyword, FxBuildHasher>,
}

impl Keywords {
    /// Builds the registry with every reserved spelling.
    pub fn new() -> Self {
        let mut table = IndexMap::with_capacity_and_hasher(Keyword::ALL.len(), FxBuildHasher);
        for &keyword in Keyword::ALL {
            table.insert(keyword.as_str(), keyword);
        }
        Self { table }
    }

    /// Exact, case-sensitive lookup.
    #[inline]
    pub fn lookup(&self, spelling: &str) -> Option<Keyword> {
        self.table.get(spelling).copied()
    }

    /// Returns true if `spelling` is reserved.
    #[inline]
    pub fn contains(&self, spelling: &str) -> bool {
        self.table.contains_key(spelling)
    }

    /// Number of reserved spellings.
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always false; the registry is never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Spellings and keywords in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Keyword)> + '_ {
        self.table.iter().map(|(&spelling, &keyword)| (spelling, keyword))
    }
}

impl Default for Keywords {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(Keywords: Send, Sync);
static_assertions::assert_impl_all!(Keyword: Send, Sync, Copy);
