//! Character classes used by the lexer.
//!
//! Names are ASCII only: `[A-Za-z_][A-Za-z0-9_]*`. Anything outside ASCII is
//! only valid inside string and character literals.

/// Byte order mark, skipped at the very start of a file.
pub const BOM: char = '\u{FEFF}';

/// Checks if a character can start an identifier.
///
/// # Example
///
/// ```
/// use ternc_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('α'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Space and tab, the only whitespace skipped silently.
#[inline]
pub fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Characters that start a physical line break.
#[inline]
pub fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Decodes the character after a backslash.
///
/// Supported escapes: `\n`, `\t`, `\r`, `\0`, `\\`, `\"` and `\'`.
///
/// # Example
///
/// ```
/// use ternc_lex::chars::decode_escape;
///
/// assert_eq!(decode_escape('n'), Some('\n'));
/// assert_eq!(decode_escape('"'), Some('"'));
/// assert_eq!(decode_escape('q'), None);
/// ```
#[inline]
pub fn decode_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '0' => Some('\0'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        _ => None,
    }
}
