//! Character classes used by the scanner.
//!
//! Fleet's lexical grammar is defined over a handful of ASCII character
//! classes. Everything that is not blank, not alphanumeric, not `_`, not a
//! grouper, not `#`, and not a quote is an operator character.

/// Returns true if `c` counts as whitespace in Fleet.
///
/// Note that `\n` is blank for the purposes of this predicate even though
/// the lexer gives it its own token kind.
///
/// # Example
///
/// ```
/// use fleet_lex::classes::is_blank;
///
/// assert!(is_blank(' '));
/// assert!(is_blank('\n'));
/// assert!(!is_blank('a'));
/// ```
#[inline]
pub fn is_blank(c: char) -> bool {
    c == ' ' || c == '\n' || c == '\t' || c == '\r' || c == '\u{c}' || c == '\u{b}'
}

/// Returns true if `c` is one of the six bracket characters.
#[inline]
pub fn is_grouper(c: char) -> bool {
    matches!(c, '(' | ')' | '[' | ']' | '{' | '}')
}

/// Returns true if `c` can begin an identifier.
///
/// `_` is treated as alphabetic for identifier purposes.
#[inline]
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true if `c` can continue an identifier.
#[inline]
pub fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns true if `c` is an operator character.
///
/// This is the catch-all class: any non-blank character that no other
/// scanning rule claims.
#[inline]
pub fn is_operator_char(c: char) -> bool {
    !is_blank(c)
        && !c.is_ascii_alphanumeric()
        && c != '_'
        && c != '#'
        && !is_grouper(c)
        && c != '"'
        && c != '\''
}
