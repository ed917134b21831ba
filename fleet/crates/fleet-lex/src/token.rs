//! Token type for the Fleet lexer.
//!
//! A token is a tagged lexeme: a [`TokenKind`] plus the exact substring of
//! source text that produced it. Tokens are immutable after construction and
//! compare equal when both kind and text match.

use std::fmt;

/// The seven lexical categories of Fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `#` through the end of the line, newline excluded.
    Comment,
    /// One of the six bracket characters.
    Grouper,
    /// An alphanumeric-or-underscore word not starting with a digit.
    Identifier,
    /// A single `\n` that terminates a logical line.
    LineBreak,
    /// A digit run with at most one embedded `.`.
    Number,
    /// A maximal run of operator characters.
    Operator,
    /// A quoted literal, quotes and escapes kept verbatim.
    String,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Comment => "Comment",
            TokenKind::Grouper => "Grouper",
            TokenKind::Identifier => "Identifier",
            TokenKind::LineBreak => "LineBreak",
            TokenKind::Number => "Number",
            TokenKind::Operator => "Operator",
            TokenKind::String => "String",
        };
        write!(f, "{}", name)
    }
}

/// A single lexeme: kind plus the exact source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    /// Creates a token with the given kind and text.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Returns the token's kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the token's source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true iff this token is `(`, `[`, or `{`.
    pub fn is_opening_grouper(&self) -> bool {
        self.kind == TokenKind::Grouper && matches!(self.text.as_str(), "(" | "[" | "{")
    }

    /// Returns the text of the grouper that matches this one, in either
    /// direction, or `None` if this token is not a grouper.
    ///
    /// # Example
    ///
    /// ```
    /// use fleet_lex::{Token, TokenKind};
    ///
    /// let open = Token::new(TokenKind::Grouper, "(");
    /// assert_eq!(open.matching_grouper(), Some(")"));
    /// ```
    pub fn matching_grouper(&self) -> Option<&'static str> {
        if self.kind != TokenKind::Grouper {
            return None;
        }
        match self.text.as_str() {
            "(" => Some(")"),
            "[" => Some("]"),
            "{" => Some("}"),
            ")" => Some("("),
            "]" => Some("["),
            "}" => Some("{"),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    /// Renders the token as `(Kind: text)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}: {})", self.kind, self.text)
    }
}
