//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the dispatch over character
//! classes, and the peek/next/has_next interface.

use fleet_util::ParseError;

use crate::classes::{is_blank, is_grouper, is_identifier_start};
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Lexer for the Fleet expression language.
///
/// Tokens are produced on demand: nothing past the requested token is
/// scanned, and `peek` is idempotent between calls to `next`. The lexer
/// buffers at most one look-ahead token plus the last token it emitted,
/// which drives the operator line-continuation rule.
///
/// # Example
///
/// ```
/// use fleet_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("1 + 2");
/// assert_eq!(lexer.next().unwrap().kind(), TokenKind::Number);
/// assert_eq!(lexer.next().unwrap().kind(), TokenKind::Operator);
/// assert_eq!(lexer.next().unwrap().kind(), TokenKind::Number);
/// assert!(!lexer.has_next().unwrap());
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// The buffered look-ahead token, if any.
    queued: Option<Token>,

    /// The token most recently returned by `next`.
    last_emitted: Option<Token>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over the given source string.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            queued: None,
            last_emitted: None,
        }
    }

    /// Returns the next token without consuming it.
    ///
    /// Calling `peek` repeatedly returns the same token until `next` is
    /// used. Fails with [`ParseError::Exhausted`] when the source has no
    /// tokens left.
    pub fn peek(&mut self) -> Result<Token, ParseError> {
        self.queue_next()?;
        self.queued.clone().ok_or(ParseError::Exhausted)
    }

    /// Returns the next token and advances past it.
    ///
    /// Fails with [`ParseError::Exhausted`] when the source has no tokens
    /// left.
    pub fn next(&mut self) -> Result<Token, ParseError> {
        self.queue_next()?;
        match self.queued.take() {
            Some(token) => {
                self.last_emitted = Some(token.clone());
                Ok(token)
            },
            None => Err(ParseError::Exhausted),
        }
    }

    /// Returns true iff at least one more token can be produced.
    pub fn has_next(&mut self) -> Result<bool, ParseError> {
        self.queue_next()?;
        Ok(self.queued.is_some())
    }

    /// Scans forward until a token is buffered or the input is exhausted.
    ///
    /// Whitespace is absorbed silently, as is a newline directly after an
    /// emitted operator token (an operator at the end of a line continues
    /// the expression onto the next line).
    fn queue_next(&mut self) -> Result<(), ParseError> {
        while self.queued.is_none() && !self.cursor.is_at_end() {
            let first = self.cursor.current_char();
            if first == '\n' {
                let continues = matches!(
                    &self.last_emitted,
                    Some(last) if last.kind() == TokenKind::Operator
                );
                if continues {
                    self.take_line_break();
                    continue;
                }
                let text = self.take_line_break();
                self.queued = Some(Token::new(TokenKind::LineBreak, text));
            } else if is_blank(first) {
                self.take_whitespace();
            } else if first.is_ascii_digit() {
                let text = self.take_number();
                self.queued = Some(Token::new(TokenKind::Number, text));
            } else if is_identifier_start(first) {
                let text = self.take_identifier();
                self.queued = Some(Token::new(TokenKind::Identifier, text));
            } else if first == '#' {
                let text = self.take_comment();
                self.queued = Some(Token::new(TokenKind::Comment, text));
            } else if first == '"' || first == '\'' {
                let text = self.take_string()?;
                self.queued = Some(Token::new(TokenKind::String, text));
            } else if is_grouper(first) {
                let text = self.take_grouper();
                self.queued = Some(Token::new(TokenKind::Grouper, text));
            } else {
                let text = self.take_operator();
                self.queued = Some(Token::new(TokenKind::Operator, text));
            }
        }
        Ok(())
    }

    /// Consumes a run of blanks other than `\n`.
    fn take_whitespace(&mut self) {
        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            if c == '\n' || !is_blank(c) {
                break;
            }
            self.cursor.advance();
        }
    }

    /// Consumes a single newline and returns it.
    fn take_line_break(&mut self) -> String {
        let start = self.cursor.position();
        self.cursor.advance();
        self.cursor.slice_from(start).to_string()
    }
}
