//! fleet-lex - Lexical analysis for the Fleet expression language.
//!
//! The lexer segments a source string into [`Token`]s on demand through a
//! `peek`/`next`/`has_next` interface. Fleet has no keywords: every maximal
//! run of non-blank characters falls into one of seven token kinds
//! (comments, groupers, identifiers, line breaks, numbers, operators, and
//! strings), and the token text is always the exact source substring.
//!
//! Two scanning rules are easy to miss:
//!
//! - A `\n` becomes a [`TokenKind::LineBreak`] token *unless* the previously
//!   emitted token was an operator, in which case the newline is absorbed and
//!   the expression continues on the next line.
//! - String tokens keep their quotes and escape sequences verbatim; the
//!   lexer only validates that the string is closed and that no escape runs
//!   off the end of the input.

pub mod classes;
pub mod cursor;
pub mod token;

mod lexer;

#[cfg(test)]
mod edge_cases;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};
