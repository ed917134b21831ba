//! Core error types for the Fleet interpreter.
//!
//! Three layers: [`ParseError`] for malformed source, [`TypeError`] for
//! runtime mismatches in well-formed source, and [`Error`] as the unified
//! type the driver reports. The `Display` form of [`Error`] carries the
//! kind prefix (`ParseError: `, `TypeError: `, `InternalError: `), so the
//! user-visible message is always `Error: <kind>: <detail>`.

use thiserror::Error;

/// An error produced while turning source text into an expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A grouper was opened but never closed, or closed without a
    /// matching opener. Carries the offending grouper text.
    #[error("Unmatched {0}")]
    UnmatchedGrouper(String),

    /// A string literal ran to the end of input without a closing quote.
    #[error("Unclosed string")]
    UnclosedString,

    /// A backslash escape had no character after it.
    #[error("Unterminated string escape")]
    UnterminatedEscape,

    /// A block with no lines was evaluated.
    #[error("Invalid empty code block")]
    EmptyBlock,

    /// `peek` or `next` was called on a lexer that had already reported
    /// `has_next() == false`.
    #[error("Token stream is exhausted")]
    Exhausted,

    /// An invariant of the tree builder was violated. Should never fire
    /// on any input, well-formed or not.
    #[error("Internal parse error: {0}")]
    Internal(String),
}

/// A runtime mismatch between a value and the way it was used.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TypeError {
    /// A name was looked up but defined in no reachable frame.
    #[error("{0} is undefined")]
    Undefined(String),

    /// A name was defined twice in the same frame.
    #[error("{0} is already defined")]
    AlreadyDefined(String),

    /// The left side of a binding was not a plain identifier.
    #[error("{0} is not a valid identifier")]
    InvalidIdentifier(String),

    /// A non-function value was applied to an argument.
    #[error("Value of type {0} cannot be called")]
    NotCallable(String),

    /// A function received an argument of the wrong type.
    #[error("Expected argument of type {expected} but got argument of type {got}")]
    WrongArgumentType { expected: String, got: String },

    /// A function produced a result of the wrong type.
    #[error("Expected return value of type {expected} but got return value of type {got}")]
    WrongReturnType { expected: String, got: String },

    /// A non-function value appeared where a reversible call was needed.
    #[error("Cannot reverse value of type {0}")]
    NotReversible(String),

    /// A function that does not return a function cannot be reversed.
    #[error("Cannot reverse function of type {0}")]
    NotReversibleFunction(String),
}

/// The unified error type returned by evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("ParseError: {0}")]
    Parse(#[from] ParseError),

    #[error("TypeError: {0}")]
    Type(#[from] TypeError),

    /// An invariant violation the interpreter believes unreachable.
    #[error("InternalError: {0}")]
    Internal(String),
}

impl Error {
    /// Shorthand for building an [`Error::Internal`].
    pub fn internal(message: impl Into<String>) -> Self {
        Error::Internal(message.into())
    }
}
