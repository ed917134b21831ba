//! Edge case and property tests for fleet-lex.

use fleet_util::ParseError;
use proptest::prelude::*;

use crate::classes::is_blank;
use crate::{Lexer, Token, TokenKind};

fn lex_all(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    while lexer.has_next()? {
        tokens.push(lexer.next()?);
    }
    Ok(tokens)
}

#[test]
fn test_edge_exhausted_after_has_next_false() {
    let mut lexer = Lexer::new("x");
    assert!(lexer.has_next().unwrap());
    lexer.next().unwrap();
    assert!(!lexer.has_next().unwrap());
    assert_eq!(lexer.next(), Err(ParseError::Exhausted));
    assert_eq!(lexer.peek(), Err(ParseError::Exhausted));
}

#[test]
fn test_edge_lone_newlines() {
    let tokens = lex_all("\n\n").unwrap();
    assert_eq!(tokens.len(), 2);
    assert!(tokens.iter().all(|t| t.kind() == TokenKind::LineBreak));
}

#[test]
fn test_edge_operator_at_end_of_input() {
    let tokens = lex_all("1 +").unwrap();
    assert_eq!(tokens.last().unwrap(), &Token::new(TokenKind::Operator, "+"));
}

#[test]
fn test_edge_underscore_alone() {
    assert_eq!(
        lex_all("_").unwrap(),
        vec![Token::new(TokenKind::Identifier, "_")]
    );
}

#[test]
fn test_edge_non_ascii_is_an_operator_character() {
    // Fleet's identifier and digit classes are ASCII, so anything else
    // that is not blank lands in the operator catch-all.
    assert_eq!(
        lex_all("§").unwrap(),
        vec![Token::new(TokenKind::Operator, "§")]
    );
}

#[test]
fn test_edge_error_surfaces_through_has_next() {
    let mut lexer = Lexer::new("  \"unclosed");
    assert_eq!(lexer.has_next(), Err(ParseError::UnclosedString));
}

#[test]
fn test_edge_dense_expression() {
    let tokens = lex_all("0+5").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Number, "0"),
            Token::new(TokenKind::Operator, "+"),
            Token::new(TokenKind::Number, "5"),
        ]
    );
}

fn strip_blanks(s: &str) -> String {
    s.chars().filter(|c| !is_blank(*c)).collect()
}

proptest! {
    /// The lexer terminates on any input free of string literals and
    /// trailing escapes, and the emitted texts reproduce the input up to
    /// absorbed whitespace.
    #[test]
    fn prop_lexer_totality(input in "[a-zA-Z0-9+*/^=<>.,;:$&|#()\\[\\]{} \t\n_-]{0,80}") {
        let tokens = lex_all(&input).unwrap();
        let rebuilt: String = tokens.iter().map(|t| t.text()).collect();
        prop_assert_eq!(strip_blanks(&input), strip_blanks(&rebuilt));
    }

    /// Over a blank-free, comment-free alphabet nothing is absorbed at
    /// all: the concatenated token texts equal the input exactly.
    #[test]
    fn prop_lexer_exact_reconstruction(input in "[a-z0-9+*/^=.()\\[\\]{}_-]{0,60}") {
        let tokens = lex_all(&input).unwrap();
        let rebuilt: String = tokens.iter().map(|t| t.text()).collect();
        prop_assert_eq!(input, rebuilt);
    }

    /// Peeking never changes the token that `next` returns.
    #[test]
    fn prop_peek_matches_next(input in "[a-z0-9+*/^=. ()]{0,40}") {
        let mut lexer = Lexer::new(&input);
        while lexer.has_next().unwrap() {
            let peeked = lexer.peek().unwrap();
            prop_assert_eq!(peeked, lexer.next().unwrap());
        }
    }
}
