//! fleet-par - Expression tree construction for the Fleet language.
//!
//! Fleet has no statements, only expressions, and application is written by
//! juxtaposition (`f x`) rather than with a call operator. The tree builder
//! therefore cannot be a stock shunting-yard implementation: adjacency binds
//! tighter than every named operator, an operator with no left operand in
//! its grouping gets an implied placeholder argument (so `(+ 3)` can mean
//! "the reverse of `+`, applied to 3"), and a line break closes off one
//! top-level expression per logical line.
//!
//! The crate exposes:
//! - [`Expr`] - the expression tree, plus [`TreeVisitor`] dispatch
//! - [`precedence`] - the fixed operator precedence table
//! - [`TreeBuilder`] - the token-at-a-time builder
//! - [`parse`] - convenience entry point from source text

pub mod precedence;

mod builder;
mod tree;

#[cfg(test)]
mod edge_cases;

use std::rc::Rc;

use fleet_lex::Lexer;
use fleet_util::ParseError;

pub use builder::TreeBuilder;
pub use tree::{Expr, TreeVisitor};

/// Builds the expression tree for a whole source string.
///
/// The result is always a [`Expr::Block`] with one entry per non-empty
/// logical line.
///
/// # Example
///
/// ```
/// use fleet_par::parse;
///
/// let tree = parse("f x y").unwrap();
/// assert_eq!(tree.to_string(), "{[[[f], [x]], [y]]}");
/// ```
pub fn parse(source: &str) -> Result<Rc<Expr>, ParseError> {
    let mut lexer = Lexer::new(source);
    TreeBuilder::build(&mut lexer)
}
