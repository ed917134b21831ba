//! The expression tree.
//!
//! An [`Expr`] is one of four things: a single token, an application of one
//! subtree to another, a block of sibling lines, or an implied operand
//! standing in for the missing left argument of an operator. Subtrees are
//! shared via `Rc` because the evaluator hands them out again inside
//! function and identifier values; nothing mutates a tree after the builder
//! returns it.

use std::fmt;
use std::rc::Rc;

use fleet_lex::Token;

/// A structured Fleet expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A single identifier, number, string, or operator token.
    Leaf(Token),
    /// Application of the first subtree to the second.
    Apply(Rc<Expr>, Rc<Expr>),
    /// Sibling expressions, one per non-empty logical line.
    Block(Vec<Rc<Expr>>),
    /// The missing left operand of an operator such as the one in `(+ 3)`.
    Implied,
}

impl Expr {
    /// Wraps a token as a shared leaf.
    pub fn leaf(token: Token) -> Rc<Expr> {
        Rc::new(Expr::Leaf(token))
    }

    /// Builds a shared application node.
    pub fn apply(function: Rc<Expr>, argument: Rc<Expr>) -> Rc<Expr> {
        Rc::new(Expr::Apply(function, argument))
    }

    /// Returns true iff this tree is the implied operand.
    pub fn is_implied(&self) -> bool {
        matches!(self, Expr::Implied)
    }

    /// Returns the token iff this tree is a leaf.
    pub fn as_leaf(&self) -> Option<&Token> {
        match self {
            Expr::Leaf(token) => Some(token),
            _ => None,
        }
    }

    /// Routes this tree to the matching handler of `visitor`.
    pub fn accept<V: TreeVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Leaf(token) => visitor.visit_leaf(token),
            Expr::Apply(function, argument) => visitor.visit_apply(function, argument),
            Expr::Block(lines) => visitor.visit_block(lines),
            Expr::Implied => visitor.visit_implied(),
        }
    }
}

/// Dispatch over the four expression tree variants.
///
/// The evaluator is the main implementor; diagnostics or future passes can
/// implement it without pattern-matching on [`Expr`] directly.
pub trait TreeVisitor {
    type Output;

    fn visit_leaf(&mut self, token: &Token) -> Self::Output;
    fn visit_apply(&mut self, function: &Rc<Expr>, argument: &Rc<Expr>) -> Self::Output;
    fn visit_block(&mut self, lines: &[Rc<Expr>]) -> Self::Output;
    fn visit_implied(&mut self) -> Self::Output;
}

impl fmt::Display for Expr {
    /// Renders the diagnostic form: `[token]`, `[f, x]`, `{l1; l2}`, or
    /// `<implied>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Leaf(token) => write!(f, "[{}]", token.text()),
            Expr::Apply(function, argument) => write!(f, "[{}, {}]", function, argument),
            Expr::Block(lines) => {
                write!(f, "{{")?;
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", line)?;
                }
                write!(f, "}}")
            }
            Expr::Implied => write!(f, "<implied>"),
        }
    }
}
