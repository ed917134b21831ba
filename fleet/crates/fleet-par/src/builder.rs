//! The tree builder.
//!
//! A shunting-yard variant extended for Fleet's syntax. Beyond classic
//! operator precedence handling it covers:
//!
//! - juxtaposition application: two adjacent operands combine into an
//!   `Apply` immediately, binding tighter than any operator;
//! - grouping levels: each unclosed opener suspends the juxtaposition state
//!   of the enclosing level and starts a fresh one;
//! - implied operands: an operator with no operand yet in its own grouping
//!   level gets an `Implied` left argument, which the evaluator later turns
//!   into a reverse application;
//! - line breaks: every logical line drains the builder completely and
//!   contributes one entry to the resulting `Block`.

use std::rc::Rc;

use fleet_lex::{Lexer, Token, TokenKind};
use fleet_util::ParseError;

use crate::precedence::{is_left_associative, precedence};
use crate::tree::Expr;

/// An operator (or grouper barrier) waiting on the stack.
struct OpEntry {
    token: Token,
    precedence: i32,
    left_associative: bool,
}

/// Juxtaposition state for one grouping level.
#[derive(Clone, Copy)]
struct Level {
    /// Whether the last significant token at this level was an operand, in
    /// which case the next operand is an application argument.
    seen_operand: bool,
    /// Size of the operand stack when this level was entered. An operator
    /// finding the stack at this size has no left operand in its grouping.
    start: usize,
}

impl Level {
    fn new(start: usize) -> Self {
        Self {
            seen_operand: false,
            start,
        }
    }
}

/// Builds expression trees from a token stream, one token at a time.
///
/// # Example
///
/// ```
/// use fleet_lex::Lexer;
/// use fleet_par::TreeBuilder;
///
/// let mut lexer = Lexer::new("1 + 2 * 3");
/// let tree = TreeBuilder::build(&mut lexer).unwrap();
/// assert_eq!(tree.to_string(), "{[[[+], [1]], [[[*], [2]], [3]]]}");
/// ```
pub struct TreeBuilder {
    ops: Vec<OpEntry>,
    level: Level,
    outer_levels: Vec<Level>,
    out: Vec<Rc<Expr>>,
    lines: Vec<Rc<Expr>>,
}

impl TreeBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            level: Level::new(0),
            outer_levels: Vec::new(),
            out: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Drains `lexer` and returns the finished block of lines.
    pub fn build(lexer: &mut Lexer<'_>) -> Result<Rc<Expr>, ParseError> {
        let mut builder = TreeBuilder::new();
        while lexer.has_next()? {
            builder.push_token(lexer.next()?)?;
        }
        builder.finish()
    }

    /// Feeds one token into the builder.
    pub fn push_token(&mut self, token: Token) -> Result<(), ParseError> {
        match token.kind() {
            TokenKind::Identifier | TokenKind::Number | TokenKind::String => {
                self.push_operand(Expr::leaf(token))
            }
            TokenKind::Grouper => {
                if token.is_opening_grouper() {
                    self.open_grouper(token);
                    Ok(())
                } else {
                    self.close_grouper(token)
                }
            }
            TokenKind::Operator => self.push_operator(token),
            TokenKind::LineBreak => self.end_line(),
            TokenKind::Comment => Ok(()),
        }
    }

    /// Finishes the stream: drains like a line break and returns the block.
    pub fn finish(mut self) -> Result<Rc<Expr>, ParseError> {
        self.end_line()?;
        Ok(Rc::new(Expr::Block(self.lines)))
    }

    /// Pushes an operand, combining it with the previous one by
    /// juxtaposition when this level has already seen an operand.
    fn push_operand(&mut self, operand: Rc<Expr>) -> Result<(), ParseError> {
        if self.level.seen_operand {
            let function = self.out.pop().ok_or_else(|| {
                ParseError::Internal("operand stack empty during application".to_string())
            })?;
            self.out.push(Expr::apply(function, operand));
        } else {
            self.level.seen_operand = true;
            self.out.push(operand);
        }
        Ok(())
    }

    /// Pushes an opening grouper as a precedence barrier and enters a new
    /// grouping level.
    fn open_grouper(&mut self, token: Token) {
        self.ops.push(OpEntry {
            token,
            precedence: 0,
            left_associative: false,
        });
        let inner = Level::new(self.out.len());
        self.outer_levels.push(std::mem::replace(&mut self.level, inner));
    }

    /// Pops operators until the matching opener surfaces, then folds the
    /// completed subexpression back into the enclosing level.
    fn close_grouper(&mut self, closer: Token) -> Result<(), ParseError> {
        let mut closed = false;
        while let Some(entry) = self.ops.pop() {
            if entry.token.kind() == TokenKind::Grouper {
                if entry.token.matching_grouper() != Some(closer.text()) {
                    return Err(ParseError::UnmatchedGrouper(entry.token.text().to_string()));
                }
                closed = true;
                break;
            }
            self.reduce(entry.token)?;
        }
        if !closed {
            return Err(ParseError::UnmatchedGrouper(closer.text().to_string()));
        }

        self.level = self.outer_levels.pop().ok_or_else(|| {
            ParseError::Internal("grouping levels out of step with operator stack".to_string())
        })?;

        // The subexpression now counts as a single operand of the enclosing
        // level: either an application argument or the level's first operand.
        if self.level.seen_operand {
            let argument = self.out.pop().ok_or_else(|| {
                ParseError::Internal("operand stack empty after group close".to_string())
            })?;
            let function = self.out.pop().ok_or_else(|| {
                ParseError::Internal("operand stack empty after group close".to_string())
            })?;
            self.out.push(Expr::apply(function, argument));
        } else {
            self.level.seen_operand = true;
        }
        Ok(())
    }

    /// Handles a binary operator: inserts an implied operand if this level
    /// has none, pops tighter-binding operators, and stacks this one.
    fn push_operator(&mut self, token: Token) -> Result<(), ParseError> {
        self.level.seen_operand = false;
        let prec = precedence(token.text());
        let left_associative = is_left_associative(token.text());

        if self.out.len() == self.level.start {
            self.out.push(Rc::new(Expr::Implied));
        }

        while self.ops.last().map_or(false, |top| {
            !top.token.is_opening_grouper()
                && (top.precedence > prec
                    || (top.precedence == prec && top.left_associative))
        }) {
            if let Some(entry) = self.ops.pop() {
                self.reduce(entry.token)?;
            }
        }

        self.ops.push(OpEntry {
            token,
            precedence: prec,
            left_associative,
        });
        Ok(())
    }

    /// Ends the current logical line: resets the grouping levels, drains
    /// every stacked operator, and moves the finished expression (if any)
    /// into the block.
    fn end_line(&mut self) -> Result<(), ParseError> {
        self.outer_levels.clear();
        self.level = Level::new(0);

        if self.out.is_empty() && self.ops.is_empty() {
            return Ok(());
        }

        while let Some(entry) = self.ops.pop() {
            if entry.token.kind() == TokenKind::Grouper {
                return Err(ParseError::UnmatchedGrouper(entry.token.text().to_string()));
            }
            self.reduce(entry.token)?;
        }

        if self.out.len() != 1 {
            return Err(ParseError::Internal(
                "operand stack not drained at line end".to_string(),
            ));
        }
        if let Some(line) = self.out.pop() {
            self.lines.push(line);
        }
        Ok(())
    }

    /// Applies a popped operator to the operands of the current grouping
    /// level.
    ///
    /// With two available operands `L`, `R` this yields
    /// `Apply(Apply(op, L), R)`; with one it yields `Apply(op, R)`; with
    /// none, the bare operator leaf. Operands below the level's floor
    /// belong to the enclosing grouping and are never consumed here. A
    /// lone implied operand collapses: `(+)` must reduce to the operator
    /// itself, not to an application of it.
    fn reduce(&mut self, op: Token) -> Result<(), ParseError> {
        let corrupted =
            || ParseError::Internal("operand stack corrupted during reduction".to_string());
        let op_tree = Expr::leaf(op);
        let available = self.out.len().saturating_sub(self.level.start);
        let reduced = match available {
            0 => op_tree,
            1 => {
                let only = self.out.pop().ok_or_else(corrupted)?;
                if only.is_implied() {
                    op_tree
                } else {
                    Expr::apply(op_tree, only)
                }
            }
            _ => {
                let last = self.out.pop().ok_or_else(corrupted)?;
                let second = self.out.pop().ok_or_else(corrupted)?;
                Expr::apply(Expr::apply(op_tree, second), last)
            }
        };
        self.out.push(reduced);
        Ok(())
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
