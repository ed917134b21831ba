//! The tree-walking evaluator.
//!
//! The evaluator owns a "current environment" pointer and implements
//! [`TreeVisitor`], so evaluation is a dispatch over the four expression
//! tree variants. Evaluation is synchronous and single-threaded; every
//! rule short-circuits on the first error.

use std::rc::Rc;

use fleet_lex::{Token, TokenKind};
use fleet_par::{Expr, TreeVisitor};
use fleet_util::{Error, ParseError, TypeError};

use crate::env::Environment;
use crate::function::EvalResult;
use crate::prelude::default_environment;
use crate::value::Value;

/// Walks expression trees against an environment.
///
/// # Example
///
/// ```
/// use fleet_eval::Evaluator;
/// use fleet_par::parse;
///
/// let tree = parse("1 + 3 * 5").unwrap();
/// let value = Evaluator::with_prelude().evaluate(&tree).unwrap();
/// assert_eq!(value.to_string(), "16.000000");
/// ```
pub struct Evaluator {
    env: Rc<Environment>,
}

impl Evaluator {
    /// Creates an evaluator over the given environment.
    pub fn new(env: Rc<Environment>) -> Self {
        Self { env }
    }

    /// Creates an evaluator over a fresh prelude-seeded root environment.
    pub fn with_prelude() -> Self {
        Self::new(default_environment())
    }

    /// The current environment. Builtins with binding side effects (`=`)
    /// define names through this.
    pub fn environment(&self) -> &Rc<Environment> {
        &self.env
    }

    /// Evaluates a tree to a value or the first error it hits.
    pub fn evaluate(&mut self, tree: &Expr) -> EvalResult {
        tree.accept(self)
    }
}

impl TreeVisitor for Evaluator {
    type Output = EvalResult;

    /// A leaf is a literal or a name to resolve.
    fn visit_leaf(&mut self, token: &Token) -> EvalResult {
        match token.kind() {
            TokenKind::Number => match token.text().parse::<f64>() {
                Ok(n) => Ok(Value::number(n)),
                Err(_) => Err(Error::internal(format!(
                    "number token {:?} does not parse as a double",
                    token.text()
                ))),
            },
            TokenKind::Identifier | TokenKind::Operator => {
                self.env.lookup(token.text()).map_err(Error::from)
            }
            _ => Err(Error::internal(format!(
                "token {} cannot appear in leaf position",
                token
            ))),
        }
    }

    /// Function application, including the reverse path for implied
    /// arguments and syntactic argument passing for name binders.
    fn visit_apply(&mut self, function: &Rc<Expr>, argument: &Rc<Expr>) -> EvalResult {
        let function_value = function.accept(self)?;

        // `(+ 3)` parses with an implied left operand: applying to the
        // implied argument means "take the reverse of this function".
        if argument.is_implied() {
            return match &*function_value {
                Value::Function(f) => f.reverse(),
                other => Err(TypeError::NotReversible(other.type_name()).into()),
            };
        }

        let argument_value = match &*function_value {
            Value::Function(f) if f.wants_identifier() => {
                Rc::new(Value::Identifier(Rc::clone(argument)))
            }
            _ => argument.accept(self)?,
        };

        match &*function_value {
            Value::Function(f) => f.call(self, argument_value),
            other => Err(TypeError::NotCallable(other.type_name()).into()),
        }
    }

    /// Lines run in order; the block's value is the last line's value.
    fn visit_block(&mut self, lines: &[Rc<Expr>]) -> EvalResult {
        let mut last: EvalResult = Err(ParseError::EmptyBlock.into());
        for line in lines {
            last = Ok(line.accept(self)?);
        }
        last
    }

    /// Implied arguments are consumed inside `visit_apply`; reaching one
    /// here means the builder produced a malformed tree.
    fn visit_implied(&mut self) -> EvalResult {
        Err(Error::internal(
            "implied argument outside of a function call",
        ))
    }
}
