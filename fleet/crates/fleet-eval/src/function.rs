//! Function values.
//!
//! A function holds either a native Rust callback or an interpreted body
//! (an expression tree, a parameter name, and the environment captured at
//! definition time). Currying is not a language primitive: multi-argument
//! operations are natives that return further function values, each stage
//! capturing the arguments before it.
//!
//! A curried function additionally supports the *reversible call*
//! capability: its reverse `g` satisfies `g a b = f b a`. The evaluator
//! reaches for the reverse when a function is applied to an implied
//! operand, which is what `(+ 3)` builds.

use std::fmt;
use std::rc::Rc;

use fleet_par::Expr;
use fleet_util::{Error, TypeError};

use crate::env::Environment;
use crate::evaluator::Evaluator;
use crate::value::{Signature, TypeName, Value};

/// The result of any evaluation step: a shared value or the first error.
pub type EvalResult = Result<Rc<Value>, Error>;

/// A native callback. It receives the evaluator so that builtins like `=`
/// can reach the caller's current environment.
pub type NativeFn = Rc<dyn Fn(&mut Evaluator, Rc<Value>) -> EvalResult>;

#[derive(Clone)]
enum Body {
    Native(NativeFn),
    Tree {
        body: Rc<Expr>,
        param: String,
        env: Rc<Environment>,
    },
}

impl PartialEq for Body {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Body::Native(a), Body::Native(b)) => Rc::ptr_eq(a, b),
            (
                Body::Tree {
                    body: b1,
                    param: p1,
                    env: e1,
                },
                Body::Tree {
                    body: b2,
                    param: p2,
                    env: e2,
                },
            ) => Rc::ptr_eq(b1, b2) && p1 == p2 && Rc::ptr_eq(e1, e2),
            _ => false,
        }
    }
}

/// A callable value.
#[derive(Clone, PartialEq)]
pub struct FunctionValue {
    signature: Signature,
    body: Body,
    native: bool,
}

impl FunctionValue {
    /// Creates a native function that presents itself as native.
    pub fn native(
        signature: Signature,
        action: impl Fn(&mut Evaluator, Rc<Value>) -> EvalResult + 'static,
    ) -> Self {
        Self::native_with(signature, true, action)
    }

    /// Creates a native function with explicit nativeness. The reverse of
    /// a function keeps the original's presentation, so a reversed
    /// interpreted function must not suddenly render as `<Native …>`.
    pub fn native_with(
        signature: Signature,
        native: bool,
        action: impl Fn(&mut Evaluator, Rc<Value>) -> EvalResult + 'static,
    ) -> Self {
        Self {
            signature,
            body: Body::Native(Rc::new(action)),
            native,
        }
    }

    /// Creates an interpreted function from a body tree, the parameter
    /// name, and the environment captured at the definition site.
    ///
    /// Interpreted functions have the dynamic signature `Value->Value`.
    pub fn interpreted(body: Rc<Expr>, param: impl Into<String>, env: Rc<Environment>) -> Self {
        Self {
            signature: Signature::new(TypeName::Any, TypeName::Any),
            body: Body::Tree {
                body,
                param: param.into(),
                env,
            },
            native: false,
        }
    }

    /// The function's type signature.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Whether the function renders as `<Native …>`.
    pub fn is_native(&self) -> bool {
        self.native
    }

    /// Whether the evaluator should pass the argument *unevaluated*, as an
    /// identifier holder, instead of evaluating it first.
    pub fn wants_identifier(&self) -> bool {
        self.signature.param == TypeName::Identifier
    }

    /// Calls the function with an already-prepared argument value.
    ///
    /// The argument is checked against the declared parameter type. For an
    /// interpreted body, a fresh child of the captured environment binds
    /// the parameter for exactly this call, so nothing leaks into the
    /// caller or into the closure's home frame.
    pub fn call(&self, evaluator: &mut Evaluator, argument: Rc<Value>) -> EvalResult {
        if !self.signature.param.matches(&argument) {
            return Err(TypeError::WrongArgumentType {
                expected: self.signature.param.to_string(),
                got: argument.type_name(),
            }
            .into());
        }

        match &self.body {
            Body::Native(action) => action(evaluator, argument),
            Body::Tree { body, param, env } => {
                let frame = Environment::child(env);
                frame
                    .define(param, argument)
                    .map_err(|_| Error::internal("parameter collided in a fresh call frame"))?;
                let mut sub = Evaluator::new(frame);
                let result = sub.evaluate(body)?;
                if !self.signature.ret.matches(&result) {
                    return Err(TypeError::WrongReturnType {
                        expected: self.signature.ret.to_string(),
                        got: result.type_name(),
                    }
                    .into());
                }
                Ok(result)
            }
        }
    }

    /// Returns the reverse of this function: `reverse(f) a b = f b a`.
    ///
    /// Only curried functions — those whose declared return type is itself
    /// a function — can be reversed.
    pub fn reverse(&self) -> EvalResult {
        let inner = match &self.signature.ret {
            TypeName::Function(signature) => (**signature).clone(),
            _ => {
                return Err(
                    TypeError::NotReversibleFunction(self.signature.to_string()).into(),
                )
            }
        };

        let first_param = self.signature.param.clone();
        let second_param = inner.param;
        let final_ret = inner.ret;
        let native = self.native;
        let original = self.clone();

        let reversed_signature = Signature::new(
            second_param,
            TypeName::function(first_param.clone(), final_ret.clone()),
        );

        let reversed = FunctionValue::native_with(
            reversed_signature,
            native,
            move |_evaluator, second| {
                let original = original.clone();
                let final_ret = final_ret.clone();
                let stage_signature = Signature::new(first_param.clone(), final_ret.clone());
                let stage = FunctionValue::native_with(
                    stage_signature,
                    native,
                    move |evaluator, first| {
                        let partial = original.call(evaluator, first)?;
                        let partial = match &*partial {
                            Value::Function(function) => function.clone(),
                            other => {
                                return Err(TypeError::NotCallable(other.type_name()).into())
                            }
                        };
                        let result = partial.call(evaluator, Rc::clone(&second))?;
                        if !final_ret.matches(&result) {
                            return Err(TypeError::WrongReturnType {
                                expected: final_ret.to_string(),
                                got: result.type_name(),
                            }
                            .into());
                        }
                        Ok(result)
                    },
                );
                Ok(Rc::new(Value::Function(stage)))
            },
        );
        Ok(Rc::new(Value::Function(reversed)))
    }
}

/// Builds a curried two-argument numeric native from a host callback:
/// `Number -> Number -> Number`, with the first stage capturing `x`.
pub(crate) fn curried_binary_number(op: impl Fn(f64, f64) -> f64 + Copy + 'static) -> Rc<Value> {
    let signature = Signature::new(
        TypeName::Number,
        TypeName::function(TypeName::Number, TypeName::Number),
    );
    let outer = FunctionValue::native(signature, move |_evaluator, x| {
        let first = x
            .as_number()
            .ok_or_else(|| Error::internal("argument survived a Number type check but is not a number"))?;
        let stage_signature = Signature::new(TypeName::Number, TypeName::Number);
        let stage = FunctionValue::native(stage_signature, move |_evaluator, y| {
            let second = y.as_number().ok_or_else(|| {
                Error::internal("argument survived a Number type check but is not a number")
            })?;
            Ok(Value::number(op(first, second)))
        });
        Ok(Rc::new(Value::Function(stage)))
    });
    Rc::new(Value::Function(outer))
}

impl fmt::Display for FunctionValue {
    /// Renders `<Native P->R>` or `<Function P->R>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.native {
            write!(f, "<Native {}>", self.signature)
        } else {
            write!(f, "<Function {}>", self.signature)
        }
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_lex::{Token, TokenKind};

    fn evaluator() -> Evaluator {
        Evaluator::new(Environment::root())
    }

    fn call_chain(function: &Rc<Value>, args: &[f64]) -> EvalResult {
        let mut ev = evaluator();
        let mut current = Rc::clone(function);
        for arg in args {
            let f = match &*current {
                Value::Function(f) => f.clone(),
                other => return Err(TypeError::NotCallable(other.type_name()).into()),
            };
            current = f.call(&mut ev, Value::number(*arg))?;
        }
        Ok(current)
    }

    #[test]
    fn test_curried_native_applies_in_order() {
        let subtract = curried_binary_number(|x, y| x - y);
        let result = call_chain(&subtract, &[10.0, 4.0]).unwrap();
        assert_eq!(result.as_number(), Some(6.0));
    }

    #[test]
    fn test_partial_application_is_a_function() {
        let add = curried_binary_number(|x, y| x + y);
        let partial = call_chain(&add, &[2.0]).unwrap();
        assert_eq!(partial.to_string(), "<Native Number->Number>");
    }

    #[test]
    fn test_wrong_argument_type() {
        let add = curried_binary_number(|x, y| x + y);
        let mut ev = evaluator();
        let f = add.as_function().unwrap();
        let err = f
            .call(&mut ev, Rc::new(Value::Str("two".to_string())))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "TypeError: Expected argument of type Number but got argument of type String"
        );
    }

    #[test]
    fn test_reverse_swaps_argument_order() {
        let subtract = curried_binary_number(|x, y| x - y);
        let reversed = subtract.as_function().unwrap().reverse().unwrap();
        // reverse(-) 4 10 must equal 10 - 4.
        let result = call_chain(&reversed, &[4.0, 10.0]).unwrap();
        assert_eq!(result.as_number(), Some(6.0));
    }

    #[test]
    fn test_reverse_keeps_nativeness_and_swaps_signature() {
        let divide = curried_binary_number(|x, y| x / y);
        let reversed = divide.as_function().unwrap().reverse().unwrap();
        assert_eq!(reversed.to_string(), "<Native Number->Number->Number>");
    }

    #[test]
    fn test_uncurried_function_cannot_be_reversed() {
        let signature = Signature::new(TypeName::Number, TypeName::Number);
        let stage = FunctionValue::native(signature, |_ev, x| Ok(x));
        let err = stage.reverse().unwrap_err();
        assert_eq!(
            err.to_string(),
            "TypeError: Cannot reverse function of type Number->Number"
        );
    }

    #[test]
    fn test_reverse_checks_the_final_return_type() {
        // A function that claims Number->Number->Number but whose second
        // stage produces a string: the reverse must notice.
        let signature = Signature::new(
            TypeName::Number,
            TypeName::function(TypeName::Number, TypeName::Number),
        );
        let lying = FunctionValue::native(signature, |_ev, _x| {
            let stage = FunctionValue::native(
                Signature::new(TypeName::Number, TypeName::Number),
                |_ev, _y| Ok(Rc::new(Value::Str("oops".to_string()))),
            );
            Ok(Rc::new(Value::Function(stage)))
        });
        let reversed = lying.reverse().unwrap();
        let err = call_chain(&reversed, &[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "TypeError: Expected return value of type Number but got return value of type String"
        );
    }

    #[test]
    fn test_interpreted_function_resolves_free_names_in_captured_env() {
        let home = Environment::root();
        home.define("base", Value::number(40.0)).unwrap();
        let body = Expr::leaf(Token::new(TokenKind::Identifier, "base"));
        let function = FunctionValue::interpreted(body, "unused", Rc::clone(&home));

        // Invoke from an unrelated environment: the captured one wins.
        let elsewhere = Environment::root();
        let mut ev = Evaluator::new(elsewhere);
        let result = function.call(&mut ev, Value::number(0.0)).unwrap();
        assert_eq!(result.as_number(), Some(40.0));
    }

    #[test]
    fn test_interpreted_function_binds_its_parameter() {
        let home = Environment::root();
        let body = Expr::leaf(Token::new(TokenKind::Identifier, "n"));
        let function = FunctionValue::interpreted(body, "n", Rc::clone(&home));
        let mut ev = Evaluator::new(Environment::root());
        let result = function.call(&mut ev, Value::number(5.0)).unwrap();
        assert_eq!(result.as_number(), Some(5.0));
    }

    #[test]
    fn test_parameter_does_not_leak_into_home_frame() {
        let home = Environment::root();
        let body = Expr::leaf(Token::new(TokenKind::Identifier, "n"));
        let function = FunctionValue::interpreted(body, "n", Rc::clone(&home));
        let mut ev = Evaluator::new(Environment::root());
        function.call(&mut ev, Value::number(5.0)).unwrap();
        assert!(home.lookup("n").is_err());
    }

    #[test]
    fn test_interpreted_function_display() {
        let function = FunctionValue::interpreted(
            Expr::leaf(Token::new(TokenKind::Number, "1")),
            "x",
            Environment::root(),
        );
        assert_eq!(function.to_string(), "<Function Value->Value>");
    }
}
