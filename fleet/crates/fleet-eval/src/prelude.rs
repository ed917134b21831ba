//! The default environment.
//!
//! The prelude is an ordinary root frame with the built-in operators bound
//! in it. Each arithmetic operator is a curried native pair of stages (so
//! `2 + 3` evaluates as `((+) 2) 3`, with `(+) 2` its own short-lived
//! function value), and `=` is the one builtin with a side effect: its
//! second stage defines a name in the calling evaluator's current
//! environment.

use std::rc::Rc;

use fleet_util::{Error, TypeError};

use crate::env::Environment;
use crate::function::{curried_binary_number, FunctionValue};
use crate::value::{Signature, TypeName, Value};

/// Builds a fresh root environment with the built-in bindings:
/// `+ - * / % ^` as curried `Number->Number->Number` natives and `=` as the
/// curried `Identifier->Value->Value` binder.
pub fn default_environment() -> Rc<Environment> {
    let env = Environment::root();

    let arithmetic: [(&str, fn(f64, f64) -> f64); 6] = [
        ("+", |x, y| x + y),
        ("-", |x, y| x - y),
        ("*", |x, y| x * y),
        ("/", |x, y| x / y),
        ("%", |x, y| x % y),
        ("^", f64::powf),
    ];
    for (name, op) in arithmetic {
        env.define(name, curried_binary_number(op))
            .expect("prelude names are distinct");
    }

    env.define("=", assign_builtin())
        .expect("prelude names are distinct");

    env
}

/// The `=` builtin. Its parameter type is `Identifier`, so the evaluator
/// hands the left-hand tree over unevaluated; the second stage extracts
/// the name, defines it, and yields the bound value.
fn assign_builtin() -> Rc<Value> {
    let signature = Signature::new(
        TypeName::Identifier,
        TypeName::function(TypeName::Any, TypeName::Any),
    );
    let outer = FunctionValue::native(signature, |_evaluator, target| {
        let stage_signature = Signature::new(TypeName::Any, TypeName::Any);
        let stage = FunctionValue::native(stage_signature, move |evaluator, value| {
            let name = target
                .identifier_name()
                .map(str::to_string)
                .ok_or_else(|| TypeError::InvalidIdentifier(target.to_string()))?;
            evaluator
                .environment()
                .define(&name, Rc::clone(&value))
                .map_err(Error::from)?;
            Ok(value)
        });
        Ok(Rc::new(Value::Function(stage)))
    });
    Rc::new(Value::Function(outer))
}
