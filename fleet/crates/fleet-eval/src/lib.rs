//! fleet-eval - Tree-walking evaluation for the Fleet language.
//!
//! The evaluator walks an expression tree against a lexically nested
//! [`Environment`] of named values. Every Fleet function takes exactly one
//! argument; multi-argument operations are curried natives that return
//! further functions, and a curried function can be *reversed* (its two
//! argument positions swapped), which is how `(+ 3)` becomes the
//! partial application `λy. y + 3`.
//!
//! Values are shared immutably via `Rc`: environments form a tree (child to
//! parent only), closures capture their defining frame by reference, and
//! frames are append-only, so plain reference counting is all the memory
//! management this crate needs.

mod env;
mod evaluator;
mod function;
mod prelude;
mod value;

pub use env::Environment;
pub use evaluator::Evaluator;
pub use function::{EvalResult, FunctionValue, NativeFn};
pub use prelude::default_environment;
pub use value::{Signature, TypeName, Value};
