//! The runtime value model.
//!
//! Fleet is dynamically typed: a [`Value`] is a tagged sum the evaluator
//! pattern-matches at every use site. Values are immutable after
//! construction and shared via `Rc`, so many environment entries may point
//! at one value.

use std::fmt;
use std::rc::Rc;

use fleet_lex::TokenKind;
use fleet_par::Expr;

use crate::function::FunctionValue;

/// The dynamic type of a value, used for call-site checks and for the
/// `P->R` signature strings in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeName {
    Number,
    String,
    Identifier,
    /// Any value at all. This is the declared type of interpreted function
    /// parameters and results, whose real types are only known at run time.
    Any,
    Function(Box<Signature>),
}

impl TypeName {
    /// Builds a function type from its parameter and return types.
    pub fn function(param: TypeName, ret: TypeName) -> TypeName {
        TypeName::Function(Box::new(Signature::new(param, ret)))
    }

    /// Returns true iff `value` inhabits this type.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            TypeName::Any => true,
            TypeName::Number => matches!(value, Value::Number(_)),
            TypeName::String => matches!(value, Value::Str(_)),
            TypeName::Identifier => matches!(value, Value::Identifier(_)),
            TypeName::Function(signature) => match value {
                Value::Function(function) => signature.accepts(function.signature()),
                _ => false,
            },
        }
    }

    /// Structural compatibility, with `Any` as a wildcard on either side.
    fn compatible(&self, other: &TypeName) -> bool {
        match (self, other) {
            (TypeName::Any, _) | (_, TypeName::Any) => true,
            (TypeName::Function(a), TypeName::Function(b)) => a.accepts(b),
            (a, b) => a == b,
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeName::Number => write!(f, "Number"),
            TypeName::String => write!(f, "String"),
            TypeName::Identifier => write!(f, "Identifier"),
            TypeName::Any => write!(f, "Value"),
            TypeName::Function(signature) => write!(f, "{}", signature),
        }
    }
}

/// A function type: parameter and return. Rendered flat, so a curried
/// two-argument numeric operator reads `Number->Number->Number`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub param: TypeName,
    pub ret: TypeName,
}

impl Signature {
    pub fn new(param: TypeName, ret: TypeName) -> Self {
        Self { param, ret }
    }

    /// Returns true iff a function with signature `actual` can stand where
    /// this signature is expected.
    pub fn accepts(&self, actual: &Signature) -> bool {
        self.param.compatible(&actual.param) && self.ret.compatible(&actual.ret)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.param, self.ret)
    }
}

/// A runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A double-precision number.
    Number(f64),
    /// A string. Reserved for the string prelude; no evaluator rule
    /// produces one yet.
    Str(String),
    /// A callable, native or interpreted, possibly curried.
    Function(FunctionValue),
    /// An unevaluated name holder, passed to functions that bind names
    /// (the left side of `=`) so the name is read off the tree instead of
    /// being looked up.
    Identifier(Rc<Expr>),
}

impl Value {
    /// Wraps a number.
    pub fn number(n: f64) -> Rc<Value> {
        Rc::new(Value::Number(n))
    }

    /// The name of this value's type as used in error messages. Function
    /// values name themselves by their full signature.
    pub fn type_name(&self) -> String {
        match self {
            Value::Number(_) => "Number".to_string(),
            Value::Str(_) => "String".to_string(),
            Value::Function(function) => function.signature().to_string(),
            Value::Identifier(_) => "Identifier".to_string(),
        }
    }

    /// Returns the inner number, if this is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the inner function, if this is one.
    pub fn as_function(&self) -> Option<&FunctionValue> {
        match self {
            Value::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Returns the bound name iff this is an identifier holder whose tree
    /// is a plain identifier leaf.
    pub fn identifier_name(&self) -> Option<&str> {
        match self {
            Value::Identifier(tree) => match tree.as_leaf() {
                Some(token) if token.kind() == TokenKind::Identifier => Some(token.text()),
                _ => None,
            },
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{:.6}", n),
            Value::Str(s) => write!(f, "{}", s),
            Value::Function(function) => write!(f, "{}", function),
            Value::Identifier(tree) => write!(f, "{}", tree),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_lex::Token;

    #[test]
    fn test_number_display_uses_six_decimals() {
        assert_eq!(Value::Number(2.0).to_string(), "2.000000");
        assert_eq!(Value::Number(8.8).to_string(), "8.800000");
        assert_eq!(Value::Number(177147.0).to_string(), "177147.000000");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Number(1.0).type_name(), "Number");
        assert_eq!(Value::Str("s".to_string()).type_name(), "String");
        let ident = Value::Identifier(Expr::leaf(Token::new(TokenKind::Identifier, "x")));
        assert_eq!(ident.type_name(), "Identifier");
    }

    #[test]
    fn test_identifier_name_extraction() {
        let good = Value::Identifier(Expr::leaf(Token::new(TokenKind::Identifier, "x")));
        assert_eq!(good.identifier_name(), Some("x"));

        let number_leaf = Value::Identifier(Expr::leaf(Token::new(TokenKind::Number, "5")));
        assert_eq!(number_leaf.identifier_name(), None);

        let apply = Value::Identifier(Expr::apply(
            Expr::leaf(Token::new(TokenKind::Identifier, "f")),
            Expr::leaf(Token::new(TokenKind::Identifier, "x")),
        ));
        assert_eq!(apply.identifier_name(), None);

        assert_eq!(Value::Number(1.0).identifier_name(), None);
    }

    #[test]
    fn test_signature_rendering_is_flat() {
        let curried = Signature::new(
            TypeName::Number,
            TypeName::function(TypeName::Number, TypeName::Number),
        );
        assert_eq!(curried.to_string(), "Number->Number->Number");

        let dynamic = Signature::new(TypeName::Any, TypeName::Any);
        assert_eq!(dynamic.to_string(), "Value->Value");
    }

    #[test]
    fn test_type_matching() {
        assert!(TypeName::Number.matches(&Value::Number(1.0)));
        assert!(!TypeName::Number.matches(&Value::Str("1".to_string())));
        assert!(TypeName::Any.matches(&Value::Number(1.0)));
        assert!(TypeName::Any.matches(&Value::Str("s".to_string())));
        assert!(!TypeName::Identifier.matches(&Value::Number(1.0)));
    }

    #[test]
    fn test_any_is_a_wildcard_in_signatures() {
        let concrete = Signature::new(TypeName::Number, TypeName::Number);
        let dynamic = Signature::new(TypeName::Any, TypeName::Any);
        assert!(dynamic.accepts(&concrete));
        assert!(concrete.accepts(&dynamic));
    }
}
