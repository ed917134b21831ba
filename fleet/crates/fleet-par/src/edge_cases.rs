//! Edge case and property tests for fleet-par.

use std::rc::Rc;

use proptest::prelude::*;

use crate::precedence::precedence;
use crate::tree::Expr;
use crate::parse;

fn parse_line(source: &str) -> Rc<Expr> {
    match &*parse(source).unwrap() {
        Expr::Block(lines) => {
            assert_eq!(lines.len(), 1, "expected one line in {:?}", source);
            lines[0].clone()
        }
        other => panic!("expected block, got {}", other),
    }
}

/// Renders a tree back to parseable source. Operator leaves are sectioned
/// (`(+)`) so they read back as plain values rather than infix operators;
/// applications are fully parenthesized juxtapositions.
fn to_source(tree: &Expr) -> Option<String> {
    match tree {
        Expr::Leaf(token) => {
            if token.kind() == fleet_lex::TokenKind::Operator {
                Some(format!("({})", token.text()))
            } else {
                Some(token.text().to_string())
            }
        }
        Expr::Apply(function, argument) => {
            Some(format!("({} {})", to_source(function)?, to_source(argument)?))
        }
        Expr::Block(_) | Expr::Implied => None,
    }
}

#[test]
fn test_edge_tree_string_for_nested_application() {
    let tree = parse("f x y").unwrap();
    assert_eq!(tree.to_string(), "{[[[f], [x]], [y]]}");
}

#[test]
fn test_edge_tree_string_for_arithmetic() {
    let tree = parse("1.3*5-7/3").unwrap();
    assert_eq!(
        tree.to_string(),
        "{[[[-], [[[*], [1.3]], [5]]], [[[/], [7]], [3]]]}"
    );
}

#[test]
fn test_edge_string_operand_participates_in_application() {
    let tree = parse("f \"arg\"").unwrap();
    assert_eq!(tree.to_string(), "{[[f], [\"arg\"]]}");
}

#[test]
fn test_edge_whole_line_comment_produces_no_line() {
    let tree = parse("# nothing here\n# or here").unwrap();
    assert_eq!(*tree, Expr::Block(Vec::new()));
}

#[test]
fn test_edge_line_break_inside_group_is_rejected() {
    assert!(parse("(1 +\n2)").is_ok(), "operator continuation crosses lines");
    assert!(parse("(1\n2)").is_err(), "bare line break inside group");
}

#[test]
fn test_edge_adjacent_groups_apply() {
    let tree = parse("(f)(x)").unwrap();
    assert_eq!(tree.to_string(), "{[[f], [x]]}");
}

proptest! {
    /// With `prec(op1) > prec(op2)`, `a op2 b op1 c` always nests the op1
    /// application below the op2 application.
    #[test]
    fn prop_higher_precedence_binds_tighter(
        a in 0u32..100, b in 0u32..100, c in 0u32..100,
        (op1, op2) in prop::sample::select(vec![
            ("*", "+"), ("^", "*"), ("/", "-"), (".", ":"), ("%", "$"),
        ])
    ) {
        prop_assume!(precedence(op1) > precedence(op2));
        let line = parse_line(&format!("{} {} {} {} {}", a, op2, b, op1, c));
        let rendered = line.to_string();
        let expected = format!(
            "[[[{op2}], [{a}]], [[[{op1}], [{b}]], [{c}]]]",
        );
        prop_assert_eq!(rendered, expected);
    }

    /// `^` groups to the right regardless of the operands.
    #[test]
    fn prop_caret_right_associative(a in 0u32..100, b in 0u32..100, c in 0u32..100) {
        let line = parse_line(&format!("{} ^ {} ^ {}", a, b, c));
        let expected = format!("[[[^], [{a}]], [[[^], [{b}]], [{c}]]]");
        prop_assert_eq!(line.to_string(), expected);
    }

    /// Juxtaposition binds tighter than any operator.
    #[test]
    fn prop_application_binds_tighter_than_operators(
        op in prop::sample::select(vec!["+", "*", "^", ".", "=", "$", ";"])
    ) {
        let line = parse_line(&format!("f x {} g y", op));
        let expected = format!("[[[{op}], [[f], [x]]], [[g], [y]]]");
        prop_assert_eq!(line.to_string(), expected);
    }

    /// Rendering a parsed line as source and parsing it again gives a
    /// structurally identical tree.
    #[test]
    fn prop_single_line_round_trip(
        source in "(f|g) [a-c]( [a-c]| [0-9])*( (\\+|\\*|\\^|-) [0-9])?"
    ) {
        let first = parse_line(&source);
        if let Some(rendered) = to_source(&first) {
            let second = parse_line(&rendered);
            prop_assert_eq!(first, second);
        }
    }
}
