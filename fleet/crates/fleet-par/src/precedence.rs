//! The operator precedence table.
//!
//! Precedences are fixed at build time and cannot be changed by code.
//! Nothing may have a precedence below 0: that level is reserved for the
//! grouper barriers the tree builder pushes internally. Operators absent
//! from the table get [`DEFAULT_PRECEDENCE`], and every operator except `^`
//! is left-associative.

/// Precedence assigned to operators not named in the table.
pub const DEFAULT_PRECEDENCE: i32 = 60;

/// Returns the precedence level of an operator.
///
/// Function application by juxtaposition is handled structurally by the
/// tree builder and binds tighter than any value returned here.
pub fn precedence(op: &str) -> i32 {
    match op {
        "." => 100,
        ":" => 90,
        "^" => 80,
        "*" | "/" | "%" => 70,
        "+" | "++" | "-" => 50,
        "&" | "|" => 40,
        "$" => 30,
        "," => 20,
        ";" => 10,
        "=" => 0,
        _ => DEFAULT_PRECEDENCE,
    }
}

/// Returns true iff the operator groups left-to-right.
pub fn is_left_associative(op: &str) -> bool {
    op != "^"
}
