use crate::ops::arithmetic::{mul_op, pow_op};
use crate::value::Value;

/// `a / b`, built as `a * b^-1`.
///
/// Division by a zero-valued node is not an error: the result (and the
/// gradients) follow IEEE-754 and become infinite or `NaN`.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_op(b, -1.0))
}

// --- Tests ---
#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
