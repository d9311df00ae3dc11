use crate::ops::arithmetic::{add_op, mul_op};
use crate::value::Value;

/// `a - b`, built as `a + b * (-1)`.
///
/// Has no backward rule of its own: the gradient flows through the `add` and
/// `mul` nodes it creates.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    add_op(a, &mul_op(b, &Value::new(-1.0)))
}

// --- Tests ---
#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
