use crate::autograd::BackwardOp;
use crate::value::Value;

/// Multiplies two nodes.
///
/// Backward: `a` receives `b * grad`, `b` receives `a * grad`. Both are
/// accumulated, so an operand that is also used elsewhere in the graph keeps
/// the contributions from its other consumers.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    Value::derived(a.data() * b.data(), vec![a.clone(), b.clone()], BackwardOp::Mul)
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
