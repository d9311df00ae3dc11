use crate::autograd::BackwardOp;
use crate::value::Value;

// --- Forward Operation ---

/// Applies the Rectified Linear Unit: `max(0, a)`.
///
/// Backward: the gradient passes through when the *output* is strictly
/// positive and is blocked otherwise. At exactly `a == 0` the sub-gradient 0
/// is used.
pub fn relu_op(a: &Value) -> Value {
    let x = a.data();
    let data = if x < 0.0 { 0.0 } else { x };
    Value::derived(data, vec![a.clone()], BackwardOp::Relu)
}

// --- Tests ---
#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
