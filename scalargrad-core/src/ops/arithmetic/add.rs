use crate::autograd::BackwardOp;
use crate::value::Value;

/// Adds two nodes.
///
/// Backward: both inputs receive the output gradient unchanged.
pub fn add_op(a: &Value, b: &Value) -> Value {
    Value::derived(a.data() + b.data(), vec![a.clone(), b.clone()], BackwardOp::Add)
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
