use crate::autograd::BackwardOp;
use crate::value::Value;

/// Raises a node to a constant power.
///
/// The exponent is a plain number, so no gradient flows to it. Follows IEEE-754:
/// a negative base with a fractional exponent yields `NaN`, `0 ** -1` yields `inf`.
///
/// Backward: `a` receives `exponent * a^(exponent - 1) * grad`.
pub fn pow_op(a: &Value, exponent: f64) -> Value {
    Value::derived(
        a.data().powf(exponent),
        vec![a.clone()],
        BackwardOp::Pow { exponent },
    )
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
