use std::fmt;

use crate::value::Value;

/// Tag describing how a node was produced, and therefore how its gradient
/// is pushed back onto its inputs.
///
/// Every derived operator (`sub`, `div`, `neg`, ...) is rewritten in terms of
/// these primitives, so fan-out through the rewritten form needs no rule of
/// its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackwardOp {
    /// Created directly from a number. Nothing to propagate.
    Leaf,
    /// `out = a + b`
    Add,
    /// `out = a * b`
    Mul,
    /// `out = a ** exponent`, with a constant exponent (no gradient w.r.t. it).
    Pow { exponent: f64 },
    /// `out = max(0, a)`
    Relu,
}

impl BackwardOp {
    /// Applies the chain rule for this operation.
    ///
    /// `out_data` and `out_grad` are the forward value and accumulated
    /// gradient of the node that owns this op. Contributions are *added* to
    /// the inputs' gradients, never assigned, so that a value used by several
    /// consumers receives the sum of all of them.
    pub(crate) fn propagate(&self, out_data: f64, out_grad: f64, inputs: &[Value]) {
        match *self {
            BackwardOp::Leaf => {}
            BackwardOp::Add => {
                let (a, b) = binary(inputs);
                a.acc_grad(out_grad);
                b.acc_grad(out_grad);
            }
            BackwardOp::Mul => {
                let (a, b) = binary(inputs);
                // Read both values before writing: `a` and `b` may be the same node.
                let (a_data, b_data) = (a.data(), b.data());
                a.acc_grad(b_data * out_grad);
                b.acc_grad(a_data * out_grad);
            }
            BackwardOp::Pow { exponent } => {
                let a = &inputs[0];
                a.acc_grad(exponent * a.data().powf(exponent - 1.0) * out_grad);
            }
            BackwardOp::Relu => {
                // Sub-gradient 0 at the origin.
                let mask = if out_data > 0.0 { 1.0 } else { 0.0 };
                inputs[0].acc_grad(mask * out_grad);
            }
        }
    }

    /// Number of inputs a node carrying this op must have.
    pub fn arity(&self) -> usize {
        match self {
            BackwardOp::Leaf => 0,
            BackwardOp::Add | BackwardOp::Mul => 2,
            BackwardOp::Pow { .. } | BackwardOp::Relu => 1,
        }
    }
}

fn binary(inputs: &[Value]) -> (&Value, &Value) {
    (&inputs[0], &inputs[1])
}

impl fmt::Display for BackwardOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackwardOp::Leaf => Ok(()),
            BackwardOp::Add => write!(f, "+"),
            BackwardOp::Mul => write!(f, "*"),
            BackwardOp::Pow { exponent } => write!(f, "**{}", exponent),
            BackwardOp::Relu => write!(f, "ReLU"),
        }
    }
}
