use crate::autograd::BackwardOp;
use crate::value::Value;
use std::rc::Rc;

/// Internal storage for a single node of the computation graph.
///
/// It is wrapped in `Rc<RefCell<ValueData>>` by [`Value`] so that one node can
/// be an input of many others (fan-out) while its gradient stays mutable
/// through a shared handle.
#[derive(Debug)]
pub struct ValueData {
    /// Forward value. Never changes after construction.
    pub(crate) data: f64,
    /// Accumulated d(root)/d(self). Starts at 0 and is only ever added to
    /// during propagation; the root of a backward pass is seeded to 1.
    pub(crate) grad: f64,
    /// The operands this node was computed from, in operand order.
    /// Leaves have none.
    pub(crate) inputs: Vec<Value>,
    /// How gradient flows from this node back to `inputs`.
    pub(crate) op: BackwardOp,
}

impl ValueData {
    pub(crate) fn new(data: f64, inputs: Vec<Value>, op: BackwardOp) -> Self {
        debug_assert_eq!(inputs.len(), op.arity(), "input count does not match {:?}", op);
        ValueData {
            data,
            grad: 0.0,
            inputs,
            op,
        }
    }

    pub(crate) fn leaf(data: f64) -> Self {
        ValueData::new(data, Vec::new(), BackwardOp::Leaf)
    }

    pub fn is_leaf(&self) -> bool {
        self.inputs.is_empty()
    }
}

impl Drop for ValueData {
    /// Frees the input chain with a work list instead of nested `Rc` drops, so
    /// dropping an arbitrarily deep graph does not grow the call stack.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.inputs);
        while let Some(input) = pending.pop() {
            // Last handle to that node: detach its inputs before it is freed.
            if let Ok(cell) = Rc::try_unwrap(input.data) {
                let mut node = cell.into_inner();
                pending.append(&mut node.inputs);
            }
        }
    }
}
