use crate::autograd::BackwardOp;
use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod arithmetic_methods;
mod autograd_methods;
mod traits;

/// A scalar node in a dynamically built computation graph.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** the same node can be the operand of many other
///     nodes. Cloning a `Value` is cheap and yields a handle to the *same* node.
/// 2.  **Interior Mutability:** the gradient is accumulated during the backward
///     pass through immutable handles.
///
/// A node is reclaimed once no user handle and no consumer node refers to it.
/// `Value` is `!Send`: graphs are built and differentiated on a single thread.
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a leaf node (no inputs, gradient 0).
    pub fn new(data: f64) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::leaf(data))),
        }
    }

    /// General constructor used by every operator.
    pub(crate) fn derived(data: f64, inputs: Vec<Value>, op: BackwardOp) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::new(data, inputs, op))),
        }
    }

    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }

    /// Returns the forward value.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Returns the accumulated gradient. Meaningful after [`Value::backward`].
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Returns the operation that produced this node.
    pub fn op(&self) -> BackwardOp {
        self.read_data().op
    }

    /// Returns handles to the operands this node was computed from.
    pub fn inputs(&self) -> Vec<Value> {
        self.read_data().inputs.clone()
    }

    pub(crate) fn input(&self, index: usize) -> Option<Value> {
        self.read_data().inputs.get(index).cloned()
    }

    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

impl From<f32> for Value {
    fn from(data: f32) -> Self {
        Value::new(f64::from(data))
    }
}

impl From<i32> for Value {
    fn from(data: i32) -> Self {
        Value::new(f64::from(data))
    }
}
