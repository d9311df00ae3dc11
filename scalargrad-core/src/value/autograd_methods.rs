use crate::autograd::graph::{self, NodeId};
use crate::value::Value;
use std::rc::Rc;

impl Value {
    /// Identity key of this node, shared by all clones of the handle.
    pub fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// Computes the gradient of this node with respect to every node it depends on.
    ///
    /// Seeds `self.grad()` to 1 and accumulates into all other gradients. Calling it
    /// twice without [`Value::zero_grad_all`] in between adds the second pass on top
    /// of the first for every node except `self`.
    pub fn backward(&self) {
        let sorted_nodes = graph::topological_sort(self);
        graph::run_backward(self, &sorted_nodes);
    }

    /// Resets the gradient of this node only.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }

    /// Resets the gradient of this node and of every node it depends on.
    pub fn zero_grad_all(&self) {
        for node in graph::topological_sort(self) {
            node.zero_grad();
        }
    }

    pub(crate) fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Adds `contribution` to the accumulated gradient.
    pub(crate) fn acc_grad(&self, contribution: f64) {
        self.write_data().grad += contribution;
    }

    /// Runs this node's local rule, pushing its gradient onto its inputs.
    pub(crate) fn propagate(&self) {
        let guard = self.read_data();
        guard.op.propagate(guard.data, guard.grad, &guard.inputs);
    }
}
