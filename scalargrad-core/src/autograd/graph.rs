use crate::error::ScalarGradError;
use crate::value::Value;
use crate::value_data::ValueData;
use std::cell::RefCell;
use std::collections::HashSet;

/// Identity of a node in the computation graph.
///
/// This is the address of the shared `RefCell<ValueData>`, so it is stable across
/// clones of a [`Value`] and unrelated to the node's numeric value. It is only
/// used as a key and never dereferenced.
pub type NodeId = *const RefCell<ValueData>;

/// Depth-first post-order walk over the inputs of a root node.
///
/// A node is yielded only after every node reachable through its inputs has been
/// yielded, and each node is yielded exactly once no matter how many consumers it
/// has. Inputs are explored in operand order, which gives the same sequence as the
/// recursive formulation without using the call stack.
pub struct PostOrder {
    visited: HashSet<NodeId>,
    // (node, index of the next input to explore)
    stack: Vec<(Value, usize)>,
    max_nodes: Option<usize>,
    limit_exceeded: bool,
}

impl PostOrder {
    pub fn new(root: &Value) -> Self {
        let mut visited = HashSet::new();
        visited.insert(root.node_id());
        PostOrder {
            visited,
            stack: vec![(root.clone(), 0)],
            max_nodes: None,
            limit_exceeded: false,
        }
    }

    /// Like [`PostOrder::new`], but the walk ends as soon as more than `max_nodes`
    /// distinct nodes have been discovered. [`PostOrder::limit_exceeded`] then
    /// reports it. The work done is bounded by the limit, not by the graph size.
    pub fn with_max_nodes(root: &Value, max_nodes: usize) -> Self {
        let mut walk = PostOrder::new(root);
        walk.max_nodes = Some(max_nodes);
        walk.check_limit();
        walk
    }

    /// Number of distinct nodes discovered so far (yielded or still pending).
    pub fn discovered(&self) -> usize {
        self.visited.len()
    }

    /// Whether the walk stopped early because the node limit was passed.
    pub fn limit_exceeded(&self) -> bool {
        self.limit_exceeded
    }

    fn check_limit(&mut self) {
        if let Some(limit) = self.max_nodes {
            if self.visited.len() > limit {
                self.limit_exceeded = true;
                self.stack.clear();
            }
        }
    }
}

impl Iterator for PostOrder {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        while let Some((node, cursor)) = self.stack.last_mut() {
            match node.input(*cursor) {
                Some(input) => {
                    *cursor += 1;
                    if self.visited.insert(input.node_id()) {
                        self.stack.push((input, 0));
                        self.check_limit();
                    }
                }
                None => return self.stack.pop().map(|(done, _)| done),
            }
        }
        None
    }
}

/// Returns every node reachable from `root` in topological order: inputs first,
/// `root` last. Walking the result backwards visits each node before any of its
/// inputs.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    PostOrder::new(root).collect()
}

/// Seeds `root` and runs every local rule, consumers before their inputs.
/// `sorted_nodes` must be the topological sort of `root`.
pub(crate) fn run_backward(root: &Value, sorted_nodes: &[Value]) {
    log::debug!("backward: propagating through {} nodes", sorted_nodes.len());

    // The seed is written before any rule runs; the root's own rule still fires.
    root.set_grad(1.0);
    for node in sorted_nodes.iter().rev() {
        log::trace!("backward: {:?}", node);
        node.propagate();
    }
}

/// Driver for the backward pass.
///
/// `Value::backward()` uses the default (unbounded) configuration. Callers that
/// differentiate graphs they did not build themselves can cap the number of nodes
/// a single pass is allowed to visit.
#[derive(Debug, Clone, Default)]
pub struct ComputationGraph {
    max_nodes: Option<usize>,
}

impl ComputationGraph {
    pub fn new() -> Self {
        ComputationGraph { max_nodes: None }
    }

    /// Aborts any traversal that discovers more than `max_nodes` nodes.
    pub fn with_max_nodes(max_nodes: usize) -> Self {
        ComputationGraph {
            max_nodes: Some(max_nodes),
        }
    }

    pub fn max_nodes(&self) -> Option<usize> {
        self.max_nodes
    }

    /// Topological sort of the graph rooted at `root`, honouring the node limit.
    ///
    /// The limit is checked as nodes are discovered, so an oversized graph is
    /// rejected after at most `max_nodes + 1` discoveries.
    pub fn sort(&self, root: &Value) -> Result<Vec<Value>, ScalarGradError> {
        let mut walk = match self.max_nodes {
            Some(limit) => PostOrder::with_max_nodes(root, limit),
            None => PostOrder::new(root),
        };
        let sorted_nodes: Vec<Value> = walk.by_ref().collect();
        if let Some(limit) = self.max_nodes {
            if walk.limit_exceeded() {
                log::warn!(
                    "Aborting traversal: {} nodes discovered, limit is {}",
                    walk.discovered(),
                    limit
                );
                return Err(ScalarGradError::NodeLimitExceeded {
                    limit,
                    visited: walk.discovered(),
                });
            }
        }
        Ok(sorted_nodes)
    }

    /// Computes d(root)/d(node) for every node reachable from `root`.
    ///
    /// The root's gradient is overwritten with 1 before any rule runs; every other
    /// gradient is accumulated into, so gradients from a previous pass are kept
    /// unless the caller resets them (see [`ComputationGraph::zero_grad`]).
    ///
    /// # Errors
    /// Returns `NodeLimitExceeded` if a limit is configured and the graph is larger.
    /// No gradient is modified in that case.
    pub fn backward(&self, root: &Value) -> Result<(), ScalarGradError> {
        let sorted_nodes = self.sort(root)?;
        run_backward(root, &sorted_nodes);
        Ok(())
    }

    /// Resets the gradient of every node reachable from `root` to 0.
    pub fn zero_grad(&self, root: &Value) -> Result<(), ScalarGradError> {
        for node in self.sort(root)? {
            node.zero_grad();
        }
        Ok(())
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
