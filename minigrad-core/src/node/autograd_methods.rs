use log::{debug, trace};
use ndarray::ArrayD;

use crate::autograd::backward::run_backward;
use crate::error::MiniGradError;
use crate::node::Node;
use crate::node_data::NodeData;

impl Node {
    /// Performs the backward pass starting from this node.
    ///
    /// The gradient is accumulated (added, never assigned) into this node and
    /// then pushed through every edge to the ancestors that require grad.
    ///
    /// # Arguments
    /// * `gradient`: Gradient of the final output with respect to this node.
    ///   Must have this node's shape. If `None`, it defaults to `1.0` when the
    ///   node is zero-dimensional.
    ///
    /// # Errors
    /// * `RequiresGradNotMet` if the node does not require grad.
    /// * `BackwardNonScalar` if `gradient` is `None` and the node is not zero-dimensional.
    /// * `ShapeMismatch` if `gradient` does not have the node's shape.
    pub fn backward(&self, gradient: Option<&ArrayD<f64>>) -> Result<(), MiniGradError> {
        run_backward(self, gradient)
    }

    /// Overwrites the accumulated gradient with zeros.
    ///
    /// Intended to be called between optimisation steps that reuse the same
    /// leaf nodes. `data`, `requires_grad` and the edges are left untouched.
    pub fn reset_grad(&self) {
        trace!("reset_grad on node with shape {:?}", self.shape());
        self.write_data().zero_grad();
    }

    /// Returns a new leaf holding this node's current values, cut off from the graph.
    ///
    /// `requires_grad` is fixed once a node exists; this is the way to obtain a
    /// non-tracking copy of a node that already feeds a graph.
    ///
    /// The detached node does not require grad and has no edges. It shares the
    /// forward buffer until either node is updated in place.
    pub fn detach(&self) -> Node {
        let guard = self.read_data();
        debug!(
            "detach: node with shape {:?} and {} edge(s)",
            guard.shape(),
            guard.edges.len()
        );
        Node::from_node_data(NodeData {
            data: std::rc::Rc::clone(&guard.data),
            requires_grad: false,
            grad: None,
            edges: Vec::new(),
        })
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
