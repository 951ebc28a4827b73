// src/node_data.rs
use std::rc::Rc;

use ndarray::ArrayD;

use crate::autograd::Edge;
use crate::error::MiniGradError;

/// Internal storage and graph metadata for a Node.
///
/// This struct holds the forward buffer, the gradient accumulator and the
/// edges back to the inputs the node was computed from.
/// It is wrapped in `Rc<RefCell<NodeData>>` by the `Node` struct so that
/// several downstream nodes can share it and gradients can be accumulated
/// through an immutable `Node` handle.
#[derive(Debug)]
pub struct NodeData {
    /// The forward value. Wrapped in `Rc` so gradient functions can capture a
    /// snapshot cheaply; in-place updates go through `Rc::make_mut`, which
    /// leaves captured snapshots untouched.
    pub(crate) data: Rc<ArrayD<f64>>,
    /// Flag indicating if gradients flowing into this node are accumulated.
    pub(crate) requires_grad: bool,
    /// Gradient accumulator, same shape as `data`. `Some` iff `requires_grad`.
    pub(crate) grad: Option<ArrayD<f64>>,
    /// Dependencies on input nodes, in operand order.
    /// Empty for leaves and for nodes that do not require grad.
    pub(crate) edges: Vec<Edge>,
}

impl NodeData {
    /// Creates a new `NodeData`, allocating a zero gradient when `requires_grad` is set.
    pub(crate) fn new(data: ArrayD<f64>, requires_grad: bool, edges: Vec<Edge>) -> Self {
        let grad = if requires_grad {
            Some(ArrayD::zeros(data.raw_dim()))
        } else {
            None
        };
        NodeData {
            data: Rc::new(data),
            requires_grad,
            grad,
            edges,
        }
    }

    /// Shape of the forward buffer.
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Number of elements in the forward buffer.
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Immutable access to the forward buffer.
    pub fn data(&self) -> &ArrayD<f64> {
        &self.data
    }

    /// Immutable access to the gradient accumulator, if any.
    pub fn grad(&self) -> Option<&ArrayD<f64>> {
        self.grad.as_ref()
    }

    /// The edges recorded when this node was produced.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Overwrites the gradient with zeros, keeping its allocation.
    pub(crate) fn zero_grad(&mut self) {
        if let Some(grad) = self.grad.as_mut() {
            grad.fill(0.0);
        }
    }

    /// Adds `contribution` into the gradient accumulator in place.
    ///
    /// # Errors
    /// * `RequiresGradNotMet` if the node carries no gradient.
    /// * `ShapeMismatch` if `contribution` does not have the node's shape.
    pub(crate) fn accumulate_grad(&mut self, contribution: &ArrayD<f64>) -> Result<(), MiniGradError> {
        let grad = self.grad.as_mut().ok_or(MiniGradError::RequiresGradNotMet)?;
        if grad.shape() != contribution.shape() {
            return Err(MiniGradError::ShapeMismatch {
                expected: grad.shape().to_vec(),
                actual: contribution.shape().to_vec(),
                operation: "accumulate_grad".to_string(),
            });
        }
        *grad += contribution;
        Ok(())
    }
}
