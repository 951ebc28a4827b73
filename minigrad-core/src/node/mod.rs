// src/node/mod.rs

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use ndarray::{ArrayD, IxDyn};

use crate::autograd::Edge;
use crate::error::MiniGradError;
use crate::node_data::NodeData;

mod autograd_methods;
mod debug;
mod inplace_ops;

pub mod broadcast_utils;
pub mod create;
pub mod input;

// Re-export creation functions to make them public
pub use create::{full, ones, randn, randn_with_rng, zeros};
pub use input::NodeInput;

/// A value in the computation graph together with the metadata needed to
/// differentiate through it.
///
/// `Node` uses `Rc<RefCell<NodeData>>` internally to allow for:
/// 1.  **Shared Ownership:** an input node may be referenced by the edges of
///     several downstream nodes (the graph is a DAG). Cloning a `Node` is a
///     shallow clone of the handle.
/// 2.  **Interior Mutability:** gradients are accumulated into `NodeData`
///     through an immutable `Node` handle during backward traversal.
#[derive(Clone)]
pub struct Node {
    pub(crate) data: Rc<RefCell<NodeData>>,
}

impl Node {
    /// Creates a leaf node from a scalar, a flat sequence or a nested sequence.
    ///
    /// # Errors
    /// Returns `RaggedInput` if a nested sequence is not rectangular.
    pub fn new(input: impl Into<NodeInput>, requires_grad: bool) -> Result<Self, MiniGradError> {
        let array = input.into().into_array()?;
        Ok(Self::from_array(array, requires_grad))
    }

    /// Creates a leaf node that takes ownership of an existing buffer.
    pub fn from_array(array: ArrayD<f64>, requires_grad: bool) -> Self {
        Self::from_node_data(NodeData::new(array, requires_grad, Vec::new()))
    }

    /// Creates a leaf node from a flat row-major `Vec<f64>` and a shape.
    ///
    /// # Errors
    /// Returns `TensorCreationError` if the data length does not match the shape.
    pub fn from_shape_vec(
        shape: Vec<usize>,
        data_vec: Vec<f64>,
        requires_grad: bool,
    ) -> Result<Self, MiniGradError> {
        let numel: usize = shape.iter().product();
        let data_len = data_vec.len();
        if data_len != numel {
            return Err(MiniGradError::TensorCreationError { data_len, shape });
        }
        let array = ArrayD::from_shape_vec(IxDyn(&shape), data_vec)
            .map_err(|e| MiniGradError::InternalError(e.to_string()))?;
        Ok(Self::from_array(array, requires_grad))
    }

    /// Creates a zero-dimensional leaf node.
    pub fn scalar(value: f64, requires_grad: bool) -> Self {
        Self::from_array(ArrayD::from_elem(IxDyn(&[]), value), requires_grad)
    }

    /// Builds the output node of an operation. The node requires grad exactly
    /// when at least one operand did, i.e. when an edge was recorded.
    pub(crate) fn from_op(array: ArrayD<f64>, edges: Vec<Edge>) -> Self {
        let requires_grad = !edges.is_empty();
        Self::from_node_data(NodeData::new(array, requires_grad, edges))
    }

    pub(crate) fn from_node_data(node_data: NodeData) -> Self {
        Node {
            data: Rc::new(RefCell::new(node_data)),
        }
    }

    /// Borrows the node's internal data immutably.
    ///
    /// Crate-internal: a borrow held across `backward` would make gradient
    /// accumulation panic. Callers outside the crate use the copying accessors.
    pub(crate) fn read_data(&self) -> Ref<'_, NodeData> {
        self.data.borrow()
    }

    /// Borrows the node's internal data mutably.
    pub(crate) fn write_data(&self) -> RefMut<'_, NodeData> {
        self.data.borrow_mut()
    }

    /// Returns a copy of the forward buffer.
    pub fn data(&self) -> ArrayD<f64> {
        self.read_data().data.as_ref().clone()
    }

    /// Returns a copy of the accumulated gradient, if the node requires grad.
    pub fn grad(&self) -> Option<ArrayD<f64>> {
        self.read_data().grad.clone()
    }

    /// Returns a clone of the node's shape.
    pub fn shape(&self) -> Vec<usize> {
        self.read_data().shape().to_vec()
    }

    /// Number of dimensions; 0 for a scalar node.
    pub fn ndim(&self) -> usize {
        self.read_data().data.ndim()
    }

    /// Returns the number of elements in the node.
    pub fn numel(&self) -> usize {
        self.read_data().numel()
    }

    /// Checks if this node accumulates gradients.
    pub fn requires_grad(&self) -> bool {
        self.read_data().requires_grad
    }

    /// A leaf has no recorded edges: it was created from caller data, or it is
    /// the output of an operation none of whose operands required grad.
    pub fn is_leaf(&self) -> bool {
        self.read_data().edges.is_empty()
    }

    /// Returns the single value of a one-element node.
    pub fn item(&self) -> Result<f64, MiniGradError> {
        let guard = self.read_data();
        if guard.numel() != 1 {
            return Err(MiniGradError::UnsupportedOperation(format!(
                "item() requires a node with exactly one element, got shape {:?}",
                guard.shape()
            )));
        }
        guard
            .data
            .iter()
            .next()
            .copied()
            .ok_or_else(|| MiniGradError::InternalError("one-element buffer yielded no value".to_string()))
    }

    /// True when both handles point to the same graph node.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    /// Full reduction to a zero-dimensional node. Delegates to `ops::reduction::sum_op`.
    pub fn sum(&self) -> Result<Node, MiniGradError> {
        crate::ops::reduction::sum_op(self)
    }
}

// --- Test Module ---
#[cfg(test)]
mod tests;
