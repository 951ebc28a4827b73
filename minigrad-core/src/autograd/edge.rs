use std::rc::Rc;

use ndarray::{ArrayD, IxDyn};

use crate::error::MiniGradError;
use crate::node::broadcast_utils::{broadcast_binary, reduce_to_shape};
use crate::node::Node;

/// Local gradient rule of one operand, tagged by the operation that produced the node.
///
/// Each variant stores only what it needs from the forward pass. The rule maps
/// an upstream gradient with the *output's* shape to a gradient with the
/// *operand's* shape.
#[derive(Debug, Clone)]
pub enum GradFn {
    /// `d(a + b)/da = 1`, reduced over broadcast axes.
    Add { input_shape: Vec<usize> },
    /// `d(a * b)/da = b`. `other` is the sibling operand's buffer as captured
    /// when the product was built.
    Mul {
        other: Rc<ArrayD<f64>>,
        input_shape: Vec<usize>,
    },
    /// `d(-a)/da = -1`. Negation never broadcasts.
    Neg,
    /// `d(sum(a))/da_i = 1` for every element.
    SumReduce { input_shape: Vec<usize> },
}

impl GradFn {
    /// Computes the operand's gradient contribution from the upstream gradient.
    pub fn apply(&self, upstream: &ArrayD<f64>) -> Result<ArrayD<f64>, MiniGradError> {
        match self {
            GradFn::Add { input_shape } => reduce_to_shape(upstream.clone(), input_shape),
            GradFn::Mul { other, input_shape } => {
                let scaled = broadcast_binary(upstream, other, |g, o| g * o)?;
                reduce_to_shape(scaled, input_shape)
            }
            GradFn::Neg => Ok(upstream.mapv(|g| -g)),
            GradFn::SumReduce { input_shape } => upstream
                .broadcast(IxDyn(input_shape))
                .map(|view| view.to_owned())
                .ok_or_else(|| MiniGradError::ShapeMismatch {
                    expected: input_shape.clone(),
                    actual: upstream.shape().to_vec(),
                    operation: "SumBackward".to_string(),
                }),
        }
    }

    /// Name used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            GradFn::Add { .. } => "AddBackward",
            GradFn::Mul { .. } => "MulBackward",
            GradFn::Neg => "NegBackward",
            GradFn::SumReduce { .. } => "SumBackward",
        }
    }
}

/// A recorded dependency of one node on an input node.
///
/// The input handle is reference counted: the same input can be the target of
/// edges from several downstream nodes, and it stays alive as long as any of
/// them does.
#[derive(Debug, Clone)]
pub struct Edge {
    pub(crate) input: Node,
    pub(crate) grad_fn: GradFn,
}

impl Edge {
    pub(crate) fn new(input: Node, grad_fn: GradFn) -> Self {
        Edge { input, grad_fn }
    }

    /// The node this edge points back to.
    pub fn input(&self) -> &Node {
        &self.input
    }

    pub fn grad_fn(&self) -> &GradFn {
        &self.grad_fn
    }

    /// Gradient contribution for `input` given the downstream node's gradient.
    pub fn local_gradient(&self, upstream: &ArrayD<f64>) -> Result<ArrayD<f64>, MiniGradError> {
        self.grad_fn.apply(upstream)
    }
}

#[cfg(test)]
#[path = "edge_test.rs"]
mod tests;
