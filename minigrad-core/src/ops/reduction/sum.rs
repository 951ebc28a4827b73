use ndarray::{ArrayD, IxDyn};

use crate::autograd::{Edge, GradFn};
use crate::error::MiniGradError;
use crate::node::Node;

/// Sums all elements of a node into a zero-dimensional node.
///
/// The backward rule spreads the scalar upstream gradient over every element
/// of the input, since each addend has partial derivative 1.
pub fn sum_op(a: &Node) -> Result<Node, MiniGradError> {
    let a_guard = a.read_data();
    let total = a_guard.data.sum();
    let result_data = ArrayD::from_elem(IxDyn(&[]), total);

    let edges = if a_guard.requires_grad {
        vec![Edge::new(
            a.clone(),
            GradFn::SumReduce {
                input_shape: a_guard.shape().to_vec(),
            },
        )]
    } else {
        Vec::new()
    };

    Ok(Node::from_op(result_data, edges))
}

// --- Tests ---
#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
