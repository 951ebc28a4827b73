use std::rc::Rc;

use crate::autograd::{Edge, GradFn};
use crate::error::MiniGradError;
use crate::node::broadcast_utils::broadcast_binary;
use crate::node::Node;

// --- Forward Operation ---

/// Performs element-wise multiplication of two nodes with broadcasting.
///
/// The gradient of each operand is the upstream gradient times the *other*
/// operand's forward buffer, reduced back to the operand's shape. The sibling
/// buffer is captured here, so later in-place updates of either operand do not
/// change the gradient of this product.
///
/// # Errors
/// Returns `BroadcastError` if the shapes cannot be broadcast together.
pub fn mul_op(a: &Node, b: &Node) -> Result<Node, MiniGradError> {
    let a_guard = a.read_data();
    let b_guard = b.read_data();

    let result_data = broadcast_binary(&a_guard.data, &b_guard.data, |x, y| x * y)?;

    // --- Autograd Linkage ---
    let mut edges = Vec::with_capacity(2);
    if a_guard.requires_grad {
        edges.push(Edge::new(
            a.clone(),
            GradFn::Mul {
                other: Rc::clone(&b_guard.data),
                input_shape: a_guard.shape().to_vec(),
            },
        ));
    }
    if b_guard.requires_grad {
        edges.push(Edge::new(
            b.clone(),
            GradFn::Mul {
                other: Rc::clone(&a_guard.data),
                input_shape: b_guard.shape().to_vec(),
            },
        ));
    }

    Ok(Node::from_op(result_data, edges))
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
