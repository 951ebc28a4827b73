// minigrad-core/src/ops/arithmetic/add.rs

use crate::autograd::{Edge, GradFn};
use crate::error::MiniGradError;
use crate::node::broadcast_utils::broadcast_binary;
use crate::node::Node;

// --- Forward Operation ---

/// Performs element-wise addition of two nodes with broadcasting.
///
/// The result requires grad if either operand does. Each operand that requires
/// grad gets an `Add` edge, whose gradient is the upstream gradient reduced
/// back to that operand's shape.
///
/// # Errors
/// Returns `BroadcastError` if the shapes cannot be broadcast together.
pub fn add_op(a: &Node, b: &Node) -> Result<Node, MiniGradError> {
    let a_guard = a.read_data();
    let b_guard = b.read_data();

    let result_data = broadcast_binary(&a_guard.data, &b_guard.data, |x, y| x + y)?;

    // --- Autograd Linkage ---
    let mut edges = Vec::with_capacity(2);
    if a_guard.requires_grad {
        edges.push(Edge::new(
            a.clone(),
            GradFn::Add {
                input_shape: a_guard.shape().to_vec(),
            },
        ));
    }
    if b_guard.requires_grad {
        edges.push(Edge::new(
            b.clone(),
            GradFn::Add {
                input_shape: b_guard.shape().to_vec(),
            },
        ));
    }

    Ok(Node::from_op(result_data, edges))
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
