use crate::autograd::{Edge, GradFn};
use crate::error::MiniGradError;
use crate::node::Node;

// --- Forward Operation ---

/// Element-wise negation.
///
/// Never fails; the `Result` keeps the signature uniform with the other ops.
pub fn neg_op(a: &Node) -> Result<Node, MiniGradError> {
    let a_guard = a.read_data();
    let result_data = a_guard.data.mapv(|x| -x);

    let edges = if a_guard.requires_grad {
        vec![Edge::new(a.clone(), GradFn::Neg)]
    } else {
        Vec::new()
    };

    Ok(Node::from_op(result_data, edges))
}

// --- Tests ---
#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
