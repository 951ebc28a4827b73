use crate::error::MiniGradError;
use crate::node::Node;
use crate::ops::arithmetic::{add_op, neg_op};

/// Element-wise subtraction with broadcasting, built as `a + (-b)`.
///
/// The graph therefore contains an intermediate negation node for `b`; its
/// gradient flows through a `Neg` edge and then an `Add` edge.
///
/// # Errors
/// Returns `BroadcastError` if the shapes cannot be broadcast together.
pub fn sub_op(a: &Node, b: &Node) -> Result<Node, MiniGradError> {
    let neg_b = neg_op(b)?;
    add_op(a, &neg_b)
}

// --- Tests ---
#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
