use log::{debug, trace};
use ndarray::{ArrayD, IxDyn};

use crate::error::MiniGradError;
use crate::node::Node;

/// Depth-first backward traversal from `root`.
///
/// Every visit adds the incoming gradient into the node's `grad` and pushes
/// one contribution per edge. Nothing is memoised: a node reachable through
/// k paths is visited k times, and its own ancestors are re-expanded each
/// time. Additive accumulation makes the final gradients the sum over paths.
///
/// An explicit stack replaces recursion so deep chains cannot overflow the
/// call stack; edges are pushed in reverse so they are expanded in operand
/// order.
pub(crate) fn run_backward(root: &Node, gradient: Option<&ArrayD<f64>>) -> Result<(), MiniGradError> {
    let (requires_grad, root_shape) = {
        let guard = root.read_data();
        (guard.requires_grad, guard.shape().to_vec())
    };
    if !requires_grad {
        return Err(MiniGradError::RequiresGradNotMet);
    }

    let seed = match gradient {
        Some(g) => {
            if g.shape() != root_shape.as_slice() {
                return Err(MiniGradError::ShapeMismatch {
                    expected: root_shape,
                    actual: g.shape().to_vec(),
                    operation: "backward".to_string(),
                });
            }
            g.clone()
        }
        None if root_shape.is_empty() => ArrayD::from_elem(IxDyn(&[]), 1.0),
        None => return Err(MiniGradError::BackwardNonScalar),
    };

    let mut stack: Vec<(Node, ArrayD<f64>)> = vec![(root.clone(), seed)];
    let mut visits = 0usize;

    while let Some((node, grad)) = stack.pop() {
        visits += 1;
        let contributions = {
            let mut guard = node.write_data();
            guard.accumulate_grad(&grad)?;
            let mut contributions = Vec::with_capacity(guard.edges.len());
            for edge in guard.edges.iter() {
                trace!(
                    "{}: upstream {:?} -> input {:?}",
                    edge.grad_fn.name(),
                    grad.shape(),
                    edge.input.read_data().shape()
                );
                contributions.push((edge.input.clone(), edge.local_gradient(&grad)?));
            }
            contributions
        };
        stack.extend(contributions.into_iter().rev());
    }

    debug!("backward: finished after {} node visit(s)", visits);
    Ok(())
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
