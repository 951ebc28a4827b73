use ndarray::{ArrayD, Axis, IxDyn, Zip};

use crate::error::MiniGradError;

/// Computes the NumPy broadcast of two shapes.
///
/// Shapes are right-aligned, missing leading dimensions count as 1 and a
/// dimension of size 1 stretches to match the other operand.
pub fn broadcast_shapes(shape_a: &[usize], shape_b: &[usize]) -> Result<Vec<usize>, MiniGradError> {
    let rank_a = shape_a.len();
    let rank_b = shape_b.len();
    let max_rank = rank_a.max(rank_b);
    let mut result_shape = vec![0; max_rank];

    for i in 0..max_rank {
        let dim_a = shape_a.get(rank_a.wrapping_sub(1 + i)).copied().unwrap_or(1);
        let dim_b = shape_b.get(rank_b.wrapping_sub(1 + i)).copied().unwrap_or(1);

        result_shape[max_rank - 1 - i] = if dim_a == dim_b || dim_b == 1 {
            dim_a
        } else if dim_a == 1 {
            dim_b
        } else {
            return Err(MiniGradError::BroadcastError {
                shape1: shape_a.to_vec(),
                shape2: shape_b.to_vec(),
            });
        };
    }
    Ok(result_shape)
}

/// Applies `op` elementwise over the broadcast of `a` and `b`.
pub(crate) fn broadcast_binary<F>(
    a: &ArrayD<f64>,
    b: &ArrayD<f64>,
    op: F,
) -> Result<ArrayD<f64>, MiniGradError>
where
    F: Fn(f64, f64) -> f64,
{
    let output_shape = broadcast_shapes(a.shape(), b.shape())?;
    let broadcast_error = || MiniGradError::BroadcastError {
        shape1: a.shape().to_vec(),
        shape2: b.shape().to_vec(),
    };
    let a_view = a.broadcast(IxDyn(&output_shape)).ok_or_else(broadcast_error)?;
    let b_view = b.broadcast(IxDyn(&output_shape)).ok_or_else(broadcast_error)?;

    Ok(Zip::from(&a_view).and(&b_view).map_collect(|&x, &y| op(x, y)))
}

/// Reduces a gradient back to the shape of an operand that was broadcast in
/// the forward pass.
///
/// First the leading axes that broadcasting added are summed away (always
/// axis 0), then every axis where `target_shape` has size 1 is summed while
/// keeping the axis. The order is fixed: the second step assumes the ranks
/// already line up.
pub fn reduce_to_shape(grad: ArrayD<f64>, target_shape: &[usize]) -> Result<ArrayD<f64>, MiniGradError> {
    if grad.shape() == target_shape {
        return Ok(grad);
    }
    if grad.ndim() < target_shape.len() {
        return Err(MiniGradError::InternalError(format!(
            "Cannot reduce shape {:?} to target {:?}: gradient rank < target rank.",
            grad.shape(),
            target_shape
        )));
    }

    let extra = grad.ndim() - target_shape.len();
    let mut reduced = grad;
    for _ in 0..extra {
        reduced = reduced.sum_axis(Axis(0));
    }

    for (axis, &dim) in target_shape.iter().enumerate() {
        if dim == 1 {
            reduced = reduced.sum_axis(Axis(axis)).insert_axis(Axis(axis));
        }
    }

    if reduced.shape() != target_shape {
        return Err(MiniGradError::ShapeMismatch {
            expected: target_shape.to_vec(),
            actual: reduced.shape().to_vec(),
            operation: "reduce_to_shape".to_string(),
        });
    }
    Ok(reduced)
}

#[cfg(test)]
#[path = "broadcast_utils_test.rs"]
mod tests;
