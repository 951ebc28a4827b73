use super::*;
use crate::autograd::grad_check::check_grad;
use crate::ops::reduction::sum_op;
use crate::utils::testing::{check_array_near, to_vec};
use ndarray::{ArrayD, IxDyn};

#[test]
fn test_add_same_shape() -> Result<(), MiniGradError> {
    let a = Node::new(vec![1.0, 2.0, 3.0], false)?;
    let b = Node::new(vec![10.0, 20.0, 30.0], false)?;
    let c = add_op(&a, &b)?;
    assert_eq!(c.shape(), vec![3]);
    assert_eq!(to_vec(&c.data()), vec![11.0, 22.0, 33.0]);
    assert!(!c.requires_grad());
    assert!(c.is_leaf());
    Ok(())
}

#[test]
fn test_add_broadcast_row_vector() -> Result<(), MiniGradError> {
    let a = Node::new(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]], true)?;
    let b = Node::new(vec![10.0, 20.0, 30.0], true)?;
    let c = add_op(&a, &b)?;
    check_array_near(&c.data(), &[2, 3], &[11.0, 22.0, 33.0, 14.0, 25.0, 36.0], 1e-12);

    sum_op(&c)?.backward(None)?;
    check_array_near(&a.grad().unwrap(), &[2, 3], &[1.0; 6], 1e-12);
    check_array_near(&b.grad().unwrap(), &[3], &[2.0, 2.0, 2.0], 1e-12);
    Ok(())
}

#[test]
fn test_add_broadcast_keepdim_axis() -> Result<(), MiniGradError> {
    let a = Node::new(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]], true)?;
    let b = Node::new(vec![vec![1.0, 1.0, 1.0]], true)?;
    let c = add_op(&a, &b)?;
    assert_eq!(c.shape(), vec![2, 3]);

    sum_op(&c)?.backward(None)?;
    check_array_near(&b.grad().unwrap(), &[1, 3], &[2.0, 2.0, 2.0], 1e-12);
    Ok(())
}

#[test]
fn test_add_column_and_row() -> Result<(), MiniGradError> {
    // (2, 1) + (1, 3) -> (2, 3)
    let a = Node::new(vec![vec![1.0], vec![2.0]], true)?;
    let b = Node::new(vec![vec![10.0, 20.0, 30.0]], true)?;
    let c = add_op(&a, &b)?;
    check_array_near(&c.data(), &[2, 3], &[11.0, 21.0, 31.0, 12.0, 22.0, 32.0], 1e-12);

    sum_op(&c)?.backward(None)?;
    check_array_near(&a.grad().unwrap(), &[2, 1], &[3.0, 3.0], 1e-12);
    check_array_near(&b.grad().unwrap(), &[1, 3], &[2.0, 2.0, 2.0], 1e-12);
    Ok(())
}

#[test]
fn test_add_scalar_operand() -> Result<(), MiniGradError> {
    let a = Node::new(vec![1.0, 2.0, 3.0, 4.0], true)?;
    let s = Node::scalar(0.5, true);
    let c = add_op(&a, &s)?;
    assert_eq!(to_vec(&c.data()), vec![1.5, 2.5, 3.5, 4.5]);

    sum_op(&c)?.backward(None)?;
    let s_grad = s.grad().unwrap();
    assert_eq!(s_grad.ndim(), 0);
    assert_eq!(to_vec(&s_grad), vec![4.0]);
    Ok(())
}

#[test]
fn test_add_incompatible_shapes() -> Result<(), MiniGradError> {
    let a = Node::new(vec![1.0, 2.0, 3.0], true)?;
    let b = Node::new(vec![1.0, 2.0], true)?;
    let result = add_op(&a, &b);
    assert_eq!(
        result.unwrap_err(),
        MiniGradError::BroadcastError {
            shape1: vec![3],
            shape2: vec![2],
        }
    );
    Ok(())
}

#[test]
fn test_add_requires_grad_propagation() -> Result<(), MiniGradError> {
    let a = Node::new(vec![1.0], true)?;
    let b = Node::new(vec![2.0], false)?;
    let c = add_op(&a, &b)?;
    assert!(c.requires_grad());
    assert!(!c.is_leaf());
    // Only the operand that requires grad is recorded.
    assert_eq!(c.read_data().edges().len(), 1);
    Ok(())
}

#[test]
fn test_add_backward_grad_check() -> Result<(), MiniGradError> {
    let a = Node::new(vec![vec![0.3, -1.2], vec![2.5, 0.7]], true)?;
    let b = Node::new(vec![vec![-0.4, 1.1]], true)?;
    let output_grad = ArrayD::from_shape_vec(IxDyn(&[2, 2]), vec![1.0, -1.0, 0.5, 2.0])
        .map_err(|e| MiniGradError::InternalError(e.to_string()))?;
    let result = check_grad(|x| add_op(&x[0], &x[1]), &[a, b], &output_grad, 1e-6, 1e-6);
    assert!(result.is_ok(), "{:?}", result);
    Ok(())
}
