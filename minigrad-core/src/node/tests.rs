use super::*;
use crate::error::MiniGradError;
use crate::utils::testing::to_vec;
use ndarray::{arr1, arr2};

#[test]
fn test_new_from_scalar() -> Result<(), MiniGradError> {
    let node = Node::new(3.5, false)?;
    assert_eq!(node.shape(), Vec::<usize>::new());
    assert_eq!(node.ndim(), 0);
    assert_eq!(node.item()?, 3.5);
    assert!(!node.requires_grad());
    assert!(node.grad().is_none());
    Ok(())
}

#[test]
fn test_new_from_flat_sequence() -> Result<(), MiniGradError> {
    let node = Node::new(vec![1, 2, 3], true)?;
    assert_eq!(node.shape(), vec![3]);
    assert_eq!(to_vec(&node.data()), vec![1.0, 2.0, 3.0]);
    Ok(())
}

#[test]
fn test_new_from_nested_sequence() -> Result<(), MiniGradError> {
    let node = Node::new(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]], false)?;
    assert_eq!(node.shape(), vec![2, 3]);
    assert_eq!(to_vec(&node.data()), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

    let deep = Node::new([[[1, 2]], [[3, 4]]], false)?;
    assert_eq!(deep.shape(), vec![2, 1, 2]);
    assert_eq!(to_vec(&deep.data()), vec![1.0, 2.0, 3.0, 4.0]);
    Ok(())
}

#[test]
fn test_new_from_ndarray() -> Result<(), MiniGradError> {
    let node = Node::new(arr2(&[[1.0, 2.0], [3.0, 4.0]]), true)?;
    assert_eq!(node.shape(), vec![2, 2]);
    assert_eq!(node.grad().map(|g| to_vec(&g)), Some(vec![0.0; 4]));
    Ok(())
}

#[test]
fn test_new_empty_sequence() -> Result<(), MiniGradError> {
    let node = Node::new(Vec::<f64>::new(), true)?;
    assert_eq!(node.shape(), vec![0]);
    assert_eq!(node.numel(), 0);
    Ok(())
}

#[test]
fn test_new_ragged_sequence_fails() {
    let result = Node::new(vec![vec![1.0, 2.0], vec![3.0]], false);
    assert_eq!(
        result.err(),
        Some(MiniGradError::RaggedInput {
            expected: vec![2],
            actual: vec![1],
        })
    );
}

#[test]
fn test_from_shape_vec() -> Result<(), MiniGradError> {
    let node = Node::from_shape_vec(vec![2, 2], vec![1.0, 2.0, 3.0, 4.0], false)?;
    assert_eq!(node.shape(), vec![2, 2]);

    let err = Node::from_shape_vec(vec![2, 2], vec![1.0, 2.0, 3.0], false).unwrap_err();
    assert_eq!(
        err,
        MiniGradError::TensorCreationError {
            data_len: 3,
            shape: vec![2, 2],
        }
    );
    Ok(())
}

#[test]
fn test_grad_allocated_only_when_required() {
    let with_grad = Node::scalar(1.0, true);
    let without_grad = Node::scalar(1.0, false);
    assert_eq!(with_grad.grad().map(|g| g.shape().to_vec()), Some(vec![]));
    assert!(without_grad.grad().is_none());
    assert!(with_grad.is_leaf());
}

#[test]
fn test_item_requires_single_element() {
    let node = Node::from_array(arr1(&[1.0, 2.0]).into_dyn(), false);
    assert!(matches!(node.item(), Err(MiniGradError::UnsupportedOperation(_))));
}

#[test]
fn test_clone_is_shallow() {
    let a = Node::scalar(2.0, true);
    let b = a.clone();
    assert!(a.ptr_eq(&b));
    assert!(!a.ptr_eq(&Node::scalar(2.0, true)));
}

#[test]
fn test_display_shows_data_and_requires_grad() -> Result<(), MiniGradError> {
    let node = Node::new(vec![1.0, 2.0], true)?;
    let rendered = format!("{}", node);
    assert!(rendered.starts_with("Node("));
    assert!(rendered.contains("requires_grad=true"));
    assert!(rendered.contains('1'));

    let debug = format!("{:?}", node);
    assert_eq!(debug, "Node(shape=[2], requires_grad=true, has_grad=true, edges=0)");
    Ok(())
}

#[test]
fn test_creation_helpers() {
    let z = zeros(&[2, 3], true);
    assert_eq!(to_vec(&z.data()), vec![0.0; 6]);
    assert!(z.requires_grad());

    let o = ones(&[3], false);
    assert_eq!(to_vec(&o.data()), vec![1.0; 3]);

    let f = full(&[2], 7.5, false);
    assert_eq!(to_vec(&f.data()), vec![7.5, 7.5]);

    let r = randn(&[4, 2], false);
    assert_eq!(r.shape(), vec![4, 2]);
    assert!(r.data().iter().all(|v| v.is_finite()));
}

#[test]
fn test_accessor_copies_can_be_held_across_backward() -> Result<(), MiniGradError> {
    let x = Node::new(vec![1.0, 2.0], true)?;
    let values = x.data();
    let grad_before = x.grad();
    let loss = x.sum()?;

    loss.backward(None)?;

    assert_eq!(to_vec(&values), vec![1.0, 2.0]);
    assert_eq!(grad_before.map(|g| to_vec(&g)), Some(vec![0.0, 0.0]));
    assert_eq!(to_vec(&x.grad().unwrap()), vec![1.0, 1.0]);
    Ok(())
}
