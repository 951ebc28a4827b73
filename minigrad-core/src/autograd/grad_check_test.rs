use super::*;
use crate::node::randn_with_rng;
use crate::ops::arithmetic::{add_op, mul_op, neg_op, sub_op};
use crate::ops::reduction::sum_op;
use ndarray::IxDyn;
use rand::rngs::StdRng;
use rand::SeedableRng;

const EPSILON: f64 = 1e-6;
const TOLERANCE: f64 = 1e-5;

fn random_inputs(shapes: &[&[usize]], seed: u64) -> Vec<Node> {
    let mut rng = StdRng::seed_from_u64(seed);
    shapes
        .iter()
        .map(|shape| randn_with_rng(shape, &mut rng, true))
        .collect()
}

#[test]
fn test_check_grad_mul_broadcast() {
    let inputs = random_inputs(&[&[2, 3], &[3]], 7);
    let output_grad = ArrayD::ones(IxDyn(&[2, 3]));
    let result = check_grad(|x| mul_op(&x[0], &x[1]), &inputs, &output_grad, EPSILON, TOLERANCE);
    assert!(result.is_ok(), "{:?}", result);
}

#[test]
fn test_check_grad_composite_expression() {
    // sum((a - b) * (a + c)) with c broadcast over the leading axis
    let inputs = random_inputs(&[&[4, 2], &[4, 2], &[1, 2]], 42);
    let output_grad = ArrayD::from_elem(IxDyn(&[]), 1.5);
    let func = |x: &[Node]| {
        let left = sub_op(&x[0], &x[1])?;
        let right = add_op(&x[0], &x[2])?;
        sum_op(&mul_op(&left, &right)?)
    };
    let result = check_grad(func, &inputs, &output_grad, EPSILON, TOLERANCE);
    assert!(result.is_ok(), "{:?}", result);
}

#[test]
fn test_check_grad_neg_with_non_uniform_upstream() {
    let inputs = random_inputs(&[&[3]], 3);
    let output_grad = ndarray::arr1(&[1.0, -2.0, 0.5]).into_dyn();
    let result = check_grad(|x| neg_op(&x[0]), &inputs, &output_grad, EPSILON, TOLERANCE);
    assert!(result.is_ok(), "{:?}", result);
}

#[test]
fn test_check_grad_detects_wrong_gradient() {
    let inputs = random_inputs(&[&[2]], 11);
    let output_grad = ArrayD::from_elem(IxDyn(&[]), 1.0);
    // Forward value is sum(x), but the graph only sees a detached copy plus x,
    // so the analytical gradient (1) disagrees with the numerical one (2).
    let func = |x: &[Node]| {
        let frozen = x[0].detach();
        sum_op(&add_op(&x[0], &frozen)?)
    };
    let result = check_grad(func, &inputs, &output_grad, EPSILON, TOLERANCE);
    assert!(matches!(result, Err(GradCheckError::GradientMismatch { .. })));
}

#[test]
fn test_check_grad_rejects_non_leaf_input() -> Result<(), MiniGradError> {
    let a = Node::new(vec![1.0, 2.0], true)?;
    let b = mul_op(&a, &a)?;
    let output_grad = ArrayD::ones(IxDyn(&[2]));
    let result = check_grad(|x| neg_op(&x[0]), &[b], &output_grad, EPSILON, TOLERANCE);
    assert_eq!(result, Err(GradCheckError::InputNotLeaf { input_index: 0 }));
    Ok(())
}
