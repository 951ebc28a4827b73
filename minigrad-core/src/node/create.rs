// src/node/create.rs

use ndarray::{ArrayD, IxDyn};
use rand::Rng;
use rand_distr::StandardNormal;

use super::Node;

/// Creates a leaf node filled with zeros.
pub fn zeros(shape: &[usize], requires_grad: bool) -> Node {
    Node::from_array(ArrayD::zeros(IxDyn(shape)), requires_grad)
}

/// Creates a leaf node filled with ones.
pub fn ones(shape: &[usize], requires_grad: bool) -> Node {
    Node::from_array(ArrayD::ones(IxDyn(shape)), requires_grad)
}

/// Creates a leaf node filled with `value`.
pub fn full(shape: &[usize], value: f64, requires_grad: bool) -> Node {
    Node::from_array(ArrayD::from_elem(IxDyn(shape), value), requires_grad)
}

/// Creates a leaf node with values drawn from the standard normal distribution.
pub fn randn(shape: &[usize], requires_grad: bool) -> Node {
    randn_with_rng(shape, &mut rand::thread_rng(), requires_grad)
}

/// Same as [`randn`], drawing from a caller-supplied generator (e.g. a seeded `StdRng`).
pub fn randn_with_rng<R: Rng + ?Sized>(shape: &[usize], rng: &mut R, requires_grad: bool) -> Node {
    let array = ArrayD::from_shape_simple_fn(IxDyn(shape), || rng.sample::<f64, _>(StandardNormal));
    Node::from_array(array, requires_grad)
}
