use minigrad_core::ndarray::ArrayD;
use minigrad_core::Node;

// Shared by several test crates; not every helper is used by each of them.
#[allow(dead_code)]
pub(crate) fn leaf(data: Vec<f64>, shape: Vec<usize>) -> Node {
    Node::from_shape_vec(shape, data, true).expect("Test node creation failed")
}

#[allow(dead_code)]
pub(crate) fn constant(data: Vec<f64>, shape: Vec<usize>) -> Node {
    Node::from_shape_vec(shape, data, false).expect("Test node creation failed")
}

#[allow(dead_code)]
pub(crate) fn values(array: &ArrayD<f64>) -> Vec<f64> {
    array.iter().copied().collect()
}
