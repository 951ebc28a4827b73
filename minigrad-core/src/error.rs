use thiserror::Error;

/// Custom error type for the minigrad engine.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum MiniGradError {
    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Cannot broadcast shapes: {shape1:?} and {shape2:?}")]
    BroadcastError {
        shape1: Vec<usize>,
        shape2: Vec<usize>,
    },

    #[error("Node creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Ragged nested input: expected every element to have shape {expected:?}, got {actual:?}")]
    RaggedInput {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("Called backward on a node that does not require grad.")]
    RequiresGradNotMet,

    #[error("gradient must be supplied for a non-scalar node")]
    BackwardNonScalar,

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
