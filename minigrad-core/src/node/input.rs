// src/node/input.rs

use ndarray::{Array, ArrayD, Dimension, IxDyn};
use num_traits::AsPrimitive;

use crate::error::MiniGradError;

/// Raw numeric input accepted by [`Node::new`](super::Node::new).
///
/// Scalars, flat sequences, arbitrarily nested sequences and existing
/// `ndarray` buffers all converge on the same dense `ArrayD<f64>`.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeInput {
    Scalar(f64),
    Sequence(Vec<NodeInput>),
    Array(ArrayD<f64>),
}

impl NodeInput {
    /// Converts the input into its canonical dense buffer.
    ///
    /// # Errors
    /// Returns `RaggedInput` when the elements of a sequence do not all share one shape.
    pub fn into_array(self) -> Result<ArrayD<f64>, MiniGradError> {
        match self {
            NodeInput::Array(array) => Ok(array),
            other => {
                let mut flat = Vec::new();
                let shape = other.flatten_into(&mut flat)?;
                ArrayD::from_shape_vec(IxDyn(&shape), flat)
                    .map_err(|e| MiniGradError::InternalError(e.to_string()))
            }
        }
    }

    /// Appends the values in row-major order and returns the shape they form.
    fn flatten_into(self, out: &mut Vec<f64>) -> Result<Vec<usize>, MiniGradError> {
        match self {
            NodeInput::Scalar(value) => {
                out.push(value);
                Ok(Vec::new())
            }
            NodeInput::Array(array) => {
                out.extend(array.iter().copied());
                Ok(array.shape().to_vec())
            }
            NodeInput::Sequence(items) => {
                let len = items.len();
                let mut item_shape: Option<Vec<usize>> = None;
                for item in items {
                    let shape = item.flatten_into(out)?;
                    match &item_shape {
                        None => item_shape = Some(shape),
                        Some(expected) if *expected != shape => {
                            return Err(MiniGradError::RaggedInput {
                                expected: expected.clone(),
                                actual: shape,
                            });
                        }
                        Some(_) => {}
                    }
                }
                let mut shape = vec![len];
                shape.extend(item_shape.unwrap_or_default());
                Ok(shape)
            }
        }
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NodeInput {
                fn from(value: $t) -> Self {
                    NodeInput::Scalar(AsPrimitive::<f64>::as_(value))
                }
            }
        )*
    };
}

impl_from_primitive!(f64, f32, i32, i64, u32, u64, usize);

impl<T: Into<NodeInput>> From<Vec<T>> for NodeInput {
    fn from(values: Vec<T>) -> Self {
        NodeInput::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<NodeInput>, const N: usize> From<[T; N]> for NodeInput {
    fn from(values: [T; N]) -> Self {
        NodeInput::Sequence(IntoIterator::into_iter(values).map(Into::into).collect())
    }
}

impl<T: Into<NodeInput> + Copy> From<&[T]> for NodeInput {
    fn from(values: &[T]) -> Self {
        NodeInput::Sequence(values.iter().map(|&v| v.into()).collect())
    }
}

impl<D: Dimension> From<Array<f64, D>> for NodeInput {
    fn from(array: Array<f64, D>) -> Self {
        NodeInput::Array(array.into_dyn())
    }
}
