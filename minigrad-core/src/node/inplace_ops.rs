// src/node/inplace_ops.rs

use std::rc::Rc;

use log::warn;
use ndarray::{ArrayD, Zip};

use crate::error::MiniGradError;
use crate::node::Node;

// In-place updates never change the shape, `requires_grad`, `grad` or the edges.
// Buffers captured by existing edges are copied before being written to.

impl Node {
    /// `self.data += other`, with `other` broadcast to this node's shape.
    pub fn add_(&self, other: &ArrayD<f64>) -> Result<(), MiniGradError> {
        self.apply_inplace(other, "add_", |x, y| *x += y)
    }

    /// `self.data -= other`, with `other` broadcast to this node's shape.
    pub fn sub_(&self, other: &ArrayD<f64>) -> Result<(), MiniGradError> {
        self.apply_inplace(other, "sub_", |x, y| *x -= y)
    }

    /// Adds `scalar` to every element.
    pub fn add_scalar_(&self, scalar: f64) {
        self.map_inplace(|x| *x += scalar);
    }

    /// Multiplies every element by `scalar`.
    pub fn mul_scalar_(&self, scalar: f64) {
        self.map_inplace(|x| *x *= scalar);
    }

    fn apply_inplace<F>(&self, other: &ArrayD<f64>, op_name: &str, op: F) -> Result<(), MiniGradError>
    where
        F: Fn(&mut f64, f64),
    {
        let mut guard = self.write_data();
        let shape = guard.data.raw_dim();
        let other_view = other.broadcast(shape).ok_or_else(|| MiniGradError::ShapeMismatch {
            expected: guard.shape().to_vec(),
            actual: other.shape().to_vec(),
            operation: op_name.to_string(),
        })?;
        if !guard.edges.is_empty() {
            warn!("{} on a non-leaf node: the recorded graph no longer matches its data", op_name);
        }
        let data = Rc::make_mut(&mut guard.data);
        Zip::from(data).and(&other_view).for_each(|x, &y| op(x, y));
        Ok(())
    }

    fn map_inplace<F>(&self, op: F)
    where
        F: Fn(&mut f64),
    {
        let mut guard = self.write_data();
        Rc::make_mut(&mut guard.data).map_inplace(op);
    }
}

#[cfg(test)]
#[path = "inplace_ops_test.rs"]
mod tests;
