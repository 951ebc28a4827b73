//! # Node Operations Module (`ops`)
//!
//! Operations are grouped into submodules by functionality:
//!
//! - [`arithmetic`]: element-wise add, mul, neg and sub with NumPy broadcasting.
//! - [`reduction`]: full reduction (sum) to a zero-dimensional node.
//!
//! Each operation has a core function named `xxx_op` that computes the
//! forward buffer eagerly and, when an operand requires grad, records an
//! [`Edge`](crate::autograd::Edge) carrying the matching
//! [`GradFn`](crate::autograd::GradFn) variant.

pub mod arithmetic;
pub mod reduction;
