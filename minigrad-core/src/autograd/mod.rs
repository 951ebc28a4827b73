//! # Autograd
//!
//! Graph edges, the local gradient rules attached to them, the backward
//! traversal and a finite-difference gradient checker.

pub mod backward;
pub mod edge;
pub mod grad_check;

pub use edge::{Edge, GradFn};
pub use grad_check::{check_grad, GradCheckError};
