//! # minigrad-core
//!
//! A minimal reverse-mode automatic differentiation engine.
//!
//! Callers build expressions out of elementwise operations on [`Node`]s, then call
//! [`Node::backward`] on a (conventionally scalar) result to accumulate gradients into
//! every ancestor node that was created with `requires_grad = true`.
//!
//! ```no_run
//! use minigrad_core::{mul_op, sum_op, Node};
//!
//! let x = Node::new(vec![1.0, 2.0, 3.0], true)?;
//! let loss = sum_op(&mul_op(&x, &x)?)?;
//! loss.backward(None)?;
//! assert_eq!(x.grad().unwrap().iter().copied().collect::<Vec<_>>(), vec![2.0, 4.0, 6.0]);
//! # Ok::<(), minigrad_core::MiniGradError>(())
//! ```

pub mod autograd;
pub mod error;
pub mod node;
pub mod node_data;
pub mod ops;
pub mod optim;
pub mod utils;

// Re-export the Node type so it is reachable as `minigrad_core::Node`
pub use node::{Node, NodeInput};
pub use error::MiniGradError;

pub use ops::arithmetic::{add_op, mul_op, neg_op, sub_op};
pub use ops::reduction::sum_op;
pub use optim::{Optimizer, SgdOptimizer};

// Re-export the buffer crate so callers can build gradients without a direct dependency
pub use ndarray;
