//! # Optimizers
//!
//! Parameter update rules driven by the gradients accumulated by
//! [`Node::backward`](crate::Node::backward).

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::SgdOptimizer;
