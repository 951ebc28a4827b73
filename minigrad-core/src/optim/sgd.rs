use log::debug;

use crate::error::MiniGradError;
use crate::node::Node;
use crate::optim::optimizer_trait::Optimizer;

/// Implements plain gradient descent: `param -= lr * grad`.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Node>,
    lr: f64,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer`.
    ///
    /// # Arguments
    ///
    /// * `params`: The leaf nodes to optimize. Nodes that do not require grad are skipped.
    /// * `lr`: The learning rate.
    pub fn new(params: impl IntoIterator<Item = Node>, lr: f64) -> Self {
        SgdOptimizer {
            params: params.into_iter().collect(),
            lr,
        }
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }

    pub fn params(&self) -> &[Node] {
        &self.params
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), MiniGradError> {
        debug!("SgdOptimizer: step() called, lr = {}", self.lr);
        for (param_idx, param) in self.params.iter().enumerate() {
            let grad = match param.grad() {
                Some(g) => g,
                None => {
                    debug!("SgdOptimizer: No gradient for param {}, skipping update.", param_idx);
                    continue;
                }
            };
            let lr = self.lr;
            param.sub_(&grad.mapv(|g| lr * g))?;
        }
        Ok(())
    }

    fn zero_grad(&mut self) {
        debug!("SgdOptimizer: zero_grad() called");
        for param in self.params.iter() {
            param.reset_grad();
        }
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
