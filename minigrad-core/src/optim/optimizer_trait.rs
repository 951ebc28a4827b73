use crate::error::MiniGradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating leaf nodes based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step using the accumulated gradients.
    fn step(&mut self) -> Result<(), MiniGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Called between iterations so gradients do not accumulate across steps.
    fn zero_grad(&mut self);
}
