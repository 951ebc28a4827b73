use log::debug;
use ndarray::ArrayD;
use thiserror::Error;

use crate::error::MiniGradError;
use crate::node::Node;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}, element {element_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        element_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(MiniGradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(MiniGradError),
    #[error("Input {input_index} requires grad but has no gradient after backward pass.")]
    MissingAnalyticalGrad { input_index: usize },
    #[error("Numerical gradient is NaN or infinite for input {input_index}, element {element_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        element_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Gradient check input must be a leaf node. Input index: {input_index}")]
    InputNotLeaf { input_index: usize },
    #[error("Function did not propagate requires_grad correctly.")]
    RequiresGradPropagationError,
    #[error("Node error during intermediate calculation: {0}")]
    NodeError(MiniGradError),
}

impl From<MiniGradError> for GradCheckError {
    fn from(err: MiniGradError) -> Self {
        GradCheckError::NodeError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central finite differences.
///
/// The scalar loss used for the finite differences is `sum(func(inputs) * output_grad)`,
/// whose gradient with respect to each input is exactly what
/// `func(inputs).backward(Some(output_grad))` accumulates.
///
/// Gradients of the inputs are reset before the analytical pass.
pub fn check_grad<F>(
    func: F,
    inputs: &[Node],
    output_grad: &ArrayD<f64>,
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Node]) -> Result<Node, MiniGradError>,
{
    // --- Initial Checks ---
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
        if input.requires_grad() {
            input.reset_grad();
        }
    }

    // --- Analytical Pass ---
    let output = func(inputs).map_err(GradCheckError::ForwardPassError)?;
    let any_input_requires_grad = inputs.iter().any(Node::requires_grad);
    if any_input_requires_grad != output.requires_grad() {
        return Err(GradCheckError::RequiresGradPropagationError);
    }
    if output.requires_grad() {
        output
            .backward(Some(output_grad))
            .map_err(GradCheckError::BackwardPassError)?;
    }

    // --- Numerical Pass ---
    for (i, input) in inputs.iter().enumerate() {
        if !input.requires_grad() {
            continue;
        }
        let analytical = input
            .grad()
            .ok_or(GradCheckError::MissingAnalyticalGrad { input_index: i })?;
        let original = input.data();

        for (elem_idx, &analytical_grad) in analytical.iter().enumerate() {
            let loss_plus = perturbed_loss(&func, inputs, i, &original, elem_idx, epsilon, output_grad)?;
            let loss_minus = perturbed_loss(&func, inputs, i, &original, elem_idx, -epsilon, output_grad)?;
            let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

            if !numerical_grad.is_finite() {
                return Err(GradCheckError::NumericalGradNaNOrInfinite {
                    input_index: i,
                    element_index: elem_idx,
                    loss_plus,
                    loss_minus,
                });
            }

            let difference = (analytical_grad - numerical_grad).abs();
            if difference > tolerance * (1.0 + numerical_grad.abs()) {
                return Err(GradCheckError::GradientMismatch {
                    input_index: i,
                    element_index: elem_idx,
                    analytical_grad,
                    numerical_grad,
                    difference,
                });
            }
        }
        debug!("check_grad: input {} ok ({} elements)", i, analytical.len());
    }

    Ok(())
}

/// Evaluates the weighted loss with one element of one input shifted by `delta`.
/// Perturbed inputs are fresh leaves so the caller's gradients are not touched.
fn perturbed_loss<F>(
    func: &F,
    inputs: &[Node],
    input_index: usize,
    original: &ArrayD<f64>,
    element_index: usize,
    delta: f64,
    output_grad: &ArrayD<f64>,
) -> Result<f64, GradCheckError>
where
    F: Fn(&[Node]) -> Result<Node, MiniGradError>,
{
    let mut perturbed = original.clone();
    if let Some(value) = perturbed.iter_mut().nth(element_index) {
        *value += delta;
    }

    let perturbed_inputs: Vec<Node> = inputs
        .iter()
        .enumerate()
        .map(|(j, input)| {
            if j == input_index {
                Node::from_array(perturbed.clone(), false)
            } else {
                input.detach()
            }
        })
        .collect();

    let output = func(&perturbed_inputs).map_err(GradCheckError::ForwardPassError)?;
    let output_data = output.data();
    if output_data.shape() != output_grad.shape() {
        return Err(GradCheckError::NodeError(MiniGradError::ShapeMismatch {
            expected: output_data.shape().to_vec(),
            actual: output_grad.shape().to_vec(),
            operation: "check_grad".to_string(),
        }));
    }
    Ok(output_data
        .iter()
        .zip(output_grad.iter())
        .map(|(o, g)| o * g)
        .sum())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
