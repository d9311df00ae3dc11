use crate::value::Value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Gradient check needs at least one input")]
    EmptyInputs,
}

/// Checks analytical gradients against numerical gradients using central finite
/// differences.
///
/// `func` builds a graph from leaves holding `inputs` and returns its output node.
/// It is called once for the backward pass and twice per input for the
/// perturbed evaluations, each time on fresh leaves, so gradients never leak
/// between evaluations.
///
/// Returns the analytical gradients on success. The comparison uses
/// `tolerance` both as absolute and as relative bound.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<Vec<f64>, GradCheckError>
where
    F: Fn(&[Value]) -> Value,
{
    if inputs.is_empty() {
        return Err(GradCheckError::EmptyInputs);
    }

    // --- 1. Analytical gradients ---
    let leaves: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves);
    output.backward();
    let analytical: Vec<f64> = leaves.iter().map(Value::grad).collect();

    // --- 2. Numerical gradients ---
    let evaluate = |values: &[f64]| -> f64 {
        let leaves: Vec<Value> = values.iter().map(|&x| Value::new(x)).collect();
        func(&leaves).data()
    };

    for (i, &analytical_grad) in analytical.iter().enumerate() {
        let mut perturbed = inputs.to_vec();

        perturbed[i] = inputs[i] + epsilon;
        let loss_plus = evaluate(&perturbed);
        perturbed[i] = inputs[i] - epsilon;
        let loss_minus = evaluate(&perturbed);

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        log::trace!(
            "grad_check input {}: analytical={} numerical={}",
            i,
            analytical_grad,
            numerical_grad
        );

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(analytical)
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
