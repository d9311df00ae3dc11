use crate::value::Value;

/// Checks that a node's value and gradient are within `tolerance` of the
/// expected numbers. Panics with a descriptive message otherwise.
pub fn check_value_near(actual: &Value, expected_data: f64, expected_grad: f64, tolerance: f64) {
    let data_diff = (actual.data() - expected_data).abs();
    if data_diff > tolerance || data_diff.is_nan() {
        panic!(
            "Data mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual.data(),
            expected_data,
            data_diff,
            tolerance
        );
    }

    let grad_diff = (actual.grad() - expected_grad).abs();
    if grad_diff > tolerance || grad_diff.is_nan() {
        panic!(
            "Gradient mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual.grad(),
            expected_grad,
            grad_diff,
            tolerance
        );
    }
}
