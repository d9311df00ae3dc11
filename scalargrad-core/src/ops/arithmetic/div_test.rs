use super::*;
use crate::autograd::grad_check::check_grad;
use approx::assert_relative_eq;

#[test]
fn test_div_forward() {
    let y = div_op(&Value::new(2.0), &Value::new(3.0));
    assert_relative_eq!(y.data(), 2.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn test_div_backward() {
    // y = a / x  =>  dy/dx = -a / x^2, dy/da = 1 / x
    let a = Value::new(3.0);
    let x = Value::new(3.0);
    let y = div_op(&a, &x);
    y.backward();
    assert_relative_eq!(x.grad(), -a.data() / x.data().powi(2), epsilon = 1e-12);
    assert_relative_eq!(a.grad(), 1.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn test_div_by_zero_is_not_an_error() {
    let a = Value::new(1.0);
    let x = Value::new(0.0);
    let y = div_op(&a, &x);
    assert_eq!(y.data(), f64::INFINITY);
    y.backward();
    assert!(!x.grad().is_finite());
}

#[test]
fn test_div_grad_check() {
    let result = check_grad(|v| div_op(&v[0], &v[1]), &[0.9, -2.1], 1e-6, 1e-5);
    assert!(result.is_ok(), "{:?}", result);
}
