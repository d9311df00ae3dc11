use approx::assert_abs_diff_eq;
use scalargrad_core::utils::testing::check_value_near;
use scalargrad_core::{ComputationGraph, ScalarGradError, Value};

// Include the common helper module
mod common;
use common::build_fan_out_scenario;

const TOL: f64 = 1e-6;

#[test]
fn test_large_forward_backward_pass() {
    let (a, b, g) = build_fan_out_scenario(-4.0, 2.0);
    g.backward();

    assert_abs_diff_eq!(a.data(), -4.0, epsilon = TOL);
    assert_abs_diff_eq!(b.data(), 2.0, epsilon = TOL);
    assert_abs_diff_eq!(g.data(), 24.70408163265306, epsilon = TOL);
}

#[test]
fn test_large_pass_gradients_sum_over_fan_out() {
    let (a, b, g) = build_fan_out_scenario(-4.0, 2.0);
    g.backward();

    check_value_near(&a, -4.0, 138.83381924198252, TOL);
    check_value_near(&b, 2.0, 645.5772594752186, TOL);
    check_value_near(&g, 24.70408163265306, 1.0, TOL);
}

#[test]
fn test_large_pass_is_deterministic() {
    let (_, _, g1) = build_fan_out_scenario(-4.0, 2.0);
    let (_, _, g2) = build_fan_out_scenario(-4.0, 2.0);
    assert_eq!(g1.data().to_bits(), g2.data().to_bits());
    assert_ne!(g1, g2);
}

#[test]
fn test_large_pass_through_computation_graph() -> Result<(), ScalarGradError> {
    let (a, b, g) = build_fan_out_scenario(-4.0, 2.0);
    let graph = ComputationGraph::with_max_nodes(1_000);
    graph.backward(&g)?;
    check_value_near(&a, -4.0, 138.83381924198252, TOL);
    check_value_near(&b, 2.0, 645.5772594752186, TOL);

    graph.zero_grad(&g)?;
    assert_eq!(a.grad(), 0.0);
    graph.backward(&g)?;
    check_value_near(&a, -4.0, 138.83381924198252, TOL);
    Ok(())
}

#[test]
fn test_backprop_linear() {
    let a = Value::new(3.0);
    let x = Value::new(2.0);
    let b = Value::new(1.0);

    let y = &a * &x + &b;
    y.backward();

    assert_eq!(a.grad(), x.data());
    assert_eq!(x.grad(), a.data());
    assert_eq!(b.grad(), 1.0);
}

#[test]
fn test_backprop_poly() {
    let a = Value::new(3.0);
    let x = Value::new(3.0);
    let b = Value::new(1.0);

    let y = &a * x.pow(2.0) - &b;
    y.backward();

    assert_abs_diff_eq!(a.grad(), x.data().powi(2), epsilon = 1e-12);
    assert_abs_diff_eq!(x.grad(), a.data() * 2.0 * x.data(), epsilon = 1e-12);
    assert_eq!(b.grad(), -1.0);
}
