use scalargrad_core::Value;

/// The end-to-end expression that exercises every operator, scalar overloads on
/// both sides and heavy fan-out of `a`, `b`, `c` and `d`.
#[allow(dead_code)]
pub fn fan_out_expression(a: &Value, b: &Value) -> Value {
    let mut c = a + b;
    let mut d = a * b + b.pow(3.0);
    c = &c + &c + 1.0;
    c = &c + 1.0 + &c - a;
    d = &d + &d * 2.0 + (b + a).relu();
    d = &d + 3.0 * &d + (b - a).relu();
    let e = &c - &d;
    let f = e.pow(2.0);
    &f / 2.0 + 10.0 / &f
}

/// Builds [`fan_out_expression`] over fresh leaves. Returns `(a, b, g)`; nothing
/// has been differentiated yet.
#[allow(dead_code)]
pub fn build_fan_out_scenario(a_data: f64, b_data: f64) -> (Value, Value, Value) {
    let a = Value::new(a_data);
    let b = Value::new(b_data);
    let g = fan_out_expression(&a, &b);
    (a, b, g)
}

/// Fresh leaves drawn from `values`.
#[allow(dead_code)]
pub fn leaves(values: &[f64]) -> Vec<Value> {
    values.iter().map(|&x| Value::new(x)).collect()
}
