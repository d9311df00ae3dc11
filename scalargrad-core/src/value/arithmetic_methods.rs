use crate::ops::{add_op, div_op, mul_op, neg_op, pow_op, relu_op, sub_op};
use crate::value::Value;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl Value {
    /// `self ** exponent` for a constant exponent.
    pub fn pow(&self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }

    /// `max(0, self)`.
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

impl num_traits::Pow<f64> for &Value {
    type Output = Value;

    fn pow(self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }
}

/// Implements a binary operator for every pairing of `Value`, `&Value` and `f64`.
/// A raw number is wrapped in a fresh leaf and the node-by-node form is used.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<'a, 'b> $trait<&'b Value> for &'a Value {
            type Output = Value;
            fn $method(self, rhs: &'b Value) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl<'a> $trait<Value> for &'a Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(self, &rhs)
            }
        }

        impl<'b> $trait<&'b Value> for Value {
            type Output = Value;
            fn $method(self, rhs: &'b Value) -> Value {
                $op_fn(&self, rhs)
            }
        }

        impl $trait<Value> for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&self, &rhs)
            }
        }

        impl<'a> $trait<f64> for &'a Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $op_fn(self, &Value::new(rhs))
            }
        }

        impl $trait<f64> for Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $op_fn(&self, &Value::new(rhs))
            }
        }

        impl<'b> $trait<&'b Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: &'b Value) -> Value {
                $op_fn(&Value::new(self), rhs)
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&Value::new(self), &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

/// `x op= y` rebinds `x` to the new node `x op y`. The node `x` previously
/// referred to is not modified and stays in the graph as an input.
macro_rules! impl_assign_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<'b> $trait<&'b Value> for Value {
            fn $method(&mut self, rhs: &'b Value) {
                *self = $op_fn(self, rhs);
            }
        }

        impl $trait<Value> for Value {
            fn $method(&mut self, rhs: Value) {
                *self = $op_fn(self, &rhs);
            }
        }

        impl $trait<f64> for Value {
            fn $method(&mut self, rhs: f64) {
                *self = $op_fn(self, &Value::new(rhs));
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign, add_op);
impl_assign_op!(SubAssign, sub_assign, sub_op);
impl_assign_op!(MulAssign, mul_assign, mul_op);
impl_assign_op!(DivAssign, div_assign, div_op);

impl Neg for &Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(&self)
    }
}
