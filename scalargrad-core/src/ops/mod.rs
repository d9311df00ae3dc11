//! Differentiable operators on [`Value`](crate::Value) nodes.
//!
//! `add`, `mul`, `pow` and `relu` are primitives with their own backward rule.
//! Everything else is expressed in terms of them.

pub mod activation;
pub mod arithmetic;

pub use activation::relu_op;
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
