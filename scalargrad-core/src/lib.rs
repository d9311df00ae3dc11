//! Reverse-mode automatic differentiation over scalar values.
//!
//! Every arithmetic operation on a [`Value`] creates a new node that remembers
//! its operands and how to push a gradient back onto them. Calling
//! [`Value::backward`] on any node fills in d(node)/d(x) for every `x` it was
//! computed from.
//!
//! ```
//! use scalargrad_core::Value;
//!
//! let a = Value::new(3.0);
//! let x = Value::new(2.0);
//! let b = Value::new(1.0);
//! let y = &a * &x + &b;
//! y.backward();
//! assert_eq!(a.grad(), 2.0);
//! assert_eq!(x.grad(), 3.0);
//! assert_eq!(b.grad(), 1.0);
//! ```

// Déclare les modules principaux de la crate
pub mod autograd;
pub mod ops;
pub mod value;
pub mod value_data;

pub mod error;
pub mod utils;

// Ré-exporte le type Value pour qu'il soit accessible directement via `scalargrad_core::Value`
pub use value::Value;
pub use autograd::{BackwardOp, ComputationGraph};
pub use error::ScalarGradError;
// Re-export traits required by public functions/structs
pub use num_traits;
