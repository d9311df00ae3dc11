use crate::ops::arithmetic::add_op;
use crate::value::Value;
use num_traits::{One, Zero};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::rc::Rc;

// --- Trait Implementations ---

impl Clone for Value {
    /// Shallow clone: the returned handle refers to the same node, so gradients
    /// accumulated through one clone are visible through all others.
    fn clone(&self) -> Self {
        Value {
            data: Rc::clone(&self.data),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.try_borrow() {
            Ok(guard) => write!(
                f,
                "Value(data={}, grad={}, op=\"{}\", inputs={})",
                guard.data,
                guard.grad,
                guard.op,
                guard.inputs.len()
            ),
            Err(_) => write!(f, "Value(<mutably borrowed>)"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data: {}, grad: {})", self.data(), self.grad())
    }
}

impl PartialEq for Value {
    /// Identity comparison. Two distinct nodes holding the same number are *not*
    /// equal; compare `data()` for numeric equality.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl Eq for Value {}

impl Hash for Value {
    /// Hashes the node identity (the pointer of the shared `RefCell<ValueData>`).
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node_id().hash(state);
    }
}

impl Sum for Value {
    /// Left fold of `+` starting from a fresh leaf `0`.
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Self {
        iter.fold(Value::zero(), |acc, v| add_op(&acc, &v))
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Self {
        iter.fold(Value::zero(), |acc, v| add_op(&acc, v))
    }
}

impl Zero for Value {
    /// A fresh leaf holding `0`.
    fn zero() -> Self {
        Value::new(0.0)
    }

    fn is_zero(&self) -> bool {
        self.data() == 0.0
    }
}

impl One for Value {
    /// A fresh leaf holding `1`.
    fn one() -> Self {
        Value::new(1.0)
    }

    fn is_one(&self) -> bool
    where
        Self: PartialEq,
    {
        self.data() == 1.0
    }
}
