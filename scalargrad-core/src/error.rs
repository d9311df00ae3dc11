use thiserror::Error;

/// Custom error type for the scalargrad engine.
///
/// Operators themselves never fail: they follow IEEE-754 semantics and produce
/// `NaN`/`inf` instead of errors. Only the configurable parts of the backward
/// driver can report a problem.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    #[error("Computation graph exceeds the node limit of {limit} (visited {visited} nodes before aborting)")]
    NodeLimitExceeded { limit: usize, visited: usize },
}
