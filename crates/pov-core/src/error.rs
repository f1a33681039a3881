//! Error types for `pov-core`.
//!
//! Each variant carries the offending value and the accepted domain so the
//! caller can render a useful message without re-deriving the bounds.

/// Errors from the savings calculator and its input state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    /// A numeric input fell outside its declared domain (or was not finite).
    #[error("invalid input: {field} must be between {min} and {max}, got {value}")]
    InvalidInput {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A category index does not refer to one of the fixed categories.
    #[error("invalid input: category index {index} is out of range (0..{count})")]
    UnknownCategory { index: usize, count: usize },
}

/// Errors from page-level state transitions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PageError {
    /// The calculator is still behind the access gate.
    #[error("calculator is locked")]
    Locked,

    /// The requested input change was rejected by the calculator.
    #[error(transparent)]
    Calc(#[from] CalcError),
}
