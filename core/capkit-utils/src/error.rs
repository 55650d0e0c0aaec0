//! Error types for the helper functions.

use thiserror::Error;

/// Errors returned by the numeric helpers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UtilsError {
    /// Factorial is not defined for negative numbers.
    #[error("factorial is not defined for negative input {0}")]
    NegativeInput(i64),

    /// The input slice had no elements.
    #[error("input cannot be empty")]
    EmptyInput,

    /// The result does not fit in a `u64`.
    #[error("factorial of {0} overflows u64")]
    Overflow(i64),
}

/// Result type for helper operations.
pub type UtilsResult<T> = Result<T, UtilsError>;
