//! Error types for entity output.

use thiserror::Error;

/// Failure while emitting an entity's output line.
///
/// Entity construction and accessors never fail; only writing to the
/// output sink can.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The output sink rejected the write.
    #[error("failed to write output line: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for emitting operations.
pub type EmitResult<T> = Result<T, EmitError>;
