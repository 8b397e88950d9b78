//! Error types for the algorithm builders.

use thiserror::Error;

/// Errors produced by the QFT/QPE circuit builders.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AlgoError {
    /// A builder parameter is out of range.
    ///
    /// Raised synchronously at the start of `build`, before any register
    /// is allocated or gate appended. Construction is deterministic, so a
    /// failed call fails identically on retry; the caller must correct
    /// the configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Circuit builder returned an error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] phasor_ir::IrError),
}

/// Result type for algorithm builder operations.
pub type AlgoResult<T> = Result<T, AlgoError>;
