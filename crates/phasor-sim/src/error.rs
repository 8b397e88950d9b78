//! Simulator error types.

use thiserror::Error;

/// Errors produced by the statevector simulator.
#[derive(Error, Debug)]
pub enum SimError {
    /// Circuit exceeds the simulator's qubit capacity.
    #[error("circuit too large: {0}")]
    CircuitTooLarge(String),
}

/// Result type for simulator operations.
pub type SimResult<T> = Result<T, SimError>;
