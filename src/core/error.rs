//! Error types and handling for the guard.
//!
//! Only failures that stop an evaluation outright live here. Path resolution
//! problems are absorbed inside the guard and never reach this type.

use thiserror::Error;

/// A specialized Result type for guard operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the guard.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the guard domain.
    #[error("Guard error: {0}")]
    Guard(#[from] crate::domains::guard::GuardError),

    /// The hook payload could not be decoded.
    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors while reading the payload or writing the decision.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
