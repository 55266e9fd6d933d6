//! Error types for weft.
//!
//! Only construction and configuration can fail. Once a cloth is built,
//! stepping it is infallible.

use thiserror::Error;

/// Unified error type for weft.
#[derive(Debug, Error)]
pub enum WeftError {
    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Grid resolution cannot form a sheet.
    #[error("Invalid resolution {resolution}: a cloth needs at least 2×2 points")]
    InvalidResolution {
        resolution: usize,
    },

    /// No cloth instance with the requested resolution exists.
    #[error("No cloth instance with resolution {resolution}")]
    UnknownInstance {
        resolution: usize,
    },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, WeftError>`.
pub type WeftResult<T> = Result<T, WeftError>;
