//! Error types for filter operations.

use thiserror::Error;

/// Error type for filter operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Images have incompatible sizes.
    #[error("size mismatch: {0}")]
    SizeMismatch(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for filter operations.
pub type OpsResult<T> = Result<T, OpsError>;
