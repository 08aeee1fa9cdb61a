//! Error types for pipeline configuration and execution.
//!
//! Configuration problems are caught before any stage runs: an engine either
//! initializes fully or reports why it cannot. Once a run starts there is
//! nothing left to reject but host-supplied buffer sizes.

use std::path::PathBuf;
use thiserror::Error;

use efx_ops::OpsError;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Errors that can occur while configuring or running a pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// I/O error reading a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration file not found.
    #[error("config file not found: {path}")]
    ConfigNotFound {
        /// Path that was searched.
        path: PathBuf,
    },

    /// Rejected configuration.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of what's wrong.
        reason: String,
    },

    /// Host-supplied image does not match the initialized frame size.
    #[error("size mismatch: engine initialized for {expected_width}x{expected_height}, got {width}x{height}")]
    SizeMismatch {
        /// Width the engine was initialized with.
        expected_width: u32,
        /// Height the engine was initialized with.
        expected_height: u32,
        /// Width of the offending image.
        width: u32,
        /// Height of the offending image.
        height: u32,
    },

    /// Failure inside an image operation.
    #[error("operation failed: {0}")]
    Ops(#[from] OpsError),
}

impl PipelineError {
    /// Creates an invalid-configuration error.
    #[inline]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Returns true for configuration-time rejections, as opposed to
    /// failures while a run is in flight.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfig { .. } | Self::ConfigNotFound { .. } | Self::Yaml(_)
        )
    }
}
