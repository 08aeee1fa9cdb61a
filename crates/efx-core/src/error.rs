//! Error types for efx-core operations.
//!
//! Out-of-range pixel access is deliberately absent here: reads outside an
//! image return black and writes outside are dropped (see
//! [`crate::image::Image::sample`]), so the only failures this crate can
//! produce are construction-time dimension problems.
//!
//! # Usage
//!
//! ```rust
//! use efx_core::{Error, Result, Image, Rgb};
//!
//! fn build(pixels: Vec<Rgb>) -> Result<Image> {
//!     Image::from_pixels(4, 4, pixels)
//! }
//!
//! assert!(build(vec![Rgb::black(); 15]).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
///
/// Convenience alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing core image types.
///
/// This enum uses [`thiserror`] for automatic [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid image dimensions.
    ///
    /// Returned when a pixel or byte buffer does not match the requested
    /// width and height, or when the pixel count would overflow.
    ///
    /// # Example
    ///
    /// ```rust
    /// use efx_core::Error;
    ///
    /// let err = Error::invalid_dimensions(8, 8, "expected 64 pixels, got 3");
    /// assert!(err.to_string().contains("8x8"));
    /// ```
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Generic error with custom message.
    ///
    /// Catch-all for errors that don't fit other categories.
    /// Prefer specific error variants when possible.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::Other`] error.
    #[inline]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Returns `true` if this is a dimension error.
    #[inline]
    pub fn is_dimension_error(&self) -> bool {
        matches!(self, Self::InvalidDimensions { .. })
    }
}
