//! # efx-core
//!
//! Core types for edge-filter image processing.
//!
//! This crate provides the foundational types used throughout the EFX-RS workspace:
//!
//! - [`Rgb`] - 8-bit three-channel pixel, no alpha
//! - [`Image`] - Owned row-major pixel grid with a zero-padding border accessor
//! - [`Error`] - Shared error type for dimension and construction failures
//!
//! ## Design Philosophy
//!
//! Filter stages exchange whole images with explicit ownership: a stage reads
//! its sources through `&Image` and writes its single target through
//! `&mut Image`, so two stages can never alias the same buffer for writing.
//! Reads outside an image are defined behavior, not errors: [`Image::sample`]
//! returns black and [`Image::store`] drops the write. That is the border
//! policy every convolution in the workspace relies on.
//!
//! ## Crate Structure
//!
//! This crate is the foundation of EFX-RS and has no internal dependencies.
//! All other EFX-RS crates depend on `efx-core`:
//!
//! ```text
//! efx-core (this crate)
//!    ^
//!    |
//!    +-- efx-ops (kernels, convolution, combination)
//!    +-- efx-pipeline (staged filter engine)
//!    +-- efx-io (PNG boundary)
//!    +-- efx-cli (command-line driver)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod pixel;

// Re-exports for convenience
pub use error::{Error, Result};
pub use image::Image;
pub use pixel::Rgb;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use efx_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::Image;
    pub use crate::pixel::Rgb;
}
