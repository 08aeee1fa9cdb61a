//! # efx-ops
//!
//! Image processing operations for edge-filter pipelines.
//!
//! This crate provides the per-stage building blocks: kernel generation,
//! 2D convolution, gradient combination, and pointwise adjustments. Every
//! operation reads from one or two source images and writes a distinct
//! destination, so stages compose without hidden aliasing.
//!
//! # Modules
//!
//! - [`kernel`] - Convolution kernel construction and built-in generators
//! - [`convolve`] - 2D convolution with zero padding at the borders
//! - [`combine`] - Folding two filtered images into one (magnitude, angle)
//! - [`dim`] - Uniform brightness reduction
//!
//! # Example
//!
//! ```rust
//! use efx_core::Image;
//! use efx_ops::{convolve, Kernel};
//!
//! let src = Image::new(16, 16);
//! let mut dst = Image::new(16, 16);
//! convolve(&src, &Kernel::laplacian(), &mut dst)?;
//! # Ok::<(), efx_ops::OpsError>(())
//! ```
//!
//! ## Edge gradients
//!
//! ```rust,ignore
//! use efx_ops::{combine, convolve, CombineMode, Kernel};
//!
//! convolve(&src, &Kernel::sobel_x(1.0), &mut grad_x)?;
//! convolve(&src, &Kernel::sobel_y(1.0), &mut grad_y)?;
//! combine(&grad_x, &grad_y, &mut edges, CombineMode::Magnitude)?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod combine;
pub mod convolve;
pub mod dim;
pub mod kernel;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use combine::{combine, CombineMode};
pub use convolve::convolve;
pub use dim::dim;
pub use error::{OpsError, OpsResult};
pub use kernel::Kernel;
