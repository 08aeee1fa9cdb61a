//! # efx-io
//!
//! Image file I/O for edge-filter pipelines.
//!
//! The filter crates work on plain 8-bit RGB images; this crate is the
//! boundary that gets real files into and out of that shape. PNG is the
//! only format: reads narrow richer encodings (alpha, grayscale, 16-bit)
//! down to RGB8, writes always produce 8-bit RGB.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use efx_io::png;
//!
//! let image = png::read("input.png")?;
//! png::write("edges.png", &image)?;
//! ```
//!
//! # Feature Flags
//!
//! - `png` - PNG support (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;

#[cfg(feature = "png")]
pub mod png;

pub use error::{IoError, IoResult};
