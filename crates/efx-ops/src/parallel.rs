//! Parallel image processing operations using Rayon.
//!
//! Drop-in replacements for the serial sweeps, with identical signatures so
//! callers can switch by import alone. Each function splits the destination
//! into rows and processes them across the Rayon thread pool.
//!
//! Every pixel is computed by the same per-pixel routine the serial sweeps
//! use, so results are bit-identical regardless of thread count.
//!
//! # Example
//!
//! ```rust
//! use efx_core::Image;
//! use efx_ops::{parallel, Kernel};
//!
//! let src = Image::new(64, 64);
//! let mut dst = Image::new(64, 64);
//! parallel::convolve(&src, &Kernel::gauss(5, 1.5), &mut dst).unwrap();
//! ```

use efx_core::Image;
use rayon::prelude::*;
use tracing::trace;

use crate::combine::{combine_pixel, CombineMode};
use crate::convolve::convolve_pixel;
use crate::kernel::Kernel;
use crate::{OpsError, OpsResult};

/// Parallel convolution over destination rows.
///
/// Same semantics as [`crate::convolve`]: zero padding outside the source,
/// per-channel accumulation, clamp to `[0, 255]` on store.
///
/// # Errors
///
/// Returns [`OpsError::SizeMismatch`] when `src` and `dst` differ in size.
pub fn convolve(src: &Image, kernel: &Kernel, dst: &mut Image) -> OpsResult<()> {
    trace!(
        width = src.width(),
        height = src.height(),
        kernel_width = kernel.width,
        kernel_height = kernel.height,
        "parallel convolve"
    );

    if src.dimensions() != dst.dimensions() {
        return Err(OpsError::SizeMismatch(format!(
            "source {}x{} vs destination {}x{}",
            src.width(),
            src.height(),
            dst.width(),
            dst.height()
        )));
    }

    let width = dst.width() as usize;
    dst.as_mut_slice()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, out) in row.iter_mut().enumerate() {
                *out = convolve_pixel(src, kernel, x as i64, y as i64);
            }
        });

    Ok(())
}

/// Parallel fold of two images into `dst`.
///
/// Same semantics as [`crate::combine`].
///
/// # Errors
///
/// Returns [`OpsError::SizeMismatch`] when the three images do not share
/// dimensions.
pub fn combine(a: &Image, b: &Image, dst: &mut Image, mode: CombineMode) -> OpsResult<()> {
    trace!(width = a.width(), height = a.height(), ?mode, "parallel combine");

    if a.dimensions() != b.dimensions() || a.dimensions() != dst.dimensions() {
        return Err(OpsError::SizeMismatch(format!(
            "inputs {}x{} and {}x{} vs destination {}x{}",
            a.width(),
            a.height(),
            b.width(),
            b.height(),
            dst.width(),
            dst.height()
        )));
    }

    let width = dst.width() as usize;
    let pa = a.as_slice();
    let pb = b.as_slice();
    dst.as_mut_slice()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, out) in row.iter_mut().enumerate() {
                let i = y * width + x;
                *out = combine_pixel(pa[i], pb[i], mode);
            }
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use efx_core::Rgb;

    /// Deterministic non-uniform test pattern.
    fn pattern(width: u32, height: u32) -> Image {
        let mut img = Image::new(width, height);
        for y in 0..height {
            for x in 0..width {
                img.set_pixel(
                    x,
                    y,
                    Rgb::new(
                        (x * 7 + y * 13) as u8,
                        (x * 3 + y * 5) as u8,
                        (x + y * 2) as u8,
                    ),
                );
            }
        }
        img
    }

    #[test]
    fn test_parallel_convolve_matches_serial() {
        let src = pattern(33, 17);
        let kernel = Kernel::sobel_x(1.0);

        let mut serial = Image::new(33, 17);
        crate::convolve(&src, &kernel, &mut serial).unwrap();

        let mut parallel = Image::new(33, 17);
        convolve(&src, &kernel, &mut parallel).unwrap();

        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_parallel_combine_matches_serial() {
        let a = pattern(31, 19);
        let b = pattern(31, 19);

        for mode in [CombineMode::Magnitude, CombineMode::Angle] {
            let mut serial = Image::new(31, 19);
            crate::combine(&a, &b, &mut serial, mode).unwrap();

            let mut parallel = Image::new(31, 19);
            combine(&a, &b, &mut parallel, mode).unwrap();

            assert_eq!(serial, parallel);
        }
    }

    #[test]
    fn test_parallel_convolve_size_mismatch() {
        let src = Image::new(8, 8);
        let mut dst = Image::new(8, 9);
        let err = convolve(&src, &Kernel::laplacian(), &mut dst).unwrap_err();
        assert!(matches!(err, OpsError::SizeMismatch(_)));
    }
}
