//! 2D kernel convolution over RGB images.
//!
//! One pass reads every source pixel's kernel neighborhood through the
//! zero-padding accessor and writes one output pixel, per channel, in
//! `f32`. Borders need no special casing: out-of-range taps sample black.
//!
//! Source and destination are distinct borrows, so an in-place pass cannot
//! be expressed; the output never feeds back into its own neighborhood.

use efx_core::{Image, Rgb};
use tracing::trace;

use crate::kernel::Kernel;
use crate::{OpsError, OpsResult};

/// Convolves one pixel position. Shared by the serial and parallel sweeps
/// so both produce bit-identical results.
#[inline]
pub(crate) fn convolve_pixel(src: &Image, kernel: &Kernel, x: i64, y: i64) -> Rgb {
    let (rx, ry) = kernel.radius();
    let mut sums = [0.0f32; 3];

    for ky in 0..kernel.height {
        for kx in 0..kernel.width {
            let dx = kx as i64 - rx as i64;
            let dy = ky as i64 - ry as i64;

            let w = kernel.coeff(dx, dy);
            let px = src.sample(x + dx, y + dy).to_f32_array();

            for c in 0..3 {
                sums[c] += px[c] * w;
            }
        }
    }

    Rgb::from_f32_array(sums)
}

/// Applies a convolution kernel to `src`, writing into `dst`.
///
/// Every output channel is the kernel-weighted sum of the corresponding
/// input channel over the neighborhood, accumulated in `f32`, clamped to
/// `[0, 255]` on store. Out-of-bounds taps contribute black.
///
/// # Errors
///
/// Returns [`OpsError::SizeMismatch`] when `src` and `dst` dimensions
/// differ.
///
/// # Example
///
/// ```rust
/// use efx_core::{Image, Rgb};
/// use efx_ops::{convolve, Kernel};
///
/// let src = Image::filled(8, 8, Rgb::gray(100));
/// let mut dst = Image::new(8, 8);
/// convolve(&src, &Kernel::laplacian(), &mut dst).unwrap();
/// // Flat interior has zero second derivative
/// assert_eq!(dst.get_pixel(4, 4), Some(Rgb::black()));
/// ```
pub fn convolve(src: &Image, kernel: &Kernel, dst: &mut Image) -> OpsResult<()> {
    trace!(
        width = src.width(),
        height = src.height(),
        kernel_w = kernel.width,
        kernel_h = kernel.height,
        "convolve"
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

    for y in 0..src.height() {
        let row = dst.row_mut(y);
        for x in 0..src.width() {
            row[x as usize] = convolve_pixel(src, kernel, x as i64, y as i64);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_kernel() -> Kernel {
        Kernel::new(
            vec![0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0],
            3,
            3,
        )
        .unwrap()
    }

    #[test]
    fn test_identity() {
        let mut src = Image::new(5, 4);
        for y in 0..4 {
            for x in 0..5 {
                src.set_pixel(x, y, Rgb::new((x * 40) as u8, (y * 60) as u8, 9));
            }
        }

        let mut dst = Image::new(5, 4);
        convolve(&src, &identity_kernel(), &mut dst).unwrap();
        assert_eq!(dst, src);
    }

    #[test]
    fn test_interior_matches_direct_sum() {
        let mut src = Image::new(3, 3);
        let values = [
            [90u8, 80, 70],
            [60, 50, 40],
            [30, 20, 10],
        ];
        for y in 0..3 {
            for x in 0..3 {
                src.set_pixel(x, y, Rgb::gray(values[y as usize][x as usize]));
            }
        }

        let kernel = Kernel::sobel_x(1.0);
        let mut dst = Image::new(3, 3);
        convolve(&src, &kernel, &mut dst).unwrap();

        // Direct weighted sum at the interior pixel:
        // 1*90 - 1*70 + 2*60 - 2*40 + 1*30 - 1*10 = 80
        assert_eq!(dst.get_pixel(1, 1), Some(Rgb::gray(80)));
    }

    #[test]
    fn test_border_taps_read_black() {
        // Eighth-weight kernel over an all-white image. 0.125 and its
        // multiples are exact in f32, so every expectation is exact.
        let kernel = Kernel::new(vec![0.125; 9], 3, 3).unwrap();
        let src = Image::filled(5, 5, Rgb::white());
        let mut dst = Image::new(5, 5);
        convolve(&src, &kernel, &mut dst).unwrap();

        // Interior: 9 taps * 31.875 = 286.875, clamps to white
        assert_eq!(dst.get_pixel(2, 2), Some(Rgb::white()));

        // Corner: only 4 taps land inside, 4 * 31.875 = 127.5 -> 127
        assert_eq!(dst.get_pixel(0, 0), Some(Rgb::gray(127)));
        assert_eq!(dst.get_pixel(4, 4), Some(Rgb::gray(127)));

        // Edge (non-corner): 6 taps inside, 6 * 31.875 = 191.25 -> 191
        assert_eq!(dst.get_pixel(2, 0), Some(Rgb::gray(191)));
    }

    #[test]
    fn test_negative_sums_clamp_to_zero() {
        // Sobel-X over a left-dark right-bright ramp accumulates negative
        // values, which clamp to black.
        let mut src = Image::new(4, 3);
        for y in 0..3 {
            for x in 0..4 {
                src.set_pixel(x, y, Rgb::gray((x * 80) as u8));
            }
        }
        let mut dst = Image::new(4, 3);
        convolve(&src, &Kernel::sobel_x(1.0), &mut dst).unwrap();
        assert_eq!(dst.get_pixel(1, 1), Some(Rgb::black()));
        assert_eq!(dst.get_pixel(2, 1), Some(Rgb::black()));
    }

    #[test]
    fn test_positive_sums_clamp_to_white() {
        let mut src = Image::new(3, 3);
        src.set_pixel(1, 1, Rgb::white());
        let mut dst = Image::new(3, 3);
        convolve(&src, &Kernel::laplacian_diag(), &mut dst).unwrap();
        // 8 * 255 clamps to 255 at the bright pixel
        assert_eq!(dst.get_pixel(1, 1), Some(Rgb::white()));
    }

    #[test]
    fn test_size_mismatch() {
        let src = Image::new(4, 4);
        let mut dst = Image::new(5, 4);
        let err = convolve(&src, &Kernel::laplacian(), &mut dst).unwrap_err();
        assert!(matches!(err, OpsError::SizeMismatch(_)));
    }
}
