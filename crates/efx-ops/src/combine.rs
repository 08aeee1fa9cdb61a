//! Merging two filtered images into one.
//!
//! The gradient path convolves an image twice (Sobel X and Y) and folds the
//! pair into a single result, either edge strength (Euclidean magnitude) or
//! edge direction (mapped arctangent). Both are pointwise and per-channel.

use efx_core::{Image, Rgb};
use tracing::trace;

use crate::{OpsError, OpsResult};

/// How two filtered images are folded into one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineMode {
    /// Per channel `sqrt(c0^2 + c1^2)`, clamped to `[0, 255]`.
    Magnitude,
    /// Per channel `(atan2(c1, c0) / pi + 0.5) * 255`, clamped.
    ///
    /// Maps the full `-pi..pi` arctangent range onto `[0, 255]` with a zero
    /// angle landing at 127.5.
    Angle,
}

/// Combines one pixel pair. Shared by the serial and parallel sweeps.
#[inline]
pub(crate) fn combine_pixel(a: Rgb, b: Rgb, mode: CombineMode) -> Rgb {
    let c0 = a.to_f32_array();
    let c1 = b.to_f32_array();
    let mut out = [0.0f32; 3];

    for c in 0..3 {
        out[c] = match mode {
            CombineMode::Magnitude => (c0[c] * c0[c] + c1[c] * c1[c]).sqrt(),
            CombineMode::Angle => {
                (c1[c].atan2(c0[c]) / std::f32::consts::PI + 0.5) * 255.0
            }
        };
    }

    Rgb::from_f32_array(out)
}

/// Folds two images into `dst` channel by channel.
///
/// Channels never mix: the red output depends only on the two red inputs,
/// and so on. Pure given its two inputs.
///
/// # Errors
///
/// Returns [`OpsError::SizeMismatch`] when the three images do not share
/// dimensions.
///
/// # Example
///
/// ```rust
/// use efx_core::{Image, Rgb};
/// use efx_ops::{combine, CombineMode};
///
/// let gx = Image::filled(2, 2, Rgb::new(30, 0, 0));
/// let gy = Image::filled(2, 2, Rgb::new(40, 0, 0));
/// let mut out = Image::new(2, 2);
/// combine(&gx, &gy, &mut out, CombineMode::Magnitude).unwrap();
/// assert_eq!(out.get_pixel(0, 0), Some(Rgb::new(50, 0, 0)));
/// ```
pub fn combine(a: &Image, b: &Image, dst: &mut Image, mode: CombineMode) -> OpsResult<()> {
    trace!(width = a.width(), height = a.height(), ?mode, "combine");

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

    for ((&pa, &pb), out) in a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .zip(dst.as_mut_slice().iter_mut())
    {
        *out = combine_pixel(pa, pb, mode);
    }

    Ok(())
}
