//! Uniform brightness reduction.

use std::num::NonZeroU8;

use efx_core::Image;
use tracing::trace;

use crate::{OpsError, OpsResult};

/// Divides every channel of every pixel by `factor`.
///
/// Integer division, so results truncate toward zero: a channel of 5 dimmed
/// by 2 becomes 2. The `NonZeroU8` factor rules out division by zero at the
/// type level; a factor of 1 copies `src` into `dst` unchanged.
///
/// # Errors
///
/// Returns [`OpsError::SizeMismatch`] when `src` and `dst` differ in size.
///
/// # Example
///
/// ```rust
/// use std::num::NonZeroU8;
/// use efx_core::{Image, Rgb};
/// use efx_ops::dim;
///
/// let src = Image::filled(2, 2, Rgb::gray(100));
/// let mut dst = Image::new(2, 2);
/// dim(&src, &mut dst, NonZeroU8::new(4).unwrap()).unwrap();
/// assert_eq!(dst.get_pixel(0, 0), Some(Rgb::gray(25)));
/// ```
pub fn dim(src: &Image, dst: &mut Image, factor: NonZeroU8) -> OpsResult<()> {
    trace!(
        width = src.width(),
        height = src.height(),
        factor = factor.get(),
        "dim"
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

    let f = factor.get();
    for (&px, out) in src.as_slice().iter().zip(dst.as_mut_slice().iter_mut()) {
        *out = px.map(|c| c / f);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use efx_core::Rgb;

    fn factor(n: u8) -> NonZeroU8 {
        NonZeroU8::new(n).unwrap()
    }

    #[test]
    fn test_dim_halves() {
        let src = Image::filled(2, 2, Rgb::new(255, 100, 0));
        let mut dst = Image::new(2, 2);
        dim(&src, &mut dst, factor(2)).unwrap();
        assert!(dst.pixels().all(|&px| px == Rgb::new(127, 50, 0)));
    }

    #[test]
    fn test_dim_factor_one_is_identity() {
        let mut src = Image::new(3, 2);
        for (i, px) in src.pixels_mut().enumerate() {
            *px = Rgb::new(i as u8 * 40, 255 - i as u8 * 40, i as u8);
        }
        let mut dst = Image::new(3, 2);
        dim(&src, &mut dst, factor(1)).unwrap();
        assert_eq!(src, dst);
    }

    #[test]
    fn test_dim_truncates() {
        let src = Image::filled(1, 1, Rgb::new(5, 3, 1));
        let mut dst = Image::new(1, 1);
        dim(&src, &mut dst, factor(2)).unwrap();
        assert_eq!(dst.get_pixel(0, 0), Some(Rgb::new(2, 1, 0)));
    }

    #[test]
    fn test_dim_size_mismatch() {
        let src = Image::new(2, 2);
        let mut dst = Image::new(2, 3);
        let err = dim(&src, &mut dst, factor(2)).unwrap_err();
        assert!(matches!(err, OpsError::SizeMismatch(_)));
    }
}
