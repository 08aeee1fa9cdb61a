//! Pixel type for 8-bit RGB processing.
//!
//! A pixel is three independent channels in `[0, 255]` with no alpha.
//! Filter arithmetic runs in `f32` and comes back through
//! [`Rgb::from_f32_array`], the single place where results are clamped
//! to the storable range.

use std::fmt;

/// An 8-bit RGB pixel.
///
/// Channels are independent: no operation in the workspace mixes them.
/// `Default` is black.
///
/// # Example
///
/// ```rust
/// use efx_core::Rgb;
///
/// let px = Rgb::new(255, 128, 0);
/// assert_eq!(px.to_array(), [255, 128, 0]);
/// assert_eq!(Rgb::default(), Rgb::black());
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[repr(C)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Creates a pixel from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a gray pixel (all channels equal).
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Black pixel (0, 0, 0).
    ///
    /// This is the value out-of-bounds reads produce, see
    /// [`crate::image::Image::sample`].
    #[inline]
    pub const fn black() -> Self {
        Self::gray(0)
    }

    /// White pixel (255, 255, 255).
    #[inline]
    pub const fn white() -> Self {
        Self::gray(255)
    }

    /// Converts to a channel array `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Creates from a channel array `[r, g, b]`.
    #[inline]
    pub const fn from_array(arr: [u8; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Converts channels to `f32` for filter arithmetic.
    #[inline]
    pub fn to_f32_array(self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }

    /// Creates from `f32` channel values.
    ///
    /// Each value is clamped to `[0.0, 255.0]` and truncated, the plain
    /// unsigned-char conversion. This is how every filter result re-enters
    /// 8-bit storage.
    ///
    /// # Example
    ///
    /// ```rust
    /// use efx_core::Rgb;
    ///
    /// let px = Rgb::from_f32_array([300.0, -20.0, 127.9]);
    /// assert_eq!(px, Rgb::new(255, 0, 127));
    /// ```
    #[inline]
    pub fn from_f32_array(arr: [f32; 3]) -> Self {
        Self::new(
            arr[0].clamp(0.0, 255.0) as u8,
            arr[1].clamp(0.0, 255.0) as u8,
            arr[2].clamp(0.0, 255.0) as u8,
        )
    }

    /// Applies a function to each channel.
    ///
    /// # Example
    ///
    /// ```rust
    /// use efx_core::Rgb;
    ///
    /// let halved = Rgb::new(100, 50, 8).map(|c| c / 2);
    /// assert_eq!(halved, Rgb::new(50, 25, 4));
    /// ```
    #[inline]
    pub fn map<F: Fn(u8) -> u8>(self, f: F) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    #[inline]
    fn from(arr: [u8; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgb> for [u8; 3] {
    #[inline]
    fn from(px: Rgb) -> Self {
        px.to_array()
    }
}
