//! Owned image buffer with a bordered accessor.
//!
//! [`Image`] is a fixed-size row-major grid of [`Rgb`] pixels. Its size is
//! set at construction and never changes; filter stages exchange whole
//! buffers instead of resizing them.
//!
//! The accessor pair [`Image::sample`] / [`Image::store`] defines behavior
//! for every coordinate, inside the image or not: reads outside return
//! black, writes outside are dropped. Convolution sweeps index freely over
//! kernel footprints and never carry edge special cases.

use crate::error::{Error, Result};
use crate::pixel::Rgb;

/// A fixed-size 2D grid of [`Rgb`] pixels, row-major.
///
/// The buffer is exclusively owned: stages read through `&Image` and write
/// through `&mut Image`, so the borrow checker rules out writing a buffer
/// that another stage is still reading.
///
/// # Example
///
/// ```rust
/// use efx_core::{Image, Rgb};
///
/// let mut img = Image::new(4, 3);
/// img.set_pixel(1, 2, Rgb::new(255, 0, 0));
/// assert_eq!(img.get_pixel(1, 2), Some(Rgb::new(255, 0, 0)));
/// assert_eq!(img.get_pixel(4, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    data: Vec<Rgb>,
    width: u32,
    height: u32,
}

impl Image {
    /// Creates a black image of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![Rgb::black(); width as usize * height as usize],
            width,
            height,
        }
    }

    /// Creates an image filled with one pixel value.
    pub fn filled(width: u32, height: u32, px: Rgb) -> Self {
        Self {
            data: vec![px; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Creates an image from a pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `pixels.len()` does not equal
    /// `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} pixels, got {}", expected, pixels.len()),
            ));
        }
        Ok(Self {
            data: pixels,
            width,
            height,
        })
    }

    /// Creates an image from interleaved RGB bytes, row-major.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `bytes.len()` does not equal
    /// `width * height * 3`.
    pub fn from_raw(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize * 3;
        if bytes.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected, bytes.len()),
            ));
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect();
        Ok(Self {
            data: pixels,
            width,
            height,
        })
    }

    /// Returns the pixel data as interleaved RGB bytes, row-major.
    pub fn to_raw(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 3);
        for px in &self.data {
            bytes.extend_from_slice(&px.to_array());
        }
        bytes
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Returns the pixel at (x, y), or `None` when out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.data[self.index(x, y)])
        } else {
            None
        }
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics when (x, y) is out of bounds. Use [`Image::store`] for the
    /// silently-dropping variant.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, px: Rgb) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = self.index(x, y);
        self.data[idx] = px;
    }

    /// Reads the pixel at signed coordinates with zero padding.
    ///
    /// Returns the pixel when both coordinates lie in
    /// `[0, width) x [0, height)` and black otherwise. Kernel sweeps rely
    /// on this: neighborhoods that reach past the border pick up black
    /// samples instead of needing edge-case code.
    ///
    /// # Example
    ///
    /// ```rust
    /// use efx_core::{Image, Rgb};
    ///
    /// let img = Image::filled(2, 2, Rgb::white());
    /// assert_eq!(img.sample(0, 0), Rgb::white());
    /// assert_eq!(img.sample(-1, 0), Rgb::black());
    /// assert_eq!(img.sample(0, 2), Rgb::black());
    /// ```
    #[inline]
    pub fn sample(&self, x: i64, y: i64) -> Rgb {
        if x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64 {
            self.data[y as usize * self.width as usize + x as usize]
        } else {
            Rgb::black()
        }
    }

    /// Writes the pixel at signed coordinates, dropping out-of-bounds writes.
    ///
    /// The mirror of [`Image::sample`]: coordinates outside the image are a
    /// no-op, not an error.
    #[inline]
    pub fn store(&mut self, x: i64, y: i64, px: Rgb) {
        if x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64 {
            let idx = y as usize * self.width as usize + x as usize;
            self.data[idx] = px;
        }
    }

    /// Fills the whole image with one pixel value.
    pub fn fill(&mut self, px: Rgb) {
        self.data.fill(px);
    }

    /// Returns row `y` as a pixel slice.
    ///
    /// # Panics
    ///
    /// Panics when `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[Rgb] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Returns row `y` as a mutable pixel slice.
    ///
    /// # Panics
    ///
    /// Panics when `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [Rgb] {
        let start = y as usize * self.width as usize;
        let width = self.width as usize;
        &mut self.data[start..start + width]
    }

    /// All pixels as a flat row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[Rgb] {
        &self.data
    }

    /// All pixels as a flat mutable row-major slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Rgb] {
        &mut self.data
    }

    /// Iterator over all pixels, row-major.
    pub fn pixels(&self) -> impl Iterator<Item = &Rgb> {
        self.data.iter()
    }

    /// Mutable iterator over all pixels, row-major.
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut Rgb> {
        self.data.iter_mut()
    }
}
