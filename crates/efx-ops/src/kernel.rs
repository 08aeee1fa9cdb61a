//! Convolution kernel type and coefficient generators.
//!
//! # Kernels
//!
//! - [`Kernel::sobel_x`] / [`Kernel::sobel_y`] - Directional gradient kernels
//! - [`Kernel::laplacian`] - Four-neighbor Laplacian
//! - [`Kernel::laplacian_diag`] - Eight-neighbor Laplacian
//! - [`Kernel::gauss`] - Gaussian smoothing
//!
//! Generators are pure and total: given the same arguments they produce the
//! same coefficients bit for bit, with no error conditions.
//!
//! # Example
//!
//! ```rust
//! use efx_ops::Kernel;
//!
//! let k = Kernel::sobel_x(1.0);
//! assert_eq!(k.data, [1.0, 0.0, -1.0, 2.0, 0.0, -2.0, 1.0, 0.0, -1.0]);
//! ```

use crate::{OpsError, OpsResult};

/// Convolution kernel: a flat row-major grid of `f32` weights.
///
/// Generated once per filter run and shared read-only across every pixel
/// evaluation of a pass.
#[derive(Debug, Clone)]
pub struct Kernel {
    /// Kernel weights, row-major.
    pub data: Vec<f32>,
    /// Kernel width.
    pub width: usize,
    /// Kernel height.
    pub height: usize,
}

impl Kernel {
    /// Creates a kernel from caller-supplied data.
    ///
    /// Width and height must be odd and at least 1, and `data` must hold
    /// exactly `width * height` weights. The built-in generators construct
    /// their known-good shapes directly and never pass through here.
    pub fn new(data: Vec<f32>, width: usize, height: usize) -> OpsResult<Self> {
        if width == 0 || height == 0 || width % 2 == 0 || height % 2 == 0 {
            return Err(OpsError::InvalidParameter(
                "kernel dimensions must be odd".into(),
            ));
        }
        if data.len() != width * height {
            return Err(OpsError::InvalidParameter(format!(
                "kernel data size {} doesn't match {}x{}",
                data.len(),
                width,
                height
            )));
        }
        Ok(Self { data, width, height })
    }

    /// Creates the horizontal Sobel gradient kernel, scaled.
    ///
    /// # Example
    ///
    /// ```rust
    /// use efx_ops::Kernel;
    ///
    /// let k = Kernel::sobel_x(2.0);
    /// assert_eq!(k.data[3], 4.0);
    /// ```
    pub fn sobel_x(scale: f32) -> Self {
        Self {
            data: vec![
                scale, 0.0, -scale,
                2.0 * scale, 0.0, -2.0 * scale,
                scale, 0.0, -scale,
            ],
            width: 3,
            height: 3,
        }
    }

    /// Creates the vertical Sobel gradient kernel, scaled.
    ///
    /// The transpose of [`Kernel::sobel_x`] with the sign pattern swapped.
    pub fn sobel_y(scale: f32) -> Self {
        Self {
            data: vec![
                scale, 2.0 * scale, scale,
                0.0, 0.0, 0.0,
                -scale, -2.0 * scale, -scale,
            ],
            width: 3,
            height: 3,
        }
    }

    /// Creates the four-neighbor Laplacian kernel.
    ///
    /// Center 4, orthogonal neighbors -1, corners 0. Coefficients sum to
    /// zero, so flat regions map to black.
    pub fn laplacian() -> Self {
        Self {
            data: vec![
                0.0, -1.0, 0.0,
                -1.0, 4.0, -1.0,
                0.0, -1.0, 0.0,
            ],
            width: 3,
            height: 3,
        }
    }

    /// Creates the eight-neighbor Laplacian kernel.
    ///
    /// Center 8, all eight neighbors -1. Also sums to zero; responds to
    /// diagonal edges the four-neighbor variant misses.
    pub fn laplacian_diag() -> Self {
        Self {
            data: vec![
                -1.0, -1.0, -1.0,
                -1.0, 8.0, -1.0,
                -1.0, -1.0, -1.0,
            ],
            width: 3,
            height: 3,
        }
    }

    /// Creates a Gaussian smoothing kernel.
    ///
    /// The cell at flat index `i` has coordinates
    /// `x = (i % size) - size/2`, `y = (i / size) - size/2` and weight
    /// `exp(-(x^2 + y^2) / (2 sigma^2)) / (2 pi sigma^2)`. With an even
    /// `size` the integer division leaves the center asymmetric; the quirk
    /// is kept, not corrected. Every filter pipeline here uses odd sizes.
    ///
    /// The weights are **not** renormalized to sum to 1. Callers that need
    /// energy conservation must divide by [`Kernel::sum`] themselves.
    ///
    /// # Example
    ///
    /// ```rust
    /// use efx_ops::Kernel;
    ///
    /// let k = Kernel::gauss(5, 1.0);
    /// assert_eq!(k.data.len(), 25);
    /// // Peak sits at x = y = 0
    /// assert_eq!(k.data[12], 1.0 / (2.0 * std::f32::consts::PI));
    /// ```
    pub fn gauss(size: usize, sigma: f32) -> Self {
        let half = (size / 2) as i64;
        let sigma2 = 2.0 * sigma * sigma;
        let norm = 1.0 / (std::f32::consts::PI * sigma2);

        let mut data = Vec::with_capacity(size * size);
        for i in 0..size * size {
            let x = (i % size) as i64 - half;
            let y = (i / size) as i64 - half;
            let d = (x * x + y * y) as f32;
            data.push((-d / sigma2).exp() * norm);
        }

        Self { data, width: size, height: size }
    }

    /// Returns the kernel radius (half-size).
    #[inline]
    pub fn radius(&self) -> (usize, usize) {
        (self.width / 2, self.height / 2)
    }

    /// Looks up the weight at a center-relative offset.
    ///
    /// `(0, 0)` is the center cell; `(-1, -1)` its upper-left neighbor.
    /// Offsets outside the kernel footprint yield `0.0` rather than an
    /// error, which keeps accumulation loops robust when a caller sweeps a
    /// larger footprint than the kernel actually has.
    #[inline]
    pub fn coeff(&self, dx: i64, dy: i64) -> f32 {
        let kx = dx + (self.width / 2) as i64;
        let ky = dy + (self.height / 2) as i64;
        if kx >= 0 && ky >= 0 && kx < self.width as i64 && ky < self.height as i64 {
            self.data[ky as usize * self.width + kx as usize]
        } else {
            0.0
        }
    }

    /// Sum of all weights.
    ///
    /// Zero for the Laplacians; below 1 for [`Kernel::gauss`] since its
    /// weights are not renormalized.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }
}
