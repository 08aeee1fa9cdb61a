//! Staged filter execution.
//!
//! An [`Engine`] is built once per configuration and frame size, then run
//! against any number of input/output pairs. Initialization does all the
//! rejecting: kernels are generated and scratch images allocated up front,
//! so `run` only sequences convolutions over pre-validated state.
//!
//! Stages execute strictly in order. Each scratch image is fully rewritten
//! by its producing stage before any later stage reads it, and every image
//! moves through the stage signatures as an explicit `&`/`&mut` borrow, so
//! no stage can observe a partially written buffer.

use efx_core::Image;
use efx_ops::{CombineMode, Kernel};
use tracing::{debug, trace};

use crate::config::{Mode, PipelineConfig};
use crate::error::{PipelineError, PipelineResult};

#[cfg(feature = "parallel")]
use efx_ops::parallel::{combine, convolve};
#[cfg(not(feature = "parallel"))]
use efx_ops::{combine, convolve};

/// Gaussian pre-pass: the generated kernel plus its dedicated scratch.
#[derive(Debug)]
struct Prepass {
    kernel: Kernel,
    smoothed: Image,
}

/// Per-mode stage plan, owning exactly the scratch its stages need.
#[derive(Debug)]
enum Plan {
    /// Two directional convolutions folded into the output.
    Gradient {
        kernel_x: Kernel,
        kernel_y: Kernel,
        grad_x: Image,
        grad_y: Image,
    },
    /// One convolution straight into the output.
    Single { kernel: Kernel },
}

/// A configured, ready-to-run filter pipeline.
///
/// # Example
///
/// ```rust
/// use efx_core::Image;
/// use efx_pipeline::{Engine, Mode, PipelineConfig};
///
/// let mut engine = Engine::init(PipelineConfig::new(Mode::Laplacian), 16, 16)?;
/// let input = Image::new(16, 16);
/// let mut output = Image::new(16, 16);
/// engine.run(&input, &mut output)?;
/// # Ok::<(), efx_pipeline::PipelineError>(())
/// ```
#[derive(Debug)]
pub struct Engine {
    config: PipelineConfig,
    width: u32,
    height: u32,
    prepass: Option<Prepass>,
    plan: Plan,
}

impl Engine {
    /// Validates `config` and prepares every kernel and scratch image for
    /// `width` x `height` frames.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidConfig`] for rejected configurations
    /// or degenerate dimensions. Nothing is allocated on failure.
    pub fn init(config: PipelineConfig, width: u32, height: u32) -> PipelineResult<Self> {
        config.validate()?;
        if width == 0 || height == 0 {
            return Err(PipelineError::invalid_config(format!(
                "frame dimensions must be positive, got {width}x{height}"
            )));
        }

        let prepass = config.smoothing.map(|s| Prepass {
            kernel: Kernel::gauss(s.size, s.sigma),
            smoothed: Image::new(width, height),
        });

        let plan = match config.mode {
            Mode::Sobel => Plan::Gradient {
                kernel_x: Kernel::sobel_x(1.0),
                kernel_y: Kernel::sobel_y(1.0),
                grad_x: Image::new(width, height),
                grad_y: Image::new(width, height),
            },
            Mode::Laplacian => Plan::Single {
                kernel: Kernel::laplacian(),
            },
            Mode::LaplacianDiag => Plan::Single {
                kernel: Kernel::laplacian_diag(),
            },
        };

        debug!(
            mode = %config.mode,
            width,
            height,
            smoothing = config.smoothing.is_some(),
            "engine initialized"
        );

        Ok(Self {
            config,
            width,
            height,
            prepass,
            plan,
        })
    }

    /// The configuration this engine was built from.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Frame size the engine was initialized for.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Executes the staged plan for one frame.
    ///
    /// The engine carries no mutable state between runs other than its
    /// scratch images, each fully rewritten before use, so repeat runs over
    /// identical input produce byte-identical output.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::SizeMismatch`] when `input` or `output`
    /// does not match the initialized frame size.
    pub fn run(&mut self, input: &Image, output: &mut Image) -> PipelineResult<()> {
        trace!(mode = %self.config.mode, "pipeline run");
        self.check_frame(input)?;
        self.check_frame(output)?;

        let Engine { prepass, plan, .. } = self;

        let source: &Image = match prepass {
            Some(pre) => {
                convolve(input, &pre.kernel, &mut pre.smoothed)?;
                &pre.smoothed
            }
            None => input,
        };

        match plan {
            Plan::Gradient {
                kernel_x,
                kernel_y,
                grad_x,
                grad_y,
            } => {
                convolve(source, kernel_x, grad_x)?;
                convolve(source, kernel_y, grad_y)?;
                combine(grad_x, grad_y, output, CombineMode::Magnitude)?;
            }
            Plan::Single { kernel } => {
                convolve(source, kernel, output)?;
            }
        }

        Ok(())
    }

    fn check_frame(&self, image: &Image) -> PipelineResult<()> {
        if image.dimensions() != (self.width, self.height) {
            return Err(PipelineError::SizeMismatch {
                expected_width: self.width,
                expected_height: self.height,
                width: image.width(),
                height: image.height(),
            });
        }
        Ok(())
    }
}
