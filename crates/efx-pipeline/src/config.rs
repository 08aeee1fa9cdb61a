//! Pipeline configuration: filter mode plus optional pre-smoothing.
//!
//! Configurations arrive either programmatically or as YAML:
//!
//! ```yaml
//! mode: sobel
//! smoothing:
//!   size: 5
//!   sigma: 1.0
//! ```
//!
//! The mode set is closed. Anything else is rejected at the string boundary
//! (`FromStr`, serde) before an engine is built, so an unrecognized mode can
//! never reach a running pipeline.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, PipelineResult};

/// Default smoothing kernel side length.
pub const DEFAULT_SMOOTHING_SIZE: usize = 5;

/// Default smoothing strength.
pub const DEFAULT_SMOOTHING_SIGMA: f32 = 1.0;

/// Which edge filter a pipeline applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Two directional Sobel gradients folded into edge strength.
    Sobel,
    /// Four-neighbor Laplacian.
    Laplacian,
    /// Eight-neighbor Laplacian.
    LaplacianDiag,
}

impl Mode {
    /// All recognized modes, in display order.
    pub const ALL: [Mode; 3] = [Mode::Sobel, Mode::Laplacian, Mode::LaplacianDiag];

    /// Canonical configuration-file name for this mode.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Sobel => "sobel",
            Mode::Laplacian => "laplacian",
            Mode::LaplacianDiag => "laplacian_diag",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sobel" => Ok(Mode::Sobel),
            "laplacian" => Ok(Mode::Laplacian),
            "laplacian_diag" => Ok(Mode::LaplacianDiag),
            other => Err(PipelineError::invalid_config(format!(
                "unrecognized mode '{other}' (expected sobel, laplacian, or laplacian_diag)"
            ))),
        }
    }
}

/// Gaussian pre-pass parameters.
///
/// `size` and `sigma` are genuine parameters; the defaults merely reproduce
/// the common 5x5, sigma 1.0 setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Smoothing {
    /// Kernel side length.
    #[serde(default = "default_size")]
    pub size: usize,
    /// Gaussian standard deviation.
    #[serde(default = "default_sigma")]
    pub sigma: f32,
}

impl Default for Smoothing {
    fn default() -> Self {
        Self {
            size: DEFAULT_SMOOTHING_SIZE,
            sigma: DEFAULT_SMOOTHING_SIGMA,
        }
    }
}

fn default_size() -> usize {
    DEFAULT_SMOOTHING_SIZE
}

fn default_sigma() -> f32 {
    DEFAULT_SMOOTHING_SIGMA
}

/// A complete pipeline description.
///
/// # Example
///
/// ```rust
/// use efx_pipeline::{Mode, PipelineConfig};
///
/// let config = PipelineConfig::from_yaml_str("mode: laplacian\n")?;
/// assert_eq!(config.mode, Mode::Laplacian);
/// assert!(config.smoothing.is_none());
/// # Ok::<(), efx_pipeline::PipelineError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Selected filter.
    pub mode: Mode,
    /// Optional Gaussian pre-pass; `None` filters the raw input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smoothing: Option<Smoothing>,
}

impl PipelineConfig {
    /// Creates a configuration with no pre-smoothing.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            smoothing: None,
        }
    }

    /// Enables pre-smoothing with the given parameters.
    pub fn with_smoothing(mut self, smoothing: Smoothing) -> Self {
        self.smoothing = Some(smoothing);
        self
    }

    /// Loads a configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> PipelineResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PipelineError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parses a configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> PipelineResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks parameter ranges serde cannot express.
    pub fn validate(&self) -> PipelineResult<()> {
        if let Some(s) = &self.smoothing {
            if s.size == 0 {
                return Err(PipelineError::invalid_config(
                    "smoothing size must be at least 1",
                ));
            }
            if s.sigma <= 0.0 || s.sigma.is_nan() {
                return Err(PipelineError::invalid_config(format!(
                    "smoothing sigma must be positive, got {}",
                    s.sigma
                )));
            }
        }
        Ok(())
    }
}
