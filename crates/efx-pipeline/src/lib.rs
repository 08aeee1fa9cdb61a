//! # efx-pipeline
//!
//! Mode configuration and staged execution for edge-filter pipelines.
//!
//! This crate turns a validated [`PipelineConfig`] into a ready-to-run
//! [`Engine`]: kernels generated, scratch images allocated, stage order
//! fixed. The host hands the engine an input/output image pair per frame
//! and gets a deterministic result.
//!
//! # Modules
//!
//! - [`config`] - `Mode`, `Smoothing` and YAML-loadable `PipelineConfig`
//! - [`engine`] - the staged `Engine` with its `init`/`run` lifecycle
//!
//! # Example
//!
//! ```rust
//! use efx_core::Image;
//! use efx_pipeline::{Engine, Mode, PipelineConfig, Smoothing};
//!
//! let config = PipelineConfig::new(Mode::Sobel).with_smoothing(Smoothing::default());
//! let mut engine = Engine::init(config, 32, 32)?;
//!
//! let input = Image::new(32, 32);
//! let mut edges = Image::new(32, 32);
//! engine.run(&input, &mut edges)?;
//! # Ok::<(), efx_pipeline::PipelineError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod config;
pub mod engine;

pub use config::{
    Mode, PipelineConfig, Smoothing, DEFAULT_SMOOTHING_SIGMA, DEFAULT_SMOOTHING_SIZE,
};
pub use engine::Engine;
pub use error::{PipelineError, PipelineResult};
