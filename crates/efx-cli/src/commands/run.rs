//! Run command
//!
//! Executes a YAML-described pipeline over a PNG image.

use anyhow::Result;
use efx_core::Image;
use efx_pipeline::{Engine, PipelineConfig};
use tracing::{info, trace};

use crate::RunArgs;

pub fn run(args: RunArgs, verbose: u8) -> Result<()> {
    trace!(config = %args.config.display(), input = %args.input.display(), "run::run");

    let config = PipelineConfig::from_file(&args.config)?;

    let input = super::load_image(&args.input)?;
    let (width, height) = input.dimensions();

    info!(mode = %config.mode, width, height, "Running pipeline");

    if verbose > 0 {
        println!(
            "Running {} pipeline from {} on {} ({}x{})",
            config.mode,
            args.config.display(),
            args.input.display(),
            width,
            height
        );
    }

    let mut engine = Engine::init(config, width, height)?;
    let mut output = Image::new(width, height);
    engine.run(&input, &mut output)?;

    super::save_image(&args.output, &output)?;

    if verbose > 0 {
        println!("Done.");
    }

    Ok(())
}
