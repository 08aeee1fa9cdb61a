//! Filter command
//!
//! Applies the selected edge filter to a PNG image, optionally after a
//! Gaussian pre-smoothing pass.

use anyhow::Result;
use efx_core::Image;
use efx_pipeline::{Engine, Mode, PipelineConfig, Smoothing};
use tracing::{info, trace};

use crate::FilterArgs;

pub fn run(args: FilterArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), mode = %args.mode, "filter::run");

    let mode: Mode = args.mode.parse()?;
    let mut config = PipelineConfig::new(mode);
    if args.smooth {
        config = config.with_smoothing(Smoothing {
            size: args.smooth_size,
            sigma: args.smooth_sigma,
        });
    }

    let input = super::load_image(&args.input)?;
    let (width, height) = input.dimensions();

    info!(mode = %mode, width, height, smoothing = args.smooth, "Applying filter");

    if verbose > 0 {
        println!(
            "Applying {} filter to {} ({}x{})",
            mode,
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
