//! Dim command
//!
//! Divides image brightness by an integer factor.

use anyhow::Result;
use efx_core::Image;
use efx_ops::dim;
use tracing::{info, trace};

use crate::DimArgs;

pub fn run(args: DimArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), factor = args.factor.get(), "dim::run");

    let input = super::load_image(&args.input)?;
    let (width, height) = input.dimensions();

    info!(factor = args.factor.get(), width, height, "Dimming");

    if verbose > 0 {
        println!("Dimming {} by factor {}", args.input.display(), args.factor);
    }

    let mut output = Image::new(width, height);
    dim(&input, &mut output, args.factor)?;

    super::save_image(&args.output, &output)?;

    if verbose > 0 {
        println!("Done.");
    }

    Ok(())
}
