//! CLI command implementations

pub mod dim;
pub mod filter;
pub mod kernels;
pub mod run;

use std::path::Path;

use anyhow::{Context, Result};
use efx_core::Image;

/// Load a PNG from path
pub fn load_image(path: &Path) -> Result<Image> {
    efx_io::png::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save a PNG to path
pub fn save_image(path: &Path, image: &Image) -> Result<()> {
    efx_io::png::write(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}
