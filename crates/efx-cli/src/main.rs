//! efx - edge-filter image processing CLI
//!
//! Applies convolution-based edge filters (Sobel, Laplacian) and related
//! image operations to PNG files.

use std::num::NonZeroU8;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "efx")]
#[command(author, version, about = "Edge-filter image processing CLI")]
#[command(long_about = "
Convolution-based edge filtering for PNG images.

Examples:
  efx filter input.png -o edges.png -m sobel          # Sobel edge strength
  efx filter input.png -o out.png -m laplacian -s     # smoothed Laplacian
  efx dim input.png -o dark.png -f 2                  # halve brightness
  efx kernels -m gauss --size 5 --sigma 1.0           # print kernel table
  efx run pipeline.yaml input.png -o out.png          # YAML-described run
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply an edge filter
    #[command(visible_alias = "f")]
    Filter(FilterArgs),

    /// Divide brightness by an integer factor
    Dim(DimArgs),

    /// Print generated kernel coefficient tables
    #[command(visible_alias = "k")]
    Kernels(KernelsArgs),

    /// Run a YAML-described pipeline
    #[command(visible_alias = "r")]
    Run(RunArgs),
}

#[derive(Args)]
struct FilterArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Filter mode: sobel, laplacian, laplacian_diag
    #[arg(short, long, default_value = "sobel")]
    mode: String,

    /// Apply Gaussian pre-smoothing before the filter
    #[arg(short, long)]
    smooth: bool,

    /// Smoothing kernel size
    #[arg(long, default_value = "5")]
    smooth_size: usize,

    /// Smoothing sigma
    #[arg(long, default_value = "1.0")]
    smooth_sigma: f32,
}

#[derive(Args)]
struct DimArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Division factor
    #[arg(short, long, default_value = "2")]
    factor: NonZeroU8,
}

#[derive(Args)]
struct KernelsArgs {
    /// Which kernels to print: all, sobel, laplacian, laplacian_diag, gauss
    #[arg(short, long, default_value = "all")]
    mode: String,

    /// Gaussian kernel size
    #[arg(long, default_value = "5")]
    size: usize,

    /// Gaussian sigma
    #[arg(long, default_value = "1.0")]
    sigma: f32,

    /// Sobel scale factor
    #[arg(long, default_value = "1.0")]
    scale: f32,
}

#[derive(Args)]
struct RunArgs {
    /// Pipeline description (YAML)
    config: PathBuf,

    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,
}

/// Routes tracing to stderr. `RUST_LOG` overrides the `-v` count.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Filter(args) => commands::filter::run(args, cli.verbose),
        Commands::Dim(args) => commands::dim::run(args, cli.verbose),
        Commands::Kernels(args) => commands::kernels::run(args, cli.verbose),
        Commands::Run(args) => commands::run::run(args, cli.verbose),
    }
}
