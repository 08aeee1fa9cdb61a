//! Kernels command
//!
//! Prints generated kernel coefficient tables for inspection.

use anyhow::{bail, Result};
use efx_ops::Kernel;
use tracing::trace;

use crate::KernelsArgs;

pub fn run(args: KernelsArgs, _verbose: u8) -> Result<()> {
    trace!(mode = %args.mode, "kernels::run");

    match args.mode.as_str() {
        "all" => {
            print_kernel("sobel_x", &Kernel::sobel_x(args.scale));
            print_kernel("sobel_y", &Kernel::sobel_y(args.scale));
            print_kernel("laplacian", &Kernel::laplacian());
            print_kernel("laplacian_diag", &Kernel::laplacian_diag());
            print_kernel("gauss", &Kernel::gauss(args.size, args.sigma));
        }
        "sobel" => {
            print_kernel("sobel_x", &Kernel::sobel_x(args.scale));
            print_kernel("sobel_y", &Kernel::sobel_y(args.scale));
        }
        "laplacian" => print_kernel("laplacian", &Kernel::laplacian()),
        "laplacian_diag" => print_kernel("laplacian_diag", &Kernel::laplacian_diag()),
        "gauss" => print_kernel("gauss", &Kernel::gauss(args.size, args.sigma)),
        other => bail!(
            "unknown kernel '{}': expected all, sobel, laplacian, laplacian_diag, or gauss",
            other
        ),
    }

    Ok(())
}

fn print_kernel(name: &str, kernel: &Kernel) {
    println!(
        "{} ({}x{}, sum {:.6}):",
        name,
        kernel.width,
        kernel.height,
        kernel.sum()
    );
    for row in kernel.data.chunks(kernel.width) {
        let cells: Vec<String> = row.iter().map(|c| format!("{:>9.4}", c)).collect();
        println!("  {}", cells.join(" "));
    }
    println!();
}
