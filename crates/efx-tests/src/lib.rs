//! Integration tests for efx-rs crates.
//!
//! End-to-end properties that cross crate boundaries: PNG files through the
//! pipeline engine, YAML configurations driving runs, determinism of the
//! whole stack.

#[cfg(test)]
mod tests {
    use efx_core::{Image, Rgb};
    use efx_pipeline::{Engine, Mode, PipelineConfig, Smoothing};
    use tempfile::tempdir;

    /// Left half white, right half black. The seam is a strong edge that
    /// Sobel-X responds to with a positive (unclamped) gradient.
    fn edge_image(width: u32, height: u32) -> Image {
        let mut img = Image::new(width, height);
        for y in 0..height {
            for x in 0..width / 2 {
                img.set_pixel(x, y, Rgb::white());
            }
        }
        img
    }

    fn gradient_image(width: u32, height: u32) -> Image {
        let mut img = Image::new(width, height);
        for y in 0..height {
            for x in 0..width {
                img.set_pixel(
                    x,
                    y,
                    Rgb::new((x * 16) as u8, (y * 16) as u8, ((x + y) * 8) as u8),
                );
            }
        }
        img
    }

    #[test]
    fn test_sobel_highlights_vertical_edge() {
        let input = edge_image(16, 16);
        let mut output = Image::new(16, 16);

        let mut engine = Engine::init(PipelineConfig::new(Mode::Sobel), 16, 16).unwrap();
        engine.run(&input, &mut output).unwrap();

        for y in 1..15 {
            // Both seam columns saturate; flat regions away from the seam
            // cancel to zero
            assert_eq!(output.get_pixel(7, y), Some(Rgb::white()));
            assert_eq!(output.get_pixel(8, y), Some(Rgb::white()));
            assert_eq!(output.get_pixel(3, y), Some(Rgb::black()));
            assert_eq!(output.get_pixel(12, y), Some(Rgb::black()));
        }
    }

    #[test]
    fn test_laplacian_through_png_files() {
        let dir = tempdir().unwrap();
        let input_path = dir.path().join("flat.png");
        let output_path = dir.path().join("edges.png");

        efx_io::png::write(&input_path, &Image::filled(3, 3, Rgb::gray(100)))
            .expect("Failed to write input PNG");

        let input = efx_io::png::read(&input_path).expect("Failed to read input PNG");
        let (width, height) = input.dimensions();

        let mut engine =
            Engine::init(PipelineConfig::new(Mode::Laplacian), width, height).unwrap();
        let mut output = Image::new(width, height);
        engine.run(&input, &mut output).unwrap();

        efx_io::png::write(&output_path, &output).expect("Failed to write output PNG");
        let reloaded = efx_io::png::read(&output_path).expect("Failed to read output PNG");

        // Flat interior gives zero response; zero padding lights up the border
        assert_eq!(reloaded.get_pixel(1, 1), Some(Rgb::black()));
        assert_eq!(reloaded.get_pixel(0, 0), Some(Rgb::gray(200)));
        assert_eq!(reloaded.get_pixel(1, 0), Some(Rgb::gray(100)));
        assert_eq!(reloaded, output);
    }

    #[test]
    fn test_yaml_config_matches_programmatic() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("pipeline.yaml");
        std::fs::write(
            &config_path,
            "mode: sobel\nsmoothing:\n  size: 3\n  sigma: 0.5\n",
        )
        .unwrap();

        let from_yaml = PipelineConfig::from_file(&config_path).unwrap();
        let programmatic = PipelineConfig::new(Mode::Sobel).with_smoothing(Smoothing {
            size: 3,
            sigma: 0.5,
        });
        assert_eq!(from_yaml, programmatic);

        let input = gradient_image(12, 12);
        let mut out_yaml = Image::new(12, 12);
        let mut out_prog = Image::new(12, 12);
        Engine::init(from_yaml, 12, 12)
            .unwrap()
            .run(&input, &mut out_yaml)
            .unwrap();
        Engine::init(programmatic, 12, 12)
            .unwrap()
            .run(&input, &mut out_prog)
            .unwrap();

        assert_eq!(out_yaml, out_prog);
    }

    #[test]
    fn test_full_stack_determinism() {
        let dir = tempdir().unwrap();
        let input_path = dir.path().join("input.png");
        efx_io::png::write(&input_path, &gradient_image(24, 24)).unwrap();

        let mut results = Vec::new();
        for _ in 0..2 {
            let input = efx_io::png::read(&input_path).unwrap();
            let config =
                PipelineConfig::new(Mode::LaplacianDiag).with_smoothing(Smoothing::default());
            let mut engine = Engine::init(config, 24, 24).unwrap();
            let mut output = Image::new(24, 24);
            engine.run(&input, &mut output).unwrap();
            results.push(output.to_raw());
        }

        assert_eq!(results[0], results[1]);
    }

    #[test]
    fn test_dim_composes_with_filter() {
        use std::num::NonZeroU8;

        let input = gradient_image(10, 10);
        let mut dimmed = Image::new(10, 10);
        efx_ops::dim(&input, &mut dimmed, NonZeroU8::new(2).unwrap()).unwrap();

        let mut from_dimmed = Image::new(10, 10);
        let mut engine = Engine::init(PipelineConfig::new(Mode::Laplacian), 10, 10).unwrap();
        engine.run(&dimmed, &mut from_dimmed).unwrap();

        let mut expected = Image::new(10, 10);
        efx_ops::convolve(&dimmed, &efx_ops::Kernel::laplacian(), &mut expected).unwrap();

        assert_eq!(from_dimmed, expected);
    }
}
