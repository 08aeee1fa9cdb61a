//! PNG format support.
//!
//! Reads and writes 8-bit RGB PNG files. The filter stages work on plain
//! RGB, so everything richer is narrowed on the way in: alpha channels are
//! dropped, grayscale is expanded, 16-bit samples keep their high byte.
//! Written files are always 8-bit RGB with an sRGB chunk.
//!
//! # Example
//!
//! ```rust,ignore
//! use efx_io::png::{read, write};
//!
//! let image = read("input.png")?;
//! write("edges.png", &image)?;
//! ```

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use efx_core::{Image, Rgb};

use crate::{IoError, IoResult};

/// Reads a PNG file into an RGB image.
///
/// # Example
///
/// ```rust,ignore
/// use efx_io::png;
///
/// let image = png::read("input.png")?;
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let file = File::open(path.as_ref())?;
    let decoder = png::Decoder::new(std::io::BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let width = info.width;
    let height = info.height;
    let bytes = &buf[..info.buffer_size()];

    let pixels = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgb, png::BitDepth::Eight) => rgb_to_pixels(bytes),
        (png::ColorType::Rgba, png::BitDepth::Eight) => rgba_to_pixels(bytes),
        (png::ColorType::Rgb, png::BitDepth::Sixteen) => rgb_to_pixels(&narrow_16(bytes)),
        (png::ColorType::Rgba, png::BitDepth::Sixteen) => rgba_to_pixels(&narrow_16(bytes)),
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            bytes.iter().map(|&g| Rgb::gray(g)).collect()
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => {
            bytes.chunks_exact(2).map(|ga| Rgb::gray(ga[0])).collect()
        }
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedFormat(format!(
                "{:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    Image::from_pixels(width, height, pixels).map_err(|e| IoError::DecodeError(e.to_string()))
}

/// Writes an image as an 8-bit RGB PNG.
///
/// # Example
///
/// ```rust,ignore
/// use efx_io::png;
///
/// png::write("output.png", &image)?;
/// ```
pub fn write<P: AsRef<Path>>(path: P, image: &Image) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());

    // Add sRGB chunk
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    png_writer
        .write_image_data(&image.to_raw())
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}

fn rgb_to_pixels(bytes: &[u8]) -> Vec<Rgb> {
    bytes
        .chunks_exact(3)
        .map(|c| Rgb::new(c[0], c[1], c[2]))
        .collect()
}

fn rgba_to_pixels(bytes: &[u8]) -> Vec<Rgb> {
    bytes
        .chunks_exact(4)
        .map(|c| Rgb::new(c[0], c[1], c[2]))
        .collect()
}

/// Keeps the high byte of big-endian 16-bit samples.
fn narrow_16(bytes: &[u8]) -> Vec<u8> {
    bytes.chunks_exact(2).map(|c| c[0]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn pattern(width: u32, height: u32) -> Image {
        let mut img = Image::new(width, height);
        for y in 0..height {
            for x in 0..width {
                img.set_pixel(x, y, Rgb::new((x * 8) as u8, (y * 8) as u8, 128));
            }
        }
        img
    }

    #[test]
    fn test_roundtrip_rgb() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roundtrip.png");

        let image = pattern(32, 32);
        write(&path, &image).unwrap();
        let loaded = read(&path).unwrap();

        // RGB8 in, RGB8 out: lossless
        assert_eq!(loaded, image);
    }

    #[test]
    fn test_read_drops_alpha() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rgba.png");

        let mut data = Vec::new();
        for i in 0..16u8 {
            data.extend_from_slice(&[i * 10, 255 - i * 10, 7, 200]);
        }
        let file = File::create(&path).unwrap();
        let mut encoder = png::Encoder::new(BufWriter::new(file), 4, 4);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&data).unwrap();
        drop(writer);

        let loaded = read(&path).unwrap();
        assert_eq!(loaded.dimensions(), (4, 4));
        assert_eq!(loaded.get_pixel(0, 0), Some(Rgb::new(0, 255, 7)));
        assert_eq!(loaded.get_pixel(3, 3), Some(Rgb::new(150, 105, 7)));
    }

    #[test]
    fn test_read_expands_grayscale() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gray.png");

        let data: Vec<u8> = (0..9u8).map(|i| i * 20).collect();
        let file = File::create(&path).unwrap();
        let mut encoder = png::Encoder::new(BufWriter::new(file), 3, 3);
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&data).unwrap();
        drop(writer);

        let loaded = read(&path).unwrap();
        assert_eq!(loaded.dimensions(), (3, 3));
        assert_eq!(loaded.get_pixel(2, 2), Some(Rgb::gray(160)));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read("/nonexistent/input.png").unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
    }
}
