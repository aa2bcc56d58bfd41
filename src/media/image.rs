// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding from various formats (PNG, JPEG, GIF, SVG, etc.).

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use resvg::usvg;
use std::path::Path;

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    /// Creates a new `ImageData` from encoded bytes (PNG, JPEG, etc.).
    ///
    /// Used for SVGs, which are rasterized to PNG before display.
    #[must_use]
    pub fn from_encoded(encoded_bytes: Vec<u8>, width: u32, height: u32) -> Self {
        let handle = image::Handle::from_bytes(encoded_bytes);
        Self {
            handle,
            width,
            height,
        }
    }
}

/// Reads the file at `path` and decodes it into displayable image data.
///
/// Supports common raster formats (PNG, JPEG, GIF, etc.) as well as SVG.
/// SVG files are rasterized to PNG format using resvg. The read happens on
/// the async executor so the UI loop is never blocked.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The image format is invalid or unsupported ([`Error::Image`])
/// - For SVG files: parsing fails or dimensions are zero ([`Error::Svg`])
pub async fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| Error::Io(e.to_string()))?;

    let is_svg = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    if is_svg {
        decode_svg(&bytes)
    } else {
        decode_raster(&bytes)
    }
}

fn decode_raster(bytes: &[u8]) -> Result<ImageData> {
    let img = image_rs::load_from_memory(bytes).map_err(|e| Error::Image(e.to_string()))?;

    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}

fn decode_svg(bytes: &[u8]) -> Result<ImageData> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let pixmap_size = tree.size().to_int_size();
    let width = pixmap_size.width();
    let height = pixmap_size.height();
    if width == 0 || height == 0 {
        return Err(Error::Svg("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let png_data = pixmap.encode_png().map_err(|e| Error::Svg(e.to_string()))?;

    Ok(ImageData::from_encoded(png_data, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use image_rs::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_image(&image_path)
            .await
            .expect("png should load successfully");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
    }

    #[tokio::test]
    async fn load_svg_image_rasterizes_successfully() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let svg_path = temp_dir.path().join("sample.svg");
        let svg_content = r#"
            <svg xmlns="http://www.w3.org/2000/svg" width="6" height="3">
                <rect width="6" height="3" fill="blue" />
            </svg>
        "#;
        fs::write(&svg_path, svg_content.trim()).expect("failed to write svg");

        let data = load_image(&svg_path)
            .await
            .expect("svg should load successfully");
        assert_eq!(data.width, 6);
        assert_eq!(data.height, 3);
    }

    #[tokio::test]
    async fn load_missing_image_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match load_image(&missing_path).await {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn load_invalid_png_bytes_returns_image_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match load_image(&bad_path).await {
            Err(Error::Image(message)) => assert!(!message.is_empty()),
            other => panic!("expected Image error for invalid png, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn load_invalid_svg_returns_svg_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_svg_path = temp_dir.path().join("broken.svg");
        fs::write(&bad_svg_path, "<svg>oops").expect("failed to write invalid svg");

        match load_image(&bad_svg_path).await {
            Err(Error::Svg(message)) => assert!(!message.is_empty()),
            other => panic!("expected Svg error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn load_svg_with_zero_dimensions_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let svg_path = temp_dir.path().join("zero.svg");
        let svg = r"<svg xmlns='http://www.w3.org/2000/svg' width='0' height='10'></svg>";
        fs::write(&svg_path, svg).expect("write svg");

        match load_image(&svg_path).await {
            Err(Error::Svg(_)) => {}
            other => panic!("expected Svg error, got {other:?}"),
        }
    }
}
