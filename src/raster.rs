use image::{DynamicImage, ImageResult};
use log::trace;
use std::path::Path;

/// Packs 8-bit channels into a `0x00RRGGBB` integer.
pub fn pack(red: u8, green: u8, blue: u8) -> u32 {
    ((red as u32) << 16) | ((green as u32) << 8) | blue as u32
}

pub fn red(rgb: u32) -> u8 {
    ((rgb >> 16) & 0xFF) as u8
}

pub fn green(rgb: u32) -> u8 {
    ((rgb >> 8) & 0xFF) as u8
}

pub fn blue(rgb: u32) -> u8 {
    (rgb & 0xFF) as u8
}

/// A decoded, read-only RGB raster. Pixels are stored row-major, one packed
/// integer per pixel. Any alpha band in the source is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
    source: String,
}

impl RasterImage {
    /// Decodes an image file with whatever codecs `image` was built with.
    pub fn open<P: AsRef<Path>>(file_path: P) -> ImageResult<RasterImage> {
        let file_path = file_path.as_ref();
        trace!("Decoding image file {}", file_path.display());

        let image_data = image::open(file_path)?;
        Ok(RasterImage::from_dynamic(
            &image_data,
            file_path.display().to_string(),
        ))
    }

    /// Wraps an already decoded image. `source` identifies it in diagnostics.
    pub fn from_dynamic(image: &DynamicImage, source: impl Into<String>) -> RasterImage {
        let image_data = image.to_rgb8();
        let (width, height) = image_data.dimensions();

        let pixels = image_data
            .pixels()
            .map(|p| pack(p[0], p[1], p[2]))
            .collect();

        RasterImage {
            width: width as usize,
            height: height as usize,
            pixels,
            source: source.into(),
        }
    }

    // Dimensions aren't checked against the buffer.
    #[cfg(test)]
    pub(crate) fn from_parts(
        width: usize,
        height: usize,
        pixels: Vec<u32>,
        source: impl Into<String>,
    ) -> RasterImage {
        RasterImage {
            width,
            height,
            pixels,
            source: source.into(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Packed pixel at a row-major `index`.
    ///
    /// # Panics
    ///
    /// If `index >= pixel_count()`.
    pub fn rgb(&self, index: usize) -> u32 {
        self.pixels[index]
    }

    /// # Panics
    ///
    /// If `x` or `y` lies outside the image.
    pub fn get_rgb(&self, x: usize, y: usize) -> u32 {
        assert!(
            x < self.width && y < self.height,
            "Pixel ({}, {}) outside {}x{} image",
            x,
            y,
            self.width,
            self.height
        );
        self.rgb(y * self.width + x)
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}
