//! Serializing a composite to bytes.

use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use thiserror::Error;

use crate::compose::CompositeImage;

/// Errors that can occur while encoding an image.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Image encoding error: {0}")]
    Image(String),
}

/// Turns a finished composite into a byte stream.
///
/// Implementations must be lossless: no color quantization, no palette
/// reduction.
pub trait RasterEncoder {
    fn encode(&self, image: &CompositeImage) -> Result<Vec<u8>, EncodeError>;

    /// File extension for the produced format, without a dot.
    fn extension(&self) -> &'static str;
}

/// RGBA8 PNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngRasterEncoder;

impl RasterEncoder for PngRasterEncoder {
    fn encode(&self, image: &CompositeImage) -> Result<Vec<u8>, EncodeError> {
        let img = image.as_image();
        let mut png_bytes = Vec::new();
        let encoder = PngEncoder::new(&mut png_bytes);
        encoder
            .write_image(
                img.as_raw(),
                img.width(),
                img.height(),
                image::ExtendedColorType::Rgba8,
            )
            .map_err(|e: image::ImageError| EncodeError::Image(e.to_string()))?;

        Ok(png_bytes)
    }

    fn extension(&self) -> &'static str {
        "png"
    }
}
