//! PNG encoding for matted overlays.
//!
//! A matted image depends on its alpha channel, so the export format has to
//! be lossless and carry transparency. The `image` crate's PNG encoder does
//! both.

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use crate::decode::RasterImage;

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode an RGBA raster to PNG bytes, preserving alpha.
///
/// # Example
///
/// ```
/// use tracekit_core::decode::RasterImage;
/// use tracekit_core::encode::encode_png;
///
/// let image = RasterImage::new(10, 10, vec![255u8; 10 * 10 * 4]);
/// let png = encode_png(&image).unwrap();
/// assert_eq!(&png[1..4], b"PNG");
/// ```
pub fn encode_png(image: &RasterImage) -> Result<Vec<u8>, EncodeError> {
    let RasterImage {
        width,
        height,
        ref pixels,
    } = *image;

    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = width as usize * height as usize * RasterImage::CHANNELS;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(pixels, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}
