//! Core types for image decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes are empty or the format is not recognized.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// A raw pixel buffer does not match its declared dimensions.
    #[error("Pixel buffer mismatch: expected {expected} bytes, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// How a camera photo must be turned to appear upright, from the EXIF
/// orientation tag. Discriminants are the tag values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    #[default]
    Normal = 1,
    FlipHorizontal = 2,
    Rotate180 = 3,
    FlipVertical = 4,
    /// Mirrored across the main diagonal.
    Transpose = 5,
    Rotate90CW = 6,
    /// Mirrored across the anti-diagonal.
    Transverse = 7,
    Rotate270CW = 8,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// A decoded raster with RGBA pixel data.
///
/// Every image that enters the overlay pipeline is normalized to four 8-bit
/// channels, so sources without alpha carry a synthesized opaque channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    pub pixels: Vec<u8>,
}

impl RasterImage {
    /// Bytes per pixel in the buffer.
    pub const CHANNELS: usize = 4;

    /// Create a new RasterImage with the given dimensions and RGBA data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            expected_len(width, height, Self::CHANNELS),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a RasterImage from RGB data, adding an opaque alpha channel.
    pub fn from_rgb(width: u32, height: u32, rgb: &[u8]) -> Result<Self, DecodeError> {
        let expected = expected_len(width, height, 3);
        if rgb.len() != expected {
            return Err(DecodeError::DimensionMismatch {
                expected,
                actual: rgb.len(),
            });
        }

        let mut pixels = Vec::with_capacity(expected_len(width, height, Self::CHANNELS));
        for chunk in rgb.chunks_exact(3) {
            pixels.extend_from_slice(&[chunk[0], chunk[1], chunk[2], u8::MAX]);
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a RasterImage from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// RGBA value at (x, y), or None if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * Self::CHANNELS;
        let px = self.pixels.get(idx..idx + Self::CHANNELS)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

fn expected_len(width: u32, height: u32, channels: usize) -> usize {
    width as usize * height as usize * channels
}
