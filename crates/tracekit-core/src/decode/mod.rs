//! Image decoding for Tracekit.
//!
//! Reference images arrive from the catalog, the camera, or the photo
//! gallery as encoded bytes. This module turns them into a [`RasterImage`]
//! with four 8-bit channels, ready for the matte filter or the renderer.
//!
//! # Examples
//!
//! ```ignore
//! use tracekit_core::decode::decode_image;
//!
//! let bytes = std::fs::read("reference.png").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod raster;
mod types;

pub use raster::{decode_image, get_orientation};
pub use types::{DecodeError, Orientation, RasterImage};
