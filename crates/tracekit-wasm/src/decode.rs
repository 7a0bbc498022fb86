//! Image decoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@tracekit/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! ctx.putImageData(new ImageData(new Uint8ClampedArray(image.pixels()), image.width), 0, 0);
//! ```

use crate::types::JsRasterImage;
use tracekit_core::decode;
use wasm_bindgen::prelude::*;

/// Decode a PNG or JPEG image from bytes into RGBA.
///
/// EXIF orientation is applied, so camera photos come out upright. Images
/// without alpha get an opaque alpha channel.
///
/// # Errors
///
/// Returns an error if the bytes are empty, not a recognized format, or
/// corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRasterImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsRasterImage::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Read the EXIF orientation tag (1-8), or 1 when absent.
#[wasm_bindgen]
pub fn get_orientation(bytes: &[u8]) -> u8 {
    decode::get_orientation(bytes) as u8
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_decode_garbage_errors() {
        assert!(decode_image(&[0, 1, 2, 3]).is_err());
    }
}
