//! Image encoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { encode_png } from '@tracekit/wasm';
//!
//! const png = encode_png(matted);
//! const url = URL.createObjectURL(new Blob([png], { type: 'image/png' }));
//! ```

use crate::types::JsRasterImage;
use tracekit_core::encode;
use wasm_bindgen::prelude::*;

/// Encode a JsRasterImage to PNG bytes, keeping transparency.
///
/// # Errors
///
/// Returns an error if:
/// - Width or height is zero
/// - The pixel data length doesn't match width * height * 4
#[wasm_bindgen]
pub fn encode_png(image: &JsRasterImage) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(&image.to_raster()).map_err(|e| JsValue::from_str(&e.to_string()))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_encode_png_rejects_short_buffer() {
        let image = JsRasterImage::new(3, 3, vec![200u8; 10]);
        assert!(encode_png(&image).is_err());
    }
}
