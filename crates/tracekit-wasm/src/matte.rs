//! WASM bindings for the white background matte.
//!
//! Hosts typically run these from a Web Worker right after an image is
//! picked, before handing it to the overlay.

use crate::types::JsRasterImage;
use tracekit_core::matte::{self, MatteThreshold};
use wasm_bindgen::prelude::*;

/// Default threshold, exposed so the host's settings UI can show it.
#[wasm_bindgen]
pub fn default_matte_threshold() -> u8 {
    MatteThreshold::DEFAULT.value()
}

fn threshold_from_js(threshold: u32) -> Result<MatteThreshold, JsValue> {
    MatteThreshold::try_from(threshold).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Make near-white pixels transparent.
///
/// # Arguments
///
/// * `image` - Source image (RGBA), left unchanged
/// * `threshold` - Pixels with R, G and B all above this value are cleared (0-255)
///
/// # Errors
///
/// Returns an error if `threshold` is above 255.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const matted = remove_white_background(image, default_matte_threshold());
/// ```
#[wasm_bindgen]
pub fn remove_white_background(
    image: &JsRasterImage,
    threshold: u32,
) -> Result<JsRasterImage, JsValue> {
    let threshold = threshold_from_js(threshold)?;
    let result = matte::remove_white_background(&image.to_raster(), threshold);
    Ok(JsRasterImage::from_raster(result))
}

/// Decode image bytes and make near-white pixels transparent.
///
/// # Errors
///
/// Returns an error if `threshold` is above 255 or the bytes cannot be
/// decoded.
#[wasm_bindgen]
pub fn remove_white_background_from_bytes(
    bytes: &[u8],
    threshold: u32,
) -> Result<JsRasterImage, JsValue> {
    let threshold = threshold_from_js(threshold)?;
    matte::remove_white_background_from_bytes(bytes, threshold)
        .map(JsRasterImage::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracekit_core::decode::RasterImage;
    use tracekit_core::encode::encode_png;

    #[test]
    fn test_default_threshold() {
        assert_eq!(default_matte_threshold(), 240);
    }

    #[test]
    fn test_remove_white_background() {
        let image = JsRasterImage::new(2, 1, vec![250, 252, 245, 255, 200, 252, 245, 255]);

        let result = remove_white_background(&image, 240).unwrap();

        assert_eq!(result.pixels(), vec![250, 252, 245, 0, 200, 252, 245, 255]);
        // source untouched
        assert_eq!(image.pixels()[3], 255);
    }

    #[test]
    fn test_max_threshold_keeps_everything() {
        let image = JsRasterImage::new(1, 1, vec![255, 255, 255, 255]);

        let result = remove_white_background(&image, 255).unwrap();

        assert_eq!(result.pixels(), vec![255, 255, 255, 255]);
    }

    #[test]
    fn test_from_bytes() {
        let raster = RasterImage::new(1, 2, vec![255, 255, 255, 255, 1, 2, 3, 255]);
        let png = encode_png(&raster).unwrap();

        let result = remove_white_background_from_bytes(&png, 240).unwrap();

        assert_eq!(result.pixels(), vec![255, 255, 255, 0, 1, 2, 3, 255]);
    }
}
