//! Per-pixel white background removal.

use tracing::debug;

use super::{MatteStats, MatteThreshold};
use crate::decode::{decode_image, DecodeError, RasterImage};

/// Clear near-white pixels, returning a new image.
///
/// The input is never modified. A pixel whose red, green and blue channels
/// all exceed `threshold` gets alpha 0; every other pixel is copied as is.
///
/// # Example
/// ```
/// use tracekit_core::decode::RasterImage;
/// use tracekit_core::matte::{remove_white_background, MatteThreshold};
///
/// let image = RasterImage::new(2, 1, vec![250, 252, 245, 255, 200, 252, 245, 255]);
/// let matted = remove_white_background(&image, MatteThreshold::DEFAULT);
///
/// assert_eq!(matted.pixel(0, 0), Some([250, 252, 245, 0]));
/// assert_eq!(matted.pixel(1, 0), Some([200, 252, 245, 255]));
/// ```
pub fn remove_white_background(image: &RasterImage, threshold: MatteThreshold) -> RasterImage {
    remove_white_background_with_stats(image, threshold).0
}

/// Same as [`remove_white_background`], also reporting how many pixels were
/// cleared.
pub fn remove_white_background_with_stats(
    image: &RasterImage,
    threshold: MatteThreshold,
) -> (RasterImage, MatteStats) {
    let mut pixels = image.pixels.clone();
    let mut stats = MatteStats::default();

    for chunk in pixels.chunks_exact_mut(RasterImage::CHANNELS) {
        stats.total += 1;
        if threshold.clears(chunk[0], chunk[1], chunk[2]) {
            chunk[3] = 0;
            stats.cleared += 1;
        }
    }

    debug!(
        width = image.width,
        height = image.height,
        threshold = threshold.value(),
        cleared = stats.cleared,
        ratio = stats.cleared_ratio(),
        "matte applied"
    );

    let matted = RasterImage {
        width: image.width,
        height: image.height,
        pixels,
    };
    (matted, stats)
}

/// Matte a packed RGB buffer, synthesizing an opaque alpha channel first.
pub fn remove_white_background_rgb(
    width: u32,
    height: u32,
    rgb: &[u8],
    threshold: MatteThreshold,
) -> Result<RasterImage, DecodeError> {
    let image = RasterImage::from_rgb(width, height, rgb)?;
    Ok(remove_white_background(&image, threshold))
}

/// Decode encoded image bytes and matte the result.
///
/// # Errors
/// Fails only when the bytes cannot be decoded into a pixel buffer.
pub fn remove_white_background_from_bytes(
    bytes: &[u8],
    threshold: MatteThreshold,
) -> Result<RasterImage, DecodeError> {
    let image = decode_image(bytes)?;
    Ok(remove_white_background(&image, threshold))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to create a uniform RGBA image
    fn uniform_image(width: u32, height: u32, rgba: [u8; 4]) -> RasterImage {
        let pixels = rgba
            .iter()
            .copied()
            .cycle()
            .take((width * height * 4) as usize)
            .collect();
        RasterImage::new(width, height, pixels)
    }

    #[test]
    fn test_near_white_pixel_cleared() {
        let image = RasterImage::new(1, 1, vec![250, 252, 245, 255]);
        let result = remove_white_background(&image, MatteThreshold(240));

        assert_eq!(result.pixels, vec![250, 252, 245, 0]);
    }

    #[test]
    fn test_single_channel_below_threshold_kept() {
        let image = RasterImage::new(1, 1, vec![200, 252, 245, 255]);
        let result = remove_white_background(&image, MatteThreshold(240));

        assert_eq!(result, image);
    }

    #[test]
    fn test_original_alpha_preserved_when_kept() {
        let image = RasterImage::new(1, 1, vec![10, 20, 30, 77]);
        let result = remove_white_background(&image, MatteThreshold::DEFAULT);

        assert_eq!(result.pixels[3], 77);
    }

    #[test]
    fn test_input_not_mutated() {
        let image = uniform_image(4, 4, [255, 255, 255, 255]);
        let before = image.clone();

        let result = remove_white_background(&image, MatteThreshold::DEFAULT);

        assert_eq!(image, before);
        assert_ne!(result, image);
    }

    #[test]
    fn test_all_white_image_fully_cleared() {
        let image = uniform_image(8, 8, [255, 255, 255, 255]);
        let (result, stats) = remove_white_background_with_stats(&image, MatteThreshold(240));

        assert!(result.pixels.chunks_exact(4).all(|px| px == [255, 255, 255, 0]));
        assert_eq!(stats.cleared, 64);
        assert_eq!(stats.total, 64);
    }

    #[test]
    fn test_isolated_white_pixel_inside_drawing_cleared() {
        // 3x3 black with a white center: no connectivity check
        let mut image = uniform_image(3, 3, [0, 0, 0, 255]);
        image.pixels[16..20].copy_from_slice(&[255, 255, 255, 255]);

        let result = remove_white_background(&image, MatteThreshold::DEFAULT);

        assert_eq!(result.pixel(1, 1), Some([255, 255, 255, 0]));
        assert_eq!(result.pixel(0, 0), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_threshold_boundary_is_strict() {
        let image = RasterImage::new(2, 1, vec![240, 240, 240, 255, 241, 241, 241, 255]);
        let result = remove_white_background(&image, MatteThreshold(240));

        assert_eq!(result.pixel(0, 0), Some([240, 240, 240, 255]));
        assert_eq!(result.pixel(1, 0), Some([241, 241, 241, 0]));
    }

    #[test]
    fn test_rgb_input_gets_opaque_alpha() {
        let rgb = vec![255, 255, 255, 12, 34, 56];
        let result = remove_white_background_rgb(2, 1, &rgb, MatteThreshold(255)).unwrap();

        assert_eq!(result.pixels, vec![255, 255, 255, 255, 12, 34, 56, 255]);
    }

    #[test]
    fn test_rgb_input_matted() {
        let rgb = vec![255, 255, 255, 12, 34, 56];
        let result = remove_white_background_rgb(2, 1, &rgb, MatteThreshold::DEFAULT).unwrap();

        assert_eq!(result.pixels, vec![255, 255, 255, 0, 12, 34, 56, 255]);
    }

    #[test]
    fn test_rgb_wrong_length_fails() {
        let result = remove_white_background_rgb(2, 2, &[0u8; 6], MatteThreshold::DEFAULT);
        assert!(matches!(result, Err(DecodeError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_from_bytes_decode_failure() {
        let result = remove_white_background_from_bytes(&[1, 2, 3], MatteThreshold::DEFAULT);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_bytes_png() {
        let image = RasterImage::new(2, 1, vec![255, 255, 255, 255, 0, 0, 0, 255]);
        let png = crate::encode::encode_png(&image).unwrap();

        let result = remove_white_background_from_bytes(&png, MatteThreshold::DEFAULT).unwrap();
        assert_eq!(result.pixels, vec![255, 255, 255, 0, 0, 0, 0, 255]);
    }

    #[test]
    fn test_empty_image() {
        let image = RasterImage::new(0, 0, vec![]);
        let (result, stats) = remove_white_background_with_stats(&image, MatteThreshold::DEFAULT);

        assert!(result.pixels.is_empty());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.cleared_ratio(), 0.0);
    }

    #[test]
    fn test_stats_logged_with_subscriber_installed() {
        let _guard = tracing::subscriber::set_default(
            tracing_subscriber::fmt().with_test_writer().finish(),
        );
        let image = RasterImage::new(2, 2, vec![
            255, 255, 255, 255, 10, 10, 10, 255, //
            10, 10, 10, 255, 10, 10, 10, 255,
        ]);

        let (_, stats) = remove_white_background_with_stats(&image, MatteThreshold::DEFAULT);

        assert_eq!(stats, MatteStats { cleared: 1, total: 4 });
        assert_eq!(stats.cleared_ratio(), 0.25);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
