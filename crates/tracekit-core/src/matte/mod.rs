//! Background matte for reference images.
//!
//! Line drawings and coloring pages are usually black ink on white paper.
//! Over a camera feed the white areas hide the user's own paper, so the
//! matte clears every near-white pixel to fully transparent.
//!
//! ## Algorithm
//!
//! Each pixel is classified on its own: if red, green, AND blue are all
//! strictly greater than the threshold, alpha becomes 0. Everything else is
//! copied unchanged, including its original alpha. There is no flood fill,
//! so near-white specks inside a drawing are cleared as well.

mod filter;

pub use filter::{
    remove_white_background, remove_white_background_from_bytes, remove_white_background_rgb,
    remove_white_background_with_stats,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Threshold rejected because it does not fit in a color channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Matte threshold {0} is outside 0..=255")]
pub struct ThresholdError(pub u32);

/// Channel value a pixel must exceed on all of R, G and B to be cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatteThreshold(pub u8);

impl MatteThreshold {
    /// Default cut-off for scanned or photographed paper.
    pub const DEFAULT: MatteThreshold = MatteThreshold(240);

    pub fn new(value: u8) -> Self {
        Self(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Whether a pixel with these channels belongs to the background.
    #[inline]
    pub fn clears(self, r: u8, g: u8, b: u8) -> bool {
        r > self.0 && g > self.0 && b > self.0
    }
}

impl Default for MatteThreshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u8> for MatteThreshold {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl TryFrom<u32> for MatteThreshold {
    type Error = ThresholdError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map(Self)
            .map_err(|_| ThresholdError(value))
    }
}

/// Per-run counts reported by [`remove_white_background_with_stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatteStats {
    /// Pixels whose alpha was set to zero.
    pub cleared: usize,
    /// Pixels examined.
    pub total: usize,
}

impl MatteStats {
    /// Fraction of the image that was cleared (0.0 for an empty image).
    pub fn cleared_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.cleared as f64 / self.total as f64
        }
    }
}
