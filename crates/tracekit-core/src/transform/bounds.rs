//! Bounds and tuning for the transform controller.
//!
//! The defaults match the tracing screen's 300x300 overlay frame: the image
//! may slide 150 points sideways, 150 up and 450 down (toward the bottom of
//! a portrait phone), and zoom between half and two and a half times.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a controller is built from an invalid configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A range whose minimum exceeds its maximum.
    #[error("Inverted range for {field}: min {min} > max {max}")]
    InvertedRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    /// NaN or infinity where a finite number is required.
    #[error("Non-finite value for {field}")]
    NonFinite { field: &'static str },

    /// Zero or negative where a strictly positive value is required.
    #[error("Value for {field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    /// An opacity-like value outside 0.0..=1.0.
    #[error("Value for {field} must be within 0..=1, got {value}")]
    OutOfUnitRange { field: &'static str, value: f64 },

    /// Mode name not recognized.
    #[error("Unknown tracing mode: {0}")]
    UnknownMode(String),
}

/// A closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn clamp(self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    #[inline]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn validate(self, field: &'static str) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ConfigError::NonFinite { field });
        }
        if self.min > self.max {
            return Err(ConfigError::InvertedRange {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    fn validate_positive(self, field: &'static str) -> Result<(), ConfigError> {
        self.validate(field)?;
        if self.min <= 0.0 {
            return Err(ConfigError::NonPositive {
                field,
                value: self.min,
            });
        }
        Ok(())
    }
}

/// Per-parameter limits for the committed pose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformBounds {
    /// Horizontal offset from the centered position.
    pub x: Range,
    /// Vertical offset from the centered position (positive is down).
    pub y: Range,
    /// Committed zoom factor.
    pub scale: Range,
    /// Limits on a single pinch gesture's factor.
    pub pinch_ratio: Range,
}

impl Default for TransformBounds {
    fn default() -> Self {
        Self {
            x: Range::new(-150.0, 150.0),
            y: Range::new(-150.0, 450.0),
            scale: Range::new(0.5, 2.5),
            pinch_ratio: Range::new(0.2, 5.0),
        }
    }
}

/// Full controller configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub bounds: TransformBounds,
    /// Smallest scale ever handed to the renderer.
    pub min_render_scale: f64,
    /// Opacity floor while the rendered scale is pinned at `min_render_scale`.
    pub min_visible_opacity: f64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            bounds: TransformBounds::default(),
            min_render_scale: 0.01,
            min_visible_opacity: 0.1,
        }
    }
}

impl ControllerConfig {
    /// Check every range and constant, failing on the first problem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bounds.x.validate("bounds.x")?;
        self.bounds.y.validate("bounds.y")?;
        self.bounds.scale.validate_positive("bounds.scale")?;
        self.bounds.pinch_ratio.validate_positive("bounds.pinch_ratio")?;

        if !self.min_render_scale.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "min_render_scale",
            });
        }
        if self.min_render_scale <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "min_render_scale",
                value: self.min_render_scale,
            });
        }
        check_unit("min_visible_opacity", self.min_visible_opacity)
    }
}

pub(crate) fn check_unit(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::OutOfUnitRange { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(ControllerConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_range_clamp() {
        let r = Range::new(-1.0, 2.0);
        assert_eq!(r.clamp(-5.0), -1.0);
        assert_eq!(r.clamp(0.5), 0.5);
        assert_eq!(r.clamp(9.0), 2.0);
        assert!(r.contains(2.0));
        assert!(!r.contains(2.0001));
    }

    #[test]
    fn test_inverted_translation_range() {
        let mut config = ControllerConfig::default();
        config.bounds.y = Range::new(10.0, -10.0);

        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedRange {
                field: "bounds.y",
                min: 10.0,
                max: -10.0
            })
        );
    }

    #[test]
    fn test_inverted_scale_range() {
        let mut config = ControllerConfig::default();
        config.bounds.scale = Range::new(3.0, 1.0);

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedRange { field: "bounds.scale", .. })
        ));
    }

    #[test]
    fn test_zero_scale_min_rejected() {
        let mut config = ControllerConfig::default();
        config.bounds.scale = Range::new(0.0, 1.0);

        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { field: "bounds.scale", .. })
        ));
    }

    #[test]
    fn test_nan_bound_rejected() {
        let mut config = ControllerConfig::default();
        config.bounds.x = Range::new(f64::NAN, 1.0);

        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFinite { field: "bounds.x" })
        );
    }

    #[test]
    fn test_opacity_floor_out_of_range() {
        let mut config = ControllerConfig::default();
        config.min_visible_opacity = 1.5;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfUnitRange { .. })
        ));
    }

    #[test]
    fn test_min_render_scale_must_be_positive() {
        let mut config = ControllerConfig::default();
        config.min_render_scale = 0.0;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { field: "min_render_scale", .. })
        ));
    }

    #[test]
    fn test_degenerate_range_allowed() {
        let mut config = ControllerConfig::default();
        config.bounds.x = Range::new(0.0, 0.0);

        assert_eq!(config.validate(), Ok(()));
    }
}
