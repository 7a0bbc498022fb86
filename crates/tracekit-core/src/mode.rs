//! Tracing modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::transform::ConfigError;

/// What the overlay is drawn over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TracingMode {
    /// Over the live camera feed, tracing onto paper under the phone.
    #[default]
    Trace,
    /// Over a blank canvas, with the phone held on top of thin paper.
    Sketch,
}

impl TracingMode {
    /// Opacity a fresh session starts with.
    pub fn default_opacity(self) -> f64 {
        match self {
            TracingMode::Trace => 0.4,
            TracingMode::Sketch => 1.0,
        }
    }

    /// Whether the display is driven to full brightness while active, so
    /// the image shows through the paper.
    pub fn maximizes_brightness(self) -> bool {
        matches!(self, TracingMode::Sketch)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TracingMode::Trace => "trace",
            TracingMode::Sketch => "sketch",
        }
    }
}

impl fmt::Display for TracingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TracingMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" | "camera" => Ok(TracingMode::Trace),
            "sketch" | "scratch" | "canvas" => Ok(TracingMode::Sketch),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_defaults() {
        assert_eq!(TracingMode::Trace.default_opacity(), 0.4);
        assert_eq!(TracingMode::Sketch.default_opacity(), 1.0);
        assert!(!TracingMode::Trace.maximizes_brightness());
        assert!(TracingMode::Sketch.maximizes_brightness());
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("trace".parse(), Ok(TracingMode::Trace));
        assert_eq!(" Sketch ".parse(), Ok(TracingMode::Sketch));
        assert_eq!("scratch".parse(), Ok(TracingMode::Sketch));
        assert_eq!(
            "paint".parse::<TracingMode>(),
            Err(ConfigError::UnknownMode("paint".to_string()))
        );
    }

    #[test]
    fn test_mode_display_round_trips() {
        for mode in [TracingMode::Trace, TracingMode::Sketch] {
            assert_eq!(mode.to_string().parse(), Ok(mode));
        }
    }
}
