//! Gesture samples fed to the controller.

use serde::{Deserialize, Serialize};

use super::Vec2;

/// Which independent gesture channel a sample belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureChannel {
    Drag,
    Pinch,
    Rotate,
}

/// Whether the fingers are still down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GesturePhase {
    /// Running total since the gesture began; preview only.
    Live,
    /// Final total on release; folded into the committed pose.
    Commit,
}

/// Measured value of a gesture, cumulative from its start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "channel", rename_all = "lowercase")]
pub enum Gesture {
    /// Translation in view-space points.
    Drag { dx: f64, dy: f64 },
    /// Magnification factor relative to the gesture start.
    Pinch { factor: f64 },
    /// Rotation in radians.
    Rotate { radians: f64 },
}

impl Gesture {
    pub fn channel(&self) -> GestureChannel {
        match self {
            Gesture::Drag { .. } => GestureChannel::Drag,
            Gesture::Pinch { .. } => GestureChannel::Pinch,
            Gesture::Rotate { .. } => GestureChannel::Rotate,
        }
    }

    /// Finite deltas, and a strictly positive pinch factor.
    pub fn is_well_formed(&self) -> bool {
        match *self {
            Gesture::Drag { dx, dy } => Vec2::new(dx, dy).is_finite(),
            Gesture::Pinch { factor } => factor.is_finite() && factor > 0.0,
            Gesture::Rotate { radians } => radians.is_finite(),
        }
    }
}

/// One tagged sample from the host's input system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureEvent {
    #[serde(flatten)]
    pub gesture: Gesture,
    pub phase: GesturePhase,
}

impl GestureEvent {
    pub fn new(gesture: Gesture, phase: GesturePhase) -> Self {
        Self { gesture, phase }
    }

    pub fn drag(dx: f64, dy: f64, phase: GesturePhase) -> Self {
        Self::new(Gesture::Drag { dx, dy }, phase)
    }

    pub fn pinch(factor: f64, phase: GesturePhase) -> Self {
        Self::new(Gesture::Pinch { factor }, phase)
    }

    pub fn rotate(radians: f64, phase: GesturePhase) -> Self {
        Self::new(Gesture::Rotate { radians }, phase)
    }

    pub fn channel(&self) -> GestureChannel {
        self.gesture.channel()
    }
}
