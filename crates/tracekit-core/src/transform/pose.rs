//! Committed pose and the per-frame snapshot handed to the renderer.

use serde::{Deserialize, Serialize};

use super::{Affine2, Vec2};

/// Committed overlay state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Offset from the centered default position, in view-space points.
    pub translation: Vec2,
    /// Uniform zoom factor.
    pub scale: f64,
    /// Rotation in radians, unbounded.
    pub rotation: f64,
    /// Overlay opacity (0.0 to 1.0).
    pub opacity: f64,
    /// When true, gestures are ignored.
    pub locked: bool,
}

impl Pose {
    /// Centered, unscaled, unrotated and unlocked.
    pub fn with_opacity(opacity: f64) -> Self {
        Self {
            translation: Vec2::ZERO,
            scale: 1.0,
            rotation: 0.0,
            opacity,
            locked: false,
        }
    }

    pub fn affine(&self) -> Affine2 {
        Affine2::from_pose_parts(self.translation, self.rotation, self.scale)
    }
}

/// Everything a renderer needs for one frame.
///
/// During a gesture the fields include the live deltas, so they can differ
/// from the committed [`Pose`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseSnapshot {
    pub translation: Vec2,
    pub scale: f64,
    pub rotation: f64,
    /// Opacity to draw with, including the near-zero scale floor.
    pub opacity: f64,
    pub locked: bool,
    /// True while any gesture channel has an uncommitted delta.
    pub interacting: bool,
    /// `translation * rotation * scale`, for the image box centered on the
    /// origin.
    pub transform: Affine2,
}

impl PoseSnapshot {
    pub(crate) fn new(
        translation: Vec2,
        scale: f64,
        rotation: f64,
        opacity: f64,
        locked: bool,
        interacting: bool,
    ) -> Self {
        Self {
            translation,
            scale,
            rotation,
            opacity,
            locked,
            interacting,
            transform: Affine2::from_pose_parts(translation, rotation, scale),
        }
    }
}

impl From<&Pose> for PoseSnapshot {
    fn from(pose: &Pose) -> Self {
        PoseSnapshot::new(
            pose.translation,
            pose.scale,
            pose.rotation,
            pose.opacity,
            pose.locked,
            false,
        )
    }
}
