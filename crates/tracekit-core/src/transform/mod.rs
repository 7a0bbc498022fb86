//! Overlay transform engine.
//!
//! This module turns raw touch gestures into the placement of the reference
//! image over the camera feed or canvas.
//!
//! # Coordinate System
//!
//! - Translation is in view-space points, measured from the centered
//!   default position; positive y is down
//! - Rotation is in radians, positive turns +x toward +y
//! - Scale is a uniform factor, 1.0 = the image's fitted size
//!
//! # Render Order
//!
//! A snapshot's transform applies, to the image box centered on the origin:
//! 1. Scale
//! 2. Rotation
//! 3. Translation

mod bounds;
mod controller;
mod geometry;
mod gesture;
mod pose;

pub use bounds::{ConfigError, ControllerConfig, Range, TransformBounds};
pub use controller::{ControllerState, SubscriptionId, TransformController};
pub use geometry::{Affine2, Vec2};
pub use gesture::{Gesture, GestureChannel, GestureEvent, GesturePhase};
pub use pose::{Pose, PoseSnapshot};
