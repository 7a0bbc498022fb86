//! Gesture-driven overlay controller.
//!
//! The controller folds a stream of drag, pinch and rotate samples into a
//! committed [`Pose`] and produces a [`PoseSnapshot`] for every sample.
//!
//! ## Channels
//!
//! The three channels are independent and may be active at the same time.
//! A live sample replaces the channel's running delta, which only affects
//! the snapshot. A commit sample clears that delta and writes
//! `clamp(pose ⊕ delta)` into the pose:
//!
//! - drag: `translation + (dx, dy)`, each axis clamped to its range
//! - pinch: `scale * factor`, clamped to the scale range
//! - rotate: `rotation + radians`, unbounded
//!
//! Because each channel only touches its own field, the order in which
//! concurrent gestures commit does not matter.
//!
//! ## Clamping
//!
//! A live pinch factor is limited to the configured pinch ratio range
//! before it is combined with the committed scale. A committed pinch takes
//! the raw factor and only the result is clamped to the scale range. Live
//! previews are not clamped to the scale range, so releasing a pinch beyond
//! it settles back to the nearest bound.
//!
//! If a live pinch would draw the overlay smaller than `min_render_scale`,
//! the snapshot pins the scale there and raises the opacity to at least
//! `min_visible_opacity`, so the image never vanishes mid-gesture.

use std::fmt;

use tracing::{debug, warn};

use super::{
    ConfigError, ControllerConfig, Gesture, GestureEvent, GesturePhase, Pose, PoseSnapshot, Vec2,
};
use crate::mode::TracingMode;

/// Coarse interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerState {
    /// No gesture in progress.
    Idle,
    /// At least one channel has an uncommitted delta.
    Interacting,
    /// Gestures are ignored until unlocked.
    Locked,
}

/// Handle returned by [`TransformController::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&PoseSnapshot)>;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct LiveDeltas {
    drag: Option<Vec2>,
    pinch: Option<f64>,
    rotate: Option<f64>,
}

impl LiveDeltas {
    fn is_empty(&self) -> bool {
        self.drag.is_none() && self.pinch.is_none() && self.rotate.is_none()
    }
}

/// Owns the pose of one overlay session.
pub struct TransformController {
    config: ControllerConfig,
    mode: TracingMode,
    pose: Pose,
    live: LiveDeltas,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl fmt::Debug for TransformController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformController")
            .field("config", &self.config)
            .field("mode", &self.mode)
            .field("pose", &self.pose)
            .field("live", &self.live)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl TransformController {
    /// Create a controller with the mode's default pose.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if any range is inverted or non-finite.
    pub fn new(mode: TracingMode, config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut controller = Self {
            config,
            mode,
            pose: Pose::with_opacity(mode.default_opacity()),
            live: LiveDeltas::default(),
            subscribers: Vec::new(),
            next_subscription: 0,
        };
        controller.pose = controller.default_pose();
        Ok(controller)
    }

    pub fn mode(&self) -> TracingMode {
        self.mode
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// The committed pose, without live deltas.
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn state(&self) -> ControllerState {
        if self.pose.locked {
            ControllerState::Locked
        } else if self.live.is_empty() {
            ControllerState::Idle
        } else {
            ControllerState::Interacting
        }
    }

    pub fn is_locked(&self) -> bool {
        self.pose.locked
    }

    /// The pose a session in the current mode starts from.
    ///
    /// Translation and scale are pulled into the configured bounds when the
    /// neutral values fall outside them.
    pub fn default_pose(&self) -> Pose {
        let bounds = &self.config.bounds;
        let mut pose = Pose::with_opacity(self.mode.default_opacity());
        pose.translation = Vec2::new(bounds.x.clamp(0.0), bounds.y.clamp(0.0));
        pose.scale = bounds.scale.clamp(1.0);
        pose
    }

    /// Feed one gesture sample and return the frame to render.
    ///
    /// Samples are ignored while locked, and malformed samples (NaN or
    /// infinite deltas, non-positive pinch factors) are dropped. In both
    /// cases the returned snapshot reflects the unchanged state.
    pub fn apply(&mut self, event: GestureEvent) -> PoseSnapshot {
        if self.pose.locked {
            debug!(channel = ?event.channel(), "gesture ignored while locked");
            return self.snapshot();
        }
        if !event.gesture.is_well_formed() {
            warn!(?event, "dropping malformed gesture sample");
            return self.snapshot();
        }

        match event.phase {
            GesturePhase::Live => self.update_live(event.gesture),
            GesturePhase::Commit => self.commit(event.gesture),
        }
        self.publish()
    }

    /// Current frame: committed pose combined with live deltas.
    pub fn snapshot(&self) -> PoseSnapshot {
        let pose = &self.pose;

        let translation = match self.live.drag {
            Some(delta) => pose.translation + delta,
            None => pose.translation,
        };
        let rotation = match self.live.rotate {
            Some(delta) => pose.rotation + delta,
            None => pose.rotation,
        };
        let mut scale = match self.live.pinch {
            Some(factor) => pose.scale * factor,
            None => pose.scale,
        };
        let mut opacity = pose.opacity;

        if scale < self.config.min_render_scale {
            scale = self.config.min_render_scale;
            opacity = opacity.max(self.config.min_visible_opacity);
        }

        PoseSnapshot::new(
            translation,
            scale,
            rotation,
            opacity,
            pose.locked,
            !self.live.is_empty(),
        )
    }

    /// Set the overlay opacity, clamped to 0.0..=1.0.
    ///
    /// Ignored while locked or when `opacity` is NaN.
    pub fn set_opacity(&mut self, opacity: f64) -> PoseSnapshot {
        if self.pose.locked {
            debug!("opacity change ignored while locked");
            return self.snapshot();
        }
        if opacity.is_nan() {
            warn!("dropping NaN opacity");
            return self.snapshot();
        }

        self.pose.opacity = opacity.clamp(0.0, 1.0);
        debug!(opacity = self.pose.opacity, "opacity set");
        self.publish()
    }

    /// Freeze the pose, discarding any uncommitted gesture.
    pub fn lock(&mut self) -> PoseSnapshot {
        if self.pose.locked {
            return self.snapshot();
        }

        let discarded = !self.live.is_empty();
        self.pose.locked = true;
        self.live = LiveDeltas::default();
        debug!(discarded, "overlay locked");
        self.publish()
    }

    pub fn unlock(&mut self) -> PoseSnapshot {
        if !self.pose.locked {
            return self.snapshot();
        }

        self.pose.locked = false;
        debug!("overlay unlocked");
        self.publish()
    }

    pub fn toggle_lock(&mut self) -> PoseSnapshot {
        if self.pose.locked {
            self.unlock()
        } else {
            self.lock()
        }
    }

    /// Return to the mode's default pose in one step. Ignored while locked.
    pub fn reset(&mut self) -> PoseSnapshot {
        if self.pose.locked {
            debug!("reset ignored while locked");
            return self.snapshot();
        }

        self.pose = self.default_pose();
        self.live = LiveDeltas::default();
        debug!(mode = %self.mode, "pose reset");
        self.publish()
    }

    /// Switch mode, taking on the new mode's default opacity unless locked.
    pub(crate) fn set_mode(&mut self, mode: TracingMode) -> PoseSnapshot {
        if mode == self.mode {
            return self.snapshot();
        }

        self.mode = mode;
        if !self.pose.locked {
            self.pose.opacity = mode.default_opacity();
        }
        debug!(%mode, "mode changed");
        self.publish()
    }

    /// Register a callback invoked with every new frame.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&PoseSnapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a callback. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    fn update_live(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::Drag { dx, dy } => self.live.drag = Some(Vec2::new(dx, dy)),
            Gesture::Pinch { factor } => {
                self.live.pinch = Some(self.config.bounds.pinch_ratio.clamp(factor))
            }
            Gesture::Rotate { radians } => self.live.rotate = Some(radians),
        }
    }

    fn commit(&mut self, gesture: Gesture) {
        let bounds = self.config.bounds;
        let pose = &mut self.pose;

        match gesture {
            Gesture::Drag { dx, dy } => {
                self.live.drag = None;
                pose.translation = Vec2::new(
                    bounds.x.clamp(pose.translation.x + dx),
                    bounds.y.clamp(pose.translation.y + dy),
                );
                debug!(x = pose.translation.x, y = pose.translation.y, "drag committed");
            }
            Gesture::Pinch { factor } => {
                self.live.pinch = None;
                pose.scale = bounds.scale.clamp(pose.scale * factor);
                debug!(scale = pose.scale, "pinch committed");
            }
            Gesture::Rotate { radians } => {
                self.live.rotate = None;
                pose.rotation += radians;
                debug!(rotation = pose.rotation, "rotation committed");
            }
        }
    }

    fn publish(&mut self) -> PoseSnapshot {
        let snapshot = self.snapshot();
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&snapshot);
        }
        snapshot
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
