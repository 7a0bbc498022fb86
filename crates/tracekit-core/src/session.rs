//! Overlay sessions and the display brightness capability.
//!
//! Sketch mode drives the screen to full brightness so the image shows
//! through paper laid on the phone. Brightness is global device state, so
//! the session borrows it through [`DisplayBrightness`] and guarantees the
//! previous level is restored exactly once, whether the session ends with
//! [`OverlaySession::exit`] or is simply dropped.

use tracing::debug;

use crate::mode::TracingMode;
use crate::transform::{
    ConfigError, ControllerConfig, GestureEvent, PoseSnapshot, SubscriptionId,
    TransformController,
};

/// Level requested while a brightness-maximizing mode is active.
pub const MAX_BRIGHTNESS: f64 = 1.0;

/// Access to the device's screen brightness.
pub trait DisplayBrightness {
    /// Set the brightness level (0.0 to 1.0).
    fn set(&mut self, level: f64);

    /// Return to the level in effect before the first `set`.
    fn restore(&mut self);
}

/// For hosts without brightness control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoBrightness;

impl DisplayBrightness for NoBrightness {
    fn set(&mut self, _level: f64) {}

    fn restore(&mut self) {}
}

/// One overlay session: a controller plus the brightness it holds.
#[derive(Debug)]
pub struct OverlaySession<B: DisplayBrightness> {
    controller: TransformController,
    brightness: B,
    brightness_held: bool,
}

impl<B: DisplayBrightness> OverlaySession<B> {
    /// Start a session, maximizing brightness if the mode needs it.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] for an invalid configuration; brightness is
    /// left untouched in that case.
    pub fn enter(
        mode: TracingMode,
        config: ControllerConfig,
        brightness: B,
    ) -> Result<Self, ConfigError> {
        let controller = TransformController::new(mode, config)?;
        let mut session = Self {
            controller,
            brightness,
            brightness_held: false,
        };
        session.sync_brightness();
        debug!(%mode, "overlay session entered");
        Ok(session)
    }

    pub fn mode(&self) -> TracingMode {
        self.controller.mode()
    }

    pub fn controller(&self) -> &TransformController {
        &self.controller
    }

    pub fn brightness(&self) -> &B {
        &self.brightness
    }

    /// Whether the session currently holds the display at full brightness.
    pub fn holds_brightness(&self) -> bool {
        self.brightness_held
    }

    pub fn apply(&mut self, event: GestureEvent) -> PoseSnapshot {
        self.controller.apply(event)
    }

    pub fn snapshot(&self) -> PoseSnapshot {
        self.controller.snapshot()
    }

    pub fn set_opacity(&mut self, opacity: f64) -> PoseSnapshot {
        self.controller.set_opacity(opacity)
    }

    pub fn lock(&mut self) -> PoseSnapshot {
        self.controller.lock()
    }

    pub fn unlock(&mut self) -> PoseSnapshot {
        self.controller.unlock()
    }

    pub fn toggle_lock(&mut self) -> PoseSnapshot {
        self.controller.toggle_lock()
    }

    pub fn reset(&mut self) -> PoseSnapshot {
        self.controller.reset()
    }

    /// See [`TransformController::subscribe`].
    pub fn subscribe(&mut self, subscriber: impl FnMut(&PoseSnapshot) + 'static) -> SubscriptionId {
        self.controller.subscribe(subscriber)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.controller.unsubscribe(id)
    }

    /// Switch between trace and sketch within the session.
    ///
    /// Switching to the current mode does nothing.
    pub fn switch_mode(&mut self, mode: TracingMode) -> PoseSnapshot {
        if mode == self.controller.mode() {
            return self.controller.snapshot();
        }

        let snapshot = self.controller.set_mode(mode);
        self.sync_brightness();
        snapshot
    }

    /// End the session, restoring brightness if it was raised.
    pub fn exit(mut self) {
        self.release_brightness();
        debug!(mode = %self.controller.mode(), "overlay session exited");
    }

    fn sync_brightness(&mut self) {
        if self.controller.mode().maximizes_brightness() {
            self.acquire_brightness();
        } else {
            self.release_brightness();
        }
    }

    fn acquire_brightness(&mut self) {
        if self.brightness_held {
            return;
        }
        self.brightness.set(MAX_BRIGHTNESS);
        self.brightness_held = true;
        debug!("display brightness raised");
    }

    fn release_brightness(&mut self) {
        if !self.brightness_held {
            return;
        }
        self.brightness.restore();
        self.brightness_held = false;
        debug!("display brightness restored");
    }
}

impl<B: DisplayBrightness> Drop for OverlaySession<B> {
    fn drop(&mut self) {
        self.release_brightness();
    }
}
