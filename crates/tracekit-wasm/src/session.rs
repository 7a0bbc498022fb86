//! WASM bindings for the overlay session.
//!
//! The host forwards its gesture recognizers' values here and draws the
//! returned snapshot, e.g. with `ctx.setTransform(...snapshot.matrix())`
//! and `ctx.globalAlpha = snapshot.opacity`.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const session = new JsOverlaySession('sketch',
//!   (level) => screen.setBrightness(level),
//!   () => screen.restoreBrightness());
//!
//! hammer.on('panmove', (e) => draw(session.drag(e.deltaX, e.deltaY, false)));
//! hammer.on('panend', (e) => draw(session.drag(e.deltaX, e.deltaY, true)));
//! hammer.on('pinchmove', (e) => draw(session.pinch(e.scale, false)));
//!
//! // on page hide
//! session.exit();
//! ```

use js_sys::Function;
use tracekit_core::mode::TracingMode;
use tracekit_core::session::{DisplayBrightness, OverlaySession};
use tracekit_core::transform::{
    ControllerConfig, GestureEvent, GesturePhase, PoseSnapshot, SubscriptionId,
};
use wasm_bindgen::prelude::*;

/// Brightness capability backed by optional JS callbacks.
#[derive(Debug)]
struct JsBrightness {
    set: Option<Function>,
    restore: Option<Function>,
}

impl DisplayBrightness for JsBrightness {
    fn set(&mut self, level: f64) {
        if let Some(callback) = &self.set {
            if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_f64(level)) {
                web_sys::console::warn_2(&"tracekit: set brightness callback failed".into(), &err);
            }
        }
    }

    fn restore(&mut self) {
        if let Some(callback) = &self.restore {
            if let Err(err) = callback.call0(&JsValue::NULL) {
                web_sys::console::warn_2(
                    &"tracekit: restore brightness callback failed".into(),
                    &err,
                );
            }
        }
    }
}

fn phase(commit: bool) -> GesturePhase {
    if commit {
        GesturePhase::Commit
    } else {
        GesturePhase::Live
    }
}

fn parse_mode(mode: &str) -> Result<TracingMode, JsValue> {
    mode.parse().map_err(|e: tracekit_core::ConfigError| JsValue::from_str(&e.to_string()))
}

/// One frame's placement of the overlay.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy)]
pub struct JsPoseSnapshot {
    inner: PoseSnapshot,
}

#[wasm_bindgen]
impl JsPoseSnapshot {
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.inner.translation.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.inner.translation.y
    }

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.inner.scale
    }

    /// Rotation in radians.
    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> f64 {
        self.inner.rotation
    }

    #[wasm_bindgen(getter)]
    pub fn opacity(&self) -> f64 {
        self.inner.opacity
    }

    #[wasm_bindgen(getter)]
    pub fn locked(&self) -> bool {
        self.inner.locked
    }

    #[wasm_bindgen(getter)]
    pub fn interacting(&self) -> bool {
        self.inner.interacting
    }

    /// `[a, b, c, d, e, f]` for `setTransform` or CSS `matrix()`; origin
    /// at the overlay's centered position.
    pub fn matrix(&self) -> Vec<f64> {
        self.inner.transform.coefficients().to_vec()
    }
}

impl From<PoseSnapshot> for JsPoseSnapshot {
    fn from(inner: PoseSnapshot) -> Self {
        Self { inner }
    }
}

/// Overlay session for JavaScript hosts.
///
/// Brightness is restored when `exit()` is called or the object is freed.
#[wasm_bindgen]
pub struct JsOverlaySession {
    inner: OverlaySession<JsBrightness>,
    frame_listener: Option<SubscriptionId>,
}

#[wasm_bindgen]
impl JsOverlaySession {
    /// Start a session with default bounds.
    ///
    /// # Arguments
    /// * `mode` - `"trace"` (over camera) or `"sketch"` (over blank canvas)
    /// * `set_brightness` - Called with 1.0 when sketch mode starts
    /// * `restore_brightness` - Called when sketch mode ends
    ///
    /// # Errors
    /// Returns error if the mode is not recognized
    #[wasm_bindgen(constructor)]
    pub fn new(
        mode: &str,
        set_brightness: Option<Function>,
        restore_brightness: Option<Function>,
    ) -> Result<JsOverlaySession, JsValue> {
        Self::start(
            parse_mode(mode)?,
            ControllerConfig::default(),
            set_brightness,
            restore_brightness,
        )
    }

    /// Start a session with custom bounds.
    ///
    /// `config` is an object shaped like `ControllerConfig`; missing fields
    /// take their defaults, e.g. `{ bounds: { scale: { min: 0.25, max: 4 } } }`.
    ///
    /// # Errors
    /// Returns error if the mode is unknown or the config is invalid
    pub fn with_config(
        mode: &str,
        config: JsValue,
        set_brightness: Option<Function>,
        restore_brightness: Option<Function>,
    ) -> Result<JsOverlaySession, JsValue> {
        let config: ControllerConfig = if config.is_undefined() || config.is_null() {
            ControllerConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?
        };

        Self::start(parse_mode(mode)?, config, set_brightness, restore_brightness)
    }

    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        self.inner.mode().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn locked(&self) -> bool {
        self.inner.controller().is_locked()
    }

    /// Drag translation since the gesture began; `commit` on release.
    pub fn drag(&mut self, dx: f64, dy: f64, commit: bool) -> JsPoseSnapshot {
        self.inner.apply(GestureEvent::drag(dx, dy, phase(commit))).into()
    }

    /// Pinch magnification since the gesture began; `commit` on release.
    pub fn pinch(&mut self, factor: f64, commit: bool) -> JsPoseSnapshot {
        self.inner.apply(GestureEvent::pinch(factor, phase(commit))).into()
    }

    /// Rotation in radians since the gesture began; `commit` on release.
    pub fn rotate(&mut self, radians: f64, commit: bool) -> JsPoseSnapshot {
        self.inner
            .apply(GestureEvent::rotate(radians, phase(commit)))
            .into()
    }

    pub fn set_opacity(&mut self, opacity: f64) -> JsPoseSnapshot {
        self.inner.set_opacity(opacity).into()
    }

    pub fn lock(&mut self) -> JsPoseSnapshot {
        self.inner.lock().into()
    }

    pub fn unlock(&mut self) -> JsPoseSnapshot {
        self.inner.unlock().into()
    }

    pub fn toggle_lock(&mut self) -> JsPoseSnapshot {
        self.inner.toggle_lock().into()
    }

    pub fn reset(&mut self) -> JsPoseSnapshot {
        self.inner.reset().into()
    }

    /// # Errors
    /// Returns error if the mode is not recognized
    pub fn switch_mode(&mut self, mode: &str) -> Result<JsPoseSnapshot, JsValue> {
        let mode = parse_mode(mode)?;
        Ok(self.inner.switch_mode(mode).into())
    }

    pub fn snapshot(&self) -> JsPoseSnapshot {
        self.inner.snapshot().into()
    }

    /// The current snapshot as a plain JS object.
    pub fn snapshot_object(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.snapshot())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Call `callback` with a plain snapshot object after every change.
    /// Passing `undefined` removes the listener.
    pub fn on_frame(&mut self, callback: Option<Function>) {
        if let Some(id) = self.frame_listener.take() {
            self.inner.unsubscribe(id);
        }

        if let Some(callback) = callback {
            let id = self.inner.subscribe(move |snapshot| {
                let result = serde_wasm_bindgen::to_value(snapshot)
                    .map_err(JsValue::from)
                    .and_then(|value| callback.call1(&JsValue::NULL, &value));
                if let Err(err) = result {
                    web_sys::console::warn_2(&"tracekit: frame listener failed".into(), &err);
                }
            });
            self.frame_listener = Some(id);
        }
    }

    /// End the session, restoring brightness if sketch mode raised it.
    pub fn exit(self) {
        self.inner.exit();
    }
}

impl JsOverlaySession {
    fn start(
        mode: TracingMode,
        config: ControllerConfig,
        set_brightness: Option<Function>,
        restore_brightness: Option<Function>,
    ) -> Result<JsOverlaySession, JsValue> {
        let brightness = JsBrightness {
            set: set_brightness,
            restore: restore_brightness,
        };
        let inner = OverlaySession::enter(mode, config, brightness)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(JsOverlaySession {
            inner,
            frame_listener: None,
        })
    }
}
