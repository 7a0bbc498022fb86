//! Tracekit WASM - WebAssembly bindings for Tracekit
//!
//! This crate provides WASM bindings to expose the tracekit-core functionality
//! to JavaScript/TypeScript tracing apps.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Image decoding bindings (PNG/JPEG with EXIF orientation)
//! - `encode` - Image encoding bindings (PNG export)
//! - `matte` - White background removal
//! - `session` - Overlay session driven by the host's gestures
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, remove_white_background, JsOverlaySession } from '@tracekit/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const image = decode_image(new Uint8Array(await file.arrayBuffer()));
//! const matted = remove_white_background(image, 240);
//! const session = new JsOverlaySession('trace');
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod matte;
mod session;
mod types;

// Re-export public types
pub use decode::{decode_image, get_orientation};
pub use encode::encode_png;
pub use matte::{default_matte_threshold, remove_white_background, remove_white_background_from_bytes};
pub use session::{JsOverlaySession, JsPoseSnapshot};
pub use types::JsRasterImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::debug_1(&format!("tracekit-wasm {} loaded", version()).into());
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
