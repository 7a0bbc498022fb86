//! Image encoding for Tracekit.
//!
//! Matted overlays are handed back to the host as PNG so the cleared
//! background survives the trip.
//!
//! # Examples
//!
//! ```ignore
//! use tracekit_core::encode::encode_png;
//!
//! let png_bytes = encode_png(&matted).unwrap();
//! println!("Encoded {} bytes", png_bytes.len());
//! ```

mod png;

pub use png::{encode_png, EncodeError};
