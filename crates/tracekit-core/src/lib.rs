//! Tracekit Core - overlay engine for tracing apps
//!
//! This crate provides the pieces of a tracing app with real logic in them:
//! the gesture-driven transform controller that places a reference image
//! over the camera feed, the white background matte, and the image decode
//! and encode edges around them.
//!
//! Everything here is synchronous and free of I/O. The host view owns the
//! input system, the camera preview and the device brightness, and talks to
//! this crate through [`TransformController`], [`OverlaySession`] and the
//! [`matte`] functions.

pub mod decode;
pub mod encode;
pub mod matte;
pub mod mode;
pub mod session;
pub mod transform;

pub use decode::{decode_image, DecodeError, RasterImage};
pub use encode::{encode_png, EncodeError};
pub use matte::{remove_white_background, MatteStats, MatteThreshold, ThresholdError};
pub use mode::TracingMode;
pub use session::{DisplayBrightness, NoBrightness, OverlaySession};
pub use transform::{
    ConfigError, ControllerConfig, GestureEvent, GesturePhase, Pose, PoseSnapshot,
    TransformController,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matte_then_encode_round_trip() {
        let source = RasterImage::from_rgb(2, 2, &[
            255, 255, 255, 0, 0, 0, //
            250, 250, 250, 30, 30, 30,
        ])
        .unwrap();

        let matted = remove_white_background(&source, MatteThreshold::default());
        let png = encode_png(&matted).unwrap();
        let decoded = decode_image(&png).unwrap();

        assert_eq!(decoded, matted);
        assert_eq!(decoded.pixel(0, 0), Some([255, 255, 255, 0]));
        assert_eq!(decoded.pixel(1, 1), Some([30, 30, 30, 255]));
    }

    #[test]
    fn test_session_round_trip() {
        let mut session =
            OverlaySession::enter(TracingMode::Trace, ControllerConfig::default(), NoBrightness)
                .unwrap();

        session.apply(GestureEvent::pinch(1.5, GesturePhase::Live));
        let snapshot = session.apply(GestureEvent::pinch(1.5, GesturePhase::Commit));

        assert_eq!(snapshot.scale, 1.5);
        assert_eq!(session.controller().pose().scale, 1.5);
    }
}
