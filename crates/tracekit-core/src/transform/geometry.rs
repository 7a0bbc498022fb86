//! 2D vector and affine types used by the overlay pose.

use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// A point or offset in view-space points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// A 2D affine transform stored as `[a, b, c, d, e, f]`.
///
/// Maps a point with
/// ```text
/// x' = a*x + c*y + e
/// y' = b*x + d*y + f
/// ```
/// which is the layout canvas `setTransform` and CSS `matrix()` expect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Affine2(pub [f64; 6]);

impl Affine2 {
    pub const IDENTITY: Affine2 = Affine2([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    pub fn translate(offset: Vec2) -> Self {
        Affine2([1.0, 0.0, 0.0, 1.0, offset.x, offset.y])
    }

    /// Rotation by `radians`, positive turning +x toward +y.
    pub fn rotate(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Affine2([cos, sin, -sin, cos, 0.0, 0.0])
    }

    pub fn scale(factor: f64) -> Self {
        Affine2([factor, 0.0, 0.0, factor, 0.0, 0.0])
    }

    /// Overlay placement: translate, then rotate, then scale, applied to
    /// the image's box centered on the origin.
    pub fn from_pose_parts(translation: Vec2, rotation: f64, scale: f64) -> Self {
        Self::translate(translation) * Self::rotate(rotation) * Self::scale(scale)
    }

    pub fn coefficients(&self) -> [f64; 6] {
        self.0
    }

    pub fn apply(&self, point: Vec2) -> Vec2 {
        let [a, b, c, d, e, f] = self.0;
        Vec2::new(a * point.x + c * point.y + e, b * point.x + d * point.y + f)
    }
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Affine2 {
    type Output = Affine2;

    /// `self * rhs` applies `rhs` first.
    fn mul(self, rhs: Affine2) -> Affine2 {
        let [a1, b1, c1, d1, e1, f1] = self.0;
        let [a2, b2, c2, d2, e2, f2] = rhs.0;
        Affine2([
            a1 * a2 + c1 * b2,
            b1 * a2 + d1 * b2,
            a1 * c2 + c1 * d2,
            b1 * c2 + d1 * d2,
            a1 * e2 + c1 * f2 + e1,
            b1 * e2 + d1 * f2 + f1,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn test_identity_maps_points_to_themselves() {
        let p = Vec2::new(3.0, -4.0);
        assert_eq!(Affine2::IDENTITY.apply(p), p);
    }

    #[test]
    fn test_quarter_turn() {
        let p = Affine2::rotate(FRAC_PI_2).apply(Vec2::new(1.0, 0.0));
        assert!(approx(p, Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn test_pose_parts_order() {
        // scale 2, rotate 90deg, then move by (10, 5)
        let m = Affine2::from_pose_parts(Vec2::new(10.0, 5.0), FRAC_PI_2, 2.0);
        let p = m.apply(Vec2::new(1.0, 0.0));

        assert!(approx(p, Vec2::new(10.0, 7.0)));
    }

    #[test]
    fn test_origin_lands_on_translation() {
        let m = Affine2::from_pose_parts(Vec2::new(-30.0, 12.0), 1.234, 0.7);
        assert!(approx(m.apply(Vec2::ZERO), Vec2::new(-30.0, 12.0)));
    }

    #[test]
    fn test_vec2_add_and_finite() {
        assert_eq!(Vec2::new(1.0, 2.0) + Vec2::new(3.0, 4.0), Vec2::new(4.0, 6.0));
        assert!(!Vec2::new(f64::NAN, 0.0).is_finite());
        assert!(!Vec2::new(0.0, f64::INFINITY).is_finite());
    }
}
