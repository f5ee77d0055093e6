//! Polar back-mapping of destination pixels around a rotation center
//!
//! Image rows grow downwards while polar angles grow counter-clockwise, so the
//! vertical offset is flipped on the way in and out. A positive [`Angle`]
//! turns the sampling grid clockwise, which carries the picture content
//! counter-clockwise on screen.

use std::f64::consts::PI;

use crate::raster::point::PointF;

/// Signed rotation angle in the mathematical sense
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    /// No rotation
    pub const ZERO: Self = Self { radians: 0.0 };

    /// Angle from degrees
    pub const fn from_degrees(degrees: f64) -> Self {
        Self {
            radians: degrees * PI / 180.0,
        }
    }

    /// Angle from radians
    pub const fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    /// Value in radians
    pub const fn radians(self) -> f64 {
        self.radians
    }
}

impl std::ops::Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_radians(-self.radians)
    }
}

/// Source coordinate whose content lands on `point` after rotating by `angle` about `center`
///
/// The offset from the center is converted to polar form, the polar angle is
/// decreased by `angle`, and the result is converted back to image space.
/// The center maps to itself for every angle since `r = 0` there.
pub fn back_map(point: PointF, center: PointF, angle: Angle) -> PointF {
    let dx = point.x - center.x;
    let dy = center.y - point.y;

    let r = dx.hypot(dy);
    if r == 0.0 {
        return center;
    }
    let theta = dy.atan2(dx) - angle.radians();

    let (sin, cos) = theta.sin_cos();
    PointF::new(r.mul_add(cos, center.x), r.mul_add(-sin, center.y))
}
