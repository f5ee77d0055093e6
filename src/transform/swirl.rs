//! Radius-bounded vortex distortion
//!
//! Inside the radius the rotation angle decays linearly from `twist` full
//! turns at the center to zero at the boundary, so the distortion blends into
//! the untouched surroundings without a seam.

use std::f64::consts::PI;

use tracing::debug;

use crate::io::error::{Result, ensure_finite};
use crate::math::interpolation::sample_bilinear_or_background;
use crate::math::polar::{Angle, back_map};
use crate::raster::picture::Picture;
use crate::raster::point::{Point, PointF};

/// Swirl `picture` around `center` by `twist` turns within `radius` pixels
///
/// Pixels at distance `d >= radius` are copied unchanged, so `radius = 0`
/// returns an identical picture. Samples that land outside the picture are
/// black.
///
/// # Errors
///
/// Returns `InvalidParameter` if `twist` is not finite
pub fn swirl(picture: &Picture, center: Point, twist: f64, radius: u32) -> Result<Picture> {
    let twist = ensure_finite("twist", twist)?;
    let (width, height) = picture.dimensions();
    debug!(width, height, twist, radius, ?center, "swirling picture");

    let pivot = PointF::from(center);
    let radius = f64::from(radius);
    Ok(Picture::par_from_fn(width, height, |x, y| {
        let destination = PointF::new(x as f64, y as f64);
        let distance = destination.distance(pivot);
        if distance < radius {
            let amount = 1.0 - distance / radius;
            let angle = Angle::from_radians(2.0 * twist * PI * amount);
            sample_bilinear_or_background(picture, back_map(destination, pivot, -angle))
        } else {
            picture.get(x, y).unwrap_or_default()
        }
    }))
}
