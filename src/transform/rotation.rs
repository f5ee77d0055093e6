//! Whole-picture rotation about an arbitrary center
//!
//! Each destination pixel is back-mapped through [`back_map`] and resampled
//! with the requested [`Interpolation`]. Pixels whose source falls outside the
//! picture become white.

use tracing::debug;

use crate::io::configuration::ROTATION_BACKGROUND;
use crate::io::error::{Result, ensure_finite};
use crate::math::interpolation::Interpolation;
use crate::math::polar::{Angle, back_map};
use crate::raster::picture::Picture;
use crate::raster::point::{Point, PointF};

/// Rotate `picture` by `degrees` about `center`
///
/// Positive angles turn the content counter-clockwise on screen. The output
/// has the same dimensions as the input.
///
/// # Errors
///
/// Returns `InvalidParameter` if `degrees` is not finite
pub fn rotate(
    picture: &Picture,
    center: Point,
    degrees: f64,
    interpolation: Interpolation,
) -> Result<Picture> {
    let angle = Angle::from_degrees(ensure_finite("angle", degrees)?);
    let (width, height) = picture.dimensions();
    debug!(
        width,
        height,
        degrees,
        ?center,
        ?interpolation,
        "rotating picture"
    );

    let pivot = PointF::from(center);
    Ok(Picture::par_from_fn(width, height, |x, y| {
        let source = back_map(PointF::new(x as f64, y as f64), pivot, angle);
        interpolation
            .sample(picture, source)
            .unwrap_or(ROTATION_BACKGROUND)
    }))
}

/// Rotation reading the pixel at the rounded source coordinate
///
/// # Errors
///
/// Returns `InvalidParameter` if `degrees` is not finite
pub fn rotate_cast(picture: &Picture, center: Point, degrees: f64) -> Result<Picture> {
    rotate(picture, center, degrees, Interpolation::Cast)
}

/// Rotation reading the closest of the four bracketing source pixels
///
/// # Errors
///
/// Returns `InvalidParameter` if `degrees` is not finite
pub fn rotate_nearest(picture: &Picture, center: Point, degrees: f64) -> Result<Picture> {
    rotate(picture, center, degrees, Interpolation::Nearest)
}

/// Rotation blending the four bracketing source pixels
///
/// # Errors
///
/// Returns `InvalidParameter` if `degrees` is not finite
pub fn rotate_bilinear(picture: &Picture, center: Point, degrees: f64) -> Result<Picture> {
    rotate(picture, center, degrees, Interpolation::Bilinear)
}
