//! Intensity reconstruction at fractional source coordinates
//!
//! Every sampler returns `None` when the coordinate cannot be served from the
//! picture; callers decide which background value to substitute. Coordinates
//! within [`LATTICE_EPSILON`] of an integer are snapped first, so trigonometric
//! noise never turns an exact lattice hit into a blend or a miss.

use num_traits::ToPrimitive;

use crate::io::configuration::{LATTICE_EPSILON, SAMPLE_BACKGROUND};
use crate::raster::picture::Picture;
use crate::raster::point::PointF;

/// Policy used to turn a back-mapped coordinate into an intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Interpolation {
    /// Round the coordinate and read that pixel
    Cast,
    /// Closest of the four bracketing lattice corners
    Nearest,
    /// Weighted blend of the four bracketing lattice corners
    #[default]
    Bilinear,
}

impl Interpolation {
    /// Sample `picture` at `p` with this policy
    pub fn sample(self, picture: &Picture, p: PointF) -> Option<f32> {
        match self {
            Self::Cast => sample_cast(picture, p),
            Self::Nearest => sample_nearest(picture, p),
            Self::Bilinear => sample_bilinear(picture, p),
        }
    }
}

/// Read the pixel at the rounded coordinate (halves round away from zero)
pub fn sample_cast(picture: &Picture, p: PointF) -> Option<f32> {
    let x = p.x.round().to_i64()?;
    let y = p.y.round().to_i64()?;
    picture.get(usize::try_from(x).ok()?, usize::try_from(y).ok()?)
}

/// Read the bracketing corner closest to `p`
///
/// Corners are visited as (floor x, floor y), (floor x, ceil y),
/// (ceil x, floor y), (ceil x, ceil y); a later corner only wins with a
/// strictly smaller distance.
pub fn sample_nearest(picture: &Picture, p: PointF) -> Option<f32> {
    let p = p.snapped(LATTICE_EPSILON);
    let (xf, xc) = bracket(p.x, picture.width())?;
    let (yf, yc) = bracket(p.y, picture.height())?;

    let corners = [(xf, yf), (xf, yc), (xc, yf), (xc, yc)];
    let mut best = (xf, yf);
    let mut best_distance = f64::INFINITY;
    for (cx, cy) in corners {
        let distance = p.distance(PointF::new(cx as f64, cy as f64));
        if distance < best_distance {
            best_distance = distance;
            best = (cx, cy);
        }
    }

    picture.get(best.0, best.1)
}

/// Blend the four bracketing corners, first along x then along y
///
/// When `p` is integral on either axis there is nothing to blend and the
/// pixel at the rounded coordinate is returned unchanged.
pub fn sample_bilinear(picture: &Picture, p: PointF) -> Option<f32> {
    let p = p.snapped(LATTICE_EPSILON);
    let (xf, xc) = bracket(p.x, picture.width())?;
    let (yf, yc) = bracket(p.y, picture.height())?;

    if xf == xc || yf == yc {
        return picture.get(p.x.round().to_usize()?, p.y.round().to_usize()?);
    }

    let (x, y) = (p.x, p.y);
    let (x0, x1, y0, y1) = (xf as f64, xc as f64, yf as f64, yc as f64);

    let upper_left = f64::from(picture.get(xf, yf)?);
    let upper_right = f64::from(picture.get(xc, yf)?);
    let floor_row = (x1 - x) * upper_left + (x - x0) * upper_right;

    let lower_left = f64::from(picture.get(xf, yc)?);
    let lower_right = f64::from(picture.get(xc, yc)?);
    let ceil_row = (x1 - x) * lower_left + (x - x0) * lower_right;

    Some(((y1 - y) * floor_row + (y - y0) * ceil_row) as f32)
}

/// Bilinear sample that falls back to black outside the picture
pub fn sample_bilinear_or_background(picture: &Picture, p: PointF) -> f32 {
    sample_bilinear(picture, p).unwrap_or(SAMPLE_BACKGROUND)
}

// Floor and ceil lattice indices of `v`, provided both exist on an axis of `len` pixels
fn bracket(v: f64, len: usize) -> Option<(usize, usize)> {
    let last = len.checked_sub(1)? as f64;
    if !(0.0..=last).contains(&v) {
        return None;
    }
    Some((v.floor().to_usize()?, v.ceil().to_usize()?))
}
