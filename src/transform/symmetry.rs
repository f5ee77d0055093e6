//! Axis and diagonal reflections
//!
//! These are pure index permutations, so no interpolation is involved and
//! every mirror is its own inverse.

use ndarray::Axis;

use crate::raster::picture::Picture;

/// Reverse the column order: `out(W-1-x, y) = in(x, y)`
pub fn mirror_x(picture: &Picture) -> Picture {
    let mut pixels = picture.as_array().clone();
    pixels.invert_axis(Axis(1));
    Picture::from_trusted(pixels.as_standard_layout().into_owned())
}

/// Reverse the row order: `out(x, H-1-y) = in(x, y)`
pub fn mirror_y(picture: &Picture) -> Picture {
    let mut pixels = picture.as_array().clone();
    pixels.invert_axis(Axis(0));
    Picture::from_trusted(pixels.as_standard_layout().into_owned())
}

/// Reflect across the main diagonal: `out(y, x) = in(x, y)`
///
/// A `W x H` picture becomes `H x W`.
pub fn transpose(picture: &Picture) -> Picture {
    Picture::from_trusted(picture.as_array().t().as_standard_layout().into_owned())
}

/// Reflect across the anti-diagonal
///
/// Equivalent to [`transpose`] followed by both mirrors.
pub fn anti_transpose(picture: &Picture) -> Picture {
    mirror_y(&mirror_x(&transpose(picture)))
}
