//! Center of pressure: the pixel closest, on average, to the dark marks
//!
//! Bright pixels (at or above [`PRESSURE_THRESHOLD`]) are cleared first so only
//! the marks keep a nonzero intensity. Every pixel then gets the mean
//! Manhattan distance to the pixels that pass the filter and the smallest mean
//! wins. The search is quadratic in the pixel count.

use bitvec::vec::BitVec;
use ndarray::{Array2, Zip};
use tracing::debug;

use crate::io::configuration::PRESSURE_THRESHOLD;
use crate::io::error::{PixwarpError, Result, invalid_parameter};
use crate::raster::picture::Picture;
use crate::raster::point::Point;

/// Locate the center of pressure, thresholding `picture` in place
///
/// For a candidate `(x, y)` the mean runs over every pixel that is still
/// active (nonzero after thresholding) plus every pixel that differs from the
/// candidate on both axes. Inactive pixels sharing the candidate's row or
/// column are left out, not just the candidate itself. A candidate with no
/// qualifying pixels scores 0.
///
/// The thresholding is destructive: callers that still need the original
/// intensities must pass a clone. Ties go to the first pixel in column-major
/// scan order starting at `(0, 0)`.
///
/// # Errors
///
/// Returns an error if:
/// - the picture has no pixels
/// - the winning coordinate does not fit a lattice point
pub fn center_of_pressure(picture: &mut Picture) -> Result<Point> {
    if picture.is_empty() {
        return Err(PixwarpError::EmptyImage {
            operation: "center of pressure",
        });
    }

    clear_bright_pixels(picture);

    let (width, height) = picture.dimensions();
    let active: BitVec = picture.as_array().iter().map(|&v| v != 0.0).collect();
    debug!(width, height, active = active.count_ones(), "searching center of pressure");

    let mut mean_distances = Array2::<f64>::zeros((width, height));
    Zip::indexed(&mut mean_distances).par_for_each(|(x, y), out| {
        *out = mean_distance_to_filtered(x, y, width, height, &active);
    });

    let mut best = (0, 0);
    let mut best_distance = f64::INFINITY;
    for ((x, y), &distance) in mean_distances.indexed_iter() {
        if distance < best_distance {
            best_distance = distance;
            best = (x, y);
        }
    }

    let to_coordinate = |v: usize| {
        i32::try_from(v).map_err(|_overflow| {
            invalid_parameter("picture", &v, &"coordinate exceeds the lattice range")
        })
    };
    Ok(Point::new(to_coordinate(best.0)?, to_coordinate(best.1)?))
}

/// Zero every pixel at or above the pressure threshold
pub fn clear_bright_pixels(picture: &mut Picture) {
    picture
        .as_array_mut()
        .mapv_inplace(|v| if v >= PRESSURE_THRESHOLD { 0.0 } else { v });
}

// A pixel counts when it is still active or shares neither row nor column with (x, y)
fn mean_distance_to_filtered(
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    active: &BitVec,
) -> f64 {
    let mut total: u64 = 0;
    let mut count: u64 = 0;
    for xx in 0..width {
        for yy in 0..height {
            let is_active = active.get(yy * width + xx).is_some_and(|bit| *bit);
            if is_active || (xx != x && yy != y) {
                total += (x.abs_diff(xx) + y.abs_diff(yy)) as u64;
                count += 1;
            }
        }
    }

    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}
