//! Global intensity statistics and contrast stretching

use crate::io::error::{PixwarpError, Result};
use crate::raster::picture::{Picture, clamp_intensity};

/// Linearly stretch intensities so the darkest pixel becomes 0 and the brightest 1
///
/// # Errors
///
/// Returns an error if:
/// - the picture has no pixels
/// - every pixel has the same intensity
pub fn rescale_intensity(picture: &Picture) -> Result<Picture> {
    if picture.is_empty() {
        return Err(PixwarpError::EmptyImage {
            operation: "intensity rescale",
        });
    }

    let min = picture.min_intensity();
    let max = picture.max_intensity();
    let span = max - min;
    if span <= 0.0 {
        return Err(PixwarpError::DegenerateRange { min, max });
    }

    let stretched = picture
        .as_array()
        .mapv(|v| clamp_intensity((v - min) / span));
    Ok(Picture::from_trusted(stretched))
}

/// Mean intensity, `None` for an empty picture
pub fn mean_intensity(picture: &Picture) -> Option<f32> {
    picture.as_array().mean()
}
