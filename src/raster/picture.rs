//! Single-channel picture with normalized intensities
//!
//! Pixels are stored row-major in an `Array2<f32>` indexed `[y, x]`. Every
//! stored intensity lies in `[0, 1]`; writes outside that range are rejected
//! rather than clamped.

use ndarray::{Array2, Zip};
use tracing::warn;

use crate::io::configuration::INTENSITY_TOLERANCE;
use crate::io::error::{PixwarpError, Result};
use crate::raster::point::Point;

/// Grayscale raster with intensities in `[0, 1]` (0 = black, 1 = white)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Picture {
    pixels: Array2<f32>,
}

impl Picture {
    /// Create a black picture of the given size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: Array2::zeros((height, width)),
        }
    }

    /// Build a picture from row-major intensities
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `data.len()` differs from `width * height`
    /// - any value lies outside `[0, 1]`
    pub fn from_vec(width: usize, height: usize, data: Vec<f32>) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .ok_or(PixwarpError::DimensionMismatch {
                expected: usize::MAX,
                actual: data.len(),
            })?;
        let actual = data.len();
        let pixels = Array2::from_shape_vec((height, width), data)
            .map_err(|_shape_error| PixwarpError::DimensionMismatch { expected, actual })?;
        Self::from_array(pixels)
    }

    /// Wrap an existing `[y, x]` array after validating its intensities
    ///
    /// # Errors
    ///
    /// Returns `InvalidIntensity` for the first value outside `[0, 1]`
    pub fn from_array(pixels: Array2<f32>) -> Result<Self> {
        if let Some(((y, x), &value)) = pixels
            .indexed_iter()
            .find(|(_, v)| !is_valid_intensity(**v))
        {
            return Err(PixwarpError::InvalidIntensity { x, y, value });
        }
        Ok(Self { pixels })
    }

    /// Build a picture by evaluating `f(x, y)` for every pixel
    ///
    /// # Errors
    ///
    /// Returns `InvalidIntensity` if `f` yields a value outside `[0, 1]`
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> f32) -> Result<Self> {
        Self::from_array(Array2::from_shape_fn((height, width), |(y, x)| f(x, y)))
    }

    /// Evaluate `f(x, y)` for every destination pixel in parallel
    ///
    /// Results are clamped into `[0, 1]` so interpolation rounding noise never
    /// breaks the intensity invariant.
    pub(crate) fn par_from_fn<F>(width: usize, height: usize, f: F) -> Self
    where
        F: Fn(usize, usize) -> f32 + Sync + Send,
    {
        let mut pixels = Array2::zeros((height, width));
        Zip::indexed(&mut pixels).par_for_each(|(y, x), out| {
            *out = clamp_intensity(f(x, y));
        });
        Self { pixels }
    }

    /// Wrap an array whose values were copied from another picture
    pub(crate) const fn from_trusted(pixels: Array2<f32>) -> Self {
        Self { pixels }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Picture dimensions as (width, height)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Whether the picture holds no pixels
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Underlying `[y, x]` intensity array
    pub const fn as_array(&self) -> &Array2<f32> {
        &self.pixels
    }

    /// Mutable access for in-crate operations that only write valid intensities
    pub(crate) const fn as_array_mut(&mut self) -> &mut Array2<f32> {
        &mut self.pixels
    }

    /// Intensity at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        self.pixels.get([y, x]).copied()
    }

    /// Overwrite the intensity at column `x`, row `y`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `value` is NaN or outside `[0, 1]`
    /// - `(x, y)` lies outside the picture
    pub fn set(&mut self, x: usize, y: usize, value: f32) -> Result<()> {
        if !is_valid_intensity(value) {
            return Err(PixwarpError::InvalidIntensity { x, y, value });
        }
        let (width, height) = self.dimensions();
        let cell = self
            .pixels
            .get_mut([y, x])
            .ok_or(PixwarpError::OutOfBounds {
                x,
                y,
                width,
                height,
            })?;
        *cell = value;
        Ok(())
    }

    /// Brightest intensity, 0 for an empty picture
    pub fn max_intensity(&self) -> f32 {
        self.pixels.iter().copied().fold(0.0, f32::max)
    }

    /// Darkest intensity, 1 for an empty picture
    pub fn min_intensity(&self) -> f32 {
        self.pixels.iter().copied().fold(1.0, f32::min)
    }

    /// Copy of the picture with every in-bounds point painted white
    pub fn highlight_neighborhood(&self, points: impl IntoIterator<Item = Point>) -> Self {
        let mut highlighted = self.clone();
        for p in points {
            let (Ok(x), Ok(y)) = (usize::try_from(p.x), usize::try_from(p.y)) else {
                continue;
            };
            if let Some(cell) = highlighted.pixels.get_mut([y, x]) {
                *cell = 1.0;
            }
        }
        highlighted
    }
}

/// Whether `value` may be stored in a picture
pub fn is_valid_intensity(value: f32) -> bool {
    (0.0..=1.0).contains(&value)
}

/// Force a computed sample into `[0, 1]`, reporting anything beyond rounding noise
pub(crate) fn clamp_intensity(value: f32) -> f32 {
    if is_valid_intensity(value) {
        return value;
    }
    if value.is_nan() || value < -INTENSITY_TOLERANCE || value > 1.0 + INTENSITY_TOLERANCE {
        warn!(value, "clamping out-of-range intensity");
    }
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}
