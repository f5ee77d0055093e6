//! Conversion between 8-bit grayscale files and normalized pictures

use std::path::Path;

use image::{GrayImage, Luma};
use ndarray::Array2;

use crate::io::configuration::U8_MAX_INTENSITY;
use crate::io::error::{PixwarpError, Result};
use crate::raster::picture::Picture;

/// Map an 8-bit level onto `[0, 1]`
pub fn intensity_from_u8(level: u8) -> f32 {
    f32::from(level) / U8_MAX_INTENSITY
}

/// Quantize an intensity to the nearest 8-bit level
pub fn intensity_to_u8(intensity: f32) -> u8 {
    (intensity.clamp(0.0, 1.0) * U8_MAX_INTENSITY).round() as u8
}

/// Convert a decoded luma buffer into a picture
pub fn picture_from_gray(gray: &GrayImage) -> Picture {
    let (width, height) = gray.dimensions();
    let pixels = Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
        intensity_from_u8(gray.get_pixel(x as u32, y as u32).0[0])
    });
    Picture::from_trusted(pixels)
}

/// Quantize a picture into a luma buffer
///
/// # Errors
///
/// Returns `InvalidParameter` if a dimension exceeds `u32::MAX`
pub fn picture_to_gray(picture: &Picture) -> Result<GrayImage> {
    let width = dimension_to_u32("width", picture.width())?;
    let height = dimension_to_u32("height", picture.height())?;
    Ok(GrayImage::from_fn(width, height, |x, y| {
        let value = picture.get(x as usize, y as usize).unwrap_or_default();
        Luma([intensity_to_u8(value)])
    }))
}

/// Decode any supported image file as grayscale
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded
pub fn load_picture(path: &Path) -> Result<Picture> {
    let decoded = image::open(path).map_err(|e| PixwarpError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(picture_from_gray(&decoded.into_luma8()))
}

/// Encode a picture to disk, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn save_picture(picture: &Picture, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PixwarpError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    picture_to_gray(picture)?
        .save(path)
        .map_err(|e| PixwarpError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}

fn dimension_to_u32(parameter: &'static str, value: usize) -> Result<u32> {
    u32::try_from(value).map_err(|_overflow| {
        crate::io::error::invalid_parameter(parameter, &value, &"exceeds the encodable size")
    })
}
