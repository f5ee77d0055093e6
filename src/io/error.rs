//! Error types for picture construction, parameter validation and file I/O

use std::fmt;
use std::path::PathBuf;

/// Main error type for all raster operations
#[derive(Debug)]
pub enum PixwarpError {
    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a picture to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Intensity written to a picture lies outside `[0, 1]`
    InvalidIntensity {
        /// Column of the rejected write
        x: usize,
        /// Row of the rejected write
        y: usize,
        /// Rejected value
        value: f32,
    },

    /// Pixel coordinate outside the picture
    OutOfBounds {
        /// Requested column
        x: usize,
        /// Requested row
        y: usize,
        /// Picture width
        width: usize,
        /// Picture height
        height: usize,
    },

    /// Raw pixel buffer does not match the requested dimensions
    DimensionMismatch {
        /// Number of values implied by the dimensions
        expected: usize,
        /// Number of values supplied
        actual: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Operation needs at least one pixel
    EmptyImage {
        /// Name of the operation that was attempted
        operation: &'static str,
    },

    /// Intensity range is flat so it cannot be stretched
    DegenerateRange {
        /// Smallest intensity found
        min: f32,
        /// Largest intensity found
        max: f32,
    },
}

impl fmt::Display for PixwarpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidIntensity { x, y, value } => {
                write!(
                    f,
                    "Intensity {value} at ({x}, {y}) is outside the range [0, 1]"
                )
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Pixel ({x}, {y}) is out of bounds for a {width}x{height} picture"
                )
            }
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "Expected {expected} pixel values, got {actual}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EmptyImage { operation } => {
                write!(f, "Cannot run {operation} on an empty picture")
            }
            Self::DegenerateRange { min, max } => {
                write!(
                    f,
                    "Intensity range [{min}, {max}] is flat and cannot be rescaled"
                )
            }
        }
    }
}

impl std::error::Error for PixwarpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for raster results
pub type Result<T> = std::result::Result<T, PixwarpError>;

impl From<std::io::Error> for PixwarpError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PixwarpError {
    PixwarpError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an error for an unusable CLI target path
pub fn io_error(msg: &str) -> PixwarpError {
    PixwarpError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}

/// Reject non-finite floating point parameters
///
/// # Errors
///
/// Returns `InvalidParameter` when `value` is NaN or infinite
pub fn ensure_finite(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid_parameter(parameter, &value, &"must be a finite number"))
    }
}
