//! Raster storage and lattice coordinates

/// Normalized grayscale picture
pub mod picture;
/// Integer and real-valued points
pub mod point;

pub use picture::Picture;
pub use point::{Point, PointF};
