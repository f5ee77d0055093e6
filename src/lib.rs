//! Polar resampling of grayscale rasters
//!
//! Destination pixels are back-mapped through a rotation about a center and
//! reconstructed from the source with one of three interpolation policies.
//! The same machinery drives a radius-bounded swirl, and the crate adds axis
//! and diagonal reflections plus two spatial analyses: the center of pressure
//! and elliptical neighborhoods.

#![forbid(unsafe_code)]

/// Center of pressure, elliptical neighborhoods and intensity statistics
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Polar back-mapping and interpolation policies
pub mod math;
/// Picture storage and lattice points
pub mod raster;
/// Rotation, swirl and symmetry transforms
pub mod transform;

pub use io::error::{PixwarpError, Result};
pub use math::interpolation::Interpolation;
pub use raster::{Picture, Point, PointF};
