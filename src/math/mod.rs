//! Mathematical utilities for resampling

/// Interpolation policies at fractional coordinates
pub mod interpolation;
/// Polar back-mapping around a rotation center
pub mod polar;
