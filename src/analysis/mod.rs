//! Spatial analysis over pictures

/// Global intensity statistics and rescaling
pub mod intensity;
/// Elliptical neighborhood enumeration
pub mod neighborhood;
/// Center of pressure estimation
pub mod pressure;
