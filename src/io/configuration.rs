//! Resampling constants and runtime configuration defaults

// Background values substituted for samples that fall outside the source
/// Intensity written by whole-picture rotations for unmapped pixels (white)
pub const ROTATION_BACKGROUND: f32 = 1.0;
/// Intensity returned by point bilinear sampling outside the picture
pub const SAMPLE_BACKGROUND: f32 = 0.0;

// Coordinates this close to an integer are treated as lattice hits
/// Snapping distance applied to back-mapped coordinates
pub const LATTICE_EPSILON: f64 = 1e-9;

/// Blend overshoot above which clamping is reported
pub const INTENSITY_TOLERANCE: f32 = 1e-5;

/// Pixels at or above this intensity are cleared before the pressure search
pub const PRESSURE_THRESHOLD: f32 = 0.2;

/// Largest value of an 8-bit channel
pub const U8_MAX_INTENSITY: f32 = 255.0;

// Default values for configurable parameters
/// Default rotation angle in degrees
pub const DEFAULT_ANGLE_DEGREES: f64 = 90.0;
/// Default swirl strength in full turns at the center
pub const DEFAULT_TWIST: f64 = 1.0;
/// Default swirl radius in pixels
pub const DEFAULT_SWIRL_RADIUS: u32 = 50;
/// Default semi-axes of the highlighted pressure neighborhood, as `A,B`
pub const DEFAULT_SEMI_AXES: &str = "3,3";

// Output settings
/// Extension of files picked up and written by the CLI
pub const IMAGE_EXTENSION: &str = "png";
