//! Whole-picture geometric transforms
//!
//! Every transform reads its source without mutation and returns a new picture.

/// Rotation about a center with a selectable interpolation policy
pub mod rotation;
/// Radius-bounded swirl distortion
pub mod swirl;
/// Axis and diagonal reflections
pub mod symmetry;
