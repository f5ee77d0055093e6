//! Command line, file conversion, configuration and errors

/// Command-line interface and batch processing
pub mod cli;
/// Resampling constants and CLI defaults
pub mod configuration;
/// Error type shared by the whole crate
pub mod error;
/// Grayscale file decoding and encoding
pub mod image;
/// Progress display for batch runs
pub mod progress;
