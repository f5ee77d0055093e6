//! Command-line interface for batch resampling of PNG files

use crate::analysis::intensity::{mean_intensity, rescale_intensity};
use crate::analysis::neighborhood::ellipse_neighborhood_within;
use crate::analysis::pressure::center_of_pressure;
use crate::io::configuration::{
    DEFAULT_ANGLE_DEGREES, DEFAULT_SEMI_AXES, DEFAULT_SWIRL_RADIUS, DEFAULT_TWIST,
    IMAGE_EXTENSION,
};
use crate::io::error::{PixwarpError, Result, io_error};
use crate::io::image::{load_picture, save_picture};
use crate::io::progress::ProgressManager;
use crate::math::interpolation::Interpolation;
use crate::raster::picture::Picture;
use crate::raster::point::Point;
use crate::transform::rotation::rotate;
use crate::transform::swirl::swirl;
use crate::transform::symmetry::{anti_transpose, mirror_x, mirror_y, transpose};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "pixwarp")]
#[command(
    author,
    version,
    about = "Rotate, swirl and mirror grayscale PNG images"
)]
/// Command-line arguments for the resampling tool
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long, global = true)]
    pub no_skip: bool,

    /// Transformation applied to every input
    #[command(subcommand)]
    pub operation: Operation,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Transformations available from the command line
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Operation {
    /// Rotate about a center
    Rotate {
        /// Rotation angle in degrees, counter-clockwise positive
        #[arg(short, long, default_value_t = DEFAULT_ANGLE_DEGREES, allow_hyphen_values = true)]
        angle: f64,

        /// Interpolation policy for fractional source coordinates
        #[arg(short, long, value_enum, default_value_t = Interpolation::Bilinear)]
        policy: Interpolation,

        /// Rotation center as X,Y (defaults to the image center)
        #[arg(short, long, value_parser = parse_point, allow_hyphen_values = true)]
        center: Option<Point>,
    },

    /// Twist the region around a center
    Swirl {
        /// Full turns applied at the center
        #[arg(short, long, default_value_t = DEFAULT_TWIST, allow_hyphen_values = true)]
        twist: f64,

        /// Radius of the affected disc in pixels
        #[arg(short, long, default_value_t = DEFAULT_SWIRL_RADIUS)]
        radius: u32,

        /// Swirl center as X,Y (defaults to the image center)
        #[arg(short, long, value_parser = parse_point, allow_hyphen_values = true)]
        center: Option<Point>,
    },

    /// Reverse the column order
    MirrorX,

    /// Reverse the row order
    MirrorY,

    /// Reflect across the main diagonal
    Transpose,

    /// Reflect across the anti-diagonal
    AntiTranspose,

    /// Stretch intensities to the full range
    Rescale,

    /// Highlight the neighborhood of the center of pressure
    Pressure {
        /// Semi-axes of the highlighted ellipse as A,B
        #[arg(short, long, value_parser = parse_semi_axes, default_value = DEFAULT_SEMI_AXES)]
        semi_axes: (u32, u32),
    },
}

impl Operation {
    /// Short name used in output file names
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rotate { .. } => "rotate",
            Self::Swirl { .. } => "swirl",
            Self::MirrorX => "mirror_x",
            Self::MirrorY => "mirror_y",
            Self::Transpose => "transpose",
            Self::AntiTranspose => "anti_transpose",
            Self::Rescale => "rescale",
            Self::Pressure { .. } => "pressure",
        }
    }

    /// Apply the operation to a decoded picture
    ///
    /// # Errors
    ///
    /// Propagates parameter and picture errors from the underlying operation
    pub fn apply(&self, picture: &Picture) -> Result<Picture> {
        match *self {
            Self::Rotate {
                angle,
                policy,
                center,
            } => rotate(
                picture,
                center.unwrap_or_else(|| default_center(picture)),
                angle,
                policy,
            ),
            Self::Swirl {
                twist,
                radius,
                center,
            } => swirl(
                picture,
                center.unwrap_or_else(|| default_center(picture)),
                twist,
                radius,
            ),
            Self::MirrorX => Ok(mirror_x(picture)),
            Self::MirrorY => Ok(mirror_y(picture)),
            Self::Transpose => Ok(transpose(picture)),
            Self::AntiTranspose => Ok(anti_transpose(picture)),
            Self::Rescale => rescale_intensity(picture),
            Self::Pressure { semi_axes } => {
                let mut thresholded = picture.clone();
                let center = center_of_pressure(&mut thresholded)?;
                info!(
                    x = center.x,
                    y = center.y,
                    mean = ?mean_intensity(&thresholded),
                    "center of pressure"
                );
                Ok(picture.highlight_neighborhood(ellipse_neighborhood_within(
                    picture,
                    center,
                    semi_axes.0,
                    semi_axes.1,
                )))
            }
        }
    }
}

/// Integer center of the picture, `(W/2, H/2)`
pub fn default_center(picture: &Picture) -> Point {
    let half = |v: usize| i32::try_from(v / 2).unwrap_or(i32::MAX);
    Point::new(half(picture.width()), half(picture.height()))
}

/// Parse `X,Y` into a lattice point
///
/// # Errors
///
/// Returns a message if the text is not two comma separated integers
pub fn parse_point(text: &str) -> std::result::Result<Point, String> {
    let (x, y) = split_pair(text)?;
    Ok(Point::new(x, y))
}

/// Parse `A,B` into ellipse semi-axes
///
/// # Errors
///
/// Returns a message if the text is not two comma separated non-negative integers
pub fn parse_semi_axes(text: &str) -> std::result::Result<(u32, u32), String> {
    split_pair(text)
}

fn split_pair<T: std::str::FromStr>(text: &str) -> std::result::Result<(T, T), String> {
    let (first, second) = text
        .split_once(',')
        .ok_or_else(|| format!("expected two comma separated values, got '{text}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<T>()
            .map_err(|_invalid| format!("'{}' is not a valid value", part.trim()))
    };
    Ok((parse(first)?, parse(second)?))
}

/// Orchestrates batch processing of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
            info!(
                files = files.len(),
                elapsed_ms = pm.total_elapsed().as_millis() as u64,
                "batch complete"
            );
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if has_image_extension(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(io_error("Target file must be a PNG image"))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            let entries =
                std::fs::read_dir(&self.cli.target).map_err(|e| PixwarpError::FileSystem {
                    path: self.cli.target.clone(),
                    operation: "read directory",
                    source: e,
                })?;
            for entry in entries {
                let path = entry?.path();
                if has_image_extension(&path)
                    && !self.is_own_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(io_error("Target must be a PNG file or directory"))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.output_path(input_path);
        if output_path.exists() {
            warn!(input = %input_path.display(), "skipping, output exists");
            false
        } else {
            true
        }
    }

    // Outputs of this operation sitting in the target directory are not re-processed
    fn is_own_output(&self, path: &Path) -> bool {
        path.file_stem()
            .is_some_and(|stem| stem.to_string_lossy().ends_with(&self.output_suffix()))
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        let start_time = Instant::now();
        let output_path = self.output_path(input_path);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let picture = load_picture(input_path)?;
        let transformed = self.cli.operation.apply(&picture)?;
        save_picture(&transformed, &output_path)?;

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "processed"
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(start_time.elapsed());
        }

        Ok(())
    }

    fn output_suffix(&self) -> String {
        format!("_{}", self.cli.operation.name())
    }

    /// Output path for `input_path`: `<stem>_<operation>.png` in the same directory
    pub fn output_path(&self, input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}.{IMAGE_EXTENSION}",
            stem.to_string_lossy(),
            self.output_suffix()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(IMAGE_EXTENSION)
}
