//! CLI entry point for the grayscale resampling tool

use clap::Parser;
use pixwarp::io::cli::{Cli, FileProcessor};
use tracing_subscriber::EnvFilter;

fn main() -> pixwarp::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_unset| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
