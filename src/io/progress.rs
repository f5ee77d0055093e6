//! Batch progress display for multi-file runs

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Shows a file counter plus the name of the file being resampled
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    status_bar: Option<ProgressBar>,
    total_elapsed: Duration,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static STATUS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            status_bar: None,
            total_elapsed: Duration::ZERO,
        }
    }

    /// Create the counter and status lines for `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        let batch_bar = ProgressBar::new(file_count as u64);
        batch_bar.set_style(BATCH_STYLE.clone());
        self.batch_bar = Some(self.multi_progress.add(batch_bar));

        let status_bar = ProgressBar::new_spinner();
        status_bar.set_style(STATUS_STYLE.clone());
        self.status_bar = Some(self.multi_progress.add(status_bar));
    }

    /// Show the file currently being processed
    pub fn start_file(&mut self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if let Some(ref status_bar) = self.status_bar {
            status_bar.set_message(display_name);
            status_bar.tick();
        }
    }

    /// Advance the file counter
    pub fn complete_file(&mut self, elapsed: Duration) {
        self.total_elapsed += elapsed;
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Time spent inside completed files
    pub const fn total_elapsed(&self) -> Duration {
        self.total_elapsed
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref status_bar) = self.status_bar {
            status_bar.finish_and_clear();
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }
}
