//! Progress display for batch map processing

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Maps: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Summary of a finished batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Maps whose search reached the goal
    pub solved: usize,
    /// Maps where the goal was unreachable or the map was rejected
    pub failed: usize,
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} solved, {} unreachable", self.solved, self.failed)
    }
}

/// Tracks progress across a batch of map files
///
/// Draws a single bar over all files unless created hidden, in which case
/// only the summary counters are kept.
pub struct ProgressManager {
    bar: ProgressBar,
    summary: BatchSummary,
}

impl ProgressManager {
    /// Create a visible progress manager for `file_count` files
    pub fn new(file_count: usize) -> Self {
        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        Self {
            bar,
            summary: BatchSummary::default(),
        }
    }

    /// Create a manager that records results without drawing anything
    pub fn hidden(file_count: usize) -> Self {
        let bar =
            ProgressBar::with_draw_target(Some(file_count as u64), ProgressDrawTarget::hidden());
        Self {
            bar,
            summary: BatchSummary::default(),
        }
    }

    /// Show which file is being processed
    pub fn start_file(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
    }

    /// Record the outcome of one file and advance the bar
    pub fn complete_file(&mut self, solved: bool) {
        if solved {
            self.summary.solved += 1;
        } else {
            self.summary.failed += 1;
        }
        self.bar.inc(1);
    }

    /// Print a diagnostic line on stderr without tearing the bar
    ///
    /// Printed even when the bar is hidden.
    // Allow print for user feedback on skipped maps
    #[allow(clippy::print_stderr)]
    pub fn report(&self, message: &str) {
        self.bar.suspend(|| eprintln!("{message}"));
    }

    /// Clean up the display and return the batch summary
    pub fn finish(self) -> BatchSummary {
        self.bar.finish_and_clear();
        self.summary
    }
}
