//! Spinner display for long-running layout searches

use crate::algorithm::solver::SearchStats;
use crate::io::configuration::PROGRESS_TICK_INTERVAL;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Reports solver branch counts on a terminal spinner
///
/// Updates are throttled to one redraw every [`PROGRESS_TICK_INTERVAL`]
/// branches so the search loop stays cheap.
#[derive(Clone)]
pub struct SearchProgress {
    bar: ProgressBar,
}

impl Default for SearchProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchProgress {
    /// Create a spinner drawing to stderr
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_prefix("solving");
        bar.enable_steady_tick(Duration::from_millis(120));
        Self { bar }
    }

    /// Create a spinner that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Record the latest counters
    pub fn record(&self, stats: &SearchStats) {
        if stats.branches % PROGRESS_TICK_INTERVAL == 0 {
            self.bar.set_position(stats.branches as u64);
            self.bar.set_message(Self::summary(stats));
        }
    }

    /// Stop the spinner and leave the final counters on screen
    pub fn finish(&self, stats: &SearchStats) {
        self.bar.set_position(stats.branches as u64);
        self.bar.finish_with_message(Self::summary(stats));
    }

    /// Branch count last pushed to the display
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Whether the search has been marked finished
    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }

    fn summary(stats: &SearchStats) -> String {
        format!(
            "{} branches, {} dead ends, deepest cell {}",
            stats.branches, stats.contradictions, stats.deepest_cell
        )
    }
}
