//! Progress reporting for batch pipeline stages

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display for sequential pipeline stages
///
/// A disabled reporter accepts the same calls and displays nothing, so
/// the pipeline code stays free of quiet-mode branches.
#[derive(Debug)]
pub struct ProgressReporter {
    enabled: bool,
    bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a reporter; pass `false` to suppress all display
    pub const fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }

    /// Start a stage of `total` steps labelled with `message`
    ///
    /// Any stage still running is cleared first.
    pub fn begin(&mut self, total: u64, message: &'static str) {
        self.finish();
        if self.enabled {
            let bar = ProgressBar::new(total);
            bar.set_style(STAGE_STYLE.clone());
            bar.set_message(message);
            self.bar = Some(bar);
        }
    }

    /// Advance the current stage by one step
    pub fn step(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Finish the current stage and clear its bar
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
