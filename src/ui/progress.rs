//! Probe progress display.

use indicatif::{ProgressBar, ProgressStyle};

use crate::checks::{Probe, ProbeObserver};
use crate::report::CheckResult;

/// Shows a progress bar that advances as each probe finishes.
pub struct ProbeProgress {
    bar: ProgressBar,
}

impl ProbeProgress {
    /// Create a visible bar for `total` probes, drawn on stderr.
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{prefix:.bold} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        bar.set_prefix("rtcheck");
        Self { bar }
    }

    /// Create a bar that draws nothing.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Remove the bar from the terminal.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Number of probes completed so far.
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl ProbeObserver for ProbeProgress {
    fn probe_started(&self, _index: usize, _total: usize, probe: &dyn Probe) {
        self.bar.set_message(probe.headline());
    }

    fn probe_finished(&self, _probe: &dyn Probe, _results: &[CheckResult]) {
        self.bar.inc(1);
    }
}
