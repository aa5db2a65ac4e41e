//! Progress display for long solve runs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SOLVE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len} placed {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Shows placement progress and step count while a solver runs
pub struct SolveProgress {
    bar: ProgressBar,
}

impl SolveProgress {
    /// Create a progress display over the given number of tile positions
    pub fn new(puzzle_name: &str, tile_positions: usize) -> Self {
        let bar = ProgressBar::new(tile_positions as u64);
        bar.set_style(SOLVE_STYLE.clone());
        bar.set_message(puzzle_name.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Report the current placement count and steps taken
    pub fn update(&self, placed: usize, steps: usize) {
        self.bar.set_position(placed as u64);
        self.bar.set_prefix(format!("({steps} steps)"));
    }

    /// Clear the display with a closing message
    pub fn finish(&self, outcome: &str) {
        self.bar.finish_with_message(outcome.to_string());
    }
}
