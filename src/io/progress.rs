//! Progress display for automaton runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static GENERATION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Generations: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks automaton generations on a single bar
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bar
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Create a manager that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: Some(ProgressBar::hidden()),
        }
    }

    /// Start a bar for `generations` steps
    pub fn initialize(&mut self, generations: usize) {
        let bar = self
            .bar
            .take()
            .filter(ProgressBar::is_hidden)
            .unwrap_or_else(|| ProgressBar::new(0));
        bar.set_style(GENERATION_STYLE.clone());
        bar.set_length(generations as u64);
        bar.set_position(0);
        self.bar = Some(bar);
    }

    /// Report the generation just completed and the live cell count
    pub fn update(&self, generation: usize, alive: usize) {
        if let Some(ref bar) = self.bar {
            bar.set_position(generation as u64);
            bar.set_message(format!("alive {alive}"));
        }
    }

    /// Position of the bar, zero before initialization
    pub fn position(&self) -> u64 {
        self.bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Clear the bar
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
