//! Multi-pattern progress tracking with automatic batching for large runs

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Work done for every generated pattern, in order
pub const PHASES: [&str; 4] = ["generate", "finalize", "render", "animate"];

/// Coordinates progress display for batch generation
///
/// Shows one bar per pattern for small batches and adds an overall bar once the
/// batch outgrows the individual bars
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    pattern_bars: Vec<ProgressBar>,
    /// Stores (`name`, `completed_phases`, `phase_label`) for rolling window display
    pattern_states: Vec<(String, usize, &'static str)>,
    finished: bool,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>18} [{bar:30.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Patterns: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            pattern_bars: Vec::new(),
            pattern_states: Vec::new(),
            finished: false,
        }
    }

    /// Initialize progress bars based on pattern count
    pub fn initialize(&mut self, pattern_count: usize) {
        // Switch to batch mode for large runs to avoid terminal spam
        if pattern_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(pattern_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = pattern_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(PHASES.len() as u64);
            pb.set_style(PROGRESS_STYLE.clone());
            self.pattern_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Register a pattern that is about to be generated
    pub fn start_pattern(&mut self, index: usize, name: &str) {
        if index >= self.pattern_states.len() {
            self.pattern_states.resize(index + 1, (String::new(), 0, ""));
        }
        if let Some(state) = self.pattern_states.get_mut(index) {
            *state = (name.to_string(), 0, PHASES[0]);
        }
        self.update_bars();
    }

    /// Report that a pattern entered a phase from [`PHASES`]
    pub fn enter_phase(&mut self, index: usize, phase: &'static str) {
        if let Some(state) = self.pattern_states.get_mut(index) {
            state.1 = PHASES.iter().position(|&p| p == phase).unwrap_or(state.1);
            state.2 = phase;
        }
        self.update_bars();
    }

    /// Mark pattern as completed and update batch progress
    pub fn complete_pattern(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.pattern_states.get_mut(index) {
            state.0 = format!("✓ {}", state.0);
            state.1 = PHASES.len();
            state.2 = "done";
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&mut self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All patterns generated");
        }
        let _ = self.multi_progress.clear();
        self.finished = true;
    }

    /// Whether [`Self::finish`] has cleaned up the displays
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Update all progress bars to show the last N active patterns
    fn update_bars(&self) {
        let active: Vec<_> = self
            .pattern_states
            .iter()
            .filter(|(name, _, _)| !name.is_empty())
            .collect();

        let start_idx = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, (name, completed, phase)) in visible.iter().enumerate() {
            if let Some(bar) = self.pattern_bars.get(bar_idx) {
                bar.set_length(PHASES.len() as u64);
                bar.set_position(*completed as u64);
                bar.set_message(*phase);
                bar.set_prefix(name.clone());
            }
        }

        // Clear any unused bars
        for bar_idx in visible.len()..self.pattern_bars.len() {
            if let Some(bar) = self.pattern_bars.get(bar_idx) {
                bar.set_length(0);
                bar.set_position(0);
                bar.set_message("");
                bar.set_prefix(String::new());
            }
        }
    }

    /// Number of patterns registered so far
    pub fn started(&self) -> usize {
        self.pattern_states
            .iter()
            .filter(|(name, _, _)| !name.is_empty())
            .count()
    }
}
