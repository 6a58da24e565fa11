//! Terminal progress for batch generation
//!
//! Small batches get one bar per file counting collapsed pixels. Batches
//! larger than `MAX_INDIVIDUAL_PROGRESS_BARS` add an overall file counter and
//! reuse the per-file bars as a rolling window over the most recent files.

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static CANVAS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>20} [{bar:30.green/white}] {pos}/{len} px")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓░")
});

static FILES_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Samples: [{bar:40.green/white}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

#[derive(Debug, Clone, Default)]
struct FileState {
    label: String,
    collapsed: usize,
    area: usize,
}

/// Coordinates progress display across a batch of samples
pub struct ProgressManager {
    multi_progress: MultiProgress,
    files_bar: Option<ProgressBar>,
    canvas_bars: Vec<ProgressBar>,
    states: Vec<FileState>,
    file_count: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            files_bar: None,
            canvas_bars: Vec::new(),
            states: Vec::new(),
            file_count: 0,
        }
    }

    /// Create bars for a batch of `file_count` samples
    pub fn initialize(&mut self, file_count: usize) {
        self.file_count = file_count;

        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let files_bar = ProgressBar::new(file_count as u64).with_style(FILES_STYLE.clone());
            self.files_bar = Some(self.multi_progress.add(files_bar));
        }

        self.canvas_bars = (0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS))
            .map(|_| {
                self.multi_progress
                    .add(ProgressBar::new(0).with_style(CANVAS_STYLE.clone()))
            })
            .collect();
    }

    /// Number of files announced through `initialize`
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    /// Begin tracking file `index`, whose canvas has `area` pixels
    pub fn start_file(&mut self, index: usize, path: &Path, area: usize) {
        if index >= self.states.len() {
            self.states.resize_with(index + 1, FileState::default);
        }
        if let Some(state) = self.states.get_mut(index) {
            *state = FileState {
                label: path
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .into_owned(),
                collapsed: 0,
                area,
            };
        }
        self.redraw();
    }

    /// Report how many pixels of file `index` are collapsed so far
    pub fn update_collapsed(&mut self, index: usize, collapsed: usize) {
        if let Some(state) = self.states.get_mut(index) {
            state.collapsed = collapsed.min(state.area);
        }
        self.redraw();
    }

    /// Mark file `index` as written
    pub fn complete_file(&mut self, index: usize) {
        if let Some(ref files_bar) = self.files_bar {
            files_bar.inc(1);
        }
        if let Some(state) = self.states.get_mut(index) {
            state.label = format!("✓ {}", state.label);
            state.collapsed = state.area;
        }
        self.redraw();
    }

    /// Remove all bars from the terminal
    pub fn finish(&self) {
        if let Some(ref files_bar) = self.files_bar {
            files_bar.finish();
        }
        let _ = self.multi_progress.clear();
    }

    // Show the most recently started files, oldest first
    fn redraw(&self) {
        let started: Vec<&FileState> = self
            .states
            .iter()
            .filter(|state| !state.label.is_empty())
            .collect();
        let window = started
            .get(started.len().saturating_sub(self.canvas_bars.len())..)
            .unwrap_or(&[]);

        for (slot, bar) in self.canvas_bars.iter().enumerate() {
            if let Some(state) = window.get(slot) {
                bar.set_length(state.area as u64);
                bar.set_position(state.collapsed as u64);
                bar.set_prefix(state.label.clone());
            } else {
                bar.set_length(0);
                bar.set_position(0);
                bar.set_prefix(String::new());
            }
        }
    }
}
