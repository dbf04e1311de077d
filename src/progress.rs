//! Scan progress display
//!
//! A spinner while Terraform files are detected, then a bar over the files
//! with a running module count. Hidden in quiet and JSON mode.

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";
const BAR_TEMPLATE: &str = "{spinner:.cyan} {prefix:.bold} [{bar:30.cyan/blue}] {pos}/{len} {wide_msg}";

/// Progress reporter for one scan
pub struct ScanProgress {
    enabled: bool,
    bar: Option<ProgressBar>,
    /// Modules extracted so far, counted even when hidden
    modules: usize,
}

impl ScanProgress {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            bar: None,
            modules: 0,
        }
    }

    pub fn hidden() -> Self {
        Self::new(false)
    }

    /// Spin while the directory tree is walked
    pub fn detecting(&mut self, dir: &Path) {
        if !self.enabled {
            return;
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template(SPINNER_TEMPLATE) {
            spinner.set_style(style);
        }
        spinner.set_message(format!("Looking for .tf files in {}", dir.display()));
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.bar = Some(spinner);
    }

    /// Replace the spinner with a bar over `file_count` files
    pub fn start_parsing(&mut self, file_count: usize) {
        self.clear();
        if !self.enabled || file_count == 0 {
            return;
        }

        let bar = ProgressBar::new(file_count as u64);
        if let Ok(style) = ProgressStyle::with_template(BAR_TEMPLATE) {
            bar.set_style(style.progress_chars("█▓░"));
        }
        bar.set_prefix("Parsing");
        self.bar = Some(bar);
    }

    /// Record one parsed file and the modules it declared
    pub fn file_parsed(&mut self, path: &Path, module_count: usize) {
        self.modules += module_count;
        if let Some(bar) = &self.bar {
            bar.set_message(format!(
                "{} ({} modules, {} total)",
                path.display(),
                module_count,
                self.modules
            ));
            bar.inc(1);
        }
    }

    /// Record a file that could not be extracted
    pub fn file_failed(&self, path: &Path) {
        if let Some(bar) = &self.bar {
            bar.set_message(format!("{} (failed)", path.display()));
            bar.inc(1);
        }
    }

    /// Total modules recorded with `file_parsed`
    pub fn modules_seen(&self) -> usize {
        self.modules
    }

    /// Leave a one-line tally of files and modules
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            let files = bar.length().unwrap_or(0);
            bar.finish_with_message(format!("{} modules in {} files", self.modules, files));
        }
    }

    fn clear(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
