//! Progress reporting for conversion runs

use colored::Colorize;
use dpr_gold_application::ConvertProgressNotifier;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports conversion progress with a spinner while loading and a bar
/// while writing
pub struct ProgressReporter {
    draw_target: fn() -> ProgressDrawTarget,
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            draw_target: ProgressDrawTarget::stderr,
            bar: Mutex::new(None),
        }
    }

    /// Reporter that tracks progress without drawing anything
    pub fn hidden() -> Self {
        Self {
            draw_target: ProgressDrawTarget::hidden,
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} ({per_sec}) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn replace_bar(&self, bar: Option<ProgressBar>) -> Option<ProgressBar> {
        match self.bar.lock() {
            Ok(mut slot) => std::mem::replace(&mut *slot, bar),
            Err(_) => None,
        }
    }

    /// Current position and length of the active bar
    pub fn position(&self) -> Option<(u64, Option<u64>)> {
        let slot = self.bar.lock().ok()?;
        slot.as_ref().map(|pb| (pb.position(), pb.length()))
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Some(pb) = self.replace_bar(None) {
            if !pb.is_finished() {
                pb.finish_and_clear();
            }
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConvertProgressNotifier for ProgressReporter {
    fn on_load_start(&self, source: &str) {
        let pb = ProgressBar::with_draw_target(None, (self.draw_target)());
        pb.set_style(Self::spinner_style());
        pb.set_message(format!("Loading {}", source));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Some(previous) = self.replace_bar(Some(pb)) {
            previous.finish_and_clear();
        }
    }

    fn on_load_complete(&self, total_records: usize) {
        let pb = ProgressBar::with_draw_target(Some(total_records as u64), (self.draw_target)());
        pb.set_style(Self::bar_style());
        pb.set_prefix("Writing");

        if let Some(spinner) = self.replace_bar(Some(pb)) {
            spinner.finish_and_clear();
        }
    }

    fn on_record_written(&self, _index: usize) {
        if let Ok(slot) = self.bar.lock() {
            if let Some(pb) = slot.as_ref() {
                pb.inc(1);
            }
        }
    }

    fn on_complete(&self, records_written: usize) {
        if let Ok(slot) = self.bar.lock() {
            if let Some(pb) = slot.as_ref() {
                pb.finish_with_message(format!("{} {} records", "done".green(), records_written));
            }
        }
    }

    fn on_failed(&self) {
        if let Some(pb) = self.replace_bar(None) {
            pb.finish_and_clear();
        }
    }
}
