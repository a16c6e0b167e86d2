//! Progress notification port
//!
//! Defines the interface for reporting progress during a conversion.

/// Callback for progress updates during a conversion
///
/// Implementations live in the presentation layer and are purely cosmetic:
/// they never influence what is written.
pub trait ConvertProgressNotifier: Send + Sync {
    /// Called before the dataset is read
    fn on_load_start(&self, source: &str);

    /// Called once the dataset is in memory
    fn on_load_complete(&self, total_records: usize);

    /// Called after each gold line is written (`index` is zero-based)
    fn on_record_written(&self, index: usize);

    /// Called after the gold file has been flushed
    fn on_complete(&self, records_written: usize);

    /// Called when the run aborts after `on_load_start`
    fn on_failed(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ConvertProgressNotifier for NoProgress {
    fn on_load_start(&self, _source: &str) {}
    fn on_load_complete(&self, _total_records: usize) {}
    fn on_record_written(&self, _index: usize) {}
    fn on_complete(&self, _records_written: usize) {}
}
