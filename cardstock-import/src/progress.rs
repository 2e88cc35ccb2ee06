//! Import progress reporting.

/// Trait for receiving import progress updates.
pub trait ImportProgress {
    /// Called after each chunk of rows is committed.
    fn on_chunk(&self, inserted: usize, total: usize);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl ImportProgress for SilentProgress {
    fn on_chunk(&self, _inserted: usize, _total: usize) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl ImportProgress for LogProgress {
    fn on_chunk(&self, inserted: usize, total: usize) {
        log::info!("  [{}/{}] rows committed", inserted, total);
    }
}
