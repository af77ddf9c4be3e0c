// src/progress.rs
use crate::data::Series;

/// Lightweight progress reporting for a run.
/// Frontends implement this to surface per-series status to users.
pub trait Progress {
    /// Called once discovery is done, with the number of series to process.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A series contributed markup (live, cached, or stale fallback).
    fn item_done(&mut self, _series: &Series) {}

    /// A series was skipped.
    fn item_failed(&mut self, _series: &Series, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
