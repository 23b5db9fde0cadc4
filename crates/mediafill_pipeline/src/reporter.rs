//! Progress reporters.

use mediafill_core::RunSummary;
use mediafill_interface::ProgressReporter;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Reports through `tracing`: progress and summary at info, advisories at warn.
#[derive(Debug, Default)]
pub struct TracingReporter {
    processed: AtomicU64,
}

impl TracingReporter {
    /// Create a reporter with a zeroed progress count.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for TracingReporter {
    fn report_progress(&self, increment: u64) {
        let processed = self.processed.fetch_add(increment, Ordering::Relaxed) + increment;
        tracing::info!(processed, "Progress");
    }

    fn report_advisory(&self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn report_summary(&self, summary: &RunSummary) {
        tracing::info!(
            total = summary.total,
            updated = summary.updated,
            present = summary.present,
            skipped = summary.skipped,
            failed = summary.failed,
            "Backfill complete"
        );
    }
}

/// Captures every call for later inspection (for testing).
#[derive(Debug, Default)]
pub struct RecordingReporter {
    progress: Mutex<Vec<u64>>,
    advisories: Mutex<Vec<String>>,
    summaries: Mutex<Vec<RunSummary>>,
}

impl RecordingReporter {
    /// Create an empty reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Progress increments, in call order.
    pub fn progress(&self) -> Vec<u64> {
        self.progress.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Advisory messages, in call order.
    pub fn advisories(&self) -> Vec<String> {
        self.advisories.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Reported summaries, in call order.
    pub fn summaries(&self) -> Vec<RunSummary> {
        self.summaries.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl ProgressReporter for RecordingReporter {
    fn report_progress(&self, increment: u64) {
        self.progress
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(increment);
    }

    fn report_advisory(&self, message: &str) {
        self.advisories
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.to_string());
    }

    fn report_summary(&self, summary: &RunSummary) {
        self.summaries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(*summary);
    }
}
