//! Run statistics.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters accumulated during one run.
///
/// Atomic so that fills within a chunk may run concurrently. Nothing here is
/// persisted; the counters are discarded when the process exits.
#[derive(Debug, Default)]
pub struct RunStats {
    total: AtomicU64,
    updated: AtomicU64,
    present: AtomicU64,
    skipped: AtomicU64,
    failed: AtomicU64,
}

impl RunStats {
    /// Create zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// A record was observed.
    pub fn add_total(&self) {
        self.total.fetch_add(1, Ordering::Relaxed);
    }

    /// A record was filled with placeholder bytes.
    pub fn add_updated(&self) {
        self.updated.fetch_add(1, Ordering::Relaxed);
    }

    /// A record already had bytes in storage.
    pub fn add_present(&self) {
        self.present.fetch_add(1, Ordering::Relaxed);
    }

    /// A record was left alone (dry-run, missing dimensions, fetch failure).
    pub fn add_skipped(&self) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
    }

    /// A record hit a per-item error.
    pub fn add_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Records observed so far.
    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    /// Records filled so far.
    pub fn updated(&self) -> u64 {
        self.updated.load(Ordering::Relaxed)
    }

    /// Point-in-time copy of every counter.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            total: self.total(),
            updated: self.updated(),
            present: self.present.load(Ordering::Relaxed),
            skipped: self.skipped.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of [`RunStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, derive_more::Display)]
#[display(
    "total={} updated={} present={} skipped={} failed={}",
    total,
    updated,
    present,
    skipped,
    failed
)]
pub struct RunSummary {
    /// Candidate records examined
    pub total: u64,
    /// Records successfully filled
    pub updated: u64,
    /// Records whose bytes already existed
    pub present: u64,
    /// Records skipped with an advisory
    pub skipped: u64,
    /// Records that hit a per-item error
    pub failed: u64,
}
