//! Client statistics

use std::sync::atomic::{AtomicU64, Ordering};

/// Document client counters
#[derive(Debug, Default)]
pub struct ClientStats {
    /// Public operations started
    pub operations: AtomicU64,
    /// Native store reads issued
    pub native_fetches: AtomicU64,
    /// Native store writes issued
    pub native_writes: AtomicU64,
    /// Advanced suffixes evaluated in memory
    pub evaluations: AtomicU64,
    /// Operations that returned an error
    pub failures: AtomicU64,
}

/// Point-in-time copy of [`ClientStats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientStatsSnapshot {
    pub operations: u64,
    pub native_fetches: u64,
    pub native_writes: u64,
    pub evaluations: u64,
    pub failures: u64,
}

impl ClientStats {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_operation(&self) {
        self.operations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fetch(&self) {
        self.native_fetches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_write(&self) {
        self.native_writes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_evaluation(&self) {
        self.evaluations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Create a snapshot of current statistics
    #[must_use]
    pub fn snapshot(&self) -> ClientStatsSnapshot {
        ClientStatsSnapshot {
            operations: self.operations.load(Ordering::Relaxed),
            native_fetches: self.native_fetches.load(Ordering::Relaxed),
            native_writes: self.native_writes.load(Ordering::Relaxed),
            evaluations: self.evaluations.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }
}
