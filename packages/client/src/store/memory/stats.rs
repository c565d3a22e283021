//! Native call counters

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters of native calls served by a store
#[derive(Debug, Default)]
pub struct StoreStats {
    /// Total `fetch` calls
    pub fetches: AtomicU64,
    /// Total `apply` calls
    pub applies: AtomicU64,
    /// Calls of either kind that returned an error
    pub failures: AtomicU64,
}

/// Point-in-time copy of [`StoreStats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStatsSnapshot {
    pub fetches: u64,
    pub applies: u64,
    pub failures: u64,
}

impl StoreStatsSnapshot {
    /// Native calls of either kind
    #[must_use]
    pub fn round_trips(&self) -> u64 {
        self.fetches + self.applies
    }
}

impl StoreStats {
    pub fn record_fetch(&self) {
        self.fetches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_apply(&self) {
        self.applies.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn snapshot(&self) -> StoreStatsSnapshot {
        StoreStatsSnapshot {
            fetches: self.fetches.load(Ordering::Relaxed),
            applies: self.applies.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }
}
