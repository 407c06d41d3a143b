//! Cache Metrics Module
//!
//! Tracks cache performance counters: hits, misses, stored responses, and
//! invalidated keys. Shared across request tasks, so counters are atomic
//! and the handle is a cheap clone.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;

// == Cache Metrics ==
/// Shared handle to the cache counters.
#[derive(Debug, Clone, Default)]
pub struct CacheMetrics {
    inner: Arc<Counters>,
}

#[derive(Debug, Default)]
struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
    stored: AtomicU64,
    invalidated: AtomicU64,
}

impl CacheMetrics {
    // == Constructor ==
    /// Creates a new CacheMetrics with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&self) {
        self.inner.hits.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&self) {
        self.inner.misses.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Store ==
    /// Increments the stored-responses counter.
    pub fn record_store(&self) {
        self.inner.stored.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Invalidation ==
    /// Adds `keys` to the invalidated-keys counter.
    pub fn record_invalidated(&self, keys: u64) {
        self.inner.invalidated.fetch_add(keys, Ordering::Relaxed);
    }

    // == Snapshot ==
    /// Returns a point-in-time copy of all counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            hits: self.inner.hits.load(Ordering::Relaxed),
            misses: self.inner.misses.load(Ordering::Relaxed),
            stored: self.inner.stored.load(Ordering::Relaxed),
            invalidated: self.inner.invalidated.load(Ordering::Relaxed),
        }
    }
}

// == Metrics Snapshot ==
/// Point-in-time counter values.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    /// Number of requests served from cache
    pub hits: u64,
    /// Number of requests that fell through to the handler
    pub misses: u64,
    /// Number of responses written to the store
    pub stored: u64,
    /// Number of keys removed by invalidation
    pub invalidated: u64,
}

impl MetricsSnapshot {
    // == Hit Rate ==
    /// Calculates hits / (hits + misses), or 0.0 with no lookups yet.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
