//! Lookup metrics for a translation registry.
//!
//! Counters are atomics so they can be updated from `&self` lookups.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters describing how a registry's lookups went.
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Number of table lookups attempted (empty keys excluded)
    lookups: AtomicUsize,

    /// Number of lookups that found a template
    hits: AtomicUsize,

    /// Number of lookups that found no template
    misses: AtomicUsize,

    /// Number of empty keys answered without a lookup
    empty_keys: AtomicUsize,
}

impl TranslationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_empty_key(&self) {
        self.empty_keys.fetch_add(1, Ordering::Relaxed);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn empty_keys(&self) -> usize {
        self.empty_keys.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.hits();
        let misses = self.misses();
        let total = hits + misses;
        let hit_rate = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups: self.lookups(),
            hits,
            misses,
            hit_rate,
            empty_keys: self.empty_keys(),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.lookups.store(0, Ordering::Relaxed);
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.empty_keys.store(0, Ordering::Relaxed);
    }
}

/// Snapshot of a registry's lookup statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub lookups: usize,
    pub hits: usize,
    pub misses: usize,

    /// Hit rate as a percentage (0-100)
    pub hit_rate: f64,

    pub empty_keys: usize,
}
