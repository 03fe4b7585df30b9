//! Fingerprint-keyed cache of derived state.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use enchant_core::{EnchantState, ItemFingerprint};
use moka::sync::Cache;
use tracing::debug;

/// Observation counters for the state cache.
///
/// Uses atomics for lock-free access across threads. A miss count is also a
/// parse count: the parser runs exactly once per miss.
#[derive(Debug, Default)]
pub struct CacheMetrics {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CacheMetrics {
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }
}

/// Derived-state cache keyed by content fingerprint.
///
/// Entries expire after a fixed idle period without observation, so items
/// that stop circulating stop costing memory. Eviction is moka's
/// access-triggered sweep; nothing blocks.
pub struct StateCache {
    inner: Cache<ItemFingerprint, EnchantState>,
    metrics: Arc<CacheMetrics>,
}

impl StateCache {
    pub fn new(idle: Duration) -> Self {
        Self {
            inner: Cache::builder().time_to_idle(idle).build(),
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    /// Returns the cached state or derives it once. Racing callers for the
    /// same fingerprint converge on a single stored value.
    pub fn get_or_derive(
        &self,
        fingerprint: ItemFingerprint,
        derive: impl FnOnce() -> EnchantState,
    ) -> EnchantState {
        let mut missed = false;
        let state = self.inner.get_with(fingerprint, || {
            missed = true;
            derive()
        });
        if missed {
            self.metrics.record_miss();
        } else {
            self.metrics.record_hit();
        }
        state
    }

    /// Re-registers freshly serialized state under its fingerprint so the
    /// next observation sees it without a parse.
    pub fn force(&self, fingerprint: ItemFingerprint, state: EnchantState) {
        debug!(fingerprint = %fingerprint, "re-registering derived state");
        self.inner.insert(fingerprint, state);
    }

    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }
}
