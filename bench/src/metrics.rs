//! Metrics collection module

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics collector for the workload driver
///
/// Shared across worker threads; every counter is a relaxed atomic since
/// the report only reads them after the workers have been joined.
pub struct Metrics {
    ops_count: AtomicU64,
    misses: AtomicU64,
    latency_sum: AtomicU64,
    latency_max: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            ops_count: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            latency_sum: AtomicU64::new(0),
            latency_max: AtomicU64::new(0),
        }
    }

    pub fn record_op(&self, latency_ns: u64) {
        self.ops_count.fetch_add(1, Ordering::Relaxed);
        self.latency_sum.fetch_add(latency_ns, Ordering::Relaxed);

        let mut current = self.latency_max.load(Ordering::Relaxed);
        while latency_ns > current {
            match self.latency_max.compare_exchange(
                current,
                latency_ns,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => break,
                Err(v) => current = v,
            }
        }
    }

    /// Record an operation that targeted a key with no entry
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn total_ops(&self) -> u64 {
        self.ops_count.load(Ordering::Relaxed)
    }

    pub fn total_misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn total_latency_ns(&self) -> u64 {
        self.latency_sum.load(Ordering::Relaxed)
    }

    pub fn max_latency_ns(&self) -> u64 {
        self.latency_max.load(Ordering::Relaxed)
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
