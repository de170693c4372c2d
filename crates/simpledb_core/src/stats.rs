//! Store statistics.
//!
//! Operation counters for a [`Store`](crate::Store). They are purely
//! observational: no data path reads them back.
//!
//! # Usage
//!
//! ```rust
//! use simpledb_core::Store;
//!
//! let mut store: Store = Store::new();
//! store.set("a".to_string(), "1".to_string());
//! let _ = store.get("a");
//!
//! let stats = store.stats();
//! assert_eq!(stats.reads, 1);
//! assert_eq!(stats.writes, 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Store operation counters.
///
/// Counters are atomics so that read paths taking `&self` can record
/// themselves. All values are monotonically increasing.
#[derive(Debug, Default)]
pub struct StoreStats {
    // Operation counters
    /// Total number of `get` calls.
    reads: AtomicU64,
    /// Total number of `set` calls.
    writes: AtomicU64,
    /// Total number of `unset` calls.
    unsets: AtomicU64,

    // Transaction counters
    /// Total number of transactions begun.
    transactions_begun: AtomicU64,
    /// Total number of layers folded into the base by commits.
    transactions_committed: AtomicU64,
    /// Total number of layers discarded by rollbacks.
    transactions_rolled_back: AtomicU64,
    /// Total number of commit calls, including no-op ones.
    commits: AtomicU64,

    // Error counters
    /// Total number of rollbacks attempted with no open transaction.
    invalid_rollbacks: AtomicU64,
}

impl StoreStats {
    /// Creates a new stats instance.
    pub fn new() -> Self {
        Self::default()
    }

    // === Increment methods (internal use) ===

    pub(crate) fn record_read(&self) {
        self.reads.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_unset(&self) {
        self.unsets.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_begin(&self) {
        self.transactions_begun.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_rollback(&self) {
        self.transactions_rolled_back.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_invalid_rollback(&self) {
        self.invalid_rollbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a commit call that folded `layers` layers.
    pub(crate) fn record_commit(&self, layers: u64) {
        self.commits.fetch_add(1, Ordering::Relaxed);
        self.transactions_committed.fetch_add(layers, Ordering::Relaxed);
    }

    // === Getter methods (public API) ===

    /// Returns the total number of reads.
    pub fn reads(&self) -> u64 {
        self.reads.load(Ordering::Relaxed)
    }

    /// Returns the total number of writes.
    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }

    /// Returns the total number of unsets.
    pub fn unsets(&self) -> u64 {
        self.unsets.load(Ordering::Relaxed)
    }

    /// Returns the total number of transactions begun.
    pub fn transactions_begun(&self) -> u64 {
        self.transactions_begun.load(Ordering::Relaxed)
    }

    /// Returns the total number of transactions folded into the base.
    pub fn transactions_committed(&self) -> u64 {
        self.transactions_committed.load(Ordering::Relaxed)
    }

    /// Returns the total number of transactions rolled back.
    pub fn transactions_rolled_back(&self) -> u64 {
        self.transactions_rolled_back.load(Ordering::Relaxed)
    }

    /// Returns the total number of commit calls.
    pub fn commits(&self) -> u64 {
        self.commits.load(Ordering::Relaxed)
    }

    /// Returns the total number of rejected rollbacks.
    pub fn invalid_rollbacks(&self) -> u64 {
        self.invalid_rollbacks.load(Ordering::Relaxed)
    }

    /// Returns a snapshot of all stats.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            reads: self.reads(),
            writes: self.writes(),
            unsets: self.unsets(),
            transactions_begun: self.transactions_begun(),
            transactions_committed: self.transactions_committed(),
            transactions_rolled_back: self.transactions_rolled_back(),
            commits: self.commits(),
            invalid_rollbacks: self.invalid_rollbacks(),
        }
    }
}

/// A point-in-time snapshot of store statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    /// Total number of reads.
    pub reads: u64,
    /// Total number of writes.
    pub writes: u64,
    /// Total number of unsets.
    pub unsets: u64,
    /// Total number of transactions begun.
    pub transactions_begun: u64,
    /// Total number of transactions folded into the base.
    pub transactions_committed: u64,
    /// Total number of transactions rolled back.
    pub transactions_rolled_back: u64,
    /// Total number of commit calls.
    pub commits: u64,
    /// Total number of rejected rollbacks.
    pub invalid_rollbacks: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stats_are_zero() {
        let stats = StoreStats::new();
        assert_eq!(stats.snapshot(), StatsSnapshot::default());
    }

    #[test]
    fn record_operations() {
        let stats = StoreStats::new();

        stats.record_read();
        stats.record_read();
        stats.record_write();
        stats.record_unset();

        assert_eq!(stats.reads(), 2);
        assert_eq!(stats.writes(), 1);
        assert_eq!(stats.unsets(), 1);
    }

    #[test]
    fn record_transactions() {
        let stats = StoreStats::new();

        stats.record_begin();
        stats.record_begin();
        stats.record_begin();
        stats.record_rollback();
        stats.record_commit(2);
        stats.record_commit(0);
        stats.record_invalid_rollback();

        let snap = stats.snapshot();
        assert_eq!(snap.transactions_begun, 3);
        assert_eq!(snap.transactions_rolled_back, 1);
        assert_eq!(snap.transactions_committed, 2);
        assert_eq!(snap.commits, 2);
        assert_eq!(snap.invalid_rollbacks, 1);
    }
}
