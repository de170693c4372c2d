//! The layered store.

use crate::error::{StoreError, StoreResult};
use crate::stats::{StatsSnapshot, StoreStats};
use crate::transaction::{Entry, Layer};
use crate::types::TransactionId;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::{debug, warn};

/// Outcome of [`Store::commit_transactions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommitSummary {
    /// Number of transaction layers folded into the base.
    pub layers: usize,
    /// Number of value entries written into the base.
    pub applied: usize,
    /// Number of tombstones applied as deletions.
    pub removed: usize,
}

impl CommitSummary {
    /// Checks if the commit had nothing to fold.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.layers == 0
    }
}

/// An in-memory key-value store with nested transactions.
///
/// The store owns a committed base map and a stack of transaction
/// [`Layer`]s, oldest at the bottom. Writes always target the innermost
/// layer, or the base when no transaction is open. Reads walk the stack
/// from the innermost layer outwards and fall through to the base.
///
/// ## Transactions
///
/// - [`begin_transaction`](Self::begin_transaction) pushes an empty layer.
/// - [`rollback_transaction`](Self::rollback_transaction) discards the
///   innermost layer only.
/// - [`commit_transactions`](Self::commit_transactions) folds every layer
///   into the base and closes all of them at once.
///
/// # Example
///
/// ```rust
/// use simpledb_core::Store;
///
/// let mut store: Store = Store::new();
/// store.set("a".to_string(), "10".to_string());
///
/// store.begin_transaction();
/// store.set("a".to_string(), "20".to_string());
/// assert_eq!(store.get("a").map(String::as_str), Some("20"));
///
/// store.rollback_transaction()?;
/// assert_eq!(store.get("a").map(String::as_str), Some("10"));
/// # Ok::<(), simpledb_core::StoreError>(())
/// ```
pub struct Store<K = String, V = String> {
    /// Committed state.
    base: HashMap<K, V>,
    /// Open transactions, innermost last.
    layers: Vec<Layer<K, V>>,
    /// Next transaction ID to hand out.
    next_txid: TransactionId,
    /// Operation counters.
    stats: StoreStats,
}

impl<K: Eq + Hash, V> Store<K, V> {
    /// Creates an empty store with no open transaction.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: HashMap::new(),
            layers: Vec::new(),
            next_txid: TransactionId::FIRST,
            stats: StoreStats::new(),
        }
    }

    /// Gets the effective value of a key.
    ///
    /// The innermost layer with an entry for `key` decides: a tombstone
    /// yields `None`, a value is returned as is. If no layer mentions the
    /// key the base is consulted.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.stats.record_read();

        for layer in self.layers.iter().rev() {
            if let Some(entry) = layer.entry(key) {
                return entry.value();
            }
        }

        self.base.get(key)
    }

    /// Sets a value.
    ///
    /// Inside a transaction only the innermost layer is written; outer
    /// layers and the base are shadowed, not modified.
    pub fn set(&mut self, key: K, value: V) {
        self.stats.record_write();

        match self.layers.last_mut() {
            Some(layer) => layer.put(key, value),
            None => {
                self.base.insert(key, value);
            }
        }
    }

    /// Removes a key.
    ///
    /// Inside a transaction this records a tombstone in the innermost
    /// layer. Outside one the key is deleted from the base.
    pub fn unset(&mut self, key: K) {
        self.stats.record_unset();

        match self.layers.last_mut() {
            Some(layer) => layer.tombstone(key),
            None => {
                self.base.remove(&key);
            }
        }
    }

    /// Checks whether the committed base holds `key`.
    ///
    /// Open layers are ignored. Use [`get`](Self::get) for the
    /// transaction-aware view.
    #[must_use]
    pub fn key_exists<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.base.contains_key(key)
    }

    /// Opens a new innermost transaction and returns its ID.
    pub fn begin_transaction(&mut self) -> TransactionId {
        let txid = self.next_txid;
        self.next_txid = txid.next();
        self.layers.push(Layer::new(txid));
        self.stats.record_begin();

        debug!(%txid, depth = self.layers.len(), "transaction begun");
        txid
    }

    /// Discards the innermost transaction and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoActiveTransaction`] if no transaction is
    /// open. The store is left untouched in that case.
    pub fn rollback_transaction(&mut self) -> StoreResult<TransactionId> {
        let Some(layer) = self.layers.pop() else {
            self.stats.record_invalid_rollback();
            warn!("rollback requested with no active transaction");
            return Err(StoreError::NoActiveTransaction);
        };

        self.stats.record_rollback();
        let txid = layer.id();
        debug!(
            %txid,
            discarded = layer.len(),
            depth = self.layers.len(),
            "transaction rolled back"
        );
        Ok(txid)
    }

    /// Folds every open transaction into the base, oldest first, and closes
    /// them all.
    ///
    /// Values overwrite the base; tombstones delete the key from it. With
    /// no open transaction this is a no-op.
    pub fn commit_transactions(&mut self) -> CommitSummary {
        let layers = std::mem::take(&mut self.layers);
        let mut summary = CommitSummary {
            layers: layers.len(),
            ..CommitSummary::default()
        };

        for layer in layers {
            for (key, entry) in layer {
                match entry {
                    Entry::Present(value) => {
                        self.base.insert(key, value);
                        summary.applied += 1;
                    }
                    Entry::Tombstone => {
                        self.base.remove(&key);
                        summary.removed += 1;
                    }
                }
            }
        }

        self.stats.record_commit(summary.layers as u64);
        if !summary.is_noop() {
            debug!(
                layers = summary.layers,
                applied = summary.applied,
                removed = summary.removed,
                "transactions committed"
            );
        }
        summary
    }
}

impl<K, V> Store<K, V> {
    /// Returns the ID of the innermost open transaction.
    #[must_use]
    pub fn current_transaction_id(&self) -> Option<TransactionId> {
        self.layers.last().map(Layer::id)
    }

    /// Checks if any transaction is open.
    #[must_use]
    pub fn in_transaction(&self) -> bool {
        !self.layers.is_empty()
    }

    /// Returns the number of open transactions.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Returns the open layers, outermost first.
    pub fn layers(&self) -> impl Iterator<Item = &Layer<K, V>> {
        self.layers.iter()
    }

    /// Returns the number of keys in the committed base.
    #[must_use]
    pub fn len(&self) -> usize {
        self.base.len()
    }

    /// Checks if the committed base is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Returns a snapshot of the operation counters.
    #[must_use]
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}

impl<K: Eq + Hash, V> Default for Store<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> std::fmt::Debug for Store<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("len", &self.len())
            .field("depth", &self.depth())
            .field("current_transaction_id", &self.current_transaction_id())
            .finish_non_exhaustive()
    }
}
