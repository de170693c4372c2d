//! Transaction layer state.

use crate::types::TransactionId;
use std::borrow::Borrow;
use std::collections::hash_map;
use std::collections::HashMap;
use std::hash::Hash;

/// A per-key change recorded in a transaction layer.
///
/// A key that has no `Entry` in a layer is *absent* there and lookups fall
/// through to the layer below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry<V> {
    /// The key holds this value in the layer.
    Present(V),
    /// The key was removed in the layer. Shadows every layer below it.
    Tombstone,
}

impl<V> Entry<V> {
    /// Returns the value, or `None` for a tombstone.
    #[must_use]
    pub fn value(&self) -> Option<&V> {
        match self {
            Entry::Present(value) => Some(value),
            Entry::Tombstone => None,
        }
    }

    /// Checks if this entry is a tombstone.
    #[must_use]
    pub fn is_tombstone(&self) -> bool {
        matches!(self, Entry::Tombstone)
    }
}

/// An uncommitted overlay of changes bound to one transaction.
///
/// Layers are created empty by [`Store::begin_transaction`] and only the
/// innermost one is ever written.
///
/// [`Store::begin_transaction`]: crate::Store::begin_transaction
#[derive(Debug, Clone)]
pub struct Layer<K, V> {
    /// Transaction ID this layer is bound to.
    id: TransactionId,
    /// Recorded changes: key -> entry.
    entries: HashMap<K, Entry<V>>,
}

impl<K, V> Layer<K, V> {
    /// Creates an empty layer.
    pub(crate) fn new(id: TransactionId) -> Self {
        Self {
            id,
            entries: HashMap::new(),
        }
    }

    /// Returns the transaction ID.
    #[must_use]
    pub fn id(&self) -> TransactionId {
        self.id
    }

    /// Returns all recorded entries.
    pub fn entries(&self) -> impl Iterator<Item = (&K, &Entry<V>)> {
        self.entries.iter()
    }

    /// Returns the number of keys touched by this layer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the layer has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash, V> Layer<K, V> {
    /// Records a value for a key, replacing any earlier entry in this layer.
    pub(crate) fn put(&mut self, key: K, value: V) {
        self.entries.insert(key, Entry::Present(value));
    }

    /// Records a removal for a key.
    pub(crate) fn tombstone(&mut self, key: K) {
        self.entries.insert(key, Entry::Tombstone);
    }

    /// Gets the entry for a key, or `None` if the key is absent here.
    #[must_use]
    pub fn entry<Q>(&self, key: &Q) -> Option<&Entry<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }
}

impl<K, V> IntoIterator for Layer<K, V> {
    type Item = (K, Entry<V>);
    type IntoIter = hash_map::IntoIter<K, Entry<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
