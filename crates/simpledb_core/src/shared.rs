//! Thread-safe handle around a [`Store`].

use crate::store::Store;
use parking_lot::{Mutex, MutexGuard};
use std::hash::Hash;
use std::sync::Arc;

/// A cloneable handle that serializes all access to one [`Store`].
///
/// Layer lookups and commit/rollback are not internally synchronized, so a
/// host that shares a store across threads must hold a single lock around
/// every call. Each clone refers to the same store.
pub struct SharedStore<K = String, V = String> {
    inner: Arc<Mutex<Store<K, V>>>,
}

impl<K: Eq + Hash, V> SharedStore<K, V> {
    /// Creates a handle around an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::from_store(Store::new())
    }
}

impl<K, V> SharedStore<K, V> {
    /// Wraps an existing store.
    #[must_use]
    pub fn from_store(store: Store<K, V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Runs `f` with exclusive access to the store.
    ///
    /// The lock is held for the whole closure, so a sequence of operations
    /// inside it is never interleaved with another caller.
    pub fn with<R>(&self, f: impl FnOnce(&mut Store<K, V>) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }

    /// Locks the store and returns the guard.
    pub fn lock(&self) -> MutexGuard<'_, Store<K, V>> {
        self.inner.lock()
    }
}

impl<K, V> Clone for SharedStore<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: Eq + Hash, V> Default for SharedStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> std::fmt::Debug for SharedStore<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.inner.try_lock() {
            Some(store) => f.debug_tuple("SharedStore").field(&*store).finish(),
            None => f.debug_tuple("SharedStore").field(&"<locked>").finish(),
        }
    }
}
