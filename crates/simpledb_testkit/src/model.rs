//! Naive reference model of the layered store.
//!
//! Instead of overlays, every `BEGIN` pushes a full copy of the current
//! effective map. Rollback pops the copy and commit replaces the committed
//! map with the innermost copy. Slow but obviously correct, which makes it a
//! good oracle for differential tests.

use crate::generators::StoreOperation;
use simpledb_core::{StoreError, TransactionId};
use std::collections::HashMap;

/// What an operation reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    /// Result of a `get`.
    Value(Option<String>),
    /// Result of a `key_exists`.
    Exists(bool),
    /// ID returned by `begin`.
    Began(TransactionId),
    /// Result of a `rollback`.
    RolledBack(Result<TransactionId, StoreError>),
    /// The operation returns nothing.
    Done,
}

/// Snapshot-stack implementation of the store semantics.
#[derive(Debug, Clone)]
pub struct ReferenceModel {
    committed: HashMap<String, String>,
    snapshots: Vec<(TransactionId, HashMap<String, String>)>,
    next_txid: u64,
}

impl Default for ReferenceModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceModel {
    /// Creates an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self {
            committed: HashMap::new(),
            snapshots: Vec::new(),
            next_txid: 1,
        }
    }

    fn view(&self) -> &HashMap<String, String> {
        self.snapshots
            .last()
            .map_or(&self.committed, |(_, snapshot)| snapshot)
    }

    fn view_mut(&mut self) -> &mut HashMap<String, String> {
        match self.snapshots.last_mut() {
            Some((_, snapshot)) => snapshot,
            None => &mut self.committed,
        }
    }

    /// Returns the ID of the innermost transaction.
    #[must_use]
    pub fn current_transaction_id(&self) -> Option<TransactionId> {
        self.snapshots.last().map(|(id, _)| *id)
    }

    /// Returns the number of open transactions.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns the committed map.
    #[must_use]
    pub fn committed(&self) -> &HashMap<String, String> {
        &self.committed
    }

    /// Applies one operation.
    pub fn apply(&mut self, op: &StoreOperation) -> Observation {
        match op {
            StoreOperation::Get { key } => Observation::Value(self.view().get(key).cloned()),
            StoreOperation::Set { key, value } => {
                self.view_mut().insert(key.clone(), value.clone());
                Observation::Done
            }
            StoreOperation::Unset { key } => {
                self.view_mut().remove(key);
                Observation::Done
            }
            StoreOperation::KeyExists { key } => {
                Observation::Exists(self.committed.contains_key(key))
            }
            StoreOperation::Begin => {
                let id = TransactionId::new(self.next_txid);
                self.next_txid += 1;
                let snapshot = self.view().clone();
                self.snapshots.push((id, snapshot));
                Observation::Began(id)
            }
            StoreOperation::Rollback => Observation::RolledBack(
                self.snapshots
                    .pop()
                    .map(|(id, _)| id)
                    .ok_or(StoreError::NoActiveTransaction),
            ),
            StoreOperation::Commit => {
                if let Some((_, snapshot)) = self.snapshots.pop() {
                    self.committed = snapshot;
                    self.snapshots.clear();
                }
                Observation::Done
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(key: &str, value: &str) -> StoreOperation {
        StoreOperation::Set {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    fn get(key: &str) -> StoreOperation {
        StoreOperation::Get {
            key: key.to_string(),
        }
    }

    #[test]
    fn begin_snapshots_current_view() {
        let mut model = ReferenceModel::new();
        model.apply(&set("a", "1"));
        model.apply(&StoreOperation::Begin);
        model.apply(&set("a", "2"));

        assert_eq!(model.apply(&get("a")), Observation::Value(Some("2".into())));
        assert_eq!(model.committed().get("a").map(String::as_str), Some("1"));
    }

    #[test]
    fn rollback_restores_snapshot() {
        let mut model = ReferenceModel::new();
        let begun = model.apply(&StoreOperation::Begin);
        model.apply(&set("a", "1"));
        let rolled = model.apply(&StoreOperation::Rollback);

        assert_eq!(begun, Observation::Began(TransactionId::FIRST));
        assert_eq!(rolled, Observation::RolledBack(Ok(TransactionId::FIRST)));
        assert_eq!(model.apply(&get("a")), Observation::Value(None));
    }

    #[test]
    fn rollback_on_empty_stack_fails() {
        let mut model = ReferenceModel::new();
        assert_eq!(
            model.apply(&StoreOperation::Rollback),
            Observation::RolledBack(Err(StoreError::NoActiveTransaction))
        );
    }

    #[test]
    fn commit_takes_innermost_view() {
        let mut model = ReferenceModel::new();
        model.apply(&set("a", "1"));
        model.apply(&StoreOperation::Begin);
        model.apply(&StoreOperation::Unset { key: "a".into() });
        model.apply(&StoreOperation::Begin);
        model.apply(&set("b", "2"));
        model.apply(&StoreOperation::Commit);

        assert_eq!(model.depth(), 0);
        assert_eq!(
            model.apply(&StoreOperation::KeyExists { key: "a".into() }),
            Observation::Exists(false)
        );
        assert_eq!(model.apply(&get("b")), Observation::Value(Some("2".into())));
    }
}
