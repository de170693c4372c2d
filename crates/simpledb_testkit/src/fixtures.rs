//! Test fixtures and store helpers.
//!
//! Provides a pre-populated store and a differential runner that replays an
//! operation sequence against both a real [`Store`] and the
//! [`ReferenceModel`].

use crate::generators::StoreOperation;
use crate::model::{Observation, ReferenceModel};
use simpledb_core::Store;
use std::fmt;

/// Key/value pairs loaded by [`seeded_store`].
pub const SEED: &[(&str, &str)] = &[
    ("one", "1"),
    ("ten", "10"),
    ("twenty", "20"),
    ("cat", "black"),
];

/// Creates a store holding [`SEED`] in its base, with no open transaction.
#[must_use]
pub fn seeded_store() -> Store {
    let mut store = Store::new();
    for (key, value) in SEED {
        store.set((*key).to_string(), (*value).to_string());
    }
    store
}

/// Applies one operation to a store and reports what it returned.
pub fn apply_to_store(store: &mut Store, op: &StoreOperation) -> Observation {
    match op {
        StoreOperation::Get { key } => Observation::Value(store.get(key.as_str()).cloned()),
        StoreOperation::Set { key, value } => {
            store.set(key.clone(), value.clone());
            Observation::Done
        }
        StoreOperation::Unset { key } => {
            store.unset(key.clone());
            Observation::Done
        }
        StoreOperation::KeyExists { key } => Observation::Exists(store.key_exists(key.as_str())),
        StoreOperation::Begin => Observation::Began(store.begin_transaction()),
        StoreOperation::Rollback => Observation::RolledBack(store.rollback_transaction()),
        StoreOperation::Commit => {
            store.commit_transactions();
            Observation::Done
        }
    }
}

/// The first step where the store and the model disagreed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Index of the offending operation.
    pub step: usize,
    /// The offending operation.
    pub op: StoreOperation,
    /// What the model reported.
    pub expected: String,
    /// What the store reported.
    pub actual: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "step {} ({}): expected {}, got {}",
            self.step, self.op, self.expected, self.actual
        )
    }
}

/// Replays `ops` against a fresh store and a fresh model.
///
/// After every step the returned observation, the open depth and the
/// current transaction ID must agree. Finally the committed base is checked
/// with [`check_committed`].
pub fn run_differential(ops: &[StoreOperation]) -> Result<Store, Mismatch> {
    let mut store = Store::new();
    let mut model = ReferenceModel::new();

    for (step, op) in ops.iter().enumerate() {
        let mismatch = |expected: String, actual: String| Mismatch {
            step,
            op: op.clone(),
            expected,
            actual,
        };

        let expected = model.apply(op);
        let actual = apply_to_store(&mut store, op);
        if expected != actual {
            return Err(mismatch(format!("{expected:?}"), format!("{actual:?}")));
        }

        let expected_state = (model.depth(), model.current_transaction_id());
        let actual_state = (store.depth(), store.current_transaction_id());
        if expected_state != actual_state {
            return Err(mismatch(
                format!("{expected_state:?}"),
                format!("{actual_state:?}"),
            ));
        }
    }

    check_committed(&store, &model, ops.len())?;

    Ok(store)
}

/// Compares the store's committed base with the model's.
///
/// Key membership and size are always compared. Values are compared through
/// `get` only when no transaction is open, since open layers shadow the base.
pub fn check_committed(store: &Store, model: &ReferenceModel, step: usize) -> Result<(), Mismatch> {
    let committed = model.committed();
    let mismatch = |expected: String, actual: String| Mismatch {
        step,
        op: StoreOperation::Commit,
        expected,
        actual,
    };

    if store.len() != committed.len() {
        return Err(mismatch(
            format!("{} committed keys", committed.len()),
            format!("{} committed keys", store.len()),
        ));
    }

    for (key, value) in committed {
        if !store.key_exists(key.as_str()) {
            return Err(mismatch(format!("{key} committed"), format!("{key} missing")));
        }
        if store.in_transaction() {
            continue;
        }
        let actual = store.get(key.as_str());
        if actual != Some(value) {
            return Err(mismatch(format!("{key}={value}"), format!("{key}={actual:?}")));
        }
    }

    Ok(())
}
