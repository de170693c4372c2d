//! End-to-end transaction scenarios against the public store API.

use simpledb_core::{Store, StoreError, TransactionId};

fn s(value: &str) -> String {
    value.to_string()
}

fn get(store: &Store, key: &str) -> Option<String> {
    store.get(key).cloned()
}

#[test]
fn set_outside_transaction_survives_unrelated_rollbacks() {
    let mut store: Store = Store::new();
    store.set(s("k"), s("v"));

    for _ in 0..3 {
        store.begin_transaction();
        store.set(s("other"), s("x"));
        store.rollback_transaction().unwrap();
    }

    assert_eq!(get(&store, "k"), Some(s("v")));
    assert_eq!(get(&store, "other"), None);
}

#[test]
fn rollback_restores_pre_begin_value() {
    let mut store: Store = Store::new();
    store.set(s("present"), s("old"));

    for key in ["present", "missing"] {
        let before = get(&store, key);
        store.begin_transaction();
        store.set(s(key), s("new"));
        store.rollback_transaction().unwrap();
        assert_eq!(get(&store, key), before);
    }
}

#[test]
fn nested_levels_unwind_in_order() {
    let mut store: Store = Store::new();
    store.set(s("k"), s("v1"));
    store.begin_transaction();
    store.set(s("k"), s("v2"));
    store.begin_transaction();
    store.set(s("k"), s("v3"));

    store.rollback_transaction().unwrap();
    assert_eq!(get(&store, "k"), Some(s("v2")));
    store.rollback_transaction().unwrap();
    assert_eq!(get(&store, "k"), Some(s("v1")));
}

#[test]
fn commit_flattens_every_level() {
    let mut store: Store = Store::new();
    store.begin_transaction();
    store.set(s("k"), s("v1"));
    store.begin_transaction();
    store.set(s("k"), s("v2"));

    store.commit_transactions();

    assert_eq!(get(&store, "k"), Some(s("v2")));
    assert_eq!(store.current_transaction_id(), None);
    assert_eq!(
        store.rollback_transaction(),
        Err(StoreError::NoActiveTransaction)
    );
}

#[test]
fn unset_hides_lower_value_until_rollback() {
    let mut store: Store = Store::new();
    store.set(s("k"), s("v"));
    store.begin_transaction();
    store.unset(s("k"));
    assert_eq!(get(&store, "k"), None);

    store.rollback_transaction().unwrap();
    assert_eq!(get(&store, "k"), Some(s("v")));
}

#[test]
fn rollback_on_empty_stack_never_mutates_base() {
    let mut store: Store = Store::new();
    store.set(s("a"), s("1"));
    store.set(s("b"), s("2"));

    for _ in 0..3 {
        assert_eq!(
            store.rollback_transaction(),
            Err(StoreError::NoActiveTransaction)
        );
    }

    assert_eq!(store.len(), 2);
    assert_eq!(get(&store, "a"), Some(s("1")));
    assert_eq!(get(&store, "b"), Some(s("2")));
    assert!(!store.in_transaction());
}

#[test]
fn scenario_nested_rollback_to_nothing() {
    let mut store: Store = Store::new();

    store.begin_transaction();
    store.set(s("a"), s("10"));
    assert_eq!(get(&store, "a"), Some(s("10")));

    store.begin_transaction();
    store.set(s("a"), s("20"));
    assert_eq!(get(&store, "a"), Some(s("20")));

    store.rollback_transaction().unwrap();
    assert_eq!(get(&store, "a"), Some(s("10")));

    store.rollback_transaction().unwrap();
    assert_eq!(get(&store, "a"), None);
}

#[test]
fn scenario_unset_rollback_then_commit() {
    let mut store: Store = Store::new();

    store.set(s("a"), s("50"));
    store.begin_transaction();
    assert_eq!(get(&store, "a"), Some(s("50")));
    store.set(s("a"), s("60"));

    store.begin_transaction();
    store.unset(s("a"));
    assert_eq!(get(&store, "a"), None);

    store.rollback_transaction().unwrap();
    assert_eq!(get(&store, "a"), Some(s("60")));

    store.commit_transactions();
    assert_eq!(get(&store, "a"), Some(s("60")));
    assert!(store.key_exists("a"));
}

#[test]
fn committed_unset_removes_key_from_base() {
    let mut store: Store = Store::new();
    store.set(s("a"), s("1"));
    store.begin_transaction();
    store.unset(s("a"));
    store.commit_transactions();

    assert!(!store.key_exists("a"));
    assert!(store.is_empty());
}

#[test]
fn key_exists_ignores_open_layers() {
    let mut store: Store = Store::new();
    store.set(s("a"), s("1"));
    store.begin_transaction();
    store.unset(s("a"));
    store.set(s("b"), s("2"));

    assert!(store.key_exists("a"));
    assert!(!store.key_exists("b"));
}

#[test]
fn ids_continue_after_commit() {
    let mut store: Store = Store::new();
    let first = store.begin_transaction();
    store.commit_transactions();
    let second = store.begin_transaction();

    assert_eq!(first, TransactionId::FIRST);
    assert_eq!(second, first.next());
}

#[test]
fn independent_stores_do_not_share_state() {
    let mut left: Store = Store::new();
    let mut right: Store = Store::new();

    left.set(s("a"), s("1"));
    let left_id = left.begin_transaction();
    let right_id = right.begin_transaction();

    assert_eq!(get(&right, "a"), None);
    assert_eq!(left_id, right_id);
}
