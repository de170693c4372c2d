//! Property-based test generators using proptest.
//!
//! Keys are drawn from a tiny alphabet so that random sequences keep
//! hitting the same keys across layers.

use proptest::prelude::*;
use std::fmt;

/// Strategy for generating keys.
pub fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]").expect("Invalid regex")
}

/// Strategy for generating values.
pub fn value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9]{1,3}").expect("Invalid regex")
}

/// A single store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOperation {
    /// Read a key.
    Get {
        /// Key
        key: String,
    },
    /// Write a key.
    Set {
        /// Key
        key: String,
        /// Value
        value: String,
    },
    /// Remove a key.
    Unset {
        /// Key
        key: String,
    },
    /// Check base membership of a key.
    KeyExists {
        /// Key
        key: String,
    },
    /// Open a transaction.
    Begin,
    /// Discard the innermost transaction.
    Rollback,
    /// Commit every open transaction.
    Commit,
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreOperation::Get { key } => write!(f, "GET {key}"),
            StoreOperation::Set { key, value } => write!(f, "SET {key} {value}"),
            StoreOperation::Unset { key } => write!(f, "UNSET {key}"),
            StoreOperation::KeyExists { key } => write!(f, "EXISTS {key}"),
            StoreOperation::Begin => f.write_str("BEGIN"),
            StoreOperation::Rollback => f.write_str("ROLLBACK"),
            StoreOperation::Commit => f.write_str("COMMIT"),
        }
    }
}

/// Strategy for generating store operations.
///
/// Rollbacks are weighted so that empty-stack rollbacks happen regularly.
pub fn store_operation_strategy() -> impl Strategy<Value = StoreOperation> {
    prop_oneof![
        4 => (key_strategy(), value_strategy())
            .prop_map(|(key, value)| StoreOperation::Set { key, value }),
        2 => key_strategy().prop_map(|key| StoreOperation::Unset { key }),
        3 => key_strategy().prop_map(|key| StoreOperation::Get { key }),
        1 => key_strategy().prop_map(|key| StoreOperation::KeyExists { key }),
        2 => Just(StoreOperation::Begin),
        2 => Just(StoreOperation::Rollback),
        1 => Just(StoreOperation::Commit),
    ]
}

/// Strategy for generating a sequence of operations.
pub fn operation_sequence_strategy(
    min_ops: usize,
    max_ops: usize,
) -> impl Strategy<Value = Vec<StoreOperation>> {
    prop::collection::vec(store_operation_strategy(), min_ops..max_ops)
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #![proptest_config(PropTestConfig::quick().to_proptest_config())]

        #[test]
        fn key_is_single_letter(key in key_strategy()) {
            prop_assert_eq!(key.len(), 1);
        }

        #[test]
        fn value_is_numeric(value in value_strategy()) {
            prop_assert!(!value.is_empty());
            prop_assert!(value.chars().all(|c| c.is_ascii_digit()));
        }

        #[test]
        fn sequence_length_in_range(ops in operation_sequence_strategy(5, 20)) {
            prop_assert!(ops.len() >= 5 && ops.len() < 20);
        }
    }

    #[test]
    fn display_uses_shell_syntax() {
        let op = StoreOperation::Set {
            key: "a".to_string(),
            value: "1".to_string(),
        };
        assert_eq!(op.to_string(), "SET a 1");
        assert_eq!(StoreOperation::Rollback.to_string(), "ROLLBACK");
    }
}
