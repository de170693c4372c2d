//! Error types for SimpleDB core.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
///
/// Every operation except [`Store::rollback_transaction`] is total, so this
/// enum has a single variant.
///
/// [`Store::rollback_transaction`]: crate::Store::rollback_transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Rollback was requested while no transaction was open.
    #[error("no active transaction")]
    NoActiveTransaction,
}
