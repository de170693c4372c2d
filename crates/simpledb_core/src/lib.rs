//! # SimpleDB Core
//!
//! In-memory key-value store with nested transactions.
//!
//! This crate provides:
//! - [`Store`], the committed base map plus a stack of transaction layers
//! - Tri-state [`Entry`] values so a layer can shadow or remove a key
//! - Monotonic [`TransactionId`]s owned by each store
//! - Operation counters via [`Store::stats`]
//! - [`SharedStore`], a mutex-guarded handle for multi-threaded hosts

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod shared;
mod stats;
mod store;
mod transaction;
mod types;

pub use error::{StoreError, StoreResult};
pub use shared::SharedStore;
pub use stats::{StatsSnapshot, StoreStats};
pub use store::{CommitSummary, Store};
pub use transaction::{Entry, Layer};
pub use types::TransactionId;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
