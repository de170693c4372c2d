//! Nested transaction layers.
//!
//! Each open transaction owns a [`Layer`]: a private overlay of per-key
//! changes stacked on top of the committed base map. Lookups walk the stack
//! from the innermost layer outwards; rollback discards one layer and commit
//! folds all of them into the base.

mod layer;

pub use layer::{Entry, Layer};
