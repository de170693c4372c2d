//! # SimpleDB Testkit
//!
//! Test utilities for SimpleDB.
//!
//! This crate provides:
//! - Property-based test generators using proptest
//! - A naive reference model of the layered store
//! - Fixtures and a differential runner comparing the two
//!
//! ## Usage
//!
//! ```rust
//! use simpledb_testkit::prelude::*;
//!
//! let ops = vec![StoreOperation::Begin, StoreOperation::Rollback];
//! run_differential(&ops).unwrap();
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod model;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::model::*;
}

pub use fixtures::*;
pub use generators::*;
pub use model::*;
