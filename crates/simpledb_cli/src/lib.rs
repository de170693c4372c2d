//! # SimpleDB CLI
//!
//! Line-oriented command shell for a SimpleDB store.
//!
//! The shell understands `GET key`, `SET key value`, `UNSET key`, `BEGIN`,
//! `COMMIT`, `ROLLBACK` and `EXIT`. Each line maps onto one
//! [`simpledb_core::Store`] operation.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod command;
pub mod config;
pub mod report;
pub mod shell;

pub use command::{Command, ParseError};
pub use config::ShellConfig;
pub use report::{OutputFormat, StatsReport};
pub use shell::{Outcome, Shell, ShellError};
