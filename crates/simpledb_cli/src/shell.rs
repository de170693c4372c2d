//! Read-eval-print loop over a [`Store`].

use crate::command::Command;
use crate::config::ShellConfig;
use simpledb_core::{Store, StoreError};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::debug;

/// Printed by `GET` when the key has no value.
pub const NULL: &str = "NULL";

/// Printed by `COMMIT`.
pub const COMMITTED: &str = "COMMITTED";

/// Printed by `ROLLBACK` when no transaction is open.
pub const INVALID_ROLLBACK: &str = "INVALID ROLLBACK";

/// Printed for any line that does not parse.
pub const USAGE: &str = "Unknown command, type EXIT to quit.";

/// Errors that stop the shell loop.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result of executing one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this line and continue.
    Print(String),
    /// Print nothing and continue.
    Silent,
    /// Leave the loop.
    Exit,
}

/// An interactive session bound to one store.
#[derive(Debug)]
pub struct Shell {
    store: Store,
    config: ShellConfig,
}

impl Shell {
    /// Creates a shell over a fresh, empty store.
    #[must_use]
    pub fn new(config: ShellConfig) -> Self {
        Self::with_store(Store::new(), config)
    }

    /// Creates a shell over an existing store.
    #[must_use]
    pub fn with_store(store: Store, config: ShellConfig) -> Self {
        Self { store, config }
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Consumes the shell and returns the store.
    #[must_use]
    pub fn into_store(self) -> Store {
        self.store
    }

    /// Returns the banner line.
    #[must_use]
    pub fn banner() -> String {
        format!(
            "SimpleDB command line interface v{}",
            env!("CARGO_PKG_VERSION")
        )
    }

    /// Executes a single command against the store.
    pub fn execute(&mut self, command: Command) -> Outcome {
        debug!(%command, "executing");

        match command {
            Command::Get { key } => {
                let value = self.store.get(key.as_str());
                Outcome::Print(value.map_or_else(|| NULL.to_string(), Clone::clone))
            }
            Command::Set { key, value } => {
                let echo = value.clone();
                self.store.set(key, value);
                Outcome::Print(echo)
            }
            Command::Unset { key } => {
                self.store.unset(key);
                Outcome::Silent
            }
            Command::Begin => Outcome::Print(self.store.begin_transaction().to_string()),
            Command::Commit => {
                let summary = self.store.commit_transactions();
                debug!(
                    layers = summary.layers,
                    applied = summary.applied,
                    removed = summary.removed,
                    "commit"
                );
                Outcome::Print(COMMITTED.to_string())
            }
            Command::Rollback => match self.store.rollback_transaction() {
                Ok(txid) => Outcome::Print(txid.to_string()),
                Err(StoreError::NoActiveTransaction) => {
                    Outcome::Print(INVALID_ROLLBACK.to_string())
                }
            },
            Command::Exit => Outcome::Exit,
            Command::Empty => Outcome::Silent,
        }
    }

    /// Parses and executes one input line.
    pub fn execute_line(&mut self, line: &str) -> Outcome {
        match Command::parse(line) {
            Ok(command) => self.execute(command),
            Err(err) => {
                debug!(%err, "rejected input");
                Outcome::Print(USAGE.to_string())
            }
        }
    }

    /// Runs the loop until `EXIT` or end of input.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::Io`] if reading or writing fails.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<(), ShellError> {
        if self.config.show_banner {
            writeln!(output, "{}", Self::banner())?;
        }

        let mut line = String::new();
        loop {
            if self.config.show_prompt {
                write!(output, "{}", self.config.prompt)?;
                output.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("end of input");
                break;
            }

            match self.execute_line(&line) {
                Outcome::Print(text) => writeln!(output, "{text}")?,
                Outcome::Silent => {}
                Outcome::Exit => break,
            }
        }

        output.flush()?;
        Ok(())
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}
