//! End-of-session statistics report.

use clap::ValueEnum;
use serde::Serialize;
use simpledb_core::Store;
use std::fmt::Write as _;

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Session statistics.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    /// Keys in the committed base.
    pub keys: usize,
    /// Transactions still open when the session ended.
    pub open_transactions: usize,
    /// Number of `GET`s.
    pub reads: u64,
    /// Number of `SET`s.
    pub writes: u64,
    /// Number of `UNSET`s.
    pub unsets: u64,
    /// Transactions begun.
    pub transactions_begun: u64,
    /// Transactions folded into the base.
    pub transactions_committed: u64,
    /// Transactions rolled back.
    pub transactions_rolled_back: u64,
    /// `COMMIT`s issued.
    pub commits: u64,
    /// `ROLLBACK`s rejected because nothing was open.
    pub invalid_rollbacks: u64,
}

impl StatsReport {
    /// Builds a report from the store's current state.
    #[must_use]
    pub fn from_store(store: &Store) -> Self {
        let stats = store.stats();
        Self {
            keys: store.len(),
            open_transactions: store.depth(),
            reads: stats.reads,
            writes: stats.writes,
            unsets: stats.unsets,
            transactions_begun: stats.transactions_begun,
            transactions_committed: stats.transactions_committed,
            transactions_rolled_back: stats.transactions_rolled_back,
            commits: stats.commits,
            invalid_rollbacks: stats.invalid_rollbacks,
        }
    }

    /// Renders the report.
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(self),
            OutputFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Session Statistics");
        let _ = writeln!(out, "==================");
        let _ = writeln!(out, "Keys:                  {}", self.keys);
        let _ = writeln!(out, "Open transactions:     {}", self.open_transactions);
        let _ = writeln!(out);
        let _ = writeln!(out, "Reads:                 {}", self.reads);
        let _ = writeln!(out, "Writes:                {}", self.writes);
        let _ = writeln!(out, "Unsets:                {}", self.unsets);
        let _ = writeln!(out);
        let _ = writeln!(out, "Transactions begun:    {}", self.transactions_begun);
        let _ = writeln!(out, "  committed:           {}", self.transactions_committed);
        let _ = writeln!(out, "  rolled back:         {}", self.transactions_rolled_back);
        let _ = writeln!(out, "Commits:               {}", self.commits);
        let _ = write!(out, "Invalid rollbacks:     {}", self.invalid_rollbacks);
        out
    }
}
