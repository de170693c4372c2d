//! SimpleDB CLI
//!
//! Interactive shell for an in-memory SimpleDB store.
//!
//! # Commands
//!
//! - `GET key` - Print the value of a key, or `NULL`
//! - `SET key value` - Set a key
//! - `UNSET key` - Remove a key
//! - `BEGIN` - Open a nested transaction
//! - `ROLLBACK` - Discard the innermost transaction
//! - `COMMIT` - Apply all open transactions
//! - `EXIT` - Quit

use clap::Parser;
use simpledb_cli::{OutputFormat, Shell, ShellConfig, StatsReport};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// SimpleDB command shell.
#[derive(Parser)]
#[command(name = "simpledb")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Read commands from this file instead of standard input
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress the banner and prompt
    #[arg(short, long)]
    quiet: bool,

    /// Print operation statistics when the session ends
    #[arg(long)]
    stats: bool,

    /// Output format for statistics
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = if cli.quiet || cli.script.is_some() {
        ShellConfig::quiet()
    } else {
        ShellConfig::default()
    };
    let mut shell = Shell::new(config);
    let stdout = io::stdout();

    match &cli.script {
        Some(path) => {
            info!("Running script {:?}", path);
            let file = File::open(path)?;
            shell.run(BufReader::new(file), stdout.lock())?;
        }
        None => {
            shell.run(io::stdin().lock(), stdout.lock())?;
        }
    }

    if cli.stats {
        let report = StatsReport::from_store(shell.store());
        println!("{}", report.render(cli.format)?);
    }

    Ok(())
}
