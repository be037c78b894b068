//! # gmn CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Results go to stdout; logs go to stderr.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gmn_cli::batch::{run_batch, BatchArgs};
use gmn_cli::complete::{run_check, run_complete, PartialArgs};
use gmn_cli::positions::{run_positions, PositionsArgs};
use gmn_cli::verify::{run_verify, VerifyArgs};

/// GS1 Global Model Number tool.
///
/// Verifies and generates the check character pair of a GMN, reports
/// characters that are invalid for their position, and processes files of
/// GMNs line by line.
#[derive(Parser, Debug)]
#[command(name = "gmn", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Verify the check character pair of a complete GMN.
    Verify(VerifyArgs),

    /// Complete a partial GMN by appending its check character pair.
    Complete(PartialArgs),

    /// Print the check character pair of a partial GMN.
    Check(PartialArgs),

    /// Mark characters that are invalid for their position.
    Positions(PositionsArgs),

    /// Verify, complete or check every line of a file.
    Batch(BatchArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "gmn CLI starting");

    let result = match cli.command {
        Commands::Verify(args) => run_verify(&args),
        Commands::Complete(args) => run_complete(&args),
        Commands::Check(args) => run_check(&args),
        Commands::Positions(args) => run_positions(&args),
        Commands::Batch(args) => run_batch(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
