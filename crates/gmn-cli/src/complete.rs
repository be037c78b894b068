//! # Complete and Check Subcommands
//!
//! `gmn complete` prints a partial GMN with its check character pair
//! appended; `gmn check` prints only the pair. Both accept the partial GMN
//! whole or as GS1 Company Prefix and model reference.

use anyhow::Result;
use clap::Args;

use gmn_core::{
    add_check_characters, add_check_characters_gcp_model, check_characters,
    check_characters_gcp_model, FormatError,
};

use crate::GmnSource;

/// Arguments shared by `gmn complete` and `gmn check`.
#[derive(Args, Debug)]
pub struct PartialArgs {
    /// Partial GMN, without check characters.
    #[arg(value_name = "PARTIAL_GMN", conflicts_with_all = ["gcp", "model"])]
    pub partial: Option<String>,

    /// GS1 Company Prefix (5-12 digits).
    #[arg(long, requires = "model")]
    pub gcp: Option<String>,

    /// Model reference.
    #[arg(long, requires = "gcp")]
    pub model: Option<String>,
}

impl PartialArgs {
    fn source(&self) -> Result<GmnSource> {
        GmnSource::from_args(
            self.partial.as_deref(),
            self.gcp.as_deref(),
            self.model.as_deref(),
            None,
        )
    }
}

/// The complete GMN for a partial source.
pub fn complete(source: &GmnSource) -> Result<String, FormatError> {
    match source {
        GmnSource::Whole(part) => add_check_characters(part),
        GmnSource::Components { gcp, model, .. } => add_check_characters_gcp_model(gcp, model),
    }
}

/// The check character pair for a partial source.
pub fn check(source: &GmnSource) -> Result<String, FormatError> {
    match source {
        GmnSource::Whole(part) => check_characters(part),
        GmnSource::Components { gcp, model, .. } => check_characters_gcp_model(gcp, model),
    }
}

/// Execute the complete subcommand.
///
/// Returns exit code: 0 on success, 1 on a format error.
pub fn run_complete(args: &PartialArgs) -> Result<u8> {
    let source = args.source()?;
    tracing::debug!(?source, "completing GMN");
    Ok(report(complete(&source)))
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 on success, 1 on a format error.
pub fn run_check(args: &PartialArgs) -> Result<u8> {
    let source = args.source()?;
    tracing::debug!(?source, "computing check characters");
    Ok(report(check(&source)))
}

fn report(outcome: Result<String, FormatError>) -> u8 {
    match outcome {
        Ok(out) => {
            println!("{out}");
            0
        }
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}
