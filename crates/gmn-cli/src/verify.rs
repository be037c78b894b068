//! # Verify Subcommand
//!
//! Checks the check character pair of a complete GMN, given whole or as
//! GS1 Company Prefix, model reference and check pair.

use anyhow::{bail, Result};
use clap::Args;

use gmn_core::{verify_check_characters, verify_check_characters_gcp_model_checks, FormatError};

use crate::GmnSource;

/// Arguments for the `gmn verify` subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Complete GMN, including the check character pair.
    #[arg(value_name = "GMN", conflicts_with_all = ["gcp", "model", "checks"])]
    pub gmn: Option<String>,

    /// GS1 Company Prefix (5-12 digits).
    #[arg(long, requires_all = ["model", "checks"])]
    pub gcp: Option<String>,

    /// Model reference.
    #[arg(long, requires = "gcp")]
    pub model: Option<String>,

    /// Check character pair.
    #[arg(long, requires = "gcp")]
    pub checks: Option<String>,
}

/// Verify a GMN from its command-line source.
///
/// Components without a check pair cannot be verified and are an
/// operational error rather than a format error.
pub fn verify(source: &GmnSource) -> Result<Result<bool, FormatError>> {
    match source {
        GmnSource::Whole(gmn) => Ok(verify_check_characters(gmn)),
        GmnSource::Components {
            gcp,
            model,
            checks: Some(checks),
        } => Ok(verify_check_characters_gcp_model_checks(gcp, model, checks)),
        GmnSource::Components { checks: None, .. } => {
            bail!("--checks is required to verify a GMN given as components")
        }
    }
}

/// Execute the verify subcommand.
///
/// Returns exit code: 0 when the check characters are valid, 1 when they
/// are not or the input is malformed.
pub fn run_verify(args: &VerifyArgs) -> Result<u8> {
    let source = GmnSource::from_args(
        args.gmn.as_deref(),
        args.gcp.as_deref(),
        args.model.as_deref(),
        args.checks.as_deref(),
    )?;
    tracing::debug!(?source, "verifying GMN");

    match verify(&source)? {
        Ok(true) => {
            println!("The check characters are valid");
            Ok(0)
        }
        Ok(false) => {
            println!("The check characters are NOT valid");
            Ok(1)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            Ok(1)
        }
    }
}
