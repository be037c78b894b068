//! # gmn-cli — Command-Line Interface for GS1 Global Model Numbers
//!
//! Provides the `gmn` command, a thin front end over `gmn-core`. No check
//! character or validation logic lives here; every subcommand calls the
//! library and reports the outcome.
//!
//! ## Subcommands
//!
//! - `gmn verify` — Verify the check character pair of a complete GMN.
//! - `gmn complete` — Append the check character pair to a partial GMN.
//! - `gmn check` — Print only the check character pair.
//! - `gmn positions` — Mark characters that are invalid for their position.
//! - `gmn batch` — Run verify/complete/check over each line of a file.
//!
//! A GMN is given either as one positional string or as `--gcp`,
//! `--model` (and, where relevant, `--checks`) components:
//!
//! ```bash
//! gmn verify 1987654Ad4X4bL5ttr2310c2K
//! gmn complete --gcp 1987654 --model Ad4X4bL5ttr2310c
//! gmn batch verify gmns.txt --json
//! ```
//!
//! ## Exit Codes
//!
//! 0 on success (and a valid GMN for `verify`), 1 on an invalid GMN or a
//! format error, 1 via the top-level error path for operational failures
//! such as an unreadable file.

pub mod batch;
pub mod complete;
pub mod positions;
pub mod verify;

use anyhow::{bail, Result};
use gmn_core::GmnInput;

/// How a GMN was supplied on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GmnSource {
    /// One string holding the whole (partial or complete) GMN.
    Whole(String),
    /// Separate GS1 Company Prefix, model reference and optional check pair.
    Components {
        /// GS1 Company Prefix.
        gcp: String,
        /// Model reference.
        model: String,
        /// Check character pair, if supplied.
        checks: Option<String>,
    },
}

impl GmnSource {
    /// Build a source from the optional positional and component arguments.
    ///
    /// The positional string wins when present. Otherwise both `--gcp` and
    /// `--model` are required.
    pub fn from_args(
        whole: Option<&str>,
        gcp: Option<&str>,
        model: Option<&str>,
        checks: Option<&str>,
    ) -> Result<Self> {
        match (whole, gcp, model) {
            (Some(whole), _, _) => Ok(Self::Whole(whole.to_string())),
            (None, Some(gcp), Some(model)) => Ok(Self::Components {
                gcp: gcp.to_string(),
                model: model.to_string(),
                checks: checks.map(str::to_string),
            }),
            _ => bail!("supply a GMN, or both --gcp and --model"),
        }
    }

    /// View the source as a library input shape.
    ///
    /// `complete` decides how a whole string is read; components are
    /// complete exactly when a check pair was supplied.
    pub fn as_input(&self, complete: bool) -> GmnInput<'_> {
        match self {
            Self::Whole(s) if complete => GmnInput::Complete(s),
            Self::Whole(s) => GmnInput::Partial(s),
            Self::Components {
                gcp,
                model,
                checks: Some(checks),
            } => GmnInput::PrefixModelChecks {
                prefix: gcp,
                model,
                checks,
            },
            Self::Components {
                gcp,
                model,
                checks: None,
            } => GmnInput::PrefixModel { prefix: gcp, model },
        }
    }
}
