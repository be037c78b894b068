//! # Batch Subcommand
//!
//! Runs verify, complete or check over every non-empty line of a text
//! file, one GMN per line. A line that fails validation does not stop the
//! run: its error message becomes that line's outcome.
//!
//! Text output is `<line> : <outcome>`; `--json` emits one JSON object per
//! line instead.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;

use gmn_core::{add_check_characters, check_characters, verify_check_characters};

/// Operation applied to each line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchMode {
    /// Verify complete GMNs.
    Verify,
    /// Append check characters to partial GMNs.
    Complete,
    /// Compute only the check characters of partial GMNs.
    Check,
}

/// Arguments for the `gmn batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Operation to apply to each line.
    #[arg(value_enum)]
    pub mode: BatchMode,

    /// File with one GMN per line.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Emit one JSON object per line instead of text.
    #[arg(long)]
    pub json: bool,
}

/// The result of processing one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineOutcome {
    /// 1-based line number in the input file.
    pub line: usize,
    /// The line's content.
    pub input: String,
    /// Whether the line succeeded: a valid GMN for `verify`, no format
    /// error for `complete` and `check`.
    pub ok: bool,
    /// Result text: the valid/not-valid verdict, the completed GMN, or the
    /// check pair.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Format error message, if the line is malformed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LineOutcome {
    fn text(&self) -> &str {
        self.output
            .as_deref()
            .or(self.error.as_deref())
            .unwrap_or_default()
    }
}

/// Apply `mode` to a single line.
pub fn process_line(mode: BatchMode, line: usize, input: &str) -> LineOutcome {
    let result = match mode {
        BatchMode::Verify => verify_check_characters(input).map(|valid| {
            let verdict = if valid { "*** Valid ***" } else { "*** Not valid ***" };
            (valid, verdict.to_string())
        }),
        BatchMode::Complete => add_check_characters(input).map(|gmn| (true, gmn)),
        BatchMode::Check => check_characters(input).map(|checks| (true, checks)),
    };

    match result {
        Ok((ok, output)) => LineOutcome {
            line,
            input: input.to_string(),
            ok,
            output: Some(output),
            error: None,
        },
        Err(e) => LineOutcome {
            line,
            input: input.to_string(),
            ok: false,
            output: None,
            error: Some(e.to_string()),
        },
    }
}

/// Apply `mode` to every non-empty line of `content`.
///
/// Line numbers count the skipped empty lines, so they match the file.
pub fn process_lines(mode: BatchMode, content: &str) -> Vec<LineOutcome> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(i, line)| process_line(mode, i + 1, line))
        .collect()
}

/// Read and process a batch file.
pub fn process_file(mode: BatchMode, path: &Path) -> Result<Vec<LineOutcome>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read batch file {}", path.display()))?;
    Ok(process_lines(mode, &content))
}

/// Execute the batch subcommand.
///
/// Returns exit code: 0 when every line succeeded, 1 otherwise. An
/// unreadable file is an error.
pub fn run_batch(args: &BatchArgs) -> Result<u8> {
    let outcomes = process_file(args.mode, &args.file)?;

    for outcome in &outcomes {
        if let Some(error) = &outcome.error {
            tracing::warn!(line = outcome.line, %error, "malformed GMN");
        }
        if args.json {
            println!(
                "{}",
                serde_json::to_string(outcome).context("failed to serialize line outcome")?
            );
        } else {
            println!("{} : {}", outcome.input, outcome.text());
        }
    }

    let failed = outcomes.iter().filter(|o| !o.ok).count();
    tracing::info!(
        mode = ?args.mode,
        total = outcomes.len(),
        failed,
        "batch complete"
    );

    Ok(if failed == 0 { 0 } else { 1 })
}
