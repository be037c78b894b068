//! # Positions Subcommand
//!
//! Shows which characters of a (partial or complete) GMN do not belong to
//! the character set required at their position, without stopping at the
//! first one. Useful for pointing at typos that a format error would only
//! report one at a time.

use anyhow::Result;
use clap::Args;

use gmn_core::GmnInput;

use crate::GmnSource;

/// Arguments for the `gmn positions` subcommand.
#[derive(Args, Debug)]
pub struct PositionsArgs {
    /// GMN to inspect, partial or complete.
    #[arg(value_name = "INPUT", conflicts_with_all = ["gcp", "model", "checks"])]
    pub input: Option<String>,

    /// Treat the positional INPUT as complete: its last two characters are
    /// check characters.
    #[arg(long, requires = "input")]
    pub complete: bool,

    /// GS1 Company Prefix (5-12 digits).
    #[arg(long, requires = "model")]
    pub gcp: Option<String>,

    /// Model reference.
    #[arg(long, requires = "gcp")]
    pub model: Option<String>,

    /// Check character pair. Supplying it makes the input complete.
    #[arg(long, requires = "gcp")]
    pub checks: Option<String>,
}

/// Render a marker line with `^` under each bad character.
pub fn marker_line(good: &[bool]) -> String {
    good.iter()
        .map(|&ok| if ok { ' ' } else { '^' })
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Render the report for `input`: the assembled GMN, a marker line when
/// something is wrong, and a summary. Returns the lines and the number of
/// bad characters.
pub fn render(input: GmnInput<'_>) -> (Vec<String>, usize) {
    let good = input.good_character_positions();
    let bad = good.iter().filter(|ok| !**ok).count();

    let mut lines = vec![input.assemble().into_owned()];
    if bad == 0 {
        lines.push(format!(
            "All {} characters are valid for their positions",
            good.len()
        ));
    } else {
        lines.push(marker_line(&good));
        lines.push(format!("{bad} character(s) are invalid for their positions"));
    }
    (lines, bad)
}

/// Execute the positions subcommand.
///
/// Returns exit code: 0 when every character is good, 1 otherwise.
pub fn run_positions(args: &PositionsArgs) -> Result<u8> {
    let source = GmnSource::from_args(
        args.input.as_deref(),
        args.gcp.as_deref(),
        args.model.as_deref(),
        args.checks.as_deref(),
    )?;
    let input = source.as_input(args.complete);
    let (lines, bad) = render(input);
    tracing::debug!(?input, bad, "checked character positions");

    for line in &lines {
        println!("{line}");
    }
    Ok(if bad == 0 { 0 } else { 1 })
}
