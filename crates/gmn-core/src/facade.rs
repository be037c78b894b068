//! # GMN Operations
//!
//! The public entry points: compute, append and verify check character
//! pairs, and report per-position character validity. Each operation comes
//! in a whole-string form and a GS1 Company Prefix / model reference form.
//!
//! Every computing operation validates first and returns a [`FormatError`]
//! for structurally invalid input. A well-formed GMN whose check pair does
//! not match is not an error: `verify_*` returns `Ok(false)`.

use crate::checksum::check_pair;
use crate::error::FormatError;
use crate::validate::{GmnInput, CHECK_LEN};

/// Calculate the check character pair for a partial GMN.
///
/// # Errors
///
/// Returns a [`FormatError`] if `part` is not a valid partial GMN.
pub fn check_characters(part: &str) -> Result<String, FormatError> {
    GmnInput::Partial(part).validate()?;
    Ok(check_pair(part))
}

/// Calculate the check character pair for a partial GMN given as GS1
/// Company Prefix and model reference.
///
/// # Errors
///
/// Returns a [`FormatError`] if either component, or their concatenation,
/// is invalid.
pub fn check_characters_gcp_model(prefix: &str, model: &str) -> Result<String, FormatError> {
    let input = GmnInput::PrefixModel { prefix, model };
    input.validate()?;
    Ok(check_pair(&input.assemble()))
}

/// Complete a partial GMN by appending its check character pair.
///
/// # Errors
///
/// Returns a [`FormatError`] if `part` is not a valid partial GMN.
pub fn add_check_characters(part: &str) -> Result<String, FormatError> {
    let checks = check_characters(part)?;
    Ok(format!("{part}{checks}"))
}

/// Complete a partial GMN given as GS1 Company Prefix and model reference.
///
/// # Errors
///
/// Returns a [`FormatError`] if either component, or their concatenation,
/// is invalid.
pub fn add_check_characters_gcp_model(prefix: &str, model: &str) -> Result<String, FormatError> {
    let checks = check_characters_gcp_model(prefix, model)?;
    Ok(format!("{prefix}{model}{checks}"))
}

/// Verify the check character pair of a complete GMN.
///
/// The comparison is case-sensitive; lowercase check characters are
/// rejected by validation before it is reached.
///
/// # Errors
///
/// Returns a [`FormatError`] if `gmn` is not a well-formed complete GMN.
pub fn verify_check_characters(gmn: &str) -> Result<bool, FormatError> {
    GmnInput::Complete(gmn).validate()?;

    // Validation guarantees an all-ASCII string, so byte indexing is safe.
    let (part, supplied) = gmn.split_at(gmn.len() - CHECK_LEN);
    Ok(check_pair(part) == supplied)
}

/// Verify a complete GMN given as GS1 Company Prefix, model reference and
/// check character pair.
///
/// # Errors
///
/// Returns a [`FormatError`] if any component, or their concatenation, is
/// invalid.
pub fn verify_check_characters_gcp_model_checks(
    prefix: &str,
    model: &str,
    checks: &str,
) -> Result<bool, FormatError> {
    let input = GmnInput::PrefixModelChecks {
        prefix,
        model,
        checks,
    };
    input.validate()?;
    verify_check_characters(&input.assemble())
}

/// Report, for each character of `gmn`, whether it belongs to the set
/// required at its position. `complete` says whether the last two
/// characters are a check pair.
///
/// Never fails; the output has one entry per `char` of the input, whatever
/// its length.
pub fn good_character_positions(gmn: &str, complete: bool) -> Vec<bool> {
    if complete {
        GmnInput::Complete(gmn).good_character_positions()
    } else {
        GmnInput::Partial(gmn).good_character_positions()
    }
}

/// Per-position validity for a partial GMN given as GS1 Company Prefix and
/// model reference.
///
/// Prefix positions are good only if they are digits and the prefix has
/// 5–12 characters.
pub fn good_character_positions_gcp_model(prefix: &str, model: &str) -> Vec<bool> {
    GmnInput::PrefixModel { prefix, model }.good_character_positions()
}

/// Per-position validity for a complete GMN given as GS1 Company Prefix,
/// model reference and check character pair.
///
/// Prefix positions follow the same rule as
/// [`good_character_positions_gcp_model`].
pub fn good_character_positions_gcp_model_checks(
    prefix: &str,
    model: &str,
    checks: &str,
) -> Vec<bool> {
    GmnInput::PrefixModelChecks {
        prefix,
        model,
        checks,
    }
    .good_character_positions()
}
