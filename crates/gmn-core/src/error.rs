//! # Error Hierarchy
//!
//! Structured error types for GMN handling, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! [`FormatError`] is the only failure the facade operations can produce.
//! Its `Display` text is part of the public contract: callers match on
//! stable substrings such as "too short" or "Invalid check character", so
//! the wording here must not drift.

use thiserror::Error;

/// An input that is structurally not a (partial) GMN.
///
/// Raised by validation before any checksum arithmetic runs. Variants are
/// mutually exclusive; the validator reports the first violation it meets
/// scanning left to right.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Fewer characters than the minimum for the input shape.
    #[error(
        "The input is too short. It should be at least {min} characters long{}",
        length_suffix(.complete)
    )]
    TooShort {
        /// Minimum accepted length.
        min: usize,
        /// Whether the input was expected to carry a check character pair.
        complete: bool,
    },

    /// More characters than the maximum for the input shape.
    #[error(
        "The input is too long. It should be {max} characters maximum{}",
        length_suffix(.complete)
    )]
    TooLong {
        /// Maximum accepted length.
        max: usize,
        /// Whether the input was expected to carry a check character pair.
        complete: bool,
    },

    /// One of the first five characters is not a decimal digit.
    #[error("GMN starts with the GS1 Company Prefix. At least the first five characters must be digits.")]
    LeadingDigits,

    /// A data character outside CSET82.
    #[error("Invalid character at position {position}: {character}")]
    InvalidCharacter {
        /// 1-based character position.
        position: usize,
        /// The offending character.
        character: char,
    },

    /// A check character outside CSET32.
    #[error("Invalid check character at position {position}: {character}")]
    InvalidCheckCharacter {
        /// 1-based character position.
        position: usize,
        /// The offending character.
        character: char,
    },

    /// GS1 Company Prefix has fewer than 5 digits.
    #[error("The GS1 Company Prefix is too short. It should be at least 5 digits long.")]
    CompanyPrefixTooShort,

    /// GS1 Company Prefix has more than 12 digits.
    #[error("The GS1 Company Prefix is too long. It should not be more than 12 digits long.")]
    CompanyPrefixTooLong,

    /// GS1 Company Prefix contains a non-digit.
    #[error("The GS1 Company Prefix must only contain digits.")]
    CompanyPrefixNotNumeric,

    /// Model reference is the empty string.
    #[error("The model reference must contain at least one character.")]
    EmptyModelReference,

    /// A separately supplied check pair is not exactly two characters.
    #[error("The check must be 2 characters long.")]
    CheckLength,
}

fn length_suffix(complete: &bool) -> &'static str {
    if *complete {
        "."
    } else {
        " excluding the check character pair."
    }
}

/// Errors from constructing a [`Gmn`](crate::Gmn).
///
/// Unlike the facade, which reports a check mismatch as `Ok(false)`, a
/// `Gmn` value only exists when its check pair is correct, so a mismatch
/// becomes an error here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GmnError {
    /// The input is not a well-formed complete GMN.
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// Well-formed, but the check character pair is wrong.
    #[error("check character mismatch: expected \"{expected}\", found \"{found}\"")]
    CheckMismatch {
        /// The check pair computed from the data characters.
        expected: String,
        /// The check pair present in the input.
        found: String,
    },
}
