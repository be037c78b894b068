//! # Format Validation
//!
//! Length and character-set checks that must pass before any check
//! character arithmetic runs.
//!
//! A GMN reaches the library in one of four shapes, modeled by
//! [`GmnInput`]: a whole partial GMN, a whole complete GMN, or the same two
//! split into GS1 Company Prefix, model reference and (optionally) check
//! pair components. All shapes share one position rule and one whole-string
//! check; the component shapes add prefix/model/check checks of their own
//! with their own error messages.
//!
//! ## Position rule
//!
//! | Position | Region | Accepted set |
//! |---|---|---|
//! | `i < 5` | leading Company Prefix digits | `0`–`9` |
//! | `i >= 5`, not in the check pair | data | CSET82 |
//! | last two positions of a complete GMN | check pair | CSET32 |
//!
//! Positions and lengths count `char`s, not bytes.

use std::borrow::Cow;

use crate::alphabet::{cset32_value, cset82_value, is_prefix_digit, WEIGHTS};
use crate::error::FormatError;

/// Characters at the start of every GMN that must be digits.
pub const LEADING_DIGITS: usize = 5;

/// Length of the check character pair.
pub const CHECK_LEN: usize = 2;

/// Shortest partial GMN: five prefix digits and one model character.
pub const MIN_PARTIAL_LEN: usize = LEADING_DIGITS + 1;

/// Longest partial GMN, bounded by the weight table.
pub const MAX_PARTIAL_LEN: usize = WEIGHTS.len();

/// Shortest complete GMN.
pub const MIN_COMPLETE_LEN: usize = MIN_PARTIAL_LEN + CHECK_LEN;

/// Longest complete GMN.
pub const MAX_COMPLETE_LEN: usize = MAX_PARTIAL_LEN + CHECK_LEN;

/// Shortest GS1 Company Prefix.
pub const MIN_COMPANY_PREFIX_LEN: usize = 5;

/// Longest GS1 Company Prefix.
pub const MAX_COMPANY_PREFIX_LEN: usize = 12;

/// The shape in which a GMN is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GmnInput<'a> {
    /// A partial GMN as one string, without check characters.
    Partial(&'a str),
    /// A complete GMN as one string, ending in the check pair.
    Complete(&'a str),
    /// A partial GMN as GS1 Company Prefix and model reference.
    PrefixModel {
        /// GS1 Company Prefix.
        prefix: &'a str,
        /// Model reference.
        model: &'a str,
    },
    /// A complete GMN as GS1 Company Prefix, model reference and check pair.
    PrefixModelChecks {
        /// GS1 Company Prefix.
        prefix: &'a str,
        /// Model reference.
        model: &'a str,
        /// Check character pair.
        checks: &'a str,
    },
}

impl<'a> GmnInput<'a> {
    /// Whether this shape carries a check character pair.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_) | Self::PrefixModelChecks { .. })
    }

    /// The GS1 Company Prefix component, for the component shapes.
    pub fn prefix(&self) -> Option<&'a str> {
        match *self {
            Self::Partial(_) | Self::Complete(_) => None,
            Self::PrefixModel { prefix, .. } | Self::PrefixModelChecks { prefix, .. } => {
                Some(prefix)
            }
        }
    }

    /// The whole GMN string this input denotes.
    ///
    /// Borrows for the whole-string shapes and concatenates for the
    /// component shapes.
    pub fn assemble(&self) -> Cow<'a, str> {
        match *self {
            Self::Partial(s) | Self::Complete(s) => Cow::Borrowed(s),
            Self::PrefixModel { prefix, model } => Cow::Owned(format!("{prefix}{model}")),
            Self::PrefixModelChecks {
                prefix,
                model,
                checks,
            } => Cow::Owned(format!("{prefix}{model}{checks}")),
        }
    }

    /// Check the input's format, returning the first violation found.
    ///
    /// Component shapes check the prefix length, model presence, prefix
    /// digits and check-pair length first, then the assembled string as a
    /// whole. Errors from the whole-string check propagate unchanged.
    ///
    /// # Errors
    ///
    /// Returns the [`FormatError`] for the first violation.
    pub fn validate(&self) -> Result<(), FormatError> {
        match *self {
            Self::Partial(s) => validate_whole(s, false),
            Self::Complete(s) => validate_whole(s, true),
            Self::PrefixModel { prefix, model } => {
                validate_components(prefix, model, None)?;
                validate_whole(&self.assemble(), false)
            }
            Self::PrefixModelChecks {
                prefix,
                model,
                checks,
            } => {
                validate_components(prefix, model, Some(checks))?;
                validate_whole(&self.assemble(), true)
            }
        }
    }

    /// Per-character validity of the assembled input. Never fails.
    ///
    /// For the component shapes every prefix position is judged only on
    /// being a digit, and the whole prefix span is marked bad when the
    /// prefix length is outside 5–12.
    pub fn good_character_positions(&self) -> Vec<bool> {
        let mut out = positions(&self.assemble(), self.is_complete());
        if let Some(prefix) = self.prefix() {
            let len_ok = prefix_len_ok(prefix.chars().count());
            for (slot, c) in out.iter_mut().zip(prefix.chars()) {
                *slot = len_ok && is_prefix_digit(c);
            }
        }
        out
    }
}

/// Which part of a GMN a position falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    LeadingDigits,
    Data,
    Check,
}

fn region(index: usize, len: usize, complete: bool) -> Region {
    if index < LEADING_DIGITS {
        Region::LeadingDigits
    } else if !complete || index + CHECK_LEN < len {
        Region::Data
    } else {
        Region::Check
    }
}

fn accepts(region: Region, c: char) -> bool {
    match region {
        Region::LeadingDigits => is_prefix_digit(c),
        Region::Data => cset82_value(c).is_some(),
        Region::Check => cset32_value(c).is_some(),
    }
}

fn positions(input: &str, complete: bool) -> Vec<bool> {
    let len = input.chars().count();
    input
        .chars()
        .enumerate()
        .map(|(i, c)| accepts(region(i, len, complete), c))
        .collect()
}

fn prefix_len_ok(len: usize) -> bool {
    (MIN_COMPANY_PREFIX_LEN..=MAX_COMPANY_PREFIX_LEN).contains(&len)
}

fn validate_whole(input: &str, complete: bool) -> Result<(), FormatError> {
    let (min, max) = if complete {
        (MIN_COMPLETE_LEN, MAX_COMPLETE_LEN)
    } else {
        (MIN_PARTIAL_LEN, MAX_PARTIAL_LEN)
    };

    let len = input.chars().count();
    if len < min {
        return Err(FormatError::TooShort { min, complete });
    }
    if len > max {
        return Err(FormatError::TooLong { max, complete });
    }

    for (i, c) in input.chars().enumerate() {
        let region = region(i, len, complete);
        if accepts(region, c) {
            continue;
        }
        return Err(match region {
            Region::LeadingDigits => FormatError::LeadingDigits,
            Region::Data => FormatError::InvalidCharacter {
                position: i + 1,
                character: c,
            },
            Region::Check => FormatError::InvalidCheckCharacter {
                position: i + 1,
                character: c,
            },
        });
    }

    Ok(())
}

fn validate_components(prefix: &str, model: &str, checks: Option<&str>) -> Result<(), FormatError> {
    let prefix_len = prefix.chars().count();
    if prefix_len < MIN_COMPANY_PREFIX_LEN {
        return Err(FormatError::CompanyPrefixTooShort);
    }
    if prefix_len > MAX_COMPANY_PREFIX_LEN {
        return Err(FormatError::CompanyPrefixTooLong);
    }

    if model.is_empty() {
        return Err(FormatError::EmptyModelReference);
    }

    if !prefix.chars().all(is_prefix_digit) {
        return Err(FormatError::CompanyPrefixNotNumeric);
    }

    if let Some(checks) = checks {
        if checks.chars().count() != CHECK_LEN {
            return Err(FormatError::CheckLength);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn err(input: GmnInput<'_>) -> FormatError {
        input.validate().unwrap_err()
    }

    // -- whole strings --

    #[test]
    fn partial_length_bounds() {
        assert!(GmnInput::Partial("12345A").validate().is_ok());
        assert!(GmnInput::Partial("12345678901234567890123").validate().is_ok());
        assert_eq!(
            err(GmnInput::Partial("12345")),
            FormatError::TooShort {
                min: 6,
                complete: false
            }
        );
        assert_eq!(
            err(GmnInput::Partial("123456789012345678901234")),
            FormatError::TooLong {
                max: 23,
                complete: false
            }
        );
    }

    #[test]
    fn complete_length_bounds() {
        assert!(GmnInput::Complete("12345ANJ").validate().is_ok());
        assert!(GmnInput::Complete("12345678901234567890123NT")
            .validate()
            .is_ok());
        assert_eq!(
            err(GmnInput::Complete("12345XX")),
            FormatError::TooShort {
                min: 8,
                complete: true
            }
        );
        assert_eq!(
            err(GmnInput::Complete("123456789012345678901234XX")),
            FormatError::TooLong {
                max: 25,
                complete: true
            }
        );
    }

    #[test]
    fn length_checked_before_characters() {
        assert!(matches!(
            err(GmnInput::Partial("AB")),
            FormatError::TooShort { .. }
        ));
    }

    #[test]
    fn leading_digits_required() {
        assert_eq!(
            err(GmnInput::Complete("X987654Ad4X4bL5ttr2310c2K")),
            FormatError::LeadingDigits
        );
        assert_eq!(
            err(GmnInput::Complete("1987X54Ad4X4bL5ttr2310c2K")),
            FormatError::LeadingDigits
        );
    }

    #[test]
    fn sixth_position_may_be_non_digit() {
        assert!(GmnInput::Partial("12345_abc").validate().is_ok());
    }

    #[test]
    fn invalid_data_character_position_counts_chars() {
        assert_eq!(
            err(GmnInput::Complete("198765ŁAd4X4bL5ttr2310c2K")),
            FormatError::InvalidCharacter {
                position: 7,
                character: 'Ł'
            }
        );
        assert_eq!(
            err(GmnInput::Partial("1987654Ad4X4bL5ttr2310Ł")),
            FormatError::InvalidCharacter {
                position: 23,
                character: 'Ł'
            }
        );
    }

    #[test]
    fn invalid_check_character() {
        assert_eq!(
            err(GmnInput::Complete("1987654Ad4X4bL5ttr2310cxK")),
            FormatError::InvalidCheckCharacter {
                position: 24,
                character: 'x'
            }
        );
        assert_eq!(
            err(GmnInput::Complete("1987654Ad4X4bL5ttr2310c2x")),
            FormatError::InvalidCheckCharacter {
                position: 25,
                character: 'x'
            }
        );
    }

    #[test]
    fn first_violation_wins() {
        // Bad data character at 6 precedes bad check character at the end.
        assert_eq!(
            err(GmnInput::Complete("12345#ABCxx")),
            FormatError::InvalidCharacter {
                position: 6,
                character: '#'
            }
        );
    }

    // -- components --

    #[test]
    fn prefix_length_bounds() {
        assert_eq!(
            err(GmnInput::PrefixModelChecks {
                prefix: "1234",
                model: "Ad4X4bL5ttr2310c",
                checks: "XX"
            }),
            FormatError::CompanyPrefixTooShort
        );
        assert_eq!(
            err(GmnInput::PrefixModelChecks {
                prefix: "1234567890123",
                model: "Ad4X4bL5",
                checks: "XX"
            }),
            FormatError::CompanyPrefixTooLong
        );
    }

    #[test]
    fn empty_model_rejected() {
        assert_eq!(
            err(GmnInput::PrefixModel {
                prefix: "1987654",
                model: ""
            }),
            FormatError::EmptyModelReference
        );
    }

    #[test]
    fn non_numeric_prefix_beyond_leading_five() {
        // Position 7 lies in the prefix but past the leading-digit span.
        assert_eq!(
            err(GmnInput::PrefixModelChecks {
                prefix: "198765A",
                model: "Ad4X4bL5ttr2310c",
                checks: "XX"
            }),
            FormatError::CompanyPrefixNotNumeric
        );
    }

    #[test]
    fn check_length_rejected() {
        for checks in ["3", "2KX", ""] {
            assert_eq!(
                err(GmnInput::PrefixModelChecks {
                    prefix: "1987654",
                    model: "Ad4X4bL5ttr2310c",
                    checks
                }),
                FormatError::CheckLength
            );
        }
    }

    #[test]
    fn whole_string_errors_propagate_from_components() {
        assert_eq!(
            err(GmnInput::PrefixModelChecks {
                prefix: "12345",
                model: "6789012345678901234",
                checks: "XX"
            }),
            FormatError::TooLong {
                max: 25,
                complete: true
            }
        );
        assert!(matches!(
            err(GmnInput::PrefixModel {
                prefix: "12345",
                model: "A B"
            }),
            FormatError::InvalidCharacter { position: 7, .. }
        ));
    }

    // -- diagnostics --

    #[test]
    fn positions_for_partial_and_complete() {
        assert_eq!(
            GmnInput::Partial("1234AxY#").good_character_positions(),
            vec![true, true, true, true, false, true, true, false]
        );
        // In a complete GMN, lowercase is bad only in the check pair.
        assert_eq!(
            GmnInput::Complete("12345aaa").good_character_positions(),
            vec![true, true, true, true, true, true, false, false]
        );
    }

    #[test]
    fn positions_never_fail_on_bad_lengths() {
        assert!(GmnInput::Partial("").good_character_positions().is_empty());
        assert_eq!(GmnInput::Complete("1").good_character_positions(), vec![true]);
        assert_eq!(
            GmnInput::Partial(&"1".repeat(40))
                .good_character_positions()
                .len(),
            40
        );
    }

    #[test]
    fn prefix_positions_forced_to_digit_test() {
        // 'A' at position 7 is in CSET82 but not a digit.
        let out = GmnInput::PrefixModel {
            prefix: "198765A",
            model: "Ad4",
        }
        .good_character_positions();
        assert_eq!(
            out,
            vec![true, true, true, true, true, true, false, true, true, true]
        );
    }

    #[test]
    fn prefix_span_blanked_when_length_out_of_range() {
        let out = GmnInput::PrefixModelChecks {
            prefix: "1234",
            model: "5AB",
            checks: "CD",
        }
        .good_character_positions();
        assert_eq!(out, vec![false, false, false, false, true, true, true, true, true]);

        let out = GmnInput::PrefixModel {
            prefix: "1234567890123",
            model: "A",
        }
        .good_character_positions();
        assert!(out[..13].iter().all(|ok| !ok));
        assert!(out[13]);
    }

    #[test]
    fn assemble_concatenates_components() {
        let input = GmnInput::PrefixModelChecks {
            prefix: "1987654",
            model: "Ad4X4bL5ttr2310c",
            checks: "2K",
        };
        assert_eq!(input.assemble(), "1987654Ad4X4bL5ttr2310c2K");
        assert!(input.is_complete());
        assert_eq!(input.prefix(), Some("1987654"));
        assert!(matches!(GmnInput::Partial("x").assemble(), Cow::Borrowed(_)));
    }
}
