//! # Check Character Computation
//!
//! The GMN check character pair is a weighted sum of the CSET82 values of
//! the data characters, reduced modulo 1021, with the 10-bit residue split
//! into two 5-bit halves that each index CSET32.
//!
//! This is an error-detecting code, not an integrity guarantee: it catches
//! single substitutions and most transpositions, but anyone can compute a
//! matching pair for arbitrary data.

use crate::alphabet::{cset32_symbol, cset82_value, MODULUS, WEIGHTS};

/// Weighted sum of `part` modulo [`MODULUS`].
///
/// The weights are right-aligned, so the last character always takes
/// weight 2. `part` must already have passed partial-GMN validation; with
/// that precondition every character has a CSET82 value and the length is
/// within the weight table. A character outside CSET82 still occupies its
/// weight slot and contributes 0.
pub(crate) fn weighted_residue(part: &str) -> u32 {
    let offset = WEIGHTS.len().saturating_sub(part.chars().count());

    let sum: u32 = part
        .chars()
        .map(|c| cset82_value(c).unwrap_or(0))
        .zip(&WEIGHTS[offset..])
        .map(|(value, &weight)| u32::from(value) * weight)
        .sum();

    sum % MODULUS
}

/// Compute the check character pair of a validated partial GMN.
pub(crate) fn check_pair(part: &str) -> String {
    let residue = weighted_residue(part);
    [cset32_symbol(residue >> 5), cset32_symbol(residue & 31)]
        .iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_example() {
        assert_eq!(check_pair("1987654Ad4X4bL5ttr2310c"), "2K");
    }

    #[test]
    fn shortest_and_longest() {
        assert_eq!(check_pair("12345A"), "NJ");
        assert_eq!(check_pair("12345678901234567890123"), "NT");
    }

    #[test]
    fn last_character_takes_weight_two() {
        // Bumping the final character's value by one adds exactly 2.
        let a = weighted_residue("12345A");
        let b = weighted_residue("12345B");
        assert_eq!((a + 2) % MODULUS, b);
    }

    #[test]
    fn first_character_of_longest_takes_weight_83() {
        let a = weighted_residue("02345678901234567890123");
        let b = weighted_residue("12345678901234567890123");
        assert_eq!((a + 83) % MODULUS, b);
    }

    #[test]
    fn minimum_sum_uses_first_symbols() {
        // "00000!" has the smallest data value sum; its pair is "HV".
        assert_eq!(check_pair("00000!"), "HV");
    }

    #[test]
    fn maximum_sum() {
        assert_eq!(check_pair("99999zzzzzzzzzzzzzzzzzz"), "T2");
    }

    #[test]
    fn residue_fits_in_ten_bits() {
        for part in ["00000!", "99999zzzzzzzzzzzzzzzzzz", "12345A", "1987654Ad4X4bL5ttr2310c"] {
            assert!(weighted_residue(part) < 1024);
        }
    }

    #[test]
    fn unknown_character_keeps_its_weight_slot() {
        // '!' is CSET82 value 0; a space has no value and must not shift
        // the weights of the characters before it.
        assert_eq!(weighted_residue("12345 A"), weighted_residue("12345!A"));
        assert_ne!(weighted_residue("12345 A"), weighted_residue("12345A"));
    }

    #[test]
    fn deterministic() {
        let part = "53395376X1:n";
        assert_eq!(check_pair(part), check_pair(part));
    }
}
