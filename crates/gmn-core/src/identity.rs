//! # GMN Newtype
//!
//! [`Gmn`] holds a complete GS1 Global Model Number whose format has been
//! validated and whose check character pair has been verified. Holding a
//! `Gmn` is proof of both; functions that need a correct GMN can take one
//! instead of re-checking a bare string.
//!
//! ## Serialization
//!
//! Serializes as the plain GMN string. Deserialization runs the same checks
//! as [`Gmn::new`], so an invalid GMN never enters the type through serde.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checksum::check_pair;
use crate::error::{FormatError, GmnError};
use crate::facade::{add_check_characters, add_check_characters_gcp_model};
use crate::validate::{GmnInput, CHECK_LEN};

/// A verified, complete GS1 Global Model Number.
///
/// # Validation
///
/// - 8–25 characters, the first five decimal digits
/// - CSET82 data characters, then two CSET32 check characters
/// - The check pair matches the one computed from the data characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Gmn(String);

impl Gmn {
    /// Create a GMN from a complete GMN string, validating and verifying it.
    ///
    /// # Errors
    ///
    /// Returns [`GmnError::Format`] if the string is malformed and
    /// [`GmnError::CheckMismatch`] if the check pair is wrong.
    pub fn new(value: impl Into<String>) -> Result<Self, GmnError> {
        let s = value.into();
        GmnInput::Complete(&s).validate()?;

        let (part, found) = s.split_at(s.len() - CHECK_LEN);
        let expected = check_pair(part);
        if expected != found {
            return Err(GmnError::CheckMismatch {
                expected,
                found: found.to_string(),
            });
        }

        Ok(Self(s))
    }

    /// Complete a partial GMN.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] if `part` is not a valid partial GMN.
    pub fn from_partial(part: &str) -> Result<Self, FormatError> {
        add_check_characters(part).map(Self)
    }

    /// Build a GMN from GS1 Company Prefix and model reference.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] if either component, or their
    /// concatenation, is invalid.
    pub fn from_gcp_model(prefix: &str, model: &str) -> Result<Self, FormatError> {
        add_check_characters_gcp_model(prefix, model).map(Self)
    }

    /// The complete GMN string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The data characters: everything before the check pair.
    pub fn data(&self) -> &str {
        &self.0[..self.0.len() - CHECK_LEN]
    }

    /// The two check characters.
    pub fn check_characters(&self) -> &str {
        &self.0[self.0.len() - CHECK_LEN..]
    }

    /// Consume the GMN, returning the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Gmn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Gmn {
    type Err = GmnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Gmn {
    type Error = GmnError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Gmn> for String {
    fn from(gmn: Gmn) -> Self {
        gmn.0
    }
}

impl AsRef<str> for Gmn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
