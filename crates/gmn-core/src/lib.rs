#![deny(missing_docs)]

//! # gmn-core — GS1 Global Model Number Check Characters
//!
//! Computes and verifies the two-character check pair of a GS1 Global Model
//! Number (GMN): a GS1 Company Prefix followed by a model reference, drawn
//! from the GS1 encodable character set 82, closed by two check characters
//! from a 32-symbol subset. Only `serde` and `thiserror` from the external
//! ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Validate, then compute.** Every operation checks the input format
//!    first and returns a [`FormatError`] for the first violation. The
//!    checksum arithmetic itself cannot fail.
//!
//! 2. **One validator, four input shapes.** A GMN may arrive as one string
//!    or as Company Prefix / model reference / check pair components.
//!    [`GmnInput`] models the shapes; each keeps its own error messages.
//!
//! 3. **Constant tables.** CSET82, CSET32 and the weight table are `const`
//!    data; there is no mutable state and no I/O, so every function is
//!    reentrant.
//!
//! 4. **[`Gmn`] newtype.** A complete GMN that is known to be well formed
//!    and correctly checked.
//!
//! ## Example
//!
//! ```
//! assert_eq!(gmn_core::check_characters("1987654Ad4X4bL5ttr2310c").unwrap(), "2K");
//! assert!(gmn_core::verify_check_characters("1987654Ad4X4bL5ttr2310c2K").unwrap());
//! assert!(!gmn_core::verify_check_characters("1987654Ad4X4bL5ttr2310cXK").unwrap());
//! ```

pub mod alphabet;
mod checksum;
pub mod error;
pub mod facade;
pub mod identity;
pub mod validate;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{FormatError, GmnError};
pub use facade::{
    add_check_characters, add_check_characters_gcp_model, check_characters,
    check_characters_gcp_model, good_character_positions, good_character_positions_gcp_model,
    good_character_positions_gcp_model_checks, verify_check_characters,
    verify_check_characters_gcp_model_checks,
};
pub use identity::Gmn;
pub use validate::GmnInput;
