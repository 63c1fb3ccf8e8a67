//! Utility functions.
//!
//! - [`tokenizer`] - Sentence splitting and term normalization
//! - [`logging`] - Tracing subscriber setup for the binary
//!
//! ```
//! use boolret::utils::{normalize_token, split_units, SENTENCE_SEPARATOR};
//!
//! assert_eq!(normalize_token("Retrieval,"), "retrieval");
//! assert_eq!(split_units("One. Two", SENTENCE_SEPARATOR), vec!["One", "Two"]);
//! ```

pub mod logging;
pub mod tokenizer;

pub use tokenizer::*;
