//! # boolret - Boolean retrieval over small document sets
//!
//! boolret builds a term incidence index from a handful of text documents
//! and answers boolean queries chained strictly left to right.
//!
//! ## Architecture
//!
//! - [`index`] - Tokenization, vocabulary and per-sentence presence sets
//! - [`query`] - Query tokenizing and left-to-right AND/OR/NOT evaluation
//! - [`output`] - `doc{n}: text` rendering and JSON reports
//! - [`repl`] - Interactive prompt loop
//! - [`config`] - Config file loading
//! - [`utils`] - Normalization helpers and logging setup
//!
//! ## Quick Start
//!
//! ```
//! use boolret::index::build_index;
//! use boolret::query::evaluate;
//!
//! let docs = ["a cat sat", "a dog sat", "a cat and a dog sat"];
//! let index = build_index(&docs);
//!
//! let result = evaluate("cat NOT dog", index.unit_count(), &index);
//! assert_eq!(result.unit_ids(), vec![0]);
//! ```
//!
//! ## Granularity
//!
//! Documents are split into sentence units on `". "` and presence is tracked
//! per unit, so result ids are unit ids. Each [`index::DocumentUnit`] records
//! the document it came from.

pub mod config;
pub mod error;
pub mod index;
pub mod output;
pub mod query;
pub mod repl;
pub mod utils;
