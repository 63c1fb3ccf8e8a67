//! Error types
//!
//! Core indexing and evaluation never fail; unknown query terms are reported
//! as [`UnknownTerm`] values next to the result. [`RetrievalError`] covers the
//! driver layer (input parsing, I/O, configuration).

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RetrievalError>;

#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error("Invalid document count '{0}'")]
    InvalidDocumentCount(String),

    #[error("Failed to read {path}: {source}")]
    ReadDocument {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Configuration error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A query term that is not in the vocabulary. Skipped during evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("Term '{term}' not found in documents.")]
pub struct UnknownTerm {
    /// Term as written in the query
    pub term: String,
    /// Token position in the query
    pub position: usize,
}
