use crate::utils::{SENTENCE_SEPARATOR, STRIP_CHARS};
use serde::{Deserialize, Serialize};

/// Index of a document unit (sentence), continuous across all documents
pub type UnitId = u32;

/// Index of an original input document
pub type DocIndex = usize;

/// One sentence of an input document; the granularity presence is tracked at
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentUnit {
    pub id: UnitId,
    /// Original document this sentence was cut from
    pub source_doc: DocIndex,
    pub text: String,
}

/// Configuration for the indexer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Substring that separates sentence units inside a document
    pub sentence_separator: String,
    /// Characters trimmed from the end of every document token
    pub strip_chars: String,
}

impl IndexConfig {
    pub fn strip_set(&self) -> Vec<char> {
        self.strip_chars.chars().collect()
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            sentence_separator: SENTENCE_SEPARATOR.to_string(),
            strip_chars: STRIP_CHARS.iter().collect(),
        }
    }
}
