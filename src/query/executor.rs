use crate::error::UnknownTerm;
use crate::index::incidence::{IncidenceIndex, full_set};
use crate::index::types::UnitId;
use crate::query::parser::{BoolOp, Query, TokenKind, parse_query};
use crate::utils::normalize_query_term;
use roaring::RoaringBitmap;
use tracing::debug;

/// Outcome of evaluating one query
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Evaluation {
    /// Matching unit ids
    pub units: RoaringBitmap,
    /// Terms that were skipped because the vocabulary lacks them
    pub unknown_terms: Vec<UnknownTerm>,
}

impl Evaluation {
    /// Matching unit ids in ascending order
    pub fn unit_ids(&self) -> Vec<UnitId> {
        self.units.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Query executor over a built index
pub struct QueryExecutor<'a> {
    index: &'a IncidenceIndex,
    unit_count: u32,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(index: &'a IncidenceIndex) -> Self {
        Self {
            index,
            unit_count: index.unit_count(),
        }
    }

    /// Use an explicit universe `{0, .., unit_count - 1}` for the starting set
    pub fn with_unit_count(index: &'a IncidenceIndex, unit_count: u32) -> Self {
        Self { index, unit_count }
    }

    /// Fold the query left to right against the index.
    ///
    /// The running result starts as every unit and the operator as AND. An
    /// operator token only switches the current operator. A term found in the
    /// vocabulary replaces the result outright when it sits at token position
    /// 0, and is otherwise combined with the current operator. Unknown terms
    /// leave the result untouched.
    pub fn execute(&self, query: &Query) -> Evaluation {
        let mut result = full_set(self.unit_count);
        let mut current = BoolOp::default();
        let mut unknown_terms = Vec::new();

        for token in &query.tokens {
            let raw = match &token.kind {
                TokenKind::Operator(op) => {
                    current = *op;
                    continue;
                }
                TokenKind::Term(raw) => raw,
            };

            let term = normalize_query_term(raw);
            let Some(docs) = self.index.postings(&term) else {
                debug!(term = %raw, position = token.position, "term not found in documents");
                unknown_terms.push(UnknownTerm {
                    term: raw.clone(),
                    position: token.position,
                });
                continue;
            };

            if token.position == 0 {
                result = docs.clone();
            } else {
                match current {
                    BoolOp::And => result &= docs,
                    BoolOp::Or => result |= docs,
                    BoolOp::Not => result -= docs,
                }
            }

            debug!(
                term = %term,
                op = %current,
                position = token.position,
                matches = result.len(),
                "applied query term"
            );
        }

        Evaluation {
            units: result,
            unknown_terms,
        }
    }
}

/// Parse and evaluate `query` against `index`, starting from the universe
/// `{0, .., unit_count - 1}`.
pub fn evaluate(query: &str, unit_count: u32, index: &IncidenceIndex) -> Evaluation {
    QueryExecutor::with_unit_count(index, unit_count).execute(&parse_query(query))
}
