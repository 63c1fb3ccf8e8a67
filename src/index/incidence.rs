use crate::index::types::{DocIndex, DocumentUnit, UnitId};
use roaring::RoaringBitmap;

/// Term incidence index over sentence units.
///
/// Holds the sorted vocabulary and, for every term, the set of units the term
/// occurs in. Immutable once built; a changed document set means a new index.
#[derive(Debug, Clone, Default)]
pub struct IncidenceIndex {
    vocabulary: Vec<String>,
    /// Parallel to `vocabulary`
    postings: Vec<RoaringBitmap>,
    units: Vec<DocumentUnit>,
    documents: Vec<String>,
}

impl IncidenceIndex {
    pub(crate) fn new(
        vocabulary: Vec<String>,
        postings: Vec<RoaringBitmap>,
        units: Vec<DocumentUnit>,
        documents: Vec<String>,
    ) -> Self {
        debug_assert_eq!(vocabulary.len(), postings.len());
        Self {
            vocabulary,
            postings,
            units,
            documents,
        }
    }

    /// Sorted, deduplicated terms of the whole document set
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn units(&self) -> &[DocumentUnit] {
        &self.units
    }

    pub fn unit_count(&self) -> u32 {
        self.units.len() as u32
    }

    /// Number of original documents the index was built from
    pub fn doc_count(&self) -> usize {
        self.documents.len()
    }

    /// Original document text
    pub fn document(&self, doc: DocIndex) -> Option<&str> {
        self.documents.get(doc).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Position of `term` in the vocabulary. `term` must already be normalized.
    pub fn term_id(&self, term: &str) -> Option<usize> {
        self.vocabulary
            .binary_search_by(|t| t.as_str().cmp(term))
            .ok()
    }

    /// Units containing `term`, or `None` when the term is not in the vocabulary
    pub fn postings(&self, term: &str) -> Option<&RoaringBitmap> {
        self.term_id(term).map(|id| &self.postings[id])
    }

    pub fn presence(&self, term: &str, unit: UnitId) -> bool {
        self.postings(term).is_some_and(|docs| docs.contains(unit))
    }

    /// Original document a unit was cut from
    pub fn source_document(&self, unit: UnitId) -> Option<DocIndex> {
        self.unit(unit).map(|u| u.source_doc)
    }

    pub fn unit(&self, unit: UnitId) -> Option<&DocumentUnit> {
        self.units.get(unit as usize)
    }

    /// Dense incidence matrix: one row of 0/1 cells per vocabulary term
    pub fn matrix_rows(&self) -> impl Iterator<Item = (&str, Vec<u8>)> + '_ {
        let width = self.unit_count();
        self.vocabulary
            .iter()
            .zip(&self.postings)
            .map(move |(term, docs)| {
                let row = (0..width).map(|unit| u8::from(docs.contains(unit))).collect();
                (term.as_str(), row)
            })
    }
}

/// The set `{0, .., count - 1}`
pub fn full_set(count: u32) -> RoaringBitmap {
    let mut all = RoaringBitmap::new();
    all.insert_range(0..count);
    all
}
