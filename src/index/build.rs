use crate::index::incidence::IncidenceIndex;
use crate::index::types::{DocumentUnit, IndexConfig, UnitId};
use crate::utils::{split_units, tokenize, unit_terms};
use roaring::RoaringBitmap;
use std::collections::BTreeSet;
use tracing::debug;

/// Build the incidence index for a document set with the default rules
pub fn build_index<S: AsRef<str>>(documents: &[S]) -> IncidenceIndex {
    build_index_with_config(documents, &IndexConfig::default())
}

/// Build the incidence index for a document set.
///
/// The vocabulary is collected from whole documents, while presence is
/// recorded per sentence unit. Unit ids run continuously across documents.
pub fn build_index_with_config<S: AsRef<str>>(
    documents: &[S],
    config: &IndexConfig,
) -> IncidenceIndex {
    let strip_set = config.strip_set();
    let strip: &[char] = &strip_set;

    // Phase 1: vocabulary
    let vocabulary: Vec<String> = documents
        .iter()
        .flat_map(|doc| tokenize(doc.as_ref(), strip))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    // Phase 2: sentence units
    let mut units = Vec::new();
    for (doc_idx, doc) in documents.iter().enumerate() {
        for sentence in split_units(doc.as_ref(), &config.sentence_separator) {
            let id = units.len() as UnitId;
            units.push(DocumentUnit {
                id,
                source_doc: doc_idx,
                text: sentence.to_string(),
            });
        }
    }

    // Phase 3: presence
    let mut postings = vec![RoaringBitmap::new(); vocabulary.len()];
    for unit in &units {
        for term in unit_terms(&unit.text, strip) {
            if let Ok(term_id) = vocabulary.binary_search(&term) {
                postings[term_id].insert(unit.id);
            }
        }
    }

    debug!(
        documents = documents.len(),
        units = units.len(),
        terms = vocabulary.len(),
        "built incidence index"
    );

    let documents = documents.iter().map(|d| d.as_ref().to_string()).collect();
    IncidenceIndex::new(vocabulary, postings, units, documents)
}
