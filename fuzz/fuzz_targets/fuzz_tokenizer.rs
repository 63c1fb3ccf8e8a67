#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Indexing and normalizing arbitrary text must not panic
    let index = boolret::index::build_index(&[data]);
    for unit in index.units() {
        for term in boolret::utils::unit_terms(&unit.text, boolret::utils::STRIP_CHARS) {
            let _ = index.presence(&term, unit.id);
        }
    }
    let _ = boolret::utils::normalize_query_term(data);
});
