#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

static INDEX: OnceLock<boolret::index::IncidenceIndex> = OnceLock::new();

fuzz_target!(|data: &str| {
    // Parsing and evaluating arbitrary queries must never panic, and the
    // result must stay inside the unit universe
    let index = INDEX.get_or_init(|| {
        boolret::index::build_index(&["a cat sat. a dog sat", "AND or NOT, ! ?", ""])
    });
    let eval = boolret::query::evaluate(data, index.unit_count(), index);
    assert!(eval.units.iter().all(|u| u < index.unit_count()));
});
