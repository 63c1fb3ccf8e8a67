//! Output formatting for query results

use crate::index::incidence::IncidenceIndex;
use crate::index::types::{DocIndex, UnitId};
use crate::query::executor::Evaluation;
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

pub const RESULTS_HEADER: &str = "Documents satisfying the query:";

/// One matching unit, resolved against the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchEntry<'a> {
    pub unit: UnitId,
    /// Source document index
    pub document: DocIndex,
    /// Matched sentence
    pub sentence: &'a str,
    /// Full text of the source document
    pub text: &'a str,
}

/// JSON report of one query
#[derive(Debug, Serialize)]
pub struct SearchReport<'a> {
    pub query: &'a str,
    pub matches: Vec<MatchEntry<'a>>,
    pub unknown_terms: Vec<&'a str>,
}

impl<'a> SearchReport<'a> {
    pub fn new(query: &'a str, index: &'a IncidenceIndex, eval: &'a Evaluation) -> Self {
        Self {
            query,
            matches: resolve_matches(index, eval),
            unknown_terms: eval.unknown_terms.iter().map(|u| u.term.as_str()).collect(),
        }
    }
}

/// Map result unit ids back to sentences and their source documents.
/// Ids outside the index are dropped.
pub fn resolve_matches<'a>(index: &'a IncidenceIndex, eval: &Evaluation) -> Vec<MatchEntry<'a>> {
    eval.units
        .iter()
        .filter_map(|id| {
            let unit = index.unit(id)?;
            let text = index.document(unit.source_doc)?;
            Some(MatchEntry {
                unit: id,
                document: unit.source_doc,
                sentence: &unit.text,
                text,
            })
        })
        .collect()
}

/// Write `doc{unit}: {text}` lines under the results header.
///
/// `text` is the source document, or the matched sentence when `show_units`
/// is set.
pub fn write_matches<W: WriteColor>(
    out: &mut W,
    index: &IncidenceIndex,
    eval: &Evaluation,
    show_units: bool,
) -> io::Result<()> {
    writeln!(out, "{}", RESULTS_HEADER)?;

    for entry in resolve_matches(index, eval) {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(out, "doc{}", entry.unit)?;
        out.reset()?;
        let text = if show_units { entry.sentence } else { entry.text };
        writeln!(out, ": {}", text)?;
    }

    Ok(())
}

/// Write one notice line per query term missing from the vocabulary
pub fn write_unknown_terms<W: WriteColor>(out: &mut W, eval: &Evaluation) -> io::Result<()> {
    for notice in &eval.unknown_terms {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        writeln!(out, "{}", notice)?;
        out.reset()?;
    }
    Ok(())
}

/// Print results to stdout, notices to stderr
pub fn print_matches(
    index: &IncidenceIndex,
    eval: &Evaluation,
    color: bool,
    show_units: bool,
) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    let mut stderr = StandardStream::stderr(choice);
    write_unknown_terms(&mut stderr, eval)?;

    let mut stdout = StandardStream::stdout(choice);
    write_matches(&mut stdout, index, eval, show_units)
}

/// Print the JSON report to stdout
pub fn print_json(query: &str, index: &IncidenceIndex, eval: &Evaluation) -> io::Result<()> {
    let report = SearchReport::new(query, index, eval);
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, &report)?;
    writeln!(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::build::build_index;
    use crate::query::executor::evaluate;
    use termcolor::NoColor;

    fn render(index: &IncidenceIndex, eval: &Evaluation, show_units: bool) -> String {
        let mut out = NoColor::new(Vec::new());
        write_matches(&mut out, index, eval, show_units).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn test_write_matches_source_documents() {
        let index = build_index(&["Cats purr. Dogs bark", "Birds sing"]);
        let eval = evaluate("dogs OR birds", index.unit_count(), &index);
        assert_eq!(
            render(&index, &eval, false),
            "Documents satisfying the query:\ndoc1: Cats purr. Dogs bark\ndoc2: Birds sing\n"
        );
    }

    #[test]
    fn test_write_matches_units() {
        let index = build_index(&["Cats purr. Dogs bark", "Birds sing"]);
        let eval = evaluate("dogs", index.unit_count(), &index);
        assert_eq!(
            render(&index, &eval, true),
            "Documents satisfying the query:\ndoc1: Dogs bark\n"
        );
    }

    #[test]
    fn test_no_matches_prints_header_only() {
        let index = build_index(&["a cat"]);
        let eval = evaluate("cat NOT cat", index.unit_count(), &index);
        assert_eq!(render(&index, &eval, false), "Documents satisfying the query:\n");
    }

    #[test]
    fn test_out_of_range_units_dropped() {
        let index = build_index(&["a cat"]);
        let eval = evaluate("", 3, &index);
        assert_eq!(resolve_matches(&index, &eval).len(), 1);
    }

    #[test]
    fn test_unknown_term_lines() {
        let index = build_index(&["a cat"]);
        let eval = evaluate("cat AND zephyr", index.unit_count(), &index);
        let mut out = NoColor::new(Vec::new());
        write_unknown_terms(&mut out, &eval).unwrap();
        assert_eq!(
            String::from_utf8(out.into_inner()).unwrap(),
            "Term 'zephyr' not found in documents.\n"
        );
    }

    #[test]
    fn test_report_json() {
        let index = build_index(&["a cat sat. a dog sat"]);
        let eval = evaluate("dog zephyr", index.unit_count(), &index);
        let report = SearchReport::new("dog zephyr", &index, &eval);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["query"], "dog zephyr");
        assert_eq!(value["matches"][0]["unit"], 1);
        assert_eq!(value["matches"][0]["document"], 0);
        assert_eq!(value["matches"][0]["sentence"], "a dog sat");
        assert_eq!(value["unknown_terms"][0], "zephyr");
    }
}
