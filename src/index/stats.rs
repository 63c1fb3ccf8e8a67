use crate::index::incidence::IncidenceIndex;
use std::io::{self, Write};

/// Write index statistics
pub fn write_stats<W: Write>(out: &mut W, index: &IncidenceIndex) -> io::Result<()> {
    writeln!(out, "Index Statistics")?;
    writeln!(out, "================")?;
    writeln!(out)?;
    writeln!(out, "Documents:        {}", index.doc_count())?;
    writeln!(out, "Sentence units:   {}", index.unit_count())?;
    writeln!(out, "Vocabulary size:  {}", index.vocabulary().len())?;

    // Densest terms first
    let mut freqs: Vec<_> = index
        .vocabulary()
        .iter()
        .filter_map(|term| index.postings(term).map(|docs| (term, docs.len())))
        .collect();
    freqs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    if !freqs.is_empty() {
        writeln!(out)?;
        writeln!(out, "Most frequent terms:")?;
        for (term, units) in freqs.iter().take(10) {
            writeln!(out, "  {:15} {}", display_term(term), units)?;
        }
        if freqs.len() > 10 {
            writeln!(out, "  ... and {} more", freqs.len() - 10)?;
        }
    }

    Ok(())
}

/// Write the vocabulary, one term per line
pub fn write_vocabulary<W: Write>(out: &mut W, index: &IncidenceIndex) -> io::Result<()> {
    for term in index.vocabulary() {
        writeln!(out, "{}", display_term(term))?;
    }
    Ok(())
}

/// Write the incidence matrix, terms as rows and units as columns
pub fn write_matrix<W: Write>(out: &mut W, index: &IncidenceIndex) -> io::Result<()> {
    let label_width = index
        .vocabulary()
        .iter()
        .map(|t| display_term(t).chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    write!(out, "{:label_width$}", "term")?;
    for unit in 0..index.unit_count() {
        write!(out, " u{}", unit)?;
    }
    writeln!(out)?;

    for (term, row) in index.matrix_rows() {
        write!(out, "{:label_width$}", display_term(term))?;
        for (unit, cell) in row.iter().enumerate() {
            // Right-align under the "u{n}" header
            let width = format!("u{}", unit).len();
            write!(out, " {:>width$}", cell)?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// The empty term is real but invisible; show it quoted
fn display_term(term: &str) -> &str {
    if term.is_empty() { "\"\"" } else { term }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::build::build_index;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_vocabulary() {
        let index = build_index(&["b a , c"]);
        let text = render(|out| write_vocabulary(out, &index));
        assert_eq!(text, "\"\"\na\nb\nc\n");
    }

    #[test]
    fn test_write_matrix() {
        let index = build_index(&["cat. dog cat"]);
        let text = render(|out| write_matrix(out, &index));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "term u0 u1");
        assert_eq!(lines[1], "cat   1  1");
        assert_eq!(lines[2], "dog   0  1");
    }

    #[test]
    fn test_write_stats() {
        let index = build_index(&["a cat sat. a dog sat", "a bird"]);
        let text = render(|out| write_stats(out, &index));
        assert!(text.contains("Documents:        2"));
        assert!(text.contains("Sentence units:   3"));
        assert!(text.contains("Vocabulary size:  5"));
        assert!(text.contains("Most frequent terms:"));
    }
}
