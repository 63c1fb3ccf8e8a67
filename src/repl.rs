//! Interactive prompt loop
//!
//! Asks for documents, builds the index, answers a query, then offers to
//! change the documents (rebuilding the index) and finally to re-query the
//! last index until the user declines. End of input ends the session.

use crate::error::{Result, RetrievalError};
use crate::index::build::build_index_with_config;
use crate::index::incidence::IncidenceIndex;
use crate::index::types::IndexConfig;
use crate::output::{write_matches, write_unknown_terms};
use crate::query::executor::evaluate;
use std::io::{BufRead, Write};
use termcolor::{Color, ColorSpec, WriteColor};
use tracing::debug;

const PROMPT_DOC_COUNT: &str = "Enter the number of documents: ";
const PROMPT_QUERY: &str = "Enter your query: ";
const PROMPT_NEW_QUERY: &str = "Enter your new query: ";
const CONFIRM_DOCUMENTS: &str = "Do you want to change the documents? (yes/no): ";
const CONFIRM_QUERY: &str = "Do you want to change the query? (yes/no): ";

pub struct Session<R, W> {
    input: R,
    out: W,
    config: IndexConfig,
    show_units: bool,
}

impl<R: BufRead, W: WriteColor> Session<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            input,
            out,
            config: IndexConfig::default(),
            show_units: false,
        }
    }

    pub fn with_index_config(mut self, config: IndexConfig) -> Self {
        self.config = config;
        self
    }

    pub fn show_units(mut self, show_units: bool) -> Self {
        self.show_units = show_units;
        self
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.out
    }

    pub fn run(&mut self) -> Result<()> {
        let index = loop {
            let Some(index) = self.read_documents()? else {
                return Ok(());
            };

            let Some(query) = self.prompt(PROMPT_QUERY)? else {
                return Ok(());
            };
            self.answer(&index, &query)?;

            if !self.confirm(CONFIRM_DOCUMENTS)? {
                break index;
            }
        };

        while self.confirm(CONFIRM_QUERY)? {
            let Some(query) = self.prompt(PROMPT_NEW_QUERY)? else {
                break;
            };
            self.answer(&index, &query)?;
        }

        Ok(())
    }

    /// Prompt for a document count and that many documents, then index them
    fn read_documents(&mut self) -> Result<Option<IncidenceIndex>> {
        let Some(count) = self.read_doc_count()? else {
            return Ok(None);
        };

        let mut documents = Vec::with_capacity(count);
        for i in 1..=count {
            let Some(doc) = self.prompt(&format!("Enter document {}: ", i))? else {
                return Ok(None);
            };
            documents.push(doc);
        }

        let index = build_index_with_config(&documents, &self.config);
        debug!(units = index.unit_count(), "index rebuilt from interactive input");
        Ok(Some(index))
    }

    fn read_doc_count(&mut self) -> Result<Option<usize>> {
        loop {
            let Some(reply) = self.prompt(PROMPT_DOC_COUNT)? else {
                return Ok(None);
            };
            match parse_doc_count(&reply) {
                Ok(count) => return Ok(Some(count)),
                Err(e) => {
                    debug!("{}", e);
                    self.out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                    writeln!(self.out, "{}", e)?;
                    self.out.reset()?;
                }
            }
        }
    }

    fn answer(&mut self, index: &IncidenceIndex, query: &str) -> Result<()> {
        let eval = evaluate(query, index.unit_count(), index);
        write_unknown_terms(&mut self.out, &eval)?;
        write_matches(&mut self.out, index, &eval, self.show_units)?;
        Ok(())
    }

    /// `yes` in any case confirms; anything else, or end of input, declines
    fn confirm(&mut self, question: &str) -> Result<bool> {
        Ok(self
            .prompt(question)?
            .is_some_and(|answer| answer.to_lowercase() == "yes"))
    }

    /// Write `message` and read one line without its line terminator
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.out, "{}", message)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Parse a document count reply; surrounding whitespace is allowed.
/// Any integer is accepted and a negative count means no documents.
pub fn parse_doc_count(reply: &str) -> Result<usize> {
    let count: i64 = reply
        .trim()
        .parse()
        .map_err(|_| RetrievalError::InvalidDocumentCount(reply.to_string()))?;
    Ok(usize::try_from(count).unwrap_or(0))
}
