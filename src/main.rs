use anyhow::{Context, Result};
use boolret::config::{Config, OutputFormat};
use boolret::error::RetrievalError;
use boolret::index::stats::{write_matrix, write_stats, write_vocabulary};
use boolret::index::{IncidenceIndex, build_index_with_config};
use boolret::output;
use boolret::query::evaluate;
use boolret::repl::Session;
use boolret::utils::logging::init_logger;
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use termcolor::{ColorChoice, StandardStream};
use tracing::warn;

#[derive(Parser)]
#[command(name = "boolret")]
#[command(about = "Boolean retrieval over small text collections")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Args)]
struct DocumentArgs {
    /// Document text (repeatable)
    #[arg(short = 'd', long = "doc", value_name = "TEXT")]
    docs: Vec<String>,

    /// Read one document from a file (repeatable, indexed after --doc values)
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    files: Vec<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a boolean query against the given documents
    Search {
        /// Query, e.g. "cat OR dog NOT bird"
        query: String,

        #[command(flatten)]
        documents: DocumentArgs,

        /// Print a JSON report
        #[arg(long)]
        json: bool,

        /// Print matched sentences instead of whole documents
        #[arg(long)]
        units: bool,
    },
    /// Print the sorted vocabulary
    Vocab {
        #[command(flatten)]
        documents: DocumentArgs,
    },
    /// Print the term incidence matrix
    Matrix {
        #[command(flatten)]
        documents: DocumentArgs,
    },
    /// Show index statistics
    Stats {
        #[command(flatten)]
        documents: DocumentArgs,
    },
    /// Prompt for documents and queries (default)
    Interactive {
        /// Print matched sentences instead of whole documents
        #[arg(long)]
        units: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, problems) = Config::discover();
    let color = config.merge_color(cli.no_color);
    init_logger(cli.verbose, color);
    for e in problems {
        warn!("{}", e);
    }

    match cli.command {
        Some(Commands::Search {
            query,
            documents,
            json,
            units,
        }) => {
            let index = load_index(documents, &config)?;
            let eval = evaluate(&query, index.unit_count(), &index);
            match config.merge_format(json) {
                OutputFormat::Json => output::print_json(&query, &index, &eval)?,
                OutputFormat::Text => {
                    output::print_matches(&index, &eval, color, config.merge_show_units(units))?
                }
            }
        }
        Some(Commands::Vocab { documents }) => {
            let index = load_index(documents, &config)?;
            write_vocabulary(&mut io::stdout().lock(), &index)?;
        }
        Some(Commands::Matrix { documents }) => {
            let index = load_index(documents, &config)?;
            write_matrix(&mut io::stdout().lock(), &index)?;
        }
        Some(Commands::Stats { documents }) => {
            let index = load_index(documents, &config)?;
            write_stats(&mut io::stdout().lock(), &index)?;
        }
        Some(Commands::Interactive { units }) => {
            run_interactive(&config, color, units)?;
        }
        None => {
            run_interactive(&config, color, false)?;
        }
    }

    Ok(())
}

fn run_interactive(config: &Config, color: bool, units: bool) -> Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), StandardStream::stdout(choice))
        .with_index_config(config.index.clone())
        .show_units(config.merge_show_units(units));
    session.run().context("Interactive session failed")?;

    // Leave the shell prompt on a fresh line after the last question
    let mut out = session.into_output();
    writeln!(out)?;
    Ok(())
}

fn load_index(args: DocumentArgs, config: &Config) -> Result<IncidenceIndex> {
    let documents = load_documents(args)?;
    Ok(build_index_with_config(&documents, &config.index))
}

/// `--doc` values in order, then the trimmed contents of each `--file`
fn load_documents(args: DocumentArgs) -> Result<Vec<String>> {
    let mut documents = args.docs;
    for path in args.files {
        let content = fs::read_to_string(&path)
            .map_err(|source| RetrievalError::ReadDocument {
                path: path.clone(),
                source,
            })
            .with_context(|| format!("Failed to load document {}", path.display()))?;
        documents.push(content.trim().to_string());
    }
    Ok(documents)
}
