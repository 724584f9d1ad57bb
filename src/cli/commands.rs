//! Command execution for the Quern CLI.

use std::io::{self, BufRead, Write};

use log::{info, warn};

use crate::cli::args::QuernArgs;
use crate::cli::output::{BuildStats, QueryResults, output_results, output_stats};
use crate::error::Result;
use crate::index::{IndexBuilder, InvertedIndex, LineCorpus};
use crate::query::evaluate;

/// Build the index from the corpus and run queries per the parsed args.
pub fn execute_command(args: QuernArgs) -> Result<()> {
    let mut index = InvertedIndex::new();

    // A corpus that cannot be opened is reported, not fatal: the prompt
    // still runs against the empty index.
    let pages = match LineCorpus::open(&args.corpus) {
        Ok(mut corpus) => IndexBuilder::new().build(&mut corpus, &mut index)?,
        Err(e) => {
            warn!("{e}; continuing with an empty index");
            0
        }
    };

    info!(
        "indexed {} pages containing {} unique terms",
        pages,
        index.term_count()
    );

    match &args.query {
        Some(line) => run_query(&index, line, &args),
        None => {
            let stats = BuildStats {
                pages_indexed: pages,
                unique_terms: index.term_count(),
            };
            output_stats(&stats, &args)?;
            run_prompt(&index, &args)
        }
    }
}

/// Evaluate one query line and print its results.
fn run_query(index: &InvertedIndex, line: &str, args: &QuernArgs) -> Result<()> {
    let results = QueryResults::new(line, evaluate(index, line));
    output_results(&results, args)
}

/// The interactive read-loop: prompt, evaluate, print, until a blank line.
///
/// A blank line means "quit", not "query with zero matches" — it produces
/// no match report at all.
fn run_prompt(index: &InvertedIndex, args: &QuernArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print!("Enter query sentence (press enter to quit): ");
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            break;
        }

        run_query(index, line, args)?;
    }

    println!("Thank you for searching!");
    Ok(())
}
