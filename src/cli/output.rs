//! Output formatting for CLI results.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, QuernArgs};
use crate::error::Result;
use crate::types::ResultSet;

/// Result structure for index construction.
#[derive(Debug, Serialize, Deserialize)]
pub struct BuildStats {
    pub pages_indexed: usize,
    pub unique_terms: usize,
}

/// Result structure for a single evaluated query.
#[derive(Debug, Serialize, Deserialize)]
pub struct QueryResults {
    pub query: String,
    pub pages: Vec<String>,
    pub total_matches: usize,
}

impl QueryResults {
    /// Package an evaluated result set for output.
    pub fn new(query: &str, results: ResultSet) -> Self {
        let total_matches = results.len();
        QueryResults {
            query: query.to_string(),
            pages: results.into_iter().collect(),
            total_matches,
        }
    }
}

/// Print index-construction stats in the selected format.
pub fn output_stats(stats: &BuildStats, args: &QuernArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!(
                "Indexed {} pages containing {} unique terms",
                stats.pages_indexed, stats.unique_terms
            );
            println!();
            Ok(())
        }
        OutputFormat::Json => output_json(stats),
    }
}

/// Print an evaluated query's results in the selected format.
pub fn output_results(results: &QueryResults, args: &QuernArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("Found {} matching pages", results.total_matches);
            for page in &results.pages {
                println!("{page}");
            }
            println!();
            Ok(())
        }
        OutputFormat::Json => output_json(results),
    }
}

fn output_json<T: Serialize>(result: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}
