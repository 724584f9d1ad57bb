//! Command line argument parsing for the Quern CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Quern - a tiny in-memory boolean keyword search engine
#[derive(Parser, Debug, Clone)]
#[command(name = "quern")]
#[command(about = "Build an in-memory inverted index and run boolean keyword queries")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct QuernArgs {
    /// Corpus file: one document identifier line followed by one text line
    /// per document
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Evaluate a single query and exit instead of starting the
    /// interactive prompt
    #[arg(short = 'e', long = "query", value_name = "QUERY")]
    pub query: Option<String>,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,
}

impl QuernArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}
