//! CLI commands and argument parsing

use crate::types::SortDirection;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line client for The One API
#[derive(Parser, Debug)]
#[command(name = "lotr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// API key (overrides the settings file and LOTR_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// API root (overrides the settings file and LOTR_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List movies
    Movies {
        /// Page size
        #[arg(long)]
        limit: Option<u32>,

        /// Page number (ignored with --all)
        #[arg(long)]
        page: Option<u32>,

        /// Sort order, e.g. `name:asc` or `budgetInMillions:desc`
        #[arg(long, value_parser = parse_sort)]
        sort: Option<(String, SortDirection)>,

        /// Follow every page
        #[arg(long)]
        all: bool,
    },

    /// Show one movie
    Movie {
        /// Movie id
        id: String,

        /// Include the first page of the movie's quotes
        #[arg(long)]
        with_quotes: bool,
    },

    /// List quotes
    Quotes {
        /// Regex the dialog must match, e.g. `/ring/i`
        #[arg(long)]
        dialog: Option<String>,

        /// Only quotes from this movie id
        #[arg(long)]
        movie: Option<String>,

        /// Page size
        #[arg(long)]
        limit: Option<u32>,

        /// Follow every page
        #[arg(long)]
        all: bool,
    },

    /// Show one quote
    Quote {
        /// Quote id
        id: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line
    Json,
    /// Indented JSON
    Pretty,
}

/// Parse `field:direction`; the direction defaults to ascending
pub fn parse_sort(value: &str) -> Result<(String, SortDirection), String> {
    let (field, direction) = match value.split_once(':') {
        Some((field, direction)) => (field, direction.parse()?),
        None => (value, SortDirection::Asc),
    };
    if field.trim().is_empty() {
        return Err("sort field must not be empty".to_string());
    }
    Ok((field.trim().to_string(), direction))
}
