//! CLI module
//!
//! Command-line interface over the client.
//!
//! # Commands
//!
//! - `movies` - List movies, optionally across every page
//! - `movie` - Show one movie, optionally with its quotes
//! - `quotes` - List quotes, filtered by dialog or movie
//! - `quote` - Show one quote

mod commands;
mod runner;

pub use commands::{parse_sort, Cli, Commands, OutputFormat};
pub use runner::Runner;
