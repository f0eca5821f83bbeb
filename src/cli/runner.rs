//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ClientSettings;
use crate::filter::{Filter, RequestOptions, RequestOptionsBuilder};
use crate::models::QuoteField;
use crate::OneApiClient;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Resolve settings: file, then environment, then command-line flags
    pub fn settings(&self) -> Result<ClientSettings> {
        let mut settings = match &self.cli.config {
            Some(path) => ClientSettings::from_file(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?,
            None => ClientSettings::default(),
        };
        settings.apply_env().context("Invalid environment override")?;

        if let Some(key) = &self.cli.api_key {
            settings.api_key = Some(key.clone());
        }
        if let Some(url) = &self.cli.base_url {
            settings.base_url.clone_from(url);
        }
        Ok(settings)
    }

    /// Run the CLI command, writing results to stdout
    pub fn run(&self) -> Result<()> {
        let settings = self.settings()?;
        debug!("Using API at {}", settings.base_url);

        let client = settings
            .into_builder()
            .and_then(|builder| builder.build())
            .context("Failed to create client")?;

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.execute(&client, &mut out)
    }

    /// Run the CLI command against an existing client
    pub fn execute(&self, client: &OneApiClient, out: &mut dyn Write) -> Result<()> {
        match &self.cli.command {
            Commands::Movies {
                limit,
                page,
                sort,
                all,
            } => {
                let mut builder = RequestOptions::builder();
                if let Some((field, direction)) = sort {
                    builder = builder.sort(field, *direction);
                }
                let builder = paging(builder, *limit, *page);

                if *all {
                    for movie in client.movies().list_all(Some(builder.build())) {
                        self.emit(out, &movie.context("Failed to list movies")?)?;
                    }
                } else {
                    let options = builder.build();
                    let movies = client
                        .movies()
                        .list(Some(&options))
                        .context("Failed to list movies")?;
                    for movie in &movies {
                        self.emit(out, movie)?;
                    }
                }
            }
            Commands::Movie { id, with_quotes } => {
                if *with_quotes {
                    let movie = client
                        .movies()
                        .get_with_quotes(id)
                        .with_context(|| format!("Failed to fetch movie {id} with quotes"))?;
                    self.emit(out, &movie)?;
                } else {
                    let movie = client
                        .movies()
                        .get_by_id(id)
                        .with_context(|| format!("Failed to fetch movie {id}"))?;
                    self.emit(out, &movie)?;
                }
            }
            Commands::Quotes {
                dialog,
                movie,
                limit,
                all,
            } => {
                let mut builder = RequestOptions::builder();
                if let Some(regex) = dialog {
                    let filter = Filter::field(QuoteField::Dialog)?.matches_regex(regex);
                    builder = builder.filter(filter);
                }
                if let Some(movie_id) = movie {
                    let filter = Filter::field(QuoteField::MovieId)?.equals(movie_id);
                    builder = builder.filter(filter);
                }
                let options = paging(builder, *limit, None).build();

                if *all {
                    for quote in client.quotes().list_all(Some(options)) {
                        self.emit(out, &quote.context("Failed to list quotes")?)?;
                    }
                } else {
                    let quotes = client
                        .quotes()
                        .list(Some(&options))
                        .context("Failed to list quotes")?;
                    for quote in &quotes {
                        self.emit(out, quote)?;
                    }
                }
            }
            Commands::Quote { id } => {
                let quote = client
                    .quotes()
                    .get_by_id(id)
                    .with_context(|| format!("Failed to fetch quote {id}"))?;
                self.emit(out, &quote)?;
            }
        }
        Ok(())
    }

    fn emit<T: Serialize>(&self, out: &mut dyn Write, value: &T) -> Result<()> {
        let line = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        writeln!(out, "{line}")?;
        Ok(())
    }
}

fn paging(
    mut builder: RequestOptionsBuilder,
    limit: Option<u32>,
    page: Option<u32>,
) -> RequestOptionsBuilder {
    if let Some(limit) = limit {
        builder = builder.limit(limit);
    }
    if let Some(page) = page {
        builder = builder.page(page);
    }
    builder
}
