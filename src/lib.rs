// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # LOTR SDK
//!
//! A resilient, auto-paginating client for The One API.
//!
//! ## Features
//!
//! - **Typed resources**: movies and quotes decoded into plain structs
//! - **Filtering and sorting**: type-safe field references, every API operator
//! - **Auto-pagination**: one lazy iterator across all pages
//! - **Rate limit handling**: bounded retries on HTTP 429 with pluggable backoff
//! - **Pluggable transport**: swap the HTTP layer for tests or proxies
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lotr_sdk::filter::{Filter, RequestOptions};
//! use lotr_sdk::models::MovieField;
//! use lotr_sdk::{OneApiClient, Result, SortDirection};
//!
//! fn main() -> Result<()> {
//!     let client = OneApiClient::builder().api_key("my-key").build()?;
//!
//!     let options = RequestOptions::builder()
//!         .filter(Filter::field(MovieField::BudgetInMillions)?.greater_than(100))
//!         .sort(MovieField::Name, SortDirection::Asc)
//!         .build();
//!
//!     for movie in client.movies().list_all(Some(options)) {
//!         println!("{}", movie?.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                         OneApiClient                          │
//! │        movies() → MovieResource    quotes() → QuoteResource   │
//! └───────────────────────────────────────────────────────────────┘
//!                                 │
//! ┌─────────────┬─────────────────┴──────┬────────────────────────┐
//! │   Filter    │    ResourceClient      │     AutoPaginator      │
//! ├─────────────┼────────────────────────┼────────────────────────┤
//! │ Operators   │ URL building           │ Lazy page fetching     │
//! │ Sort/limit  │ Status → Error         │ Filters carried over   │
//! │ Field enums │ Envelope decoding      │ Stops on last page     │
//! └─────────────┴────────────────────────┴────────────────────────┘
//!                                 │
//! ┌───────────────────────────────┴───────────────────────────────┐
//! │      RetryingTransport (429 + x-ratelimit-*) → Transport      │
//! └───────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the SDK
pub mod error;

/// Common types and type aliases
pub mod types;

/// HTTP transport with rate-limit retries
pub mod http;

/// Filters, sorting and paging options
pub mod filter;

/// Paged responses and auto-pagination
pub mod pagination;

/// Domain models and field references
pub mod models;

/// Resource clients
pub mod resource;

/// Client entry point and builder
pub mod client;

/// Settings from YAML and the environment
pub mod config;

/// Command-line interface
pub mod cli;

#[cfg(test)]
pub(crate) mod fixtures;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{OneApiClient, OneApiClientBuilder};
pub use config::ClientSettings;
pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
