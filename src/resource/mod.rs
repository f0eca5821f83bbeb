//! Resource module
//!
//! Typed access to the API's collections.
//!
//! # Overview
//!
//! [`ResourceClient`] does the work common to every collection: URL building,
//! status classification and envelope decoding. [`MovieResource`] and
//! [`QuoteResource`] expose it per collection; all of them share one
//! [`Connection`] and therefore one transport.

mod client;
mod movies;
mod quotes;

pub use client::{Connection, ResourceClient};
pub use movies::{MovieResource, MOVIE_PATH};
pub use quotes::{QuoteResource, QUOTE_PATH};
