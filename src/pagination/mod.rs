//! Pagination module
//!
//! # Overview
//!
//! Every collection endpoint returns the same envelope, [`PagedResponse`].
//! [`AutoPaginator`] turns a page-fetching function into a flat, lazy
//! iterator over all items, requesting page `n + 1` only after page `n` has
//! been drained and the server reported more pages.

mod paginator;
mod types;

pub use paginator::{AutoPaginator, PageFetcher};
pub use types::PagedResponse;
