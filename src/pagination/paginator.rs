//! Auto-paginating iterator
//!
//! Walks a collection page by page, fetching the next page only when the
//! items of the current one have been consumed.

use super::types::PagedResponse;
use crate::error::Result;
use crate::filter::RequestOptions;
use std::fmt;
use std::iter::FusedIterator;
use tracing::debug;

/// Fetches one page for the given options
pub type PageFetcher<T> = Box<dyn FnMut(&RequestOptions) -> Result<PagedResponse<T>> + Send>;

/// Lazy iterator over every item of a collection
///
/// Nothing is requested until the first call to `next()`. Filters, sort and
/// limit from the base options are sent with every page; page and offset are
/// managed by the paginator.
///
/// A failed fetch is yielded once as `Some(Err(..))`, after which the iterator
/// is finished.
pub struct AutoPaginator<T> {
    fetch: PageFetcher<T>,
    options: RequestOptions,
    current: std::vec::IntoIter<T>,
    next_page: Option<u32>,
    pages_fetched: u32,
}

impl<T> AutoPaginator<T> {
    /// Create a paginator starting at page 1
    pub fn new(options: RequestOptions, fetch: PageFetcher<T>) -> Self {
        Self {
            fetch,
            options,
            current: Vec::new().into_iter(),
            next_page: Some(1),
            pages_fetched: 0,
        }
    }

    /// Create a paginator from a closure
    pub fn from_fn<F>(options: RequestOptions, fetch: F) -> Self
    where
        F: FnMut(&RequestOptions) -> Result<PagedResponse<T>> + Send + 'static,
    {
        Self::new(options, Box::new(fetch))
    }

    /// Number of pages requested so far
    pub fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    fn fetch_next(&mut self, page: u32) -> Result<()> {
        let options = self.options.for_page(page);
        let response = (self.fetch)(&options)?;
        self.pages_fetched += 1;

        let more = response.has_next_page() && !response.is_empty();
        debug!(
            "Fetched page {}/{} ({} items)",
            response.page(),
            response.pages(),
            response.len()
        );

        self.next_page = if more { page.checked_add(1) } else { None };
        self.current = response.into_iter();
        Ok(())
    }
}

impl<T> Iterator for AutoPaginator<T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.current.next() {
                return Some(Ok(item));
            }

            let page = self.next_page.take()?;
            if let Err(e) = self.fetch_next(page) {
                return Some(Err(e));
            }
        }
    }
}

impl<T> FusedIterator for AutoPaginator<T> {}

impl<T> fmt::Debug for AutoPaginator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoPaginator")
            .field("options", &self.options)
            .field("buffered", &self.current.len())
            .field("next_page", &self.next_page)
            .field("pages_fetched", &self.pages_fetched)
            .finish_non_exhaustive()
    }
}
