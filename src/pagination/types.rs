//! Pagination types
//!
//! The list envelope every One API collection endpoint returns.

use serde::{Deserialize, Serialize};

/// One page of a collection
///
/// The items arrive as `docs` and are required. The numeric fields default to
/// zero when the API leaves them out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    #[serde(rename = "docs")]
    items: Vec<T>,
    #[serde(default)]
    total: u64,
    #[serde(default)]
    limit: u64,
    #[serde(default)]
    offset: u64,
    #[serde(default)]
    page: u64,
    #[serde(default)]
    pages: u64,
}

impl<T> PagedResponse<T> {
    /// Build a page by hand
    pub fn new(items: Vec<T>, total: u64, limit: u64, offset: u64, page: u64, pages: u64) -> Self {
        Self {
            items,
            total,
            limit,
            offset,
            page,
            pages,
        }
    }

    /// Items on this page
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Total number of items across all pages
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Page size used by the server
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Offset of the first item
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Page number (1-based)
    pub fn page(&self) -> u64 {
        self.page
    }

    /// Number of pages
    pub fn pages(&self) -> u64 {
        self.pages
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the server reports a page after this one
    pub fn has_next_page(&self) -> bool {
        self.page < self.pages
    }

    /// Whether this is not the first page
    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }

    /// Iterate the items on this page
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Take the items, discarding the paging metadata
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> IntoIterator for PagedResponse<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PagedResponse<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
