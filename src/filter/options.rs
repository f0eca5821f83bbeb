//! Request options
//!
//! Filters, sorting and paging for a single list request.

use super::expression::{FilterExpression, FilterableField};
use crate::types::SortDirection;

/// Filters, sort and paging for a list request
///
/// Unset fields are left out of the query entirely; nothing is defaulted here.
///
/// ```
/// use lotr_sdk::filter::{Filter, RequestOptions};
/// use lotr_sdk::SortDirection;
///
/// let options = RequestOptions::builder()
///     .filter(Filter::field("name")?.matches_regex("/Ring/i"))
///     .sort("name", SortDirection::Asc)
///     .limit(10)
///     .page(2)
///     .build();
///
/// assert_eq!(options.to_query_string(), "name=/Ring/i&sort=name:asc&limit=10&page=2");
/// # Ok::<(), lotr_sdk::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    filters: Vec<FilterExpression>,
    sort: Option<(String, SortDirection)>,
    limit: Option<u32>,
    page: Option<u32>,
    offset: Option<u32>,
}

impl RequestOptions {
    /// Create a new options builder
    pub fn builder() -> RequestOptionsBuilder {
        RequestOptionsBuilder::default()
    }

    /// Filters, in insertion order
    pub fn filters(&self) -> &[FilterExpression] {
        &self.filters
    }

    /// Sort field and direction
    pub fn sort(&self) -> Option<(&str, SortDirection)> {
        self.sort.as_ref().map(|(field, dir)| (field.as_str(), *dir))
    }

    /// Page size
    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    /// Page number (1-based)
    pub fn page(&self) -> Option<u32> {
        self.page
    }

    /// Item offset
    pub fn offset(&self) -> Option<u32> {
        self.offset
    }

    /// Whether no option is set at all
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
            && self.sort.is_none()
            && self.limit.is_none()
            && self.page.is_none()
            && self.offset.is_none()
    }

    /// Same filters, sort and limit, pinned to the given page with no offset
    #[must_use]
    pub fn for_page(&self, page: u32) -> Self {
        Self {
            filters: self.filters.clone(),
            sort: self.sort.clone(),
            limit: self.limit,
            page: Some(page),
            offset: None,
        }
    }

    /// Query string without the leading `?`; empty when nothing is set
    pub fn to_query_string(&self) -> String {
        let mut parts: Vec<String> = self
            .filters
            .iter()
            .map(|f| f.as_query_param().to_string())
            .collect();

        if let Some((field, direction)) = &self.sort {
            parts.push(format!("sort={field}:{direction}"));
        }
        if let Some(limit) = self.limit {
            parts.push(format!("limit={limit}"));
        }
        if let Some(page) = self.page {
            parts.push(format!("page={page}"));
        }
        if let Some(offset) = self.offset {
            parts.push(format!("offset={offset}"));
        }

        parts.join("&")
    }
}

/// Builder for [`RequestOptions`]
#[derive(Debug, Default)]
pub struct RequestOptionsBuilder {
    options: RequestOptions,
}

impl RequestOptionsBuilder {
    /// Add a filter
    #[must_use]
    pub fn filter(mut self, expression: FilterExpression) -> Self {
        self.options.filters.push(expression);
        self
    }

    /// Sort by a field
    #[must_use]
    pub fn sort(mut self, field: impl FilterableField, direction: SortDirection) -> Self {
        self.options.sort = Some((field.field_name().to_string(), direction));
        self
    }

    /// Set the page size
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.options.limit = Some(limit);
        self
    }

    /// Set the page number (1-based)
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.options.page = Some(page);
        self
    }

    /// Set the item offset
    #[must_use]
    pub fn offset(mut self, offset: u32) -> Self {
        self.options.offset = Some(offset);
        self
    }

    /// Build the options
    pub fn build(self) -> RequestOptions {
        self.options
    }
}
