//! `/quote` resource

use super::client::{Connection, ResourceClient};
use crate::error::Result;
use crate::filter::RequestOptions;
use crate::models::Quote;
use crate::pagination::{AutoPaginator, PagedResponse};

/// Collection path for quotes
pub const QUOTE_PATH: &str = "/quote";

/// Quotes across all movies
#[derive(Debug, Clone)]
pub struct QuoteResource {
    client: ResourceClient<Quote>,
}

impl QuoteResource {
    /// Create the resource on a shared connection
    pub fn new(connection: Connection) -> Self {
        Self {
            client: ResourceClient::new(QUOTE_PATH, connection),
        }
    }

    /// Fetch a single page of quotes
    pub fn list(&self, options: Option<&RequestOptions>) -> Result<PagedResponse<Quote>> {
        self.client.list(options)
    }

    /// Fetch one quote by id
    pub fn get_by_id(&self, id: &str) -> Result<Quote> {
        self.client.get_by_id(id)
    }

    /// Iterate every quote across all pages
    pub fn list_all(&self, options: Option<RequestOptions>) -> AutoPaginator<Quote> {
        self.client.list_all(options)
    }
}
