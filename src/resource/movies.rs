//! `/movie` resource

use super::client::{check_id, Connection, ResourceClient};
use crate::error::Result;
use crate::filter::RequestOptions;
use crate::models::{Movie, MovieWithQuotes, Quote};
use crate::pagination::{AutoPaginator, PagedResponse};

/// Collection path for movies
pub const MOVIE_PATH: &str = "/movie";

const QUOTE_SEGMENT: &str = "quote";

/// Movies, plus the quotes nested under each movie
#[derive(Debug, Clone)]
pub struct MovieResource {
    client: ResourceClient<Movie>,
}

impl MovieResource {
    /// Create the resource on a shared connection
    pub fn new(connection: Connection) -> Self {
        Self {
            client: ResourceClient::new(MOVIE_PATH, connection),
        }
    }

    /// Fetch a single page of movies
    pub fn list(&self, options: Option<&RequestOptions>) -> Result<PagedResponse<Movie>> {
        self.client.list(options)
    }

    /// Fetch one movie by id
    pub fn get_by_id(&self, id: &str) -> Result<Movie> {
        self.client.get_by_id(id)
    }

    /// Iterate every movie across all pages
    pub fn list_all(&self, options: Option<RequestOptions>) -> AutoPaginator<Movie> {
        self.client.list_all(options)
    }

    /// Fetch one page of quotes from `/movie/{id}/quote`
    pub fn quotes(
        &self,
        movie_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<PagedResponse<Quote>> {
        check_id(movie_id)?;
        self.client
            .connection()
            .get_page_at(MOVIE_PATH, &[movie_id, QUOTE_SEGMENT], options)
    }

    /// Iterate every quote of a movie across all pages
    pub fn list_all_quotes(
        &self,
        movie_id: &str,
        options: Option<RequestOptions>,
    ) -> AutoPaginator<Quote> {
        let connection = self.client.connection().clone();
        let movie_id = movie_id.to_string();
        AutoPaginator::from_fn(options.unwrap_or_default(), move |page_options| {
            check_id(&movie_id)?;
            connection.get_page_at(
                MOVIE_PATH,
                &[movie_id.as_str(), QUOTE_SEGMENT],
                Some(page_options),
            )
        })
    }

    /// Fetch a movie and the first page of its quotes
    ///
    /// Two sequential requests; the quotes are not fetched if the movie lookup
    /// fails.
    pub fn get_with_quotes(&self, movie_id: &str) -> Result<MovieWithQuotes> {
        let movie = self.get_by_id(movie_id)?;
        let quotes = self.quotes(movie_id, None)?;
        Ok(MovieWithQuotes::new(movie, quotes))
    }
}
