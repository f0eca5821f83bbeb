//! Movie model

use crate::models::Quote;
use crate::pagination::PagedResponse;
use serde::{Deserialize, Serialize};

/// A movie as returned by `/movie`
///
/// Missing scalar fields decode to their zero value; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Movie {
    /// Document id
    #[serde(rename = "_id")]
    pub id: String,
    /// Title
    pub name: String,
    /// Runtime in minutes
    pub runtime_in_minutes: u32,
    /// Budget in millions of USD
    pub budget_in_millions: f64,
    /// Box office revenue in millions of USD
    pub box_office_revenue_in_millions: f64,
    /// Academy Award nominations
    pub academy_award_nominations: u32,
    /// Academy Award wins
    pub academy_award_wins: u32,
    /// Rotten Tomatoes score (0-100)
    pub rotten_tomatoes_score: f64,
}

/// A movie together with the first page of its quotes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieWithQuotes {
    /// The movie
    pub movie: Movie,
    /// First page of quotes for the movie
    pub quotes: PagedResponse<Quote>,
}

impl MovieWithQuotes {
    /// Pair a movie with a page of its quotes
    pub fn new(movie: Movie, quotes: PagedResponse<Quote>) -> Self {
        Self { movie, quotes }
    }
}
