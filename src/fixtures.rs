//! Shared JSON bodies for unit tests

use serde_json::{json, Value};

pub(crate) const FELLOWSHIP_ID: &str = "5cd95395de30eff6ebccde5c";
pub(crate) const TWO_TOWERS_ID: &str = "5cd95395de30eff6ebccde5b";
pub(crate) const RETURN_OF_THE_KING_ID: &str = "5cd95395de30eff6ebccde5d";
pub(crate) const ONE_RING_QUOTE_ID: &str = "5cd96e05de30eff6ebcce7e9";

pub(crate) fn fellowship() -> Value {
    json!({
        "_id": FELLOWSHIP_ID,
        "name": "The Fellowship of the Ring",
        "runtimeInMinutes": 178,
        "budgetInMillions": 93,
        "boxOfficeRevenueInMillions": 871.5,
        "academyAwardNominations": 13,
        "academyAwardWins": 4,
        "rottenTomatoesScore": 91
    })
}

pub(crate) fn two_towers() -> Value {
    json!({
        "_id": TWO_TOWERS_ID,
        "name": "The Two Towers",
        "runtimeInMinutes": 179,
        "budgetInMillions": 94,
        "boxOfficeRevenueInMillions": 926,
        "academyAwardNominations": 6,
        "academyAwardWins": 2,
        "rottenTomatoesScore": 96
    })
}

pub(crate) fn return_of_the_king() -> Value {
    json!({
        "_id": RETURN_OF_THE_KING_ID,
        "name": "The Return of the King",
        "runtimeInMinutes": 201,
        "budgetInMillions": 94,
        "boxOfficeRevenueInMillions": 1120,
        "academyAwardNominations": 11,
        "academyAwardWins": 11,
        "rottenTomatoesScore": 95
    })
}

pub(crate) fn one_ring_quote() -> Value {
    json!({
        "_id": ONE_RING_QUOTE_ID,
        "dialog": "One Ring to rule them all.",
        "movie": RETURN_OF_THE_KING_ID,
        "character": "5cd99d4bde30eff6ebccfbe6"
    })
}

pub(crate) fn precious_quote() -> Value {
    json!({
        "_id": "5cd96e05de30eff6ebcce7ea",
        "dialog": "My precious.",
        "movie": RETURN_OF_THE_KING_ID,
        "character": "5cd99d4bde30eff6ebccfe9e"
    })
}

/// Wrap documents in the list envelope
pub(crate) fn envelope(docs: Vec<Value>, limit: u64, page: u64, pages: u64, total: u64) -> String {
    json!({
        "docs": docs,
        "total": total,
        "limit": limit,
        "offset": 0,
        "page": page,
        "pages": pages
    })
    .to_string()
}

/// Single-page envelope around the given documents
pub(crate) fn single_page(docs: Vec<Value>) -> String {
    let total = docs.len() as u64;
    envelope(docs, 1000, 1, 1, total)
}

pub(crate) fn movie_list() -> String {
    single_page(vec![fellowship(), two_towers(), return_of_the_king()])
}

pub(crate) fn quote_list() -> String {
    single_page(vec![one_ring_quote(), precious_quote()])
}

pub(crate) fn empty_page() -> String {
    single_page(Vec::new())
}

/// Page `page` of the three-movie trilogy at one movie per page
pub(crate) fn trilogy_page(page: u64) -> String {
    let movie = match page {
        1 => fellowship(),
        2 => two_towers(),
        _ => return_of_the_king(),
    };
    envelope(vec![movie], 1, page, 3, 3)
}
