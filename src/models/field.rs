//! Type-safe field references for filtering and sorting

use crate::filter::FilterableField;
use std::fmt;

/// Filterable fields of [`crate::models::Movie`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovieField {
    /// `_id`
    Id,
    /// `name`
    Name,
    /// `runtimeInMinutes`
    RuntimeInMinutes,
    /// `budgetInMillions`
    BudgetInMillions,
    /// `boxOfficeRevenueInMillions`
    BoxOfficeRevenueInMillions,
    /// `academyAwardNominations`
    AcademyAwardNominations,
    /// `academyAwardWins`
    AcademyAwardWins,
    /// `rottenTomatoesScore`
    RottenTomatoesScore,
}

impl MovieField {
    /// Every movie field, in declaration order
    pub const ALL: [MovieField; 8] = [
        MovieField::Id,
        MovieField::Name,
        MovieField::RuntimeInMinutes,
        MovieField::BudgetInMillions,
        MovieField::BoxOfficeRevenueInMillions,
        MovieField::AcademyAwardNominations,
        MovieField::AcademyAwardWins,
        MovieField::RottenTomatoesScore,
    ];

    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            MovieField::Id => "_id",
            MovieField::Name => "name",
            MovieField::RuntimeInMinutes => "runtimeInMinutes",
            MovieField::BudgetInMillions => "budgetInMillions",
            MovieField::BoxOfficeRevenueInMillions => "boxOfficeRevenueInMillions",
            MovieField::AcademyAwardNominations => "academyAwardNominations",
            MovieField::AcademyAwardWins => "academyAwardWins",
            MovieField::RottenTomatoesScore => "rottenTomatoesScore",
        }
    }
}

impl FilterableField for MovieField {
    fn field_name(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MovieField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filterable fields of [`crate::models::Quote`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteField {
    /// `_id`
    Id,
    /// `dialog`
    Dialog,
    /// `movie`, the id of the movie
    MovieId,
    /// `character`, the id of the speaking character
    CharacterId,
}

impl QuoteField {
    /// Every quote field, in declaration order
    pub const ALL: [QuoteField; 4] = [
        QuoteField::Id,
        QuoteField::Dialog,
        QuoteField::MovieId,
        QuoteField::CharacterId,
    ];

    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteField::Id => "_id",
            QuoteField::Dialog => "dialog",
            QuoteField::MovieId => "movie",
            QuoteField::CharacterId => "character",
        }
    }
}

impl FilterableField for QuoteField {
    fn field_name(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for QuoteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
