//! Domain models
//!
//! Records returned by The One API and the field enums used to filter and
//! sort them.

mod field;
mod movie;
mod quote;

pub use field::{MovieField, QuoteField};
pub use movie::{Movie, MovieWithQuotes};
pub use quote::Quote;
