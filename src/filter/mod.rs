//! Filter and request options module
//!
//! Builds the query string for list requests: filter fragments, an optional
//! `sort=<field>:<asc|desc>`, then `limit`, `page` and `offset`.
//!
//! # Overview
//!
//! Fields are referenced through [`FilterableField`], implemented by the
//! per-resource enums in [`crate::models`] and by plain strings.

mod expression;
mod options;

pub use expression::{Filter, FilterExpression, FilterableField};
pub use options::{RequestOptions, RequestOptionsBuilder};
