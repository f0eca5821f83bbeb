//! Filter expressions
//!
//! [`Filter`] turns a field reference plus an operator into a query fragment.
//! String values are form-urlencoded; numbers and regex literals are not.

use crate::error::{Error, Result};
use std::fmt;
use url::form_urlencoded;

/// A field that can be filtered or sorted on
///
/// Implemented by the per-resource field enums as well as plain strings, so a
/// field the enums don't know about yet can still be used by name.
pub trait FilterableField {
    /// Raw field name as expected by the API
    fn field_name(&self) -> &str;
}

impl FilterableField for str {
    fn field_name(&self) -> &str {
        self
    }
}

impl FilterableField for String {
    fn field_name(&self) -> &str {
        self
    }
}

impl<T: FilterableField + ?Sized> FilterableField for &T {
    fn field_name(&self) -> &str {
        (**self).field_name()
    }
}

/// A compiled filter, ready to be appended to the query string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterExpression(String);

impl FilterExpression {
    /// Wrap an already encoded query fragment
    pub fn raw(fragment: impl Into<String>) -> Self {
        Self(fragment.into())
    }

    /// The query fragment, e.g. `name=The+Two+Towers`
    pub fn as_query_param(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builder for a filter on one field
///
/// ```
/// use lotr_sdk::filter::Filter;
/// use lotr_sdk::models::MovieField;
///
/// let expr = Filter::field(MovieField::BudgetInMillions)?.greater_than(200);
/// assert_eq!(expr.as_query_param(), "budgetInMillions>200");
/// # Ok::<(), lotr_sdk::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Filter {
    field: String,
}

impl Filter {
    /// Start a filter on the given field
    pub fn field(field: impl FilterableField) -> Result<Self> {
        let name = field.field_name().trim();
        if name.is_empty() {
            return Err(Error::invalid_filter("field name must not be blank"));
        }
        Ok(Self {
            field: name.to_string(),
        })
    }

    /// Exact match: `field=value`
    pub fn equals(&self, value: &str) -> FilterExpression {
        self.op("=", &encode(value))
    }

    /// Negated match: `field!=value`
    pub fn not_equals(&self, value: &str) -> FilterExpression {
        self.op("!=", &encode(value))
    }

    /// Include: `field=a,b,c`
    pub fn is_in<I, S>(&self, values: I) -> FilterExpression
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.op("=", &join_encoded(values))
    }

    /// Exclude: `field!=a,b`
    pub fn not_in<I, S>(&self, values: I) -> FilterExpression
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.op("!=", &join_encoded(values))
    }

    /// Field is present: `field`
    pub fn exists(&self) -> FilterExpression {
        FilterExpression(self.field.clone())
    }

    /// Field is absent: `!field`
    pub fn does_not_exist(&self) -> FilterExpression {
        FilterExpression(format!("!{}", self.field))
    }

    /// Regex match, delimiters included: `field=/ring/i`
    pub fn matches_regex(&self, regex: &str) -> FilterExpression {
        self.op("=", regex)
    }

    /// `field<value`
    pub fn less_than(&self, value: impl fmt::Display) -> FilterExpression {
        self.op("<", &value.to_string())
    }

    /// `field>value`
    pub fn greater_than(&self, value: impl fmt::Display) -> FilterExpression {
        self.op(">", &value.to_string())
    }

    /// `field<=value`
    pub fn less_than_or_equal(&self, value: impl fmt::Display) -> FilterExpression {
        self.op("<=", &value.to_string())
    }

    /// `field>=value`
    pub fn greater_than_or_equal(&self, value: impl fmt::Display) -> FilterExpression {
        self.op(">=", &value.to_string())
    }

    fn op(&self, operator: &str, value: &str) -> FilterExpression {
        FilterExpression(format!("{}{operator}{value}", self.field))
    }
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

fn join_encoded<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| encode(v.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}
