//! Quote model

use serde::{Deserialize, Serialize};

/// A line of dialog as returned by `/quote`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
    /// Document id
    #[serde(rename = "_id")]
    pub id: String,
    /// The spoken line
    pub dialog: String,
    /// Id of the movie the line is from
    pub movie: String,
    /// Id of the speaking character
    pub character: String,
}
