//! Filter parameter types and boundary canonicalization.
//!
//! External callers (query strings, JSON bodies) may pass a categorical or
//! list-valued filter either as a single string or as a list of strings. That
//! polymorphism is flattened here, at the boundary: the engine itself only
//! ever sees `Vec<String>`, where an empty vector means "no constraint".

use serde::{Deserialize, Deserializer};

/// A filter value that arrives as either `"x"` or `["x", "y"]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum StringOrList {
    One(String),
    Many(Vec<String>),
}

/// Deserializes an optional string-or-list value into a canonical list.
fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<StringOrList>::deserialize(deserializer)?;
    Ok(match value {
        None => Vec::new(),
        Some(StringOrList::One(s)) => vec![s],
        Some(StringOrList::Many(list)) => list,
    })
}

/// The full set of filters a query may supply.
///
/// Every field is optional; an absent field imposes no constraint. All
/// filters are combined by logical AND, while list-valued filters OR across
/// their own elements.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FilterParams {
    /// Free-text search over the record's searchable corpus.
    pub q: Option<String>,
    /// Case-insensitive category equality (any element matches).
    #[serde(deserialize_with = "string_or_list")]
    pub category: Vec<String>,
    /// Case-insensitive subcategory equality (any element matches).
    #[serde(deserialize_with = "string_or_list")]
    pub subcategory: Vec<String>,
    /// Substring match against the short description or any tag.
    pub mood: Option<String>,
    /// Substring match against the string form of the caffeine level.
    pub caffeine: Option<String>,
    /// List overlap with `season_recommended`.
    #[serde(deserialize_with = "string_or_list", alias = "season_recommended")]
    pub season: Vec<String>,
    /// List overlap with `daypart_recommended`.
    #[serde(deserialize_with = "string_or_list", alias = "daypart_recommended")]
    pub daypart: Vec<String>,
    /// List overlap with the enabled serving modes.
    #[serde(deserialize_with = "string_or_list")]
    pub serve: Vec<String>,
}

impl FilterParams {
    /// Returns true if no filter is supplied at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.q.is_none()
            && self.category.is_empty()
            && self.subcategory.is_empty()
            && self.mood.is_none()
            && self.caffeine.is_none()
            && self.season.is_empty()
            && self.daypart.is_empty()
            && self.serve.is_empty()
    }
}
