//! Conjunctive multi-field filter engine.
//!
//! Given a record collection and a set of [`FilterParams`], produces the
//! order-preserving subsequence of records satisfying every supplied filter.
//! Each predicate is total: missing record data is a non-match, never an
//! error, so records with absent fields simply fall out of constrained
//! results instead of failing the query.

mod params;

pub use params::FilterParams;

use tracing::debug;

use crate::model::Tea;
use crate::normalize::normalize;

/// Applies the conjunction of all supplied filters over `teas`.
///
/// Absent filters impose no constraint; with no filters at all the result is
/// the whole collection in its original order. Adding a filter can only
/// shrink the result set.
#[must_use]
pub fn filter_teas<'a>(teas: &'a [Tea], params: &FilterParams) -> Vec<&'a Tea> {
    let matched: Vec<&Tea> = teas.iter().filter(|tea| matches(tea, params)).collect();
    debug!(
        total = teas.len(),
        matched = matched.len(),
        "filter pass complete"
    );
    matched
}

fn matches(tea: &Tea, params: &FilterParams) -> bool {
    matches_query(tea, params.q.as_deref())
        && matches_categorical(Some(tea.category.as_str()), &params.category)
        && matches_categorical(tea.subcategory.as_deref(), &params.subcategory)
        && matches_mood(tea, params.mood.as_deref())
        && matches_caffeine(tea, params.caffeine.as_deref())
        && overlaps(&tea.season_recommended, &params.season)
        && overlaps(&tea.daypart_recommended, &params.daypart)
        && overlaps(&tea.serve_modes.enabled(), &params.serve)
}

/// Free-text search: the normalized query must be a substring of the
/// record's normalized corpus. Empty or absent queries always match.
fn matches_query(tea: &Tea, query: Option<&str>) -> bool {
    let Some(query) = query else { return true };
    if query.trim().is_empty() {
        return true;
    }
    normalize(&search_corpus(tea)).contains(&normalize(query))
}

/// Builds the space-joined searchable text for one record: name,
/// description, category, subcategory, passthrough taste/color fields when
/// present, ingredient names, and tags. The join order is part of the
/// contract: a query may span adjacent fields (e.g. name plus the start of
/// the description).
fn search_corpus(tea: &Tea) -> String {
    let mut fields: Vec<&str> = vec![tea.name.as_str()];
    if let Some(description) = tea.description.as_deref() {
        fields.push(description);
    }
    fields.push(tea.category.as_str());
    if let Some(subcategory) = tea.subcategory.as_deref() {
        fields.push(subcategory);
    }
    for key in ["taste", "color"] {
        if let Some(value) = tea.extra_str(key) {
            fields.push(value);
        }
    }
    fields.extend(tea.ingredients.iter().map(String::as_str));
    fields.extend(tea.tags.iter().map(String::as_str));
    fields.join(" ")
}

/// Categorical equality: case-insensitive match against ANY filter element.
/// A record with no value never matches a non-empty filter.
fn matches_categorical(value: Option<&str>, filter: &[String]) -> bool {
    if filter.is_empty() {
        return true;
    }
    let Some(value) = value else { return false };
    let value = value.to_lowercase();
    filter.iter().any(|f| f.to_lowercase() == value)
}

/// Mood: the normalized filter value must be a substring of the normalized
/// short description OR of any normalized tag.
fn matches_mood(tea: &Tea, mood: Option<&str>) -> bool {
    let Some(mood) = mood else { return true };
    let needle = normalize(mood);
    let in_short = tea
        .short_description
        .as_deref()
        .is_some_and(|sd| normalize(sd).contains(&needle));
    in_short || tea.tags.iter().any(|tag| normalize(tag).contains(&needle))
}

/// Caffeine: loose substring match against the string form of the level.
///
/// Intentionally not a numeric range (`caffeine=40` matches 40.0, and also
/// e.g. 140.0 if such a level existed). Levels render without a trailing
/// `.0`, so whole numbers match their integer spelling. A present level of
/// exactly 0 renders as `"0"` and is matchable; only an absent level never
/// matches a non-empty filter.
fn matches_caffeine(tea: &Tea, caffeine: Option<&str>) -> bool {
    let Some(caffeine) = caffeine else { return true };
    let Some(level) = tea.caffeine_level else {
        return false;
    };
    normalize(&level.to_string()).contains(&normalize(caffeine))
}

/// List overlap: non-empty intersection between the filter set and the
/// record's list, compared after normalization on both sides.
fn overlaps<S: AsRef<str>>(values: &[S], filter: &[String]) -> bool {
    if filter.is_empty() {
        return true;
    }
    filter.iter().any(|f| {
        let f = normalize(f);
        values.iter().any(|v| normalize(v.as_ref()) == f)
    })
}
