//! CSV spreadsheet normalization into canonical records.
//!
//! The adapter is a one-shot import pipeline: each source row becomes one
//! [`Tea`] record, independently of the others. Malformed numeric cells
//! never abort the batch - they degrade to absent/default values - while
//! data-quality issues (ingredient rates not summing to ~100, no serving
//! mode set, out-of-range caffeine) are counted into a [`QaSummary`] rather
//! than rejected. Only structural problems (unreadable input, ragged rows)
//! are fatal.
//!
//! # Example
//!
//! ```
//! use teacat_core::adapter::convert_reader;
//!
//! let csv = "id,name,category,serve_hot\n1,Kamilla,Nyugtató,1\n";
//! let conversion = convert_reader(csv.as_bytes()).unwrap();
//! assert_eq!(conversion.summary.records, 1);
//! assert_eq!(conversion.summary.qa_errors, 0);
//! ```

mod error;
mod value;

pub use error::ConvertError;
pub use value::{extract_decimal, parse_float, parse_truthy, split_list};

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use serde::Serialize;
use tracing::{info, warn};

use crate::model::{IngredientPart, ServeModes, Tea};

/// Recommendation token used when a row has no `timeDay` value.
pub const DEFAULT_DAYPART: &str = "bármikor";

/// Recommendation token used when a row has no season value.
pub const DEFAULT_SEASON: &str = "egész év";

/// Indexed ingredient/rate column pairs scanned per row.
const MAX_INGREDIENT_COLUMNS: usize = 6;

/// Maximum number of derived tags per record.
const MAX_TAGS: usize = 3;

/// A focus column at or above this value contributes its effect label.
const FOCUS_THRESHOLD: f64 = 2.0;

/// Numeric "focus" columns and the effect label each one contributes when
/// no explicit `useCases` cell is present.
const FOCUS_EFFECTS: [(&str, &str); 4] = [
    ("focus_relax", "nyugtató"),
    ("focus_focus", "fókusz"),
    ("focus_immunity", "immunerősítő"),
    ("focus_detox", "tisztító"),
];

/// Aggregate data-quality counts for one conversion run.
///
/// Serialized with the wire keys downstream tooling reads
/// (`default_timeOfDay`, `default_season`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QaSummary {
    /// Total records produced.
    pub records: usize,
    /// QA flags accumulated across all per-row checks. A single row can
    /// contribute several (rate sum, serving modes, caffeine range are
    /// independent checks).
    pub qa_errors: usize,
    /// Rows that received the [`DEFAULT_DAYPART`] token.
    #[serde(rename = "default_timeOfDay")]
    pub default_daypart: usize,
    /// Rows that received the [`DEFAULT_SEASON`] token.
    pub default_season: usize,
}

/// Result of one conversion run: the canonical records plus the QA summary.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub teas: Vec<Tea>,
    pub summary: QaSummary,
}

/// Header-indexed view over one CSV row.
struct RowView<'a> {
    columns: &'a HashMap<String, usize>,
    record: &'a StringRecord,
}

impl RowView<'_> {
    /// Returns the raw cell under a header name, if the column exists.
    fn get(&self, name: &str) -> Option<&str> {
        self.columns.get(name).and_then(|&i| self.record.get(i))
    }

    /// Returns the trimmed cell, or `None` when absent or blank.
    fn get_non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).map(str::trim).filter(|s| !s.is_empty())
    }

    /// First non-blank cell among several header spellings.
    fn get_first(&self, names: &[&str]) -> Option<&str> {
        names.iter().find_map(|name| self.get_non_empty(name))
    }
}

/// Converts CSV text from any reader.
///
/// The first row is the header; recognized columns are documented on the
/// individual conversion rules below. Unrecognized columns are ignored.
///
/// # Errors
///
/// Returns [`ConvertError`] for malformed CSV structure (a row whose field
/// count differs from the header, bad quoting, non-UTF-8 content). No
/// partial result is returned in that case.
pub fn convert_reader<R: Read>(reader: R) -> Result<Conversion, ConvertError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut columns: HashMap<String, usize> = HashMap::new();
    let mut taste_columns: Vec<(String, usize)> = Vec::new();
    for (i, name) in headers.iter().enumerate() {
        let name = name.trim();
        if let Some(suffix) = name.strip_prefix("taste_") {
            taste_columns.push((suffix.to_string(), i));
        }
        columns.entry(name.to_string()).or_insert(i);
    }

    let mut teas = Vec::new();
    let mut summary = QaSummary::default();

    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let row = RowView {
            columns: &columns,
            record: &record,
        };
        let tea = convert_row(&row, &taste_columns, index + 1, &mut summary);
        summary.records += 1;
        teas.push(tea);
    }

    info!(
        records = summary.records,
        qa_errors = summary.qa_errors,
        default_daypart = summary.default_daypart,
        default_season = summary.default_season,
        "conversion complete"
    );

    Ok(Conversion { teas, summary })
}

/// Converts a CSV file on disk.
///
/// # Errors
///
/// Returns [`ConvertError`] when the file cannot be opened or its CSV
/// structure is malformed.
pub fn convert_file(path: &Path) -> Result<Conversion, ConvertError> {
    let file = std::fs::File::open(path).map_err(|e| ConvertError::read(path, e))?;
    convert_reader(file)
}

/// Converts one row. Every rule is local to the row; `fallback_id` is the
/// 1-based row index used when the sheet carries no `id` cell.
fn convert_row(
    row: &RowView<'_>,
    taste_columns: &[(String, usize)],
    fallback_id: usize,
    summary: &mut QaSummary,
) -> Tea {
    let id = row
        .get_non_empty("id")
        .map_or_else(|| fallback_id.to_string(), ToString::to_string);
    let name = row.get("name").unwrap_or_default().trim().to_string();
    let category = row.get("category").unwrap_or_default().trim().to_string();
    let subcategory = row.get_non_empty("subcategory").map(ToString::to_string);

    // Ingredients: keep a pair only when both a name and a parseable rate
    // are present. The "ingerdient-" spelling tolerates a known header typo
    // in the source sheets.
    let mut breakdown: Vec<IngredientPart> = Vec::new();
    for i in 1..=MAX_INGREDIENT_COLUMNS {
        let name_column = format!("ingredient-{i}");
        let typo_column = format!("ingerdient-{i}");
        let ingredient = row.get_first(&[name_column.as_str(), typo_column.as_str()]);
        let rate = parse_float(row.get(&format!("rate-{i}")));
        if let (Some(ingredient), Some(rate)) = (ingredient, rate) {
            breakdown.push(IngredientPart {
                name: ingredient.to_string(),
                rate,
            });
        }
    }
    if !breakdown.is_empty() {
        let total: f64 = breakdown.iter().map(|part| part.rate).sum();
        if !(99.9..=100.1).contains(&total) {
            summary.qa_errors += 1;
            warn!(id = %id, total, "ingredient rates do not sum to ~100");
        }
    }
    let ingredients: Vec<String> = breakdown.iter().map(|part| part.name.clone()).collect();

    // Tastes: every taste_* column with a positive value contributes its
    // suffix, in header order.
    let tastes: Vec<String> = taste_columns
        .iter()
        .filter(|(_, i)| parse_float(row.record.get(*i)).is_some_and(|v| v > 0.0))
        .map(|(suffix, _)| suffix.clone())
        .collect();

    // Effects: a non-blank useCases cell wins even when it splits to nothing
    // (delimiters only); the focus columns only vote when the cell is absent
    // or blank, with a fixed label each.
    let effects = if let Some(explicit) = row.get_non_empty("useCases") {
        split_list(Some(explicit), &[',', ';'])
    } else {
        FOCUS_EFFECTS
            .into_iter()
            .filter(|&(column, _)| {
                parse_float(row.get(column)).is_some_and(|v| v >= FOCUS_THRESHOLD)
            })
            .map(|(_, label)| label.to_string())
            .collect()
    };

    let serve_modes = ServeModes {
        hot: parse_truthy(row.get("serve_hot")),
        lukewarm: parse_truthy(row.get("serve_lukewarm")),
        iced: parse_truthy(row.get("serve_iced")),
        coldbrew: parse_truthy(row.get("serve_coldbrew")),
    };
    if !serve_modes.any() {
        summary.qa_errors += 1;
        warn!(id = %id, "no serving mode set");
    }

    let caffeine_level = parse_float(row.get("caffeine_pct"));
    if let Some(level) = caffeine_level
        && !(0.0..=100.0).contains(&level)
    {
        summary.qa_errors += 1;
        warn!(id = %id, level, "caffeine level outside [0, 100]");
    }

    // Brewing parameters: floor the temperature, round the steep time up,
    // default both to 0 when unparseable.
    #[allow(clippy::cast_possible_truncation)]
    let temp_c = parse_float(row.get("tempC")).map_or(0, |t| t.floor() as i64);
    #[allow(clippy::cast_possible_truncation)]
    let steep_min = parse_float(row.get("steepMin")).map_or(0, |s| s.ceil() as i64);

    let quantity_spoons = row
        .get_non_empty("quantity_250ml")
        .and_then(extract_decimal);

    let daypart_recommended = recommendation_list(
        row.get("timeDay"),
        DEFAULT_DAYPART,
        &mut summary.default_daypart,
    );
    let season_recommended = recommendation_list(
        row.get_first(&["timeSeason", "season"]),
        DEFAULT_SEASON,
        &mut summary.default_season,
    );

    let allergens = split_list(row.get("allergens"), &[',']);

    // Tags: first two taste labels plus the subcategory, deduplicated and
    // capped, insertion order preserved.
    let mut tags: Vec<String> = Vec::new();
    for candidate in tastes
        .iter()
        .take(2)
        .map(String::as_str)
        .chain(subcategory.as_deref())
    {
        if tags.len() == MAX_TAGS {
            break;
        }
        if !tags.iter().any(|t| t == candidate) {
            tags.push(candidate.to_string());
        }
    }

    Tea {
        id,
        name,
        category,
        subcategory,
        description: row.get_non_empty("description").map(ToString::to_string),
        short_description: row
            .get_first(&["mood_short", "shortDescription"])
            .map(ToString::to_string),
        tags,
        tastes,
        effects,
        allergens,
        ingredients,
        ingredients_breakdown: breakdown,
        season_recommended,
        daypart_recommended,
        temp_c,
        steep_min,
        quantity_spoons,
        caffeine_level,
        serve_modes,
        intensity: row
            .get_non_empty("intensity")
            .map(|s| s.to_lowercase()),
        extra: std::collections::BTreeMap::new(),
    }
}

/// Lowercased recommendation list from a delimited cell, substituting the
/// default token (and bumping its counter) when the cell is absent or blank.
fn recommendation_list(
    value: Option<&str>,
    default_token: &str,
    default_count: &mut usize,
) -> Vec<String> {
    let entries: Vec<String> = split_list(value, &[','])
        .into_iter()
        .map(|entry| entry.to_lowercase())
        .collect();
    if entries.is_empty() {
        *default_count += 1;
        vec![default_token.to_string()]
    } else {
        entries
    }
}
