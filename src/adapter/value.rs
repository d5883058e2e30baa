//! Loose value parsing for spreadsheet cells.
//!
//! Source sheets are hand-maintained: numbers may use a decimal comma,
//! booleans arrive as free text in two languages, and quantities are buried
//! in prose ("kb. 1,5 púpozott kanál"). Every parser here degrades to
//! `None`/`false` instead of raising, per the adapter's failure policy.

use std::sync::LazyLock;

use regex::Regex;

/// Cell values treated as false by `parse_truthy`, compared after
/// trimming and lowercasing. Includes the source-locale "nem"/"n" tokens.
const FALSEY_TOKENS: [&str; 6] = ["", "0", "false", "no", "nem", "n"];

/// First decimal number in free text, with either separator ("1,5" or "1.5").
#[allow(clippy::expect_used)]
static DECIMAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+[\.,]?\d*").expect("decimal regex is valid") // Static pattern, safe to panic
});

/// Parses a float from a cell, accepting a decimal comma.
///
/// Returns `None` for absent, blank, or unparseable cells.
#[must_use]
pub fn parse_float(value: Option<&str>) -> Option<f64> {
    let s = value?.trim().replace(',', ".");
    if s.is_empty() {
        return None;
    }
    s.parse().ok()
}

/// Parses a boolean cell by the truthy-string rule.
///
/// Absent cells and the falsey tokens are false; any other non-empty
/// string is true. The asymmetry (missing and empty are both false, while
/// arbitrary text is true) mirrors the source sheets and is pinned by tests.
#[must_use]
pub fn parse_truthy(value: Option<&str>) -> bool {
    let Some(value) = value else { return false };
    let s = value.trim().to_lowercase();
    !FALSEY_TOKENS.contains(&s.as_str())
}

/// Extracts the first decimal number found in free text.
#[must_use]
pub fn extract_decimal(text: &str) -> Option<f64> {
    let m = DECIMAL_PATTERN.find(text)?;
    m.as_str().replace(',', ".").parse().ok()
}

/// Splits a delimited cell into trimmed, non-empty entries.
#[must_use]
pub fn split_list(value: Option<&str>, separators: &[char]) -> Vec<String> {
    let Some(value) = value else {
        return Vec::new();
    };
    value
        .split(separators)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}
