//! Locale-insensitive text normalization.
//!
//! All substring and equality matching in the filter engine goes through
//! [`normalize`] so that accented and unaccented spellings compare equal
//! (e.g. Hungarian "zöld" matches a query typed as "zold").

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalizes text for comparison: canonical decomposition (NFD), combining
/// marks stripped, then lowercased.
///
/// The function is idempotent: `normalize(normalize(x)) == normalize(x)`.
/// No locale-specific case folding is applied beyond simple lowercasing.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}
