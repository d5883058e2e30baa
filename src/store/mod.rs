//! Catalog loading with explicit-refresh caching.
//!
//! The store owns the cached record collection and color map. Caching is
//! explicit: callers pass `refresh = false` to reuse whatever was loaded
//! last (even if the file changed on disk) and `refresh = true` to reload
//! wholesale. The cached value is replaced under a single write lock so
//! concurrent readers never observe a partially built collection.

mod error;

pub use error::StoreError;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, info};

use crate::model::{ColorEntry, Tea};

/// Mapping of category name to display color.
pub type CategoryColors = BTreeMap<String, String>;

/// Owns the catalog files and their cached, immutable contents.
///
/// Collections are handed out as `Arc` clones: a refresh replaces the cached
/// pointer but does not invalidate collections callers already hold.
#[derive(Debug)]
pub struct CatalogStore {
    data_path: PathBuf,
    colors_path: PathBuf,
    teas: RwLock<Option<Arc<Vec<Tea>>>>,
    colors: RwLock<Option<Arc<CategoryColors>>>,
}

impl CatalogStore {
    /// Creates a store over a record file and a color map file.
    ///
    /// Nothing is read until [`teas`](Self::teas) or
    /// [`category_colors`](Self::category_colors) is called.
    #[must_use]
    pub fn new(data_path: impl Into<PathBuf>, colors_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            colors_path: colors_path.into(),
            teas: RwLock::new(None),
            colors: RwLock::new(None),
        }
    }

    /// Returns the record collection, loading it on first call.
    ///
    /// Without `refresh`, repeated calls return the previously cached
    /// collection even if the backing file changed. With `refresh`, the file
    /// is re-read and the cache replaced.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the file is unreadable or not a JSON
    /// array of record objects. A failed refresh leaves the old cache in
    /// place.
    pub fn teas(&self, refresh: bool) -> Result<Arc<Vec<Tea>>, StoreError> {
        if !refresh {
            let guard = self.teas.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(cached) = guard.as_ref() {
                debug!(path = %self.data_path.display(), "catalog cache hit");
                return Ok(Arc::clone(cached));
            }
        }

        let loaded = Arc::new(load_teas(&self.data_path)?);
        info!(
            path = %self.data_path.display(),
            records = loaded.len(),
            refresh,
            "catalog loaded"
        );

        let mut guard = self.teas.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(Arc::clone(&loaded));
        Ok(loaded)
    }

    /// Returns the category color map, loading it on first call.
    ///
    /// Cached independently of the record collection, with the same
    /// explicit-refresh semantics.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the file is unreadable or not a JSON
    /// array of `{category, main}` entries.
    pub fn category_colors(&self, refresh: bool) -> Result<Arc<CategoryColors>, StoreError> {
        if !refresh {
            let guard = self.colors.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(cached) = guard.as_ref() {
                debug!(path = %self.colors_path.display(), "color map cache hit");
                return Ok(Arc::clone(cached));
            }
        }

        let loaded = Arc::new(load_category_colors(&self.colors_path)?);
        info!(
            path = %self.colors_path.display(),
            categories = loaded.len(),
            refresh,
            "color map loaded"
        );

        let mut guard = self.colors.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(Arc::clone(&loaded));
        Ok(loaded)
    }
}

/// Parses a JSON array of record objects.
fn load_teas(path: &Path) -> Result<Vec<Tea>, StoreError> {
    let content = std::fs::read_to_string(path).map_err(|e| StoreError::read(path, e))?;
    serde_json::from_str(&content).map_err(|e| StoreError::parse(path, "record objects", e))
}

/// Parses a JSON array of `{category, main}` entries into a lookup map.
fn load_category_colors(path: &Path) -> Result<CategoryColors, StoreError> {
    let content = std::fs::read_to_string(path).map_err(|e| StoreError::read(path, e))?;
    let entries: Vec<ColorEntry> =
        serde_json::from_str(&content).map_err(|e| StoreError::parse(path, "color entries", e))?;
    Ok(entries
        .into_iter()
        .map(|entry| (entry.category, entry.main))
        .collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    const TWO_TEAS: &str = r#"[
        {"id": "1", "name": "Kamilla", "category": "Nyugtató"},
        {"id": "2", "name": "Zöld", "category": "Élénkítő"}
    ]"#;

    const ONE_TEA: &str = r#"[{"id": "9", "name": "Hibiszkusz", "category": "Gyümölcsös"}]"#;

    const COLORS: &str = r##"[{"category": "Nyugtató", "main": "#88aa66"}]"##;

    #[test]
    fn test_teas_loads_and_caches() {
        let dir = tempfile::tempdir().unwrap();
        let data = write_file(&dir, "teas.json", TWO_TEAS);
        let colors = write_file(&dir, "colors.json", COLORS);
        let store = CatalogStore::new(&data, &colors);

        let first = store.teas(false).unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].name, "Kamilla");

        // File changes on disk; un-refreshed load must return the old value.
        std::fs::write(&data, ONE_TEA).unwrap();
        let second = store.teas(false).unwrap();
        assert_eq!(second.len(), 2);
        assert_eq!(*first, *second);
    }

    #[test]
    fn test_teas_refresh_picks_up_new_content() {
        let dir = tempfile::tempdir().unwrap();
        let data = write_file(&dir, "teas.json", TWO_TEAS);
        let colors = write_file(&dir, "colors.json", COLORS);
        let store = CatalogStore::new(&data, &colors);

        let stale = store.teas(false).unwrap();
        std::fs::write(&data, ONE_TEA).unwrap();
        let fresh = store.teas(true).unwrap();

        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].name, "Hibiszkusz");
        // The collection handed out earlier is unaffected by the refresh.
        assert_eq!(stale.len(), 2);
    }

    #[test]
    fn test_failed_refresh_keeps_old_cache() {
        let dir = tempfile::tempdir().unwrap();
        let data = write_file(&dir, "teas.json", TWO_TEAS);
        let colors = write_file(&dir, "colors.json", COLORS);
        let store = CatalogStore::new(&data, &colors);

        store.teas(false).unwrap();
        std::fs::write(&data, "{ not json").unwrap();

        assert!(store.teas(true).is_err());
        // The cached collection is still served on the non-refresh path.
        let cached = store.teas(false).unwrap();
        assert_eq!(cached.len(), 2);
    }

    #[test]
    fn test_category_colors_independent_cache() {
        let dir = tempfile::tempdir().unwrap();
        let data = write_file(&dir, "teas.json", TWO_TEAS);
        let colors = write_file(&dir, "colors.json", COLORS);
        let store = CatalogStore::new(&data, &colors);

        let map = store.category_colors(false).unwrap();
        assert_eq!(map.get("Nyugtató").map(String::as_str), Some("#88aa66"));

        // Refreshing the record collection does not touch the color cache.
        std::fs::write(&colors, "[]").unwrap();
        store.teas(true).unwrap();
        let still_cached = store.category_colors(false).unwrap();
        assert_eq!(still_cached.len(), 1);

        let reloaded = store.category_colors(true).unwrap();
        assert!(reloaded.is_empty());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::new(dir.path().join("absent.json"), dir.path().join("c.json"));
        let err = store.teas(false).unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let data = write_file(&dir, "teas.json", "[{\"id\": 1]");
        let store = CatalogStore::new(&data, dir.path().join("c.json"));
        let err = store.teas(false).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }
}
