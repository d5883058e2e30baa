//! Pagination and the query surface exposed to external callers.
//!
//! The web layer (out of scope here) is expected to translate request
//! parameters into a [`QueryParams`], call [`run_query`], and render the
//! resulting [`Page`] as JSON together with its total count.

use serde::Serialize;
use tracing::debug;

use crate::filter::{FilterParams, filter_teas};
use crate::model::Tea;
use crate::store::{CatalogStore, StoreError};

/// Default page size when the caller does not specify one.
pub const DEFAULT_PER_PAGE: usize = 24;

/// A filter set plus 1-based pagination parameters.
#[derive(Debug, Clone)]
pub struct QueryParams {
    pub filters: FilterParams,
    /// 1-based page number.
    pub page: usize,
    pub per_page: usize,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            filters: FilterParams::default(),
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// One page of filtered records plus the pagination bookkeeping the caller
/// needs to render page controls.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub items: Vec<Tea>,
    /// Count of records matching the filters, before paging.
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
}

/// Slices a filtered result into one page.
///
/// `page` is 1-based; pages beyond the end yield an empty `items` list with
/// `total` intact. Records are cloned into the page so it can outlive the
/// collection snapshot it was cut from.
#[must_use]
pub fn paginate(filtered: &[&Tea], page: usize, per_page: usize) -> Page {
    let total = filtered.len();
    let start = page.saturating_sub(1).saturating_mul(per_page);
    let items: Vec<Tea> = filtered
        .iter()
        .skip(start)
        .take(per_page)
        .map(|tea| (*tea).clone())
        .collect();
    debug!(total, page, per_page, returned = items.len(), "page sliced");
    Page {
        items,
        total,
        page,
        per_page,
    }
}

/// Loads the collection from the store, filters it, and returns one page.
///
/// This is the whole read path: store -> filter engine -> paginator. A
/// filter that matches nothing produces an empty page, not an error.
///
/// # Errors
///
/// Returns [`StoreError`] only for structural load failures (unreadable file,
/// invalid JSON).
pub fn run_query(
    store: &CatalogStore,
    params: &QueryParams,
    refresh: bool,
) -> Result<Page, StoreError> {
    let teas = store.teas(refresh)?;
    let filtered = filter_teas(&teas, &params.filters);
    Ok(paginate(&filtered, params.page, params.per_page))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn collection(n: usize) -> Vec<Tea> {
        (1..=n)
            .map(|i| {
                serde_json::from_value(serde_json::json!({
                    "id": i.to_string(),
                    "name": format!("Tea {i}"),
                    "category": "Gyümölcsös",
                }))
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_first_page_starts_at_index_zero() {
        let teas = collection(117);
        let refs: Vec<&Tea> = teas.iter().collect();
        let page = paginate(&refs, 1, 24);
        assert_eq!(page.items.len(), 24);
        assert_eq!(page.items[0].id, "1");
        assert_eq!(page.total, 117);
    }

    #[test]
    fn test_last_page_holds_remainder() {
        let teas = collection(117);
        let refs: Vec<&Tea> = teas.iter().collect();
        let page = paginate(&refs, 5, 24);
        assert_eq!(page.items.len(), 21);
        assert_eq!(page.items[0].id, "97");
        assert_eq!(page.total, 117);
    }

    #[test]
    fn test_page_past_the_end_is_empty_with_total() {
        let teas = collection(10);
        let refs: Vec<&Tea> = teas.iter().collect();
        let page = paginate(&refs, 3, 24);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 10);
    }

    #[test]
    fn test_page_zero_is_clamped_to_first_page() {
        let teas = collection(5);
        let refs: Vec<&Tea> = teas.iter().collect();
        let page = paginate(&refs, 0, 2);
        assert_eq!(page.items[0].id, "1");
        assert_eq!(page.items.len(), 2);
    }

    #[test]
    fn test_page_serializes_with_items_and_total() {
        let teas = collection(3);
        let refs: Vec<&Tea> = teas.iter().collect();
        let page = paginate(&refs, 1, 2);
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["total"], 3);
        assert_eq!(value["items"].as_array().unwrap().len(), 2);
        assert_eq!(value["page"], 1);
        assert_eq!(value["per_page"], 2);
    }
}
