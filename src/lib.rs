//! Teacat Core Library
//!
//! This library provides the core functionality for the teacat catalog
//! backend: an in-memory, read-only tea catalog with locale-insensitive
//! filtering, pagination, and a CSV-to-JSON import pipeline.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`normalize`] - Diacritic-insensitive text normalization
//! - [`model`] - Canonical tea record schema and the category color map
//! - [`store`] - JSON catalog loading with explicit-refresh caching
//! - [`filter`] - Conjunctive multi-field filter engine
//! - [`query`] - Pagination and the query surface for external callers
//! - [`adapter`] - CSV spreadsheet normalization with a QA summary

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod adapter;
pub mod filter;
pub mod model;
pub mod normalize;
pub mod query;
pub mod store;

// Re-export commonly used types
pub use adapter::{Conversion, ConvertError, QaSummary, convert_file, convert_reader};
pub use filter::{FilterParams, filter_teas};
pub use model::{ColorEntry, IngredientPart, ServeModes, Tea};
pub use normalize::normalize;
pub use query::{DEFAULT_PER_PAGE, Page, QueryParams, paginate, run_query};
pub use store::{CatalogStore, StoreError};
