//! Canonical tea record schema and the category color map.
//!
//! Records are produced once - either hand-authored as JSON or emitted by the
//! CSV adapter - and treated as immutable by the running service. Wire names
//! follow the JSON the web layer consumes (`tempC`, `steepMin`,
//! `ingredientsBreakdown`, ...); unknown input fields are preserved in an
//! explicit [`Tea::extra`] side-map rather than silently dropped.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One ingredient with its proportion of the blend.
///
/// Proportions are percentages; across a record they are expected to sum to
/// approximately 100 (checked, not enforced, by the CSV adapter).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientPart {
    pub name: String,
    pub rate: f64,
}

/// Boolean serving-mode flags for a tea.
///
/// At least one flag should be true for a well-formed record; the CSV adapter
/// flags (but keeps) rows where all four are false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServeModes {
    #[serde(default)]
    pub hot: bool,
    #[serde(default)]
    pub lukewarm: bool,
    #[serde(default)]
    pub iced: bool,
    #[serde(default)]
    pub coldbrew: bool,
}

impl ServeModes {
    /// Returns true if any serving mode is enabled.
    #[must_use]
    pub fn any(&self) -> bool {
        self.hot || self.lukewarm || self.iced || self.coldbrew
    }

    /// Returns the names of the enabled serving modes, in canonical order.
    ///
    /// Used by the list-overlap `serve` filter.
    #[must_use]
    pub fn enabled(&self) -> Vec<&'static str> {
        let mut modes = Vec::new();
        if self.hot {
            modes.push("hot");
        }
        if self.lukewarm {
            modes.push("lukewarm");
        }
        if self.iced {
            modes.push("iced");
        }
        if self.coldbrew {
            modes.push("coldbrew");
        }
        modes
    }
}

/// One catalog item.
///
/// List fields default to empty (never null) when absent from source data.
/// `id` is unique within a collection; uniqueness is the data author's
/// responsibility, the store does not enforce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tea {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        rename = "shortDescription",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub short_description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub tastes: Vec<String>,
    #[serde(default)]
    pub effects: Vec<String>,
    #[serde(default)]
    pub allergens: Vec<String>,
    /// Name-only view of `ingredients_breakdown`, kept denormalized because
    /// the search corpus and several UI surfaces only need the names.
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(rename = "ingredientsBreakdown", default)]
    pub ingredients_breakdown: Vec<IngredientPart>,
    #[serde(default)]
    pub season_recommended: Vec<String>,
    #[serde(default)]
    pub daypart_recommended: Vec<String>,
    /// Brewing temperature in °C.
    #[serde(rename = "tempC", default)]
    pub temp_c: i64,
    /// Steeping time in minutes.
    #[serde(rename = "steepMin", default)]
    pub steep_min: i64,
    /// Spoons of leaf per 250 ml, when the source specified it.
    #[serde(
        rename = "quantitySpoons",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity_spoons: Option<f64>,
    /// Caffeine level on a 0-100 scale, when known.
    #[serde(
        rename = "caffeineLevel",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub caffeine_level: Option<f64>,
    #[serde(rename = "serveModes", default)]
    pub serve_modes: ServeModes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<String>,
    /// Passthrough for fields this schema does not model. Keeps the record
    /// forward-compatible with newer data files without dynamic typing.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Tea {
    /// Returns a string-valued passthrough field, if present.
    #[must_use]
    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(serde_json::Value::as_str)
    }
}

/// One row of the category color map file: `{"category": ..., "main": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    pub category: String,
    /// Display color, e.g. `#467209`.
    pub main: String,
}
