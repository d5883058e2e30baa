//! Query command handler: filter and paginate a catalog file.
//!
//! This is the CLI stand-in for the web layer's query surface: it builds
//! [`FilterParams`] the same way an HTTP handler would, runs the read path,
//! and prints one page of results as JSON with the total count.

use std::path::PathBuf;

use anyhow::{Context, Result};

use teacat_core::{CatalogStore, FilterParams, QueryParams, run_query};

use crate::cli::QueryArgs;

pub fn run_query_command(args: &QueryArgs) -> Result<()> {
    let colors_path = args.colors.clone().unwrap_or_else(PathBuf::new);
    let store = CatalogStore::new(&args.data, colors_path);

    let params = QueryParams {
        filters: filter_params(args),
        page: args.page as usize,
        per_page: args.per_page as usize,
    };

    let page = run_query(&store, &params, args.refresh)?;

    let mut output = serde_json::to_value(&page).context("serializing result page")?;
    if args.colors.is_some() {
        let colors = store.category_colors(args.refresh)?;
        output["categoryColors"] =
            serde_json::to_value(&*colors).context("serializing color map")?;
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("serializing result page")?
    );
    Ok(())
}

/// Maps CLI flags onto the engine's canonical filter shape.
fn filter_params(args: &QueryArgs) -> FilterParams {
    FilterParams {
        q: args.q.clone(),
        category: args.category.clone(),
        subcategory: args.subcategory.clone(),
        mood: args.mood.clone(),
        caffeine: args.caffeine.clone(),
        season: args.season.clone(),
        daypart: args.daypart.clone(),
        serve: args.serve.clone(),
    }
}
