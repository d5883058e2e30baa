//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Read-only tea catalog backend tools.
///
/// Teacat converts source spreadsheets into the canonical JSON catalog and
/// answers filtered, paginated queries over a catalog file.
#[derive(Parser, Debug)]
#[command(name = "teacat")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a source spreadsheet (CSV) into the canonical JSON catalog
    Convert(ConvertArgs),
    /// Filter and paginate a catalog file (the query surface, minus HTTP)
    Query(QueryArgs),
}

#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    /// Input CSV file with a header row
    pub input: PathBuf,

    /// Output JSON file (array of canonical records)
    pub output: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct QueryArgs {
    /// Catalog JSON file (array of record objects)
    pub data: PathBuf,

    /// Category color map JSON file; when given, the color lookup is
    /// included in the output
    #[arg(long)]
    pub colors: Option<PathBuf>,

    /// Free-text search over name, descriptions, ingredients, and tags
    #[arg(long)]
    pub q: Option<String>,

    /// Category filter (repeatable; any listed value matches)
    #[arg(long)]
    pub category: Vec<String>,

    /// Subcategory filter (repeatable)
    #[arg(long)]
    pub subcategory: Vec<String>,

    /// Mood keyword matched against short descriptions and tags
    #[arg(long)]
    pub mood: Option<String>,

    /// Caffeine level substring (e.g. "40")
    #[arg(long)]
    pub caffeine: Option<String>,

    /// Recommended season filter (repeatable)
    #[arg(long)]
    pub season: Vec<String>,

    /// Recommended daypart filter (repeatable)
    #[arg(long)]
    pub daypart: Vec<String>,

    /// Serving mode filter: hot, lukewarm, iced, coldbrew (repeatable)
    #[arg(long)]
    pub serve: Vec<String>,

    /// 1-based page number
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Records per page (1-500)
    #[arg(long, default_value_t = 24, value_parser = clap::value_parser!(u32).range(1..=500))]
    pub per_page: u32,

    /// Reload the catalog file even if a cached collection exists
    #[arg(long)]
    pub refresh: bool,
}
