//! CLI command handlers.

mod convert;
mod query;

pub use convert::run_convert_command;
pub use query::run_query_command;
