//! Convert command handler: CSV in, canonical JSON catalog out.

use anyhow::{Context, Result};
use tracing::info;

use teacat_core::convert_file;

use crate::cli::ConvertArgs;

pub fn run_convert_command(args: &ConvertArgs) -> Result<()> {
    let conversion = convert_file(&args.input)?;

    // serde_json writes UTF-8 without escaping non-ASCII, so accented
    // names survive the round trip verbatim.
    let json = serde_json::to_string_pretty(&conversion.teas)
        .context("serializing converted records")?;
    std::fs::write(&args.output, json)
        .with_context(|| format!("cannot write output file '{}'", args.output.display()))?;

    info!(
        input = %args.input.display(),
        output = %args.output.display(),
        records = conversion.summary.records,
        "conversion written"
    );

    // The one-line QA summary is the command's stdout contract; logs go to
    // stderr and can be silenced without losing it.
    println!(
        "{}",
        serde_json::to_string(&conversion.summary).context("serializing QA summary")?
    );

    Ok(())
}
