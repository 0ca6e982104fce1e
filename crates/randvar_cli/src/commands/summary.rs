//! Summary command implementation
//!
//! Draws a batch and prints its descriptive statistics.

use randvar_core::stats::Summary;
use tracing::info;

use super::{describe, draw_batch, Batch, DrawRequest};
use crate::config::{CliConfig, OutputFormat};
use crate::{CliError, Result};

/// Run the summary command
pub fn run(config: &CliConfig, request: DrawRequest) -> Result<()> {
    let batch = draw_batch(config, &request)?;
    let summary = summarise(&batch)?;
    info!(count = summary.count, "Summary computed");
    println!("{}", render(&batch, &summary, config.format)?);
    Ok(())
}

fn summarise(batch: &Batch) -> Result<Summary> {
    Summary::from_outcomes(&batch.outcomes)
        .ok_or_else(|| CliError::InvalidArgument("cannot summarise an empty batch".to_string()))
}

/// Formats a summary; CSV falls back to the table layout.
pub fn render(batch: &Batch, summary: &Summary, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "kind": batch.distribution.kind(),
                "seed": batch.seed,
                "summary": summary,
            });
            serde_json::to_string_pretty(&value)?
        }
        OutputFormat::Table | OutputFormat::Csv => format!(
            "{}\n{}\nseed     {}",
            describe(&batch.distribution),
            summary,
            batch.seed
        ),
    };
    Ok(text)
}
