//! Draw command implementation
//!
//! Draws a batch of outcomes and prints them, followed by the seed that
//! reproduces the run.

use randvar_core::distribution::DistributionSpec;
use randvar_core::source::Seed;
use randvar_core::variable::Outcome;
use serde::Serialize;
use tracing::info;

use super::{draw_batch, Batch, DrawRequest};
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// JSON document emitted by `--format json`.
#[derive(Serialize)]
struct DrawReport<'a> {
    distribution: DistributionSpec,
    seed: Seed,
    outcomes: &'a [Outcome],
}

/// Run the draw command
pub fn run(config: &CliConfig, request: DrawRequest, format: Option<OutputFormat>) -> Result<()> {
    let batch = draw_batch(config, &request)?;
    let format = format.unwrap_or(config.format);
    info!(%format, outcomes = batch.outcomes.len(), "Rendering outcomes");
    println!("{}", render(&batch, format)?);
    Ok(())
}

/// Formats a batch for output.
pub fn render(batch: &Batch, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Table => render_table(batch),
        OutputFormat::Csv => render_csv(batch),
        OutputFormat::Json => serde_json::to_string_pretty(&DrawReport {
            distribution: DistributionSpec::from(batch.distribution.clone()),
            seed: batch.seed,
            outcomes: &batch.outcomes,
        })?,
    };
    Ok(text)
}

fn render_table(batch: &Batch) -> String {
    let width = batch.outcomes.len().saturating_sub(1).to_string().len();
    let mut lines: Vec<String> = batch
        .outcomes
        .iter()
        .enumerate()
        .map(|(i, outcome)| format!("{:>width$}  {}", i, outcome, width = width))
        .collect();
    lines.push(format!("seed: {}", batch.seed));
    lines.join("\n")
}

fn render_csv(batch: &Batch) -> String {
    let mut lines = vec!["index,outcome".to_string()];
    lines.extend(
        batch
            .outcomes
            .iter()
            .enumerate()
            .map(|(i, outcome)| format!("{},{}", i, outcome)),
    );
    lines.push(format!("# seed: {}", batch.seed));
    lines.join("\n")
}
