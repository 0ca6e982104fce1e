//! Kinds command implementation
//!
//! Lists every distribution kind with its parameters.

use randvar_core::distribution::DistributionKind;

use crate::Result;

/// Run the kinds command
pub fn run() -> Result<()> {
    println!("{}", render());
    Ok(())
}

/// One line per kind: name, parameters and outcome type.
pub fn render() -> String {
    let width = DistributionKind::ALL
        .iter()
        .map(|kind| kind.name().len())
        .max()
        .unwrap_or(0);
    DistributionKind::ALL
        .iter()
        .map(|kind| {
            let params = kind.parameter_names().join(" ");
            let note = match kind {
                DistributionKind::TruncatedNormal => " (not implemented)",
                kind if kind.is_discrete() => " -> integer",
                _ => " -> real",
            };
            format!("{:<width$}  [{}]{}", kind.name(), params, note, width = width)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
