//! Seed command implementation
//!
//! Prints a fresh seed drawn from system entropy, for pinning later runs.

use randvar_core::source::SeededSource;
use tracing::debug;

use crate::Result;

/// Run the seed command
pub fn run() -> Result<()> {
    let seed = SeededSource::from_entropy().seed();
    debug!(seed, "Generated entropy seed");
    println!("{}", seed);
    Ok(())
}
