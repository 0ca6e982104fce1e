//! CLI error types.

use randvar_core::error::RandVarError;
use thiserror::Error;

/// Errors surfaced by the `randvar` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Construction or draw failure from the engine.
    #[error(transparent)]
    Engine(#[from] RandVarError),

    /// Configuration could not be loaded or deserialised.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// JSON output could not be produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid command-line or configuration value.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
