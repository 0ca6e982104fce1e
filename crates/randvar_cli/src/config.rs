//! CLI configuration management
//!
//! Layers configuration from built-in defaults, an optional TOML file and
//! `RANDVAR_`-prefixed environment variables, in increasing priority.
//! Command-line flags are applied on top by the individual commands.

use std::fmt;
use std::str::FromStr;

use config::{Config, Environment, File, FileFormat};
use randvar_core::source::Seed;
use serde::{Deserialize, Deserializer};

use crate::error::{CliError, Result};

/// Prefix of the environment variables read into [`CliConfig`].
pub const ENV_PREFIX: &str = "RANDVAR";

/// Log levels accepted in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(CliError::InvalidArgument(format!(
                "invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                s
            ))),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// How drawn outcomes are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One outcome per row with its index.
    #[default]
    Table,
    /// A single JSON document.
    Json,
    /// `index,outcome` rows under a header.
    Csv,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(CliError::InvalidArgument(format!(
                "unknown format: {}. Supported: table, json, csv",
                s
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => f.write_str("table"),
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Csv => f.write_str("csv"),
        }
    }
}

/// Settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Seed used when `--seed` is not given; entropy when absent.
    pub seed: Option<Seed>,
    /// Number of outcomes drawn when `-n` is not given.
    pub default_count: usize,
    /// Default tracing level; `--verbose` raises it to debug.
    #[serde(deserialize_with = "deserialize_from_str")]
    pub log_level: LogLevel,
    /// Output format when `--format` is not given.
    #[serde(deserialize_with = "deserialize_from_str")]
    pub format: OutputFormat,
}

fn deserialize_from_str<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = CliError>,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: None,
            default_count: 10,
            log_level: LogLevel::Info,
            format: OutputFormat::Table,
        }
    }
}

impl CliConfig {
    /// Loads the layered configuration.
    ///
    /// Priority (highest to lowest):
    /// 1. `RANDVAR_*` environment variables
    /// 2. The TOML file at `path`, if it exists
    /// 3. Default values
    pub fn load(path: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::new(path, FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Parses configuration from TOML text alone.
    pub fn from_toml(text: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Tracing directive for the given verbosity.
    pub fn filter_directive(&self, verbose: bool) -> &'static str {
        if verbose && self.log_level != LogLevel::Trace {
            LogLevel::Debug.as_filter_str()
        } else {
            self.log_level.as_filter_str()
        }
    }
}
