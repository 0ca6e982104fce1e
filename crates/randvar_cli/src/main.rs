//! randvar CLI - Command Line Front End for Random Variate Generation
//!
//! # Commands
//!
//! - `randvar draw <kind> [params...]` - Draw outcomes from a distribution
//! - `randvar summary <kind> [params...]` - Draw a batch and summarise it
//! - `randvar seed` - Print a fresh entropy-derived seed
//! - `randvar kinds` - List distribution kinds and their parameters
//!
//! Parameters parse as integers when they contain no `.`, `e` or `E`, and
//! as reals otherwise.

use clap::{Parser, Subcommand};
use randvar_core::distribution::{DistributionKind, ParamValue};
use randvar_core::source::Seed;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use config::{CliConfig, OutputFormat};
pub use error::{CliError, Result};

/// Random variate generation CLI
#[derive(Parser)]
#[command(name = "randvar")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "randvar.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw outcomes from a distribution
    Draw {
        /// Distribution kind (e.g. normal, poisson, chi_squared)
        kind: DistributionKind,

        /// Distribution parameters in construction order
        #[arg(allow_negative_numbers = true)]
        params: Vec<ParamValue>,

        /// Number of outcomes (defaults to the configured count)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for the uniform source (defaults to configuration, then entropy)
        #[arg(long)]
        seed: Option<Seed>,

        /// Output format (table, json, csv)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Draw a batch and print summary statistics
    Summary {
        /// Distribution kind
        kind: DistributionKind,

        /// Distribution parameters in construction order
        #[arg(allow_negative_numbers = true)]
        params: Vec<ParamValue>,

        /// Number of outcomes (defaults to the configured count)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for the uniform source
        #[arg(long)]
        seed: Option<Seed>,
    },

    /// Print a fresh entropy-derived seed
    Seed,

    /// List distribution kinds and their parameters
    Kinds,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load(&cli.config)?;

    // Initialise tracing; RUST_LOG takes precedence over configuration
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directive(cli.verbose)));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    debug!(config_file = %cli.config, ?config, "Configuration loaded");

    match cli.command {
        Commands::Draw {
            kind,
            params,
            count,
            seed,
            format,
        } => commands::draw::run(
            &config,
            commands::DrawRequest {
                kind,
                params,
                count,
                seed,
            },
            format,
        ),
        Commands::Summary {
            kind,
            params,
            count,
            seed,
        } => commands::summary::run(
            &config,
            commands::DrawRequest {
                kind,
                params,
                count,
                seed,
            },
        ),
        Commands::Seed => commands::seed::run(),
        Commands::Kinds => commands::kinds::run(),
    }
}
