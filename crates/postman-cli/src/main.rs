//! Gateway Postman CLI.
//!
//! Command-line tool that converts a gateway service configuration into a
//! Postman collection document.
//!
//! # Examples
//!
//! ```bash
//! # Print the collection to stdout
//! gateway-postman export --config gateway.json
//!
//! # Write it to a file
//! gateway-postman export --config gateway.json --output collection.json
//!
//! # Gate CI on degradation-free documentation options
//! gateway-postman check --config gateway.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gateway_postman_collection::{Item, ParsedCollection, parse};
use gateway_postman_config::ServiceConfig;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Gateway Postman - collection documents from gateway configurations.
#[derive(Parser, Debug)]
#[command(name = "gateway-postman")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export a configuration as a Postman collection.
    ///
    /// Loads the gateway configuration, builds the collection document and
    /// writes it out as pretty-printed JSON. Degraded documentation options
    /// are reported on stderr but never stop the export.
    Export {
        /// Path to the gateway configuration file
        #[arg(short, long, default_value = "gateway.json")]
        config: PathBuf,

        /// Write the document here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that a configuration converts without degradation.
    ///
    /// Builds the collection and reports every warning the conversion
    /// surfaced. Exits non-zero when any warning was raised, so the check
    /// can gate CI pipelines.
    Check {
        /// Path to the gateway configuration file
        #[arg(short, long, default_value = "gateway.json")]
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(error) => {
            eprintln!("Error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

/// Parses arguments and dispatches the selected subcommand.
fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Export { config, output } => {
            export(&config, output.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { config } => {
            if check(&config)? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

/// Initializes logging to stderr.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Loads a configuration file and converts it.
fn load(config: &Path) -> Result<ParsedCollection> {
    let cfg = ServiceConfig::from_path(config)?;
    Ok(parse(&cfg)?)
}

/// Runs the `export` subcommand.
fn export(config: &Path, output: Option<&Path>) -> Result<()> {
    let parsed = load(config)?;
    let json = serde_json::to_string_pretty(&parsed.collection)?;

    match output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Collection written to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

/// Runs the `check` subcommand. Returns `true` when the conversion raised
/// no warnings.
fn check(config: &Path) -> Result<bool> {
    let parsed = load(config)?;

    if !parsed.is_clean() {
        for warning in &parsed.warnings {
            eprintln!("warning: {warning}");
        }
        return Ok(false);
    }

    let collection = &parsed.collection;
    println!(
        "ok: {} ({} folders, {} requests)",
        collection.info.name,
        folder_count(&collection.items),
        request_count(&collection.items)
    );
    Ok(true)
}

/// Counts folder items at every level of the document.
fn folder_count(items: &[Item]) -> usize {
    items
        .iter()
        .filter(|item| item.is_folder())
        .map(|item| 1 + folder_count(&item.items))
        .sum()
}

/// Counts request leaves at every level of the document.
fn request_count(items: &[Item]) -> usize {
    items
        .iter()
        .map(|item| usize::from(item.request.is_some()) + request_count(&item.items))
        .sum()
}
