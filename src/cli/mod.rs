//! Command-line interface for jshint-config
//!
//! Provides `show`, `get` and `targets` subcommands over a resolved configuration.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod get;
mod show;
mod targets;
mod utils;

/// Resolve and inspect JSHint configuration for asset-pipeline projects
#[derive(Parser)]
#[command(name = "jshint-config")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved configuration as JSON
    Show(show::ShowArgs),

    /// Print the value of a single lint option
    Get(get::GetArgs),

    /// List the JavaScript files selected for linting
    Targets(targets::TargetsArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Show(args) => show::run(args),
        Commands::Get(args) => get::run(args),
        Commands::Targets(args) => targets::run(args),
    }
}
