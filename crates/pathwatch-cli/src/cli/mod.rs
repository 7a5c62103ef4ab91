//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::output::OutputFormat;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config_path = cli
        .config
        .unwrap_or_else(|| Config::path().unwrap_or_else(|_| PathBuf::from("pathwatch.toml")));
    let config = Config::load_from(&config_path)?;

    // CLI flags win over the config file
    let output_format = cli
        .output
        .or(config.output_format)
        .unwrap_or(OutputFormat::Pretty);
    let database = cli.database.unwrap_or_else(|| config.database_path());

    // Create context for commands
    let ctx = commands::Context {
        config,
        config_path,
        database,
        output_format,
    };

    // Dispatch to appropriate command
    match cli.command {
        None => commands::run::execute(ctx, args::RunArgs::default()).await,
        Some(Commands::Run(args)) => commands::run::execute(ctx, args).await,
        Some(Commands::Report) => commands::report::execute(ctx),
        Some(Commands::Config(args)) => commands::config::execute(ctx, args),
    }
}

/// Install the global tracing subscriber; `RUST_LOG` overrides `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
