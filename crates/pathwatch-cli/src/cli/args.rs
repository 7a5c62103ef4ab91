//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Trace network paths to a fixed set of hosts and flag risky routes
///
/// Each run traces every configured host in parallel, stores hop count,
/// latency and path diversity in a local SQLite database, and logs a
/// security alert when a path ends in a watch-listed country.
#[derive(Parser, Debug)]
#[command(name = "pathwatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(short, long, env = "PATHWATCH_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// SQLite database for results
    #[arg(short, long, env = "PATHWATCH_DATABASE", global = true)]
    pub database: Option<PathBuf>,

    /// Report format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Trace every target once, store the results and print the summary
    Run(RunArgs),

    /// Print the summary of every stored result without probing
    Report,

    /// Inspect CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Run command
// ============================================================================

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Host to trace instead of the configured list (repeatable)
    #[arg(short, long = "target", value_name = "HOST")]
    pub targets: Vec<String>,

    /// Per-trace timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Skip the summary after the batch
    #[arg(long)]
    pub no_report: bool,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Show the configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_runs_once() {
        let cli = Cli::try_parse_from(["pathwatch"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn run_accepts_target_overrides() {
        let cli = Cli::try_parse_from([
            "pathwatch", "run", "-t", "example.com", "--target", "example.org", "--timeout", "5", "-vv",
        ])
        .unwrap();

        let Some(Commands::Run(args)) = cli.command else {
            panic!("expected run command");
        };
        assert_eq!(args.targets, vec!["example.com", "example.org"]);
        assert_eq!(args.timeout, Some(5));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from(["pathwatch", "report", "-o", "csv", "--database", "/tmp/r.db"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Report)));
        assert_eq!(cli.output, Some(OutputFormat::Csv));
        assert_eq!(cli.database, Some(PathBuf::from("/tmp/r.db")));
    }

    #[test]
    fn verify_command_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
