//! Command implementations.

pub mod config;
pub mod report;
pub mod run;

use std::path::PathBuf;

use crate::config::Config;
use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Loaded configuration
    pub config: Config,

    /// Where the configuration was loaded from
    pub config_path: PathBuf,

    /// Results database
    pub database: PathBuf,

    /// Output format
    pub output_format: OutputFormat,
}
