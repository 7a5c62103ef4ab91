//! Report output formats.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Format used by `report`, `run` and `config show`.
///
/// Parsed by clap on the command line and by serde from the config file.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Summary table with colors
    #[default]
    #[value(alias = "table")]
    #[serde(alias = "table")]
    Pretty,
    /// JSON array of stored rows
    Json,
    /// CSV with a header row
    Csv,
}
