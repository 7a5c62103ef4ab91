//! Configuration management.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use pathwatch::ProbeConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// Database file used when none is configured.
pub const DEFAULT_DATABASE: &str = "network_monitor.db";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database holding trace results.
    pub database: Option<PathBuf>,

    /// Default output format.
    pub output_format: Option<OutputFormat>,

    /// Targets, timeouts and alerting policy.
    #[serde(default)]
    pub probe: ProbeConfig,
}

impl Config {
    /// Get the default config file path.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("io", "pathwatch", "pathwatch")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from a file; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        Ok(config)
    }

    /// Database path, falling back to [`DEFAULT_DATABASE`].
    pub fn database_path(&self) -> PathBuf {
        self.database
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.database_path(), PathBuf::from(DEFAULT_DATABASE));
        assert_eq!(config.probe, ProbeConfig::default());
    }

    #[test]
    fn reads_probe_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
            database = "/var/lib/pathwatch/results.db"
            output_format = "csv"

            [probe]
            targets = ["example.com", "example.org"]
            trace_timeout_secs = 10

            [probe.risk]
            watch_list = ["Atlantis"]
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.database_path(), PathBuf::from("/var/lib/pathwatch/results.db"));
        assert_eq!(config.output_format, Some(OutputFormat::Csv));
        assert_eq!(config.probe.targets, vec!["example.com", "example.org"]);
        assert_eq!(config.probe.trace_timeout_secs, 10);
        assert_eq!(config.probe.risk.watch_list, vec!["Atlantis"]);
        assert_eq!(config.probe.tracer_program, "traceroute");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "probe = 3").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
