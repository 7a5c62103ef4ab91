//! Summary report over every stored result.

use colored::Colorize;
use pathwatch::{PathwatchError, Reporter};
use std::sync::Arc;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::output::OutputFormat;
use crate::store::{SqliteStore, StoredRow};

/// Placeholder shown when a path had no resolvable endpoint
const UNKNOWN_NAME: &str = "Unknown";

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Site")]
    site: String,
    #[tabled(rename = "Hop Count")]
    hop_count: i64,
    #[tabled(rename = "Avg Latency (ms)")]
    avg_latency: String,
    #[tabled(rename = "Unique Paths")]
    unique_paths: i64,
    #[tabled(rename = "FQDN")]
    fqdn: String,
}

impl From<&StoredRow> for SummaryRow {
    fn from(row: &StoredRow) -> Self {
        Self {
            site: row.site.clone(),
            hop_count: row.hop_count,
            avg_latency: format!("{:.2}", row.avg_latency),
            unique_paths: row.unique_path_count,
            fqdn: row.fqdn.clone().unwrap_or_else(|| UNKNOWN_NAME.to_string()),
        }
    }
}

/// Renders the `results` table to standard output
pub struct TableReporter {
    store: Arc<SqliteStore>,
    format: OutputFormat,
}

impl TableReporter {
    pub const fn new(store: Arc<SqliteStore>, format: OutputFormat) -> Self {
        Self { store, format }
    }
}

impl Reporter for TableReporter {
    fn render(&self) -> pathwatch::Result<()> {
        let rows = self.store.rows()?;
        println!("{}", format_report(&rows, self.format)?);
        Ok(())
    }
}

/// Format stored rows in the requested output format
pub fn format_report(rows: &[StoredRow], format: OutputFormat) -> pathwatch::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Csv => format_csv(rows),
        OutputFormat::Pretty => {
            let summary: Vec<SummaryRow> = rows.iter().map(SummaryRow::from).collect();
            let table = Table::new(summary)
                .with(Style::rounded())
                .with(Modify::new(Columns::new(1..4)).with(Alignment::right()))
                .to_string();

            Ok(format!("{}\n{table}", "Traceroute Summary".bold()))
        }
    }
}

fn format_csv(rows: &[StoredRow]) -> pathwatch::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row).map_err(report_error)?;
    }
    let bytes = writer.into_inner().map_err(report_error)?;

    String::from_utf8(bytes).map_err(report_error)
}

fn report_error(err: impl std::fmt::Display) -> PathwatchError {
    PathwatchError::Report(err.to_string())
}
