//! SQLite persistence of trace outcomes.

use pathwatch::{OutcomeSink, PathwatchError, TraceOutcome};
use rusqlite::{params, Connection};
use serde::Serialize;
use std::path::Path;
use std::sync::Mutex;
use tracing::debug;

/// One persisted outcome as stored in the `results` table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredRow {
    pub site: String,
    pub hop_count: i64,
    pub avg_latency: f64,
    pub unique_path_count: i64,
    pub geo_ip_data: String,
    pub fqdn: Option<String>,
}

/// Append-only result store backed by a single SQLite connection
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

fn storage(err: rusqlite::Error) -> PathwatchError {
    PathwatchError::Storage(err.to_string())
}

impl SqliteStore {
    /// Open (or create) the database and ensure the schema exists
    pub fn open(path: impl AsRef<Path>) -> pathwatch::Result<Self> {
        let conn = Connection::open(path).map_err(storage)?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS results (
                site TEXT,
                hop_count INTEGER,
                avg_latency REAL,
                unique_path_count INTEGER,
                geo_ip_data TEXT,
                fqdn TEXT
            )",
            [],
        )
        .map_err(storage)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> pathwatch::Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| PathwatchError::Storage("connection lock poisoned".into()))
    }

    /// Every stored row, oldest first
    pub fn rows(&self) -> pathwatch::Result<Vec<StoredRow>> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(
                "SELECT site, hop_count, avg_latency, unique_path_count, geo_ip_data, fqdn
                 FROM results ORDER BY rowid",
            )
            .map_err(storage)?;

        let rows = stmt
            .query_map([], |row| {
                Ok(StoredRow {
                    site: row.get(0)?,
                    hop_count: row.get(1)?,
                    avg_latency: row.get(2)?,
                    unique_path_count: row.get(3)?,
                    geo_ip_data: row.get(4)?,
                    fqdn: row.get(5)?,
                })
            })
            .map_err(storage)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(storage)?;

        Ok(rows)
    }
}

impl OutcomeSink for SqliteStore {
    fn record(&self, outcome: &TraceOutcome) -> pathwatch::Result<()> {
        let hop_count = i64::try_from(outcome.hop_count)
            .map_err(|e| PathwatchError::Storage(e.to_string()))?;
        let unique_path_count = i64::try_from(outcome.unique_hop_count)
            .map_err(|e| PathwatchError::Storage(e.to_string()))?;

        self.lock()?
            .execute(
                "INSERT INTO results (site, hop_count, avg_latency, unique_path_count, geo_ip_data, fqdn)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    outcome.target,
                    hop_count,
                    outcome.avg_latency_ms,
                    unique_path_count,
                    outcome.geo_path_display(),
                    outcome.resolved_name,
                ],
            )
            .map_err(storage)?;

        debug!(site = %outcome.target, "outcome stored");
        Ok(())
    }
}
