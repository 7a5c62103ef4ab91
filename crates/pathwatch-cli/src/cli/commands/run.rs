//! `pathwatch run` - trace every target once.

use anyhow::{Context as _, Result};
use colored::Colorize;
use pathwatch::ProbeOrchestrator;
use std::sync::Arc;
use tracing::info;

use super::Context;
use crate::cli::args::RunArgs;
use crate::report::TableReporter;
use crate::store::SqliteStore;

pub async fn execute(ctx: Context, args: RunArgs) -> Result<()> {
    let mut probe = ctx.config.probe;

    if !args.targets.is_empty() {
        probe.targets = args.targets;
    }
    if let Some(secs) = args.timeout {
        probe.trace_timeout_secs = secs;
    }

    let store = Arc::new(
        SqliteStore::open(&ctx.database)
            .with_context(|| format!("Failed to open database {}", ctx.database.display()))?,
    );

    let mut builder = ProbeOrchestrator::from_config(&probe)?.sink(store.clone());
    if !args.no_report {
        builder = builder.reporter(Arc::new(TableReporter::new(store, ctx.output_format)));
    }

    let report = builder.build().run().await;

    // Failed targets are logged, never surfaced through the exit status
    if !report.failures.is_empty() {
        eprintln!(
            "{} {} of {} targets produced no trace",
            "Note:".yellow().bold(),
            report.failures.len(),
            probe.targets.len()
        );
        for failure in &report.failures {
            eprintln!("  {} {}", failure.target.cyan(), failure.reason.dimmed());
        }
    }

    info!(
        database = %ctx.database.display(),
        stored = report.outcomes.len() - report.unpersisted,
        "traceroutes completed and database updated"
    );

    Ok(())
}
