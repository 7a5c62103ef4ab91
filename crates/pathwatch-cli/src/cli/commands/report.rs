//! `pathwatch report` - summarize stored results.

use anyhow::{Context as _, Result};
use pathwatch::Reporter;
use std::sync::Arc;

use super::Context;
use crate::report::TableReporter;
use crate::store::SqliteStore;

pub fn execute(ctx: Context) -> Result<()> {
    let store = SqliteStore::open(&ctx.database)
        .with_context(|| format!("Failed to open database {}", ctx.database.display()))?;

    TableReporter::new(Arc::new(store), ctx.output_format).render()?;

    Ok(())
}
