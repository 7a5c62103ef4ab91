//! Collaborators that receive finished outcomes.

use crate::{Result, TraceOutcome};

/// Durable destination for trace outcomes
///
/// Called once per successful target, possibly from several tasks at the
/// same time. Implementations must make a single `record` call atomic.
pub trait OutcomeSink: Send + Sync {
    /// Append one outcome
    fn record(&self, outcome: &TraceOutcome) -> Result<()>;
}

/// Renders accumulated state once a batch has finished
pub trait Reporter: Send + Sync {
    /// Render the report
    fn render(&self) -> Result<()>;
}
