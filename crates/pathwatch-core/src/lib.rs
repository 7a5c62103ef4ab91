//! Core types and traits for pathwatch.
//!
//! This crate provides the foundational types shared by the probe pipeline
//! and the command-line front end:
//!
//! - **Types**: hop records, trace outcomes, path metrics and risk assessments
//! - **Configuration**: [`ProbeConfig`] and [`RiskPolicy`]
//! - **Collaborators**: [`OutcomeSink`] and [`Reporter`] seams for persistence and reporting
//! - **Errors**: [`PathwatchError`] and the crate-wide [`Result`] alias
//!
//! # Example
//!
//! ```rust,ignore
//! use pathwatch_core::{TraceOutcome, Result};
//!
//! fn summarize(outcome: &TraceOutcome) -> Result<()> {
//!     println!("{}: {} hops, {:.2} ms", outcome.target, outcome.hop_count, outcome.avg_latency_ms);
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/pathwatch-core/0.1.0")]

mod config;
mod error;
mod sink;
pub mod types;

pub use config::{ProbeConfig, RiskPolicy, DEFAULT_TARGETS};
pub use error::{PathwatchError, Result};
pub use sink::{OutcomeSink, Reporter};
pub use types::*;
