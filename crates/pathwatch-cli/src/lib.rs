//! # pathwatch-cli
//!
//! Command-line front end for pathwatch.
//!
//! ## Features
//!
//! - **Probe batches**: trace every configured host in parallel
//! - **Security alerts**: watch-listed countries and high threat scores are logged
//! - **Persistence**: every outcome is appended to a local SQLite database
//! - **Reports**: summary table as pretty text, JSON or CSV

pub mod cli;
pub mod config;
pub mod output;
pub mod report;
pub mod store;

pub use cli::run;
