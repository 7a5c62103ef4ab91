//! Traceroute-based path monitoring with geolocation and threat alerts.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use pathwatch::{ProbeConfig, ProbeOrchestrator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pathwatch::ProbeError> {
//!     let config = ProbeConfig::default();
//!     let orchestrator = ProbeOrchestrator::from_config(&config)?.build();
//!
//!     let report = orchestrator.run().await;
//!     for outcome in &report.outcomes {
//!         println!("{}: {} hops, {:.2} ms", outcome.target, outcome.hop_count, outcome.avg_latency_ms);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for the geolocation client
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/pathwatch/0.1.0")]

// Re-export core types
pub use pathwatch_core::*;

// Re-export the probe pipeline
pub use pathwatch_probe::*;

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
