//! Traceroute probing and path risk evaluation for pathwatch.
//!
//! The pipeline for one target runs strictly in order:
//!
//! 1. [`Tracer`] runs the path-tracing utility
//! 2. [`parse_hops`] turns its output into responsive hops
//! 3. [`compute_metrics`] derives hop count, latency and diversity
//! 4. [`resolve_identity`] reverse-resolves the last hop
//! 5. [`RiskEvaluator`] geolocates and scores the last hop
//!
//! [`ProbeOrchestrator`] runs that pipeline for every target in parallel.

#![doc(html_root_url = "https://docs.rs/pathwatch-probe/0.1.0")]

mod error;

pub mod dns;
pub mod geo;
pub mod metrics;
pub mod orchestrator;
pub mod parser;
pub mod risk;
pub mod threat;
pub mod tracer;

pub use dns::{resolve_identity, DnsResolver, NameResolver};
pub use error::{ProbeError, ProbeResult};
pub use geo::{GeoClient, GeoClientBuilder, GeoLookup};
pub use metrics::compute_metrics;
pub use orchestrator::{BatchReport, FailedTarget, ProbeOrchestrator, ProbeOrchestratorBuilder};
pub use parser::{last_responsive_ip, parse_hops};
pub use risk::RiskEvaluator;
pub use threat::{NullThreatScorer, ThreatScorer};
pub use tracer::{CommandTracer, Tracer};
