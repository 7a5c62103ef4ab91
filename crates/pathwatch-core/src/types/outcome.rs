use super::HopRecord;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Separator used when the hop path is rendered as a single string
pub const GEO_PATH_SEPARATOR: &str = "; ";

/// Metrics derived from a parsed hop sequence
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathMetrics {
    /// Number of responsive hops
    pub hop_count: usize,

    /// Sum of every latency sample divided by `hop_count` (0 when there are no hops)
    pub avg_latency_ms: f64,

    /// Number of distinct hop addresses
    pub unique_hop_count: usize,

    /// Hop addresses in TTL order
    pub geo_path: Vec<IpAddr>,
}

/// Result of probing one target in one batch
///
/// Built once, after every pipeline stage has run, and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceOutcome {
    /// Host that was traced
    pub target: String,

    /// Responsive hops in TTL order
    pub hops: Vec<HopRecord>,

    /// Number of responsive hops
    pub hop_count: usize,

    /// Average latency in milliseconds
    pub avg_latency_ms: f64,

    /// Number of distinct hop addresses
    pub unique_hop_count: usize,

    /// Hop addresses in TTL order
    pub geo_path: Vec<IpAddr>,

    /// Reverse DNS name of the last responsive hop (or its literal address)
    pub resolved_name: Option<String>,
}

impl TraceOutcome {
    /// Assemble an outcome from its parsed hops and derived metrics
    #[must_use]
    pub fn new(
        target: impl Into<String>,
        hops: Vec<HopRecord>,
        metrics: PathMetrics,
        resolved_name: Option<String>,
    ) -> Self {
        Self {
            target: target.into(),
            hops,
            hop_count: metrics.hop_count,
            avg_latency_ms: metrics.avg_latency_ms,
            unique_hop_count: metrics.unique_hop_count,
            geo_path: metrics.geo_path,
            resolved_name,
        }
    }

    /// Hop addresses joined for display and storage
    #[must_use]
    pub fn geo_path_display(&self) -> String {
        self.geo_path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(GEO_PATH_SEPARATOR)
    }
}
