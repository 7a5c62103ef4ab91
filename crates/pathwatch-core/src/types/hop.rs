use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// A responsive hop on a traced path
///
/// Unresponsive hops (`*` markers) are never represented, so every record
/// carries a real address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HopRecord {
    /// Address that answered at this TTL
    pub ip: IpAddr,

    /// Round-trip samples in milliseconds, in the order reported
    #[serde(default)]
    pub latencies: Vec<f64>,
}

impl HopRecord {
    /// Create a hop record
    #[must_use]
    pub const fn new(ip: IpAddr, latencies: Vec<f64>) -> Self {
        Self { ip, latencies }
    }

    /// Sum of all latency samples for this hop
    #[must_use]
    pub fn total_latency(&self) -> f64 {
        self.latencies.iter().sum()
    }
}
