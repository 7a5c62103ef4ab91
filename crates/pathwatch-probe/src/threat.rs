//! Threat scoring seam for hop addresses.

use crate::error::ProbeResult;
use async_trait::async_trait;
use std::net::IpAddr;

/// Capability that rates how risky an address is
#[async_trait]
pub trait ThreatScorer: Send + Sync {
    /// Score `ip` from 0 (benign) to 100 (known hostile)
    async fn score(&self, ip: IpAddr) -> ProbeResult<u8>;
}

/// Scorer with no intelligence source; every address scores 0
#[derive(Debug, Clone, Copy, Default)]
pub struct NullThreatScorer;

#[async_trait]
impl ThreatScorer for NullThreatScorer {
    async fn score(&self, _ip: IpAddr) -> ProbeResult<u8> {
        Ok(0)
    }
}
