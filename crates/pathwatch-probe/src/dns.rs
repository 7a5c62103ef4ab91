//! Reverse DNS resolution of hop addresses.

use crate::error::{ProbeError, ProbeResult};
use async_trait::async_trait;
use hickory_resolver::config::ResolverConfig;
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;
use std::net::IpAddr;
use tracing::{debug, warn};

/// Capability that maps an address back to a host name
#[async_trait]
pub trait NameResolver: Send + Sync {
    /// Reverse-resolve `ip` to its first PTR name
    async fn reverse(&self, ip: IpAddr) -> ProbeResult<String>;
}

/// DNS resolver backed by hickory
pub struct DnsResolver {
    resolver: TokioResolver,
}

impl Default for DnsResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl DnsResolver {
    /// Create a resolver from the system configuration
    ///
    /// Falls back to hickory's default upstreams if the system
    /// configuration cannot be read.
    #[must_use]
    pub fn new() -> Self {
        let resolver = match TokioResolver::builder_tokio() {
            Ok(builder) => builder.build(),
            Err(e) => {
                warn!(error = %e, "system resolver config unavailable, using defaults");
                TokioResolver::builder_with_config(
                    ResolverConfig::default(),
                    TokioConnectionProvider::default(),
                )
                .build()
            }
        };

        Self { resolver }
    }
}

#[async_trait]
impl NameResolver for DnsResolver {
    async fn reverse(&self, ip: IpAddr) -> ProbeResult<String> {
        let response = self
            .resolver
            .reverse_lookup(ip)
            .await
            .map_err(|e| ProbeError::Dns(e.to_string()))?;

        response
            .iter()
            .next()
            .map(|name| name.to_string().trim_end_matches('.').to_string())
            .ok_or_else(|| ProbeError::Dns(format!("no PTR record for {ip}")))
    }
}

/// Resolve the display name for the last responsive hop
///
/// A failed lookup yields the address literal itself; a path with no
/// responsive hop has no name.
pub async fn resolve_identity(resolver: &dyn NameResolver, last_ip: Option<IpAddr>) -> Option<String> {
    let ip = last_ip?;

    match resolver.reverse(ip).await {
        Ok(name) => Some(name),
        Err(e) => {
            debug!(ip = %ip, error = %e, "reverse lookup failed, using address");
            Some(ip.to_string())
        }
    }
}
