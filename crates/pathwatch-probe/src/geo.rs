//! IP geolocation over HTTP.

use crate::error::{ProbeError, ProbeResult};
use async_trait::async_trait;
use pathwatch_core::{GeoInfo, ProbeConfig};
use reqwest::Client as HttpClient;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Public geolocation endpoint (no key required)
const DEFAULT_ENDPOINT: &str = "http://ip-api.com/json/";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Capability that geolocates an address
#[async_trait]
pub trait GeoLookup: Send + Sync {
    /// Look up geolocation data for `ip`
    async fn locate(&self, ip: IpAddr) -> ProbeResult<GeoInfo>;
}

/// Client for ip-api.com style JSON endpoints (`GET <endpoint>/<ip>`)
#[derive(Clone)]
pub struct GeoClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    endpoint: Url,
}

impl GeoClient {
    /// Create a client for the default endpoint
    pub fn new() -> ProbeResult<Self> {
        GeoClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> GeoClientBuilder {
        GeoClientBuilder::new()
    }

    /// Create a client from probe configuration
    pub fn from_config(config: &ProbeConfig) -> ProbeResult<Self> {
        GeoClientBuilder::new()
            .endpoint(config.geo_endpoint.clone())
            .timeout(config.geo_timeout())
            .build()
    }

    /// Build the lookup URL for an address
    fn build_url(&self, ip: IpAddr) -> ProbeResult<Url> {
        let mut url = self.inner.endpoint.clone();
        url.path_segments_mut()
            .map_err(|()| ProbeError::Geo(format!("endpoint cannot be a base: {}", self.inner.endpoint)))?
            .pop_if_empty()
            .push(&ip.to_string());
        Ok(url)
    }
}

#[async_trait]
impl GeoLookup for GeoClient {
    async fn locate(&self, ip: IpAddr) -> ProbeResult<GeoInfo> {
        let url = self.build_url(ip)?;
        debug!(url = %url, "GET geolocation");

        let response = self
            .inner
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ProbeError::Geo(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::Geo(format!("provider returned {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProbeError::Geo(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| ProbeError::Geo(e.to_string()))
    }
}

/// Builder for configuring a [`GeoClient`]
pub struct GeoClientBuilder {
    endpoint: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for GeoClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoClientBuilder {
    /// Create a builder targeting the default endpoint
    #[must_use]
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("pathwatch/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the endpoint (useful for testing)
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client
    pub fn build(self) -> ProbeResult<GeoClient> {
        let endpoint = Url::parse(&self.endpoint)
            .map_err(|e| ProbeError::Geo(format!("invalid endpoint {}: {e}", self.endpoint)))?;

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| ProbeError::Geo(e.to_string()))?;

        Ok(GeoClient {
            inner: Arc::new(ClientInner { http, endpoint }),
        })
    }
}
