//! Probe and risk configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Hosts probed when no target list is configured.
pub const DEFAULT_TARGETS: [&str; 10] = [
    "google.com",
    "youtube.com",
    "facebook.com",
    "twitter.com",
    "instagram.com",
    "linkedin.com",
    "wikipedia.org",
    "amazon.com",
    "yahoo.com",
    "netflix.com",
];

/// Configuration for one probe batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Hosts to trace (domain names or IP literals).
    #[serde(default = "default_targets")]
    pub targets: Vec<String>,

    /// Wall-clock limit for a single trace (seconds).
    #[serde(default = "default_trace_timeout")]
    pub trace_timeout_secs: u64,

    /// Path-tracing program to invoke.
    #[serde(default = "default_tracer_program")]
    pub tracer_program: String,

    /// Arguments placed before the target (numeric hop addressing).
    #[serde(default = "default_tracer_args")]
    pub tracer_args: Vec<String>,

    /// Geolocation endpoint; the IP literal is appended to it.
    #[serde(default = "default_geo_endpoint")]
    pub geo_endpoint: String,

    /// Request timeout for geolocation lookups (seconds).
    #[serde(default = "default_geo_timeout")]
    pub geo_timeout_secs: u64,

    /// Alerting policy applied to the last responsive hop.
    #[serde(default)]
    pub risk: RiskPolicy,
}

/// Policy deciding when a traced path raises a security alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskPolicy {
    /// Countries that trigger an alert when the last hop geolocates there.
    #[serde(default = "default_watch_list")]
    pub watch_list: Vec<String>,

    /// Threat scores strictly above this value (0-100) raise an alert.
    #[serde(default = "default_threat_threshold")]
    pub threat_threshold: u8,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            targets: default_targets(),
            trace_timeout_secs: default_trace_timeout(),
            tracer_program: default_tracer_program(),
            tracer_args: default_tracer_args(),
            geo_endpoint: default_geo_endpoint(),
            geo_timeout_secs: default_geo_timeout(),
            risk: RiskPolicy::default(),
        }
    }
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self {
            watch_list: default_watch_list(),
            threat_threshold: default_threat_threshold(),
        }
    }
}

impl ProbeConfig {
    /// Trace timeout as a [`Duration`].
    #[must_use]
    pub const fn trace_timeout(&self) -> Duration {
        Duration::from_secs(self.trace_timeout_secs)
    }

    /// Geolocation request timeout as a [`Duration`].
    #[must_use]
    pub const fn geo_timeout(&self) -> Duration {
        Duration::from_secs(self.geo_timeout_secs)
    }
}

impl RiskPolicy {
    /// Returns the watch-listed entry matching `country`, if any.
    #[must_use]
    pub fn watched(&self, country: &str) -> Option<&str> {
        let country = country.trim();
        self.watch_list
            .iter()
            .find(|c| c.eq_ignore_ascii_case(country))
            .map(String::as_str)
    }

    /// Returns true if `score` counts as a high threat.
    #[must_use]
    pub const fn is_high_threat(&self, score: u8) -> bool {
        score > self.threat_threshold
    }
}

fn default_targets() -> Vec<String> {
    DEFAULT_TARGETS.iter().map(|t| (*t).to_string()).collect()
}

const fn default_trace_timeout() -> u64 {
    30
}

fn default_tracer_program() -> String {
    String::from("traceroute")
}

fn default_tracer_args() -> Vec<String> {
    vec![String::from("-n")]
}

fn default_geo_endpoint() -> String {
    String::from("http://ip-api.com/json/")
}

const fn default_geo_timeout() -> u64 {
    10
}

fn default_watch_list() -> Vec<String> {
    vec![String::from("China"), String::from("Russia")]
}

const fn default_threat_threshold() -> u8 {
    75
}
