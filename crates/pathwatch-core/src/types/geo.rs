use serde::{Deserialize, Serialize};

/// Geolocation data for an IP address
///
/// Only `country` drives alerting; the remaining fields are kept for logging.
/// Unknown provider fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoInfo {
    /// Full country name
    #[serde(default)]
    pub country: Option<String>,

    /// Two-letter country code (ISO 3166-1 alpha-2)
    #[serde(default)]
    pub country_code: Option<String>,

    /// City name
    #[serde(default)]
    pub city: Option<String>,

    /// Internet service provider
    #[serde(default)]
    pub isp: Option<String>,
}

impl GeoInfo {
    /// Returns true if the provider returned no usable data
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.country.is_none()
            && self.country_code.is_none()
            && self.city.is_none()
            && self.isp.is_none()
    }
}
