use serde::Serialize;
use std::net::IpAddr;

/// Transient result of evaluating one path's last responsive hop
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    /// Address that was evaluated
    pub ip: Option<IpAddr>,

    /// Country reported by the geolocation provider
    pub country: Option<String>,

    /// True if `country` is on the watch-list
    pub watch_listed: bool,

    /// Score reported by the threat scorer, if it answered
    pub threat_score: Option<u8>,

    /// True if `threat_score` exceeded the policy threshold
    pub high_threat: bool,
}

impl RiskAssessment {
    /// Returns true if either signal raised an alert
    #[must_use]
    pub const fn is_alert(&self) -> bool {
        self.watch_listed || self.high_threat
    }
}
