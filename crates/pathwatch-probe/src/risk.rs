//! Security evaluation of a traced path's endpoint.

use crate::geo::GeoLookup;
use crate::threat::ThreatScorer;
use pathwatch_core::{GeoInfo, RiskAssessment, RiskPolicy};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Combines geolocation and threat scoring into alerts
///
/// Both lookups are best-effort: a failing provider degrades to "no alert"
/// and never fails the pipeline.
pub struct RiskEvaluator {
    geo: Arc<dyn GeoLookup>,
    threat: Arc<dyn ThreatScorer>,
    policy: RiskPolicy,
}

impl RiskEvaluator {
    /// Create an evaluator
    pub fn new(geo: Arc<dyn GeoLookup>, threat: Arc<dyn ThreatScorer>, policy: RiskPolicy) -> Self {
        Self { geo, threat, policy }
    }

    /// Evaluate the last responsive hop of a path
    ///
    /// Alerts are emitted as warn-level log events. The returned assessment
    /// is informational only.
    pub async fn evaluate(
        &self,
        last_ip: Option<IpAddr>,
        avg_latency_ms: f64,
        resolved_name: Option<&str>,
    ) -> RiskAssessment {
        info!(
            ip = ?last_ip,
            latency_ms = avg_latency_ms,
            hostname = resolved_name.unwrap_or("unknown"),
            "monitoring path"
        );

        let Some(ip) = last_ip else {
            return RiskAssessment::default();
        };

        let mut assessment = RiskAssessment {
            ip: Some(ip),
            ..RiskAssessment::default()
        };

        let geo = match self.geo.locate(ip).await {
            Ok(geo) => geo,
            Err(e) => {
                error!(ip = %ip, error = %e, "geolocation lookup failed");
                GeoInfo::default()
            }
        };

        if let Some(country) = geo.country {
            if let Some(watched) = self.policy.watched(&country) {
                warn!(
                    ip = %ip,
                    country = %watched,
                    "security alert: traffic through {watched}, reconsider your VPN or connection setup"
                );
                assessment.watch_listed = true;
            }
            assessment.country = Some(country);
        }

        match self.threat.score(ip).await {
            Ok(score) => {
                assessment.threat_score = Some(score);
                if self.policy.is_high_threat(score) {
                    warn!(ip = %ip, score, "security threat: {ip} has a high threat score");
                    assessment.high_threat = true;
                }
            }
            Err(e) => warn!(ip = %ip, error = %e, "threat scoring failed"),
        }

        assessment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ProbeError, ProbeResult};
    use crate::threat::NullThreatScorer;
    use async_trait::async_trait;

    struct FixedGeo(Option<&'static str>);

    #[async_trait]
    impl GeoLookup for FixedGeo {
        async fn locate(&self, _ip: IpAddr) -> ProbeResult<GeoInfo> {
            Ok(GeoInfo {
                country: self.0.map(String::from),
                ..GeoInfo::default()
            })
        }
    }

    struct FailingGeo;

    #[async_trait]
    impl GeoLookup for FailingGeo {
        async fn locate(&self, _ip: IpAddr) -> ProbeResult<GeoInfo> {
            Err(ProbeError::Geo("connection refused".into()))
        }
    }

    struct FixedScore(ProbeResult<u8>);

    #[async_trait]
    impl ThreatScorer for FixedScore {
        async fn score(&self, _ip: IpAddr) -> ProbeResult<u8> {
            match &self.0 {
                Ok(s) => Ok(*s),
                Err(e) => Err(ProbeError::Threat(e.to_string())),
            }
        }
    }

    fn evaluator(geo: impl GeoLookup + 'static, threat: impl ThreatScorer + 'static) -> RiskEvaluator {
        RiskEvaluator::new(Arc::new(geo), Arc::new(threat), RiskPolicy::default())
    }

    fn ip() -> Option<IpAddr> {
        Some("10.0.0.5".parse().unwrap())
    }

    #[tokio::test]
    async fn watch_listed_country_alerts() {
        let risk = evaluator(FixedGeo(Some("Russia")), NullThreatScorer)
            .evaluate(ip(), 7.234, Some("10.0.0.5"))
            .await;
        assert!(risk.watch_listed);
        assert!(!risk.high_threat);
        assert!(risk.is_alert());
        assert_eq!(risk.country.as_deref(), Some("Russia"));
    }

    #[tokio::test]
    async fn other_country_does_not_alert() {
        let risk = evaluator(FixedGeo(Some("France")), NullThreatScorer)
            .evaluate(ip(), 7.234, None)
            .await;
        assert!(!risk.watch_listed);
        assert!(!risk.is_alert());
        assert_eq!(risk.threat_score, Some(0));
    }

    #[tokio::test]
    async fn geolocation_failure_degrades_to_no_alert() {
        let risk = evaluator(FailingGeo, NullThreatScorer).evaluate(ip(), 1.0, None).await;
        assert_eq!(risk.country, None);
        assert!(!risk.is_alert());
    }

    #[tokio::test]
    async fn high_threat_score_alerts_independently() {
        let risk = evaluator(FixedGeo(Some("France")), FixedScore(Ok(90)))
            .evaluate(ip(), 1.0, None)
            .await;
        assert!(!risk.watch_listed);
        assert!(risk.high_threat);

        let both = evaluator(FixedGeo(Some("China")), FixedScore(Ok(100)))
            .evaluate(ip(), 1.0, None)
            .await;
        assert!(both.watch_listed && both.high_threat);
    }

    #[tokio::test]
    async fn threat_scoring_failure_is_ignored() {
        let risk = evaluator(FixedGeo(Some("Russia")), FixedScore(Err(ProbeError::Threat("down".into()))))
            .evaluate(ip(), 1.0, None)
            .await;
        assert!(risk.watch_listed);
        assert_eq!(risk.threat_score, None);
        assert!(!risk.high_threat);
    }

    #[tokio::test]
    async fn custom_watch_list_is_honoured() {
        let policy = RiskPolicy {
            watch_list: vec!["France".into()],
            threat_threshold: 50,
        };
        let evaluator = RiskEvaluator::new(Arc::new(FixedGeo(Some("France"))), Arc::new(FixedScore(Ok(60))), policy);
        let risk = evaluator.evaluate(ip(), 1.0, None).await;
        assert!(risk.watch_listed);
        assert!(risk.high_threat);
    }

    #[tokio::test]
    async fn missing_endpoint_skips_lookups() {
        let risk = evaluator(FailingGeo, FixedScore(Ok(100))).evaluate(None, 0.0, None).await;
        assert_eq!(risk, RiskAssessment::default());
    }
}
