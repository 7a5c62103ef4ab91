use std::time::Duration;
use thiserror::Error;

/// Result type alias for probe operations
pub type ProbeResult<T> = std::result::Result<T, ProbeError>;

/// Errors from the probe pipeline
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Path-tracing utility exited unsuccessfully
    #[error("trace error: {0}")]
    Trace(String),

    /// Path-tracing utility exceeded its deadline
    #[error("trace timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// Path-tracing utility could not be started
    #[error("failed to start tracer: {0}")]
    Spawn(#[from] std::io::Error),

    /// Reverse DNS resolution error
    #[error("DNS error: {0}")]
    Dns(String),

    /// Geolocation lookup error
    #[error("geolocation error: {0}")]
    Geo(String),

    /// Threat scoring error
    #[error("threat scoring error: {0}")]
    Threat(String),

    /// Persistence sink rejected the outcome
    #[error("sink error: {0}")]
    Sink(String),
}

impl From<ProbeError> for pathwatch_core::PathwatchError {
    fn from(err: ProbeError) -> Self {
        match err {
            ProbeError::Trace(msg) => Self::Trace(msg),
            ProbeError::Timeout(d) => Self::Timeout(d.as_secs()),
            ProbeError::Spawn(e) => Self::Io(e),
            ProbeError::Dns(msg) => Self::Dns(msg),
            ProbeError::Geo(msg) | ProbeError::Threat(msg) => Self::Lookup(msg),
            ProbeError::Sink(msg) => Self::Storage(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathwatch_core::PathwatchError;

    #[test]
    fn timeout_converts_to_seconds() {
        let err: PathwatchError = ProbeError::Timeout(Duration::from_secs(30)).into();
        assert!(matches!(err, PathwatchError::Timeout(30)));
    }

    #[test]
    fn lookup_errors_fold_together() {
        let geo: PathwatchError = ProbeError::Geo("503".into()).into();
        let threat: PathwatchError = ProbeError::Threat("offline".into()).into();
        assert!(matches!(geo, PathwatchError::Lookup(_)));
        assert!(matches!(threat, PathwatchError::Lookup(_)));
    }
}
