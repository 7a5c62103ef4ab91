use thiserror::Error;

/// Result type alias for pathwatch operations
pub type Result<T> = std::result::Result<T, PathwatchError>;

/// Errors that can occur anywhere in pathwatch
#[derive(Error, Debug)]
pub enum PathwatchError {
    /// Path-tracing utility failed
    #[error("traceroute failed: {0}")]
    Trace(String),

    /// Operation exceeded its deadline
    #[error("operation timed out after {0} seconds")]
    Timeout(u64),

    /// Reverse DNS resolution failed
    #[error("DNS resolution failed: {0}")]
    Dns(String),

    /// Geolocation or threat lookup failed
    #[error("lookup failed: {0}")]
    Lookup(String),

    /// Persistence sink rejected an outcome
    #[error("storage error: {0}")]
    Storage(String),

    /// Report rendering failed
    #[error("report error: {0}")]
    Report(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File or process I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert() {
        let err: PathwatchError = std::io::Error::other("pipe closed").into();
        assert!(matches!(err, PathwatchError::Io(_)));
    }

    #[test]
    fn timeout_message_names_seconds() {
        assert_eq!(
            PathwatchError::Timeout(30).to_string(),
            "operation timed out after 30 seconds"
        );
    }
}
