//! Builder methods for creating errors with context

use super::types::Error;

// Helper methods for creating errors with context
impl Error {
    /// Create an invalid status error
    #[must_use]
    pub fn invalid_status(value: impl Into<String>) -> Self {
        Error::InvalidStatus {
            value: value.into(),
        }
    }

    /// Create an invalid details key error
    #[must_use]
    pub fn invalid_detail_key(key: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidDetailKey {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a provider failure without an underlying cause
    #[must_use]
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Provider {
            provider: provider.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a provider failure wrapping the error that caused it
    #[must_use]
    pub fn provider_with_source(
        provider: impl Into<String>,
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Provider {
            provider: provider.into(),
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create a JSON error with a custom message
    #[must_use]
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Error::Json {
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error with the operation that failed
    #[must_use]
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }

    /// Create a network error
    #[must_use]
    pub fn network(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Network {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_provider_error_display() {
        let err = Error::provider("uptime", "process not found");
        assert_eq!(
            err.to_string(),
            "details provider 'uptime' failed: process not found"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_provider_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "ping timed out");
        let err = Error::provider_with_source("database", "ping failed", io);
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("ping timed out"));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = parse.into();
        assert!(matches!(err, Error::Json { .. }));
    }
}
