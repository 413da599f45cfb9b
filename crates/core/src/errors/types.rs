//! Core error type definitions

/// Result type alias for vitals operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for vitals operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A status string that is neither a known value nor an accepted alias
    #[error("invalid health status '{value}'")]
    InvalidStatus { value: String },

    /// A `details` key that breaks the `component[:measurement]` format
    #[error("invalid details key '{key}': {message}")]
    InvalidDetailKey { key: String, message: String },

    /// A details provider could not produce its contribution
    #[error("details provider '{provider}' failed: {message}")]
    Provider {
        provider: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// I/O failures outside the HTTP transport
    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Network-related errors
    #[error("network error on '{endpoint}': {message}")]
    Network { endpoint: String, message: String },
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json {
            message: source.to_string(),
            source,
        }
    }
}
