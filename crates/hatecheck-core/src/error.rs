//! Error types for hatecheck

/// Result type alias using hatecheck's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for hatecheck operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never produced a response (connection refused, DNS, TLS...)
    #[error("network error: {0}")]
    Transport(String),

    /// The request exceeded the configured timeout
    #[error("request timed out")]
    Timeout,

    /// The service answered with a non-success status.
    ///
    /// `message` is the service's own `error` field when present,
    /// otherwise `HTTP <status>`.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body could not be understood
    #[error("invalid response: {0}")]
    Decode(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a status error, falling back to `HTTP <status>` when the
    /// service did not say what went wrong
    pub fn status(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("HTTP {}", status));
        Self::Status { status, message }
    }

    /// Create a new decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
