//! Error types for the seed pipeline.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SeedError>;

/// Coarse error classification, used by the boundary adapter to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller asked for something that does not exist.
    Client,
    /// The provider could not be reached or answered with a non-success status.
    Upstream,
    /// The provider answered, but the payload did not match the expected shape.
    Parsing,
    /// Local configuration is invalid.
    Configuration,
}

/// Errors produced while fetching, encoding or drawing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeedError {
    /// Non-success HTTP status, transport failure or timeout from a provider.
    #[error("{provider} provider unavailable{}: {message}", status_suffix(.status))]
    UpstreamUnavailable {
        provider: String,
        status: Option<u16>,
        message: String,
    },

    /// The provider payload does not match the expected response model.
    #[error("{provider} provider returned a malformed payload: {message}")]
    UpstreamMalformed { provider: String, message: String },

    /// The requested source name is not registered.
    #[error("Source not found: {0}")]
    UnknownSource(String),

    /// Invalid settings or HTTP client configuration.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

impl SeedError {
    pub fn upstream_status(
        provider: impl Into<String>,
        status: u16,
        message: impl Into<String>,
    ) -> Self {
        Self::UpstreamUnavailable {
            provider: provider.into(),
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn upstream_transport(
        provider: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::UpstreamUnavailable {
            provider: provider.into(),
            status: None,
            message: message.into(),
        }
    }

    pub fn malformed(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UpstreamMalformed {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Classify the error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UpstreamUnavailable { .. } => ErrorCategory::Upstream,
            Self::UpstreamMalformed { .. } => ErrorCategory::Parsing,
            Self::UnknownSource(_) => ErrorCategory::Client,
            Self::ConfigurationError(_) => ErrorCategory::Configuration,
        }
    }

    /// HTTP status reported by the provider, when there was one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::UpstreamUnavailable { status, .. } => *status,
            _ => None,
        }
    }

    /// Provider the error originated from, if any.
    pub fn provider(&self) -> Option<&str> {
        match self {
            Self::UpstreamUnavailable { provider, .. }
            | Self::UpstreamMalformed { provider, .. } => Some(provider.as_str()),
            _ => None,
        }
    }

    /// Whether the caller is at fault (as opposed to a provider or the deployment).
    pub fn is_client_error(&self) -> bool {
        self.category() == ErrorCategory::Client
    }

    /// Whether the failure came from talking to a provider.
    pub fn is_upstream_error(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Upstream | ErrorCategory::Parsing
        )
    }
}
