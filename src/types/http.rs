//! HTTP configuration types.
//!
//! This module defines `HttpConfig` and its builder, used to configure the
//! client each seed fetcher talks to its provider with.

use std::time::Duration;

/// Default user agent sent to providers.
pub const DEFAULT_USER_AGENT: &str = concat!("worldseed/", env!("CARGO_PKG_VERSION"));

/// HTTP configuration
#[derive(Debug, Clone, PartialEq)]
pub struct HttpConfig {
    /// Request timeout (whole request, connect included)
    pub timeout: Option<Duration>,
    /// Connection timeout
    pub connect_timeout: Option<Duration>,
    /// User agent
    pub user_agent: Option<String>,
}

/// Builder for `HttpConfig`
#[derive(Debug, Clone, Default)]
pub struct HttpConfigBuilder {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl HttpConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
    pub fn connect_timeout(mut self, connect_timeout: Option<Duration>) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }
    pub fn user_agent<S: Into<String>>(mut self, user_agent: Option<S>) -> Self {
        self.user_agent = user_agent.map(|s| s.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> HttpConfig {
        HttpConfig {
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            user_agent: self
                .user_agent
                .or_else(|| Some(DEFAULT_USER_AGENT.to_string())),
        }
    }
}

impl HttpConfig {
    /// Returns a builder for constructing `HttpConfig`
    pub fn builder() -> HttpConfigBuilder {
        HttpConfigBuilder::new()
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::builder()
            .timeout(Some(Duration::from_secs(3)))
            .build()
    }
}
