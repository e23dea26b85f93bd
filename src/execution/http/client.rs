//! HTTP client builder utilities
//!
//! One construction path for every provider's `reqwest::Client`.

use crate::error::SeedError;
use crate::types::HttpConfig;

/// Build an HTTP client from HttpConfig
///
/// # Arguments
/// * `config` - HTTP configuration containing timeouts and user agent
///
/// # Returns
/// * `Ok(reqwest::Client)` - Configured HTTP client
/// * `Err(SeedError::ConfigurationError)` - client build failure
pub fn build_http_client_from_config(config: &HttpConfig) -> Result<reqwest::Client, SeedError> {
    let mut builder = reqwest::Client::builder();

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    if let Some(connect_timeout) = config.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }

    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent);
    }

    builder
        .build()
        .map_err(|e| SeedError::ConfigurationError(format!("Failed to create HTTP client: {e}")))
}
