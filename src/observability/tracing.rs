//! Provider-level tracing helpers.

use std::time::Instant;
use tracing::{debug, error, info};

/// Query parameters whose values never reach the logs verbatim.
const SENSITIVE_PARAMS: &[&str] = &["apikey", "api_key", "key", "token"];

/// Mask a secret, keeping a short prefix and suffix for recognisability.
pub fn mask_sensitive_value(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() > 16 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "***".to_string()
    }
}

/// Rewrite a URL so that sensitive query parameter values are masked.
pub fn mask_url_secrets(url: &reqwest::Url) -> String {
    if url.query().is_none() {
        return url.to_string();
    }
    let mut masked = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let value = if SENSITIVE_PARAMS.contains(&k.to_ascii_lowercase().as_str()) {
                mask_sensitive_value(&v)
            } else {
                v.into_owned()
            };
            (k.into_owned(), value)
        })
        .collect();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}

/// Unified provider tracing utility
#[derive(Debug, Clone)]
pub struct ProviderTracer {
    provider: &'static str,
}

impl ProviderTracer {
    pub fn new(provider: &'static str) -> Self {
        Self { provider }
    }

    pub fn trace_request_start(&self, method: &str, url: &reqwest::Url) {
        info!(
            provider = %self.provider,
            method = %method,
            url = %mask_url_secrets(url),
            "Request started"
        );
    }

    pub fn trace_response_success(&self, status_code: u16, started: Instant) {
        let duration_ms = started.elapsed().as_millis();
        debug!(
            provider = %self.provider,
            status_code = status_code,
            duration_ms = duration_ms,
            "Request completed successfully"
        );
    }

    pub fn trace_response_body(&self, body: &str) {
        debug!(
            provider = %self.provider,
            response_body = %body,
            "Response body"
        );
    }

    pub fn trace_request_error(
        &self,
        status_code: Option<u16>,
        error_text: &str,
        started: Instant,
    ) {
        let duration_ms = started.elapsed().as_millis();
        error!(
            provider = %self.provider,
            status_code = ?status_code,
            error_text = %error_text,
            duration_ms = duration_ms,
            "Request failed"
        );
    }

    pub fn trace_seed(&self, seed: u64) {
        debug!(provider = %self.provider, seed = seed, "Seed derived");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_secrets_are_fully_hidden() {
        assert_eq!(mask_sensitive_value("abc"), "***");
    }

    #[test]
    fn long_secrets_keep_edges() {
        assert_eq!(mask_sensitive_value("0123456789abcdefXYZ"), "0123...fXYZ");
    }

    #[test]
    fn api_key_is_masked_in_url() {
        let url = reqwest::Url::parse(
            "https://newsapi.org/v2/everything?apiKey=0123456789abcdef0123&q=tesla",
        )
        .unwrap();
        let masked = mask_url_secrets(&url);
        assert!(!masked.contains("0123456789abcdef0123"));
        assert!(masked.contains("q=tesla"));
    }

    #[test]
    fn url_without_query_is_unchanged() {
        let url = reqwest::Url::parse("https://api.open-meteo.com/v1/forecast").unwrap();
        assert_eq!(mask_url_secrets(&url), "https://api.open-meteo.com/v1/forecast");
    }
}
