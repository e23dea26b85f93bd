//! The single GET a fetcher makes per seed.
//!
//! No retries: the first failure is reported to the caller.

use std::time::Instant;

use serde::de::DeserializeOwned;

use crate::error::{Result, SeedError};
use crate::observability::ProviderTracer;

/// Longest slice of an error body kept in the error message.
const MAX_ERROR_BODY_CHARS: usize = 256;

/// GET `url` with `query`, require HTTP 200 and decode the body as `T`.
///
/// - transport failure or timeout: `UpstreamUnavailable` without a status
/// - any status other than 200: `UpstreamUnavailable` with that status
/// - body that does not decode into `T`: `UpstreamMalformed`
pub async fn get_json<T, Q>(
    client: &reqwest::Client,
    provider: &'static str,
    url: &str,
    query: &Q,
) -> Result<T>
where
    T: DeserializeOwned,
    Q: serde::Serialize + ?Sized,
{
    let tracer = ProviderTracer::new(provider);
    let request = client.get(url).query(query).build().map_err(|e| {
        SeedError::ConfigurationError(format!("invalid {provider} request: {e}"))
    })?;

    tracer.trace_request_start("GET", request.url());
    let started = Instant::now();

    let response = match client.execute(request).await {
        Ok(response) => response,
        Err(e) => {
            let message = transport_message(e);
            tracer.trace_request_error(None, &message, started);
            return Err(SeedError::upstream_transport(provider, message));
        }
    };

    let status = response.status();
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            let message = format!("failed to read response body: {}", e.without_url());
            tracer.trace_request_error(Some(status.as_u16()), &message, started);
            return Err(SeedError::upstream_transport(provider, message));
        }
    };

    if status != reqwest::StatusCode::OK {
        let message = if body.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string()
        } else {
            truncate(&body, MAX_ERROR_BODY_CHARS)
        };
        tracer.trace_request_error(Some(status.as_u16()), &message, started);
        return Err(SeedError::upstream_status(provider, status.as_u16(), message));
    }

    tracer.trace_response_success(status.as_u16(), started);
    tracer.trace_response_body(&body);

    serde_json::from_str(&body).map_err(|e| {
        tracer.trace_request_error(Some(status.as_u16()), &e.to_string(), started);
        SeedError::malformed(provider, e.to_string())
    })
}

/// Describe a transport failure without the request URL, which carries
/// query secrets such as the news API key.
fn transport_message(e: reqwest::Error) -> String {
    let timed_out = e.is_timeout();
    let e = e.without_url();
    if timed_out {
        format!("request timed out: {e}")
    } else {
        e.to_string()
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
