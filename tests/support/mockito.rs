//! mockito test utilities
//!
//! Goals:
//! - Provide a unified async Server creation and common JSON response helpers
//! - Insulate tests from future mockito API changes

#![allow(dead_code)]

use mockito::{Matcher, Mock, Server, ServerGuard};

/// Start an async mockito Server
pub async fn start() -> ServerGuard {
    Server::new_async().await
}

/// Get the Server base URL (including scheme)
pub fn url(server: &ServerGuard) -> String {
    server.url()
}

/// Convenience regex matcher helper
pub fn regex(re: &str) -> Matcher {
    Matcher::Regex(re.to_string())
}

/// Matcher requiring every `(name, value)` query pair
pub fn query(pairs: &[(&str, &str)]) -> Matcher {
    Matcher::AllOf(
        pairs
            .iter()
            .map(|(k, v)| Matcher::UrlEncoded(k.to_string(), v.to_string()))
            .collect(),
    )
}

/// JSON response mock for a GET on `path`
/// (automatically sets `content-type: application/json`)
pub async fn json_get_mock<P: Into<Matcher>>(
    server: &mut ServerGuard,
    path: P,
    status: u16,
    body_json: &str,
) -> Mock {
    server
        .mock("GET", path)
        .match_query(Matcher::Any)
        .with_status(status as usize)
        .with_header("content-type", "application/json")
        .with_body(body_json)
        .create_async()
        .await
}
