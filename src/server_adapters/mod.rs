//! Server adapters: the HTTP boundary in front of the registry.
//!
//! The envelope types and the error-to-status mapping are framework-agnostic;
//! the Axum router lives in [`axum`] behind the `server-adapters` feature.
//!
//! | route | success body |
//! |---|---|
//! | `GET /api/random/sources`, `GET /api/random` | `{"sources": [...]}` |
//! | `GET /api/random/{source}` | `{"random_number": 0.42}` |
//! | `GET /api/health` | empty |

use serde::{Deserialize, Serialize};

use crate::error::{ErrorCategory, SeedError};

#[cfg(feature = "server-adapters")]
pub mod axum;

/// Available random sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcesResponse {
    pub sources: Vec<String>,
}

/// One generated number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomNumberResponse {
    pub random_number: f64,
}

/// Error body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// HTTP status for a pipeline error.
pub fn status_for(error: &SeedError) -> u16 {
    match error.category() {
        ErrorCategory::Client => 400,
        ErrorCategory::Upstream | ErrorCategory::Parsing => 502,
        ErrorCategory::Configuration => 500,
    }
}

/// Body for a pipeline error.
pub fn error_response(error: &SeedError) -> ErrorResponse {
    let detail = match error {
        SeedError::UnknownSource(_) => "Source not found".to_string(),
        other => other.to_string(),
    };
    ErrorResponse { detail }
}
