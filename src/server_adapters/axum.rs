//! Axum router for the registry.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use worldseed::config::Settings;
//! use worldseed::registry::SourceRegistry;
//! use worldseed::server_adapters::axum::router;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = Arc::new(SourceRegistry::from_settings(&Settings::from_env()?)?);
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//! axum::serve(listener, router(registry)).await?;
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use super::{RandomNumberResponse, SourcesResponse, error_response, status_for};
use crate::error::SeedError;
use crate::registry::{SourceRegistry, draw};

/// Build the router over a shared registry.
pub fn router(registry: Arc<SourceRegistry>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/random", get(get_random_sources))
        .route("/api/random/sources", get(get_random_sources))
        .route("/api/random/{source}", get(generate_random_number))
        .with_state(registry)
}

/// Serve the router on `listener` until `shutdown` resolves.
pub async fn serve<F>(
    listener: tokio::net::TcpListener,
    registry: Arc<SourceRegistry>,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(registry))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn get_random_sources(State(registry): State<Arc<SourceRegistry>>) -> Json<SourcesResponse> {
    Json(SourcesResponse {
        sources: registry
            .list_sources()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}

async fn generate_random_number(
    State(registry): State<Arc<SourceRegistry>>,
    Path(source): Path<String>,
) -> Result<Json<RandomNumberResponse>, ApiError> {
    let random_number = draw(&registry, &source).await?;
    Ok(Json(RandomNumberResponse { random_number }))
}

/// Pipeline error rendered as a JSON error response.
#[derive(Debug)]
pub struct ApiError(pub SeedError);

impl From<SeedError> for ApiError {
    fn from(err: SeedError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(status_for(&self.0)).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(error = %self.0, status = status.as_u16(), "Request failed");
        } else {
            tracing::debug!(error = %self.0, status = status.as_u16(), "Request rejected");
        }
        (status, Json(error_response(&self.0))).into_response()
    }
}
