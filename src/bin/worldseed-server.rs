//! HTTP server exposing the registry.
//!
//! Configuration comes from `WORLDSEED_*` environment variables; see
//! `worldseed::config::Settings`.

use std::sync::Arc;

use worldseed::config::Settings;
use worldseed::observability::{SubscriberConfig, init_subscriber};
use worldseed::registry::SourceRegistry;
use worldseed::server_adapters::axum::serve;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;
    let _guard = init_subscriber(SubscriberConfig::from_settings(&settings)?)?;

    let registry = Arc::new(SourceRegistry::from_settings(&settings)?);
    let address = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    tracing::info!(
        address = %address,
        environment = %settings.environment,
        sources = ?registry.list_sources(),
        "Serving random sources"
    );

    serve(listener, registry, shutdown_signal()).await?;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
