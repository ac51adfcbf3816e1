//! `wpt-whatif` server binary.

use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use wpt_whatif::adapters::entity_store::{CachedEntityStore, FileEntitySource};
use wpt_whatif::adapters::http::{self, layers, AccessPolicy, AppState};
use wpt_whatif::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    let source = Arc::new(FileEntitySource::new(&config.store.seed_path));
    let store = Arc::new(CachedEntityStore::new(source));

    // a failed warm-up is retried on first use or an explicit reload
    match store.summary().await {
        Ok(summary) => tracing::info!(
            source = %summary.source,
            identified = summary.identified,
            deidentified = summary.deidentified,
            "Entity catalog warmed"
        ),
        Err(e) => tracing::error!(error = %e, "Entity catalog warm-up failed"),
    }

    if config.access.trust_role_header {
        tracing::warn!("Trusting x-role header; identified data is reachable without authentication");
    }

    let state = AppState::new(
        store.clone(),
        store,
        config.store.lookup_timeout(),
        config.sweep.settings(),
        AccessPolicy {
            trust_role_header: config.access.trust_role_header,
        },
    );
    let app = layers::apply(http::router(state), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "wpt-whatif listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// JSON logs in production, human-readable logs elsewhere. `RUST_LOG` wins
/// over the configured filter when set.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if server.is_production() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().pretty()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
