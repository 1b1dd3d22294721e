//! PolicyLens - API Server Binary
//!
//! Starts the HTTP API serving the hidden-facts collection and the premium
//! calculator endpoint.
//!
//! # Usage
//!
//! ```bash
//! # Serve the compiled-in catalog (no database required)
//! cargo run --bin policylens-api
//!
//! # Serve from PostgreSQL, seeding the catalog on first start
//! API_FACTS_SOURCE=database API_DATABASE_URL=postgres://... cargo run --bin policylens-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_FACTS_SOURCE` - `catalog` or `database` (default: catalog)
//! * `API_DATABASE_URL` - PostgreSQL connection string
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use domain_facts::{CatalogFactStore, FactStore};
use infra_db::{create_pool_from_url, run_migrations, PgFactStore};
use interface_api::{
    config::{ApiConfig, FactsSource},
    create_router,
};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().unwrap_or_default();

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting PolicyLens API Server"
    );

    let store = build_store(&config).await?;

    let app = create_router(store, config.clone());

    let addr: SocketAddr = config.server_addr().parse()?;
    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Builds the configured fact store
///
/// The database source connects, migrates, and seeds the compiled-in
/// catalog so a fresh database serves the same data as catalog mode.
async fn build_store(config: &ApiConfig) -> anyhow::Result<Arc<dyn FactStore>> {
    match config.facts_source {
        FactsSource::Catalog => {
            tracing::info!("Serving facts from the compiled-in catalog");
            Ok(Arc::new(CatalogFactStore::new()))
        }
        FactsSource::Database => {
            tracing::info!("Connecting to database");
            let pool = create_pool_from_url(&config.database_url).await?;
            run_migrations(&pool).await?;

            let store = PgFactStore::new(pool);
            let seeded = store.seed_from_catalog().await?;
            if seeded > 0 {
                tracing::info!(seeded, "Seeded catalog facts into the database");
            }

            Ok(Arc::new(store))
        }
    }
}

/// Initializes the tracing subscriber for structured logging
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM)
///
/// Enables graceful shutdown, allowing in-flight requests to complete
/// before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
