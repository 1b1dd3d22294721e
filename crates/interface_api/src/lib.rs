//! HTTP API Layer
//!
//! This crate provides the REST API for the PolicyLens platform using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: facts search, category facets, quote estimation, health
//! - **DTOs**: request/response data transfer objects
//! - **Middleware**: request logging with generated request ids
//! - **Error Handling**: the `{ "error": ... }` wire contract
//!
//! The facts routes consume the `domain_facts::FactStore` port, so the same
//! router serves either the compiled-in catalog or a Postgres backing store
//! depending on configuration.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_facts::CatalogFactStore;
//! use interface_api::{create_router, config::ApiConfig};
//!
//! let app = create_router(Arc::new(CatalogFactStore::new()), ApiConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use domain_facts::FactStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{facts, health, quote};
use crate::middleware::request_log_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FactStore>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `store` - The fact store backing the facts routes
/// * `config` - API configuration
pub fn create_router(store: Arc<dyn FactStore>, config: ApiConfig) -> Router {
    let state = AppState { store, config };

    // Liveness/readiness outside the versioned API
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let facts_routes = Router::new()
        .route("/", get(facts::search_facts))
        .route("/categories", get(facts::list_categories));

    let quote_routes = Router::new().route("/estimate", post(quote::estimate_quote));

    let api_routes = Router::new()
        .nest("/facts", facts_routes)
        .nest("/quotes", quote_routes);

    Router::new()
        .merge(health_routes)
        .nest("/api/v1", api_routes)
        .layer(axum_middleware::from_fn(request_log_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
