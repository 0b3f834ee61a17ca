//! HTTP API server with observability for the order management service.
//!
//! Provides REST endpoints for creating, modifying and reading orders,
//! with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use persistence::{InMemoryRepositories, Seed, SeedError};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use routes::orders::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/orders", post(routes::orders::create))
        .route(
            "/orders/{id}",
            get(routes::orders::get).put(routes::orders::update),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state over the given repositories.
pub fn create_state(repos: &InMemoryRepositories) -> Arc<AppState> {
    Arc::new(AppState {
        order_service: repos.order_service(),
    })
}

/// Builds the repositories for `config`, preloaded from `SEED_PATH` when set.
pub async fn load_repositories(config: &Config) -> Result<InMemoryRepositories, SeedError> {
    match config.seed_path.as_deref() {
        Some(path) => {
            let seed = Seed::from_path(path)?;
            tracing::info!(path, "loaded seed file");
            Ok(InMemoryRepositories::from_seed(seed).await)
        }
        None => {
            tracing::warn!("SEED_PATH not set, starting with empty repositories");
            Ok(InMemoryRepositories::new())
        }
    }
}
