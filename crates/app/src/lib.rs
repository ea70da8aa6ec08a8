//! Antiquarium application composition root
//!
//! Wires the store and the external services into the registration workflow
//! and composes the domain router with the infrastructure routes.

use std::sync::Arc;

use antiquarium_artifacts::{
    ArtifactRepository, ArtifactStore, ArtifactsState, InMemoryArtifactStore,
    RegistrationWorkflow,
};
use antiquarium_broker::{BrokerConfig, BrokerServiceFactory};
use antiquarium_catalog::{CatalogConfig, CatalogServiceFactory};
use antiquarium_common::{Config, StoreProvider};
use antiquarium_museum::{MuseumConfig, MuseumServiceFactory};
use axum::{http::HeaderValue, Router};
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;

/// Maximum accepted request body size
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Create the main application router with all routes and services
pub async fn create_app(config: &Config) -> Result<Router, anyhow::Error> {
    let store = connect_store(config).await?;

    let museum = MuseumServiceFactory::create(MuseumConfig::from_env()?)?;
    let broker = BrokerServiceFactory::create(BrokerConfig::from_env()?)?;
    let catalog = CatalogServiceFactory::create(CatalogConfig::from_env()?)?;

    let workflow = RegistrationWorkflow::new(
        store,
        Arc::from(museum),
        Arc::from(broker),
        Arc::from(catalog),
    );

    Ok(router(ArtifactsState::new(workflow)))
}

/// Compose the domain routes with the infrastructure routes
pub fn router(artifacts_state: ArtifactsState) -> Router {
    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "Antiquarium API v0.0.1-SNAPSHOT" }),
        )
        .merge(antiquarium_artifacts::routes().with_state(artifacts_state))
}

/// Open the configured artifact store, running migrations for Postgres
pub async fn connect_store(config: &Config) -> Result<Arc<dyn ArtifactStore>, anyhow::Error> {
    match config.store_provider {
        StoreProvider::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is required for the postgres store"))?;

            let pool = PgPool::connect(url)
                .await
                .map_err(|e| anyhow::anyhow!("Database connection failed: {}", e))?;
            tracing::info!("Database connection established");

            sqlx::migrate!("../../migrations").run(&pool).await?;
            tracing::info!("Database migrations applied");

            Ok(Arc::new(ArtifactRepository::new(pool)))
        }
        StoreProvider::Memory => {
            tracing::warn!("Using in-memory artifact store; records are lost on restart");
            Ok(Arc::new(InMemoryArtifactStore::new()))
        }
    }
}

/// Build a CORS layer from a comma-separated origin list (`*` allows any)
pub fn build_cors_layer(origins: &str) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods([
        axum::http::Method::GET,
        axum::http::Method::OPTIONS,
    ]);

    if origins.trim() == "*" {
        return layer.allow_origin(AllowOrigin::any());
    }

    let allowed: Vec<HeaderValue> = origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}

/// Reject request bodies larger than [`MAX_BODY_BYTES`]
pub fn body_limit_layer() -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(MAX_BODY_BYTES)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
