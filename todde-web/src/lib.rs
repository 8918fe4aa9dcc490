//! todde-web library - public marketplace service
//!
//! Serves the inventory, vehicle detail, homepage and financing page contexts
//! as JSON, plus the catalog lookup and quick search APIs. All database access
//! is read-only.

use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod cli;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (read-only)
    pub db: SqlitePool,
    /// Image shown when a listing has no usable photo
    pub placeholder_image_url: Arc<str>,
}

impl AppState {
    pub fn new(db: SqlitePool, placeholder_image_url: &str) -> Self {
        Self {
            db,
            placeholder_image_url: Arc::from(placeholder_image_url),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    let pages = Router::new()
        .route("/", get(api::homepage))
        .route("/financing/", get(api::financing))
        .route("/cars/", get(api::all_cars))
        .route("/registered-cars/", get(api::registered_cars))
        .route("/foreign-used/", get(api::foreign_used_cars))
        .route("/cars/:id/", get(api::vehicle_detail));

    let apis = Router::new()
        .route("/api/car-manufacturers/", get(api::car_manufacturers))
        .route("/api/car-models/", get(api::car_models))
        .route("/api/car-variants/", get(api::car_variants))
        .route("/api/search/", get(api::search));

    Router::new()
        .merge(pages)
        .merge(apis)
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
