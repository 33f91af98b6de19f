use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    middleware::from_fn,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    models::Catalog,
};

pub mod people;
pub mod releases;
pub mod similarity;
pub mod titles;

/// Shared, read-only application state
pub struct AppState {
    pub catalog: Arc<Catalog>,
    /// Vote threshold for the votes endpoint
    pub min_vote_count: u64,
}

impl AppState {
    pub fn new(catalog: Catalog, min_vote_count: u64) -> Self {
        Self {
            catalog: Arc::new(catalog),
            min_vote_count,
        }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(Arc::new(state))
}

/// API routes under /api/v1
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/releases/month", get(releases::by_month))
        .route("/releases/weekday", get(releases::by_weekday))
        .route("/titles/score", get(titles::score))
        .route("/titles/votes", get(titles::votes))
        .route("/actors", get(people::actor))
        .route("/directors", get(people::director))
        .route("/similar", get(similarity::similar))
}

/// Health check endpoint
async fn health_check(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "healthy", "movies": state.catalog.len() })),
    )
}
