use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{ActorStats, DirectorStats},
    routes::AppState,
    services::people,
};

#[derive(Debug, Deserialize)]
pub struct NameQuery {
    name: String,
}

/// Handler for actor statistics
pub async fn actor(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<NameQuery>,
) -> AppResult<Json<ActorStats>> {
    let stats = people::actor_stats(&state.catalog, &params.name)?;
    tracing::info!(
        request_id = %request_id,
        movie_count = stats.movie_count,
        "Actor statistics computed"
    );
    Ok(Json(stats))
}

/// Handler for director statistics
pub async fn director(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<NameQuery>,
) -> AppResult<Json<DirectorStats>> {
    let stats = people::director_stats(&state.catalog, &params.name)?;
    tracing::info!(
        request_id = %request_id,
        movie_count = stats.movies.len(),
        "Director statistics computed"
    );
    Ok(Json(stats))
}
