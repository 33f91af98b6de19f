use axum::{
    extract::{Query, State},
    Extension, Json,
};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::SimilarTitles,
    routes::{titles::TitleQuery, AppState},
    services::similarity,
};

/// Handler for the similar-titles endpoint
pub async fn similar(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<TitleQuery>,
) -> AppResult<Json<SimilarTitles>> {
    tracing::info!(
        request_id = %request_id,
        title = %params.title,
        "Processing similarity request"
    );

    let catalog = Arc::clone(&state.catalog);
    let title = params.title.clone();
    let similar = tokio::task::spawn_blocking(move || similarity::compute_similar(&title, &catalog))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    tracing::info!(
        request_id = %request_id,
        results = similar.len(),
        "Similarity request completed"
    );

    Ok(Json(SimilarTitles {
        title: params.title,
        similar,
    }))
}
