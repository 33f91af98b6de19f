use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{TitleScore, TitleVotes},
    routes::AppState,
    services::titles,
};

#[derive(Debug, Deserialize)]
pub struct TitleQuery {
    pub title: String,
}

/// Handler for title score lookup
pub async fn score(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TitleQuery>,
) -> AppResult<Json<TitleScore>> {
    let score = titles::score_title(&state.catalog, &params.title)?;
    Ok(Json(score))
}

/// Handler for title votes lookup
pub async fn votes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TitleQuery>,
) -> AppResult<Json<TitleVotes>> {
    let votes = titles::votes_title(&state.catalog, &params.title, state.min_vote_count)?;
    Ok(Json(votes))
}
