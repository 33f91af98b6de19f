use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{MonthCount, WeekdayCount},
    routes::AppState,
    services::releases,
};

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    month: String,
}

#[derive(Debug, Deserialize)]
pub struct WeekdayQuery {
    day: String,
}

/// Handler for releases-per-month endpoint
pub async fn by_month(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<MonthQuery>,
) -> AppResult<Json<MonthCount>> {
    let result = releases::count_by_month(&state.catalog, &params.month)?;
    tracing::info!(
        request_id = %request_id,
        month = %result.month,
        count = result.count,
        "Counted releases by month"
    );
    Ok(Json(result))
}

/// Handler for releases-per-weekday endpoint
pub async fn by_weekday(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<WeekdayQuery>,
) -> AppResult<Json<WeekdayCount>> {
    let result = releases::count_by_weekday(&state.catalog, &params.day)?;
    tracing::info!(
        request_id = %request_id,
        day = %result.day,
        count = result.count,
        "Counted releases by weekday"
    );
    Ok(Json(result))
}
