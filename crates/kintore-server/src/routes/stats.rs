//! Stats Routes - Windowed workout aggregates

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use super::error_response;
use crate::models::{StatsQuery, WorkoutStatsResponse};
use crate::AppState;

/// Get workout statistics
#[utoipa::path(
    get,
    path = "/kintore/stats",
    params(StatsQuery),
    responses(
        (status = 200, description = "Aggregate statistics", body = WorkoutStatsResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Stats"
)]
pub async fn get_stats(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<WorkoutStatsResponse>, (axum::http::StatusCode, String)> {
    let stats = state
        .workout_service
        .stats(query.period.as_deref().unwrap_or_default())
        .await
        .map_err(error_response)?;

    Ok(Json(stats.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/kintore/stats", get(get_stats))
}
