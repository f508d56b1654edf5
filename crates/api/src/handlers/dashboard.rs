//! Handler for the `/api/dashboard/stats` aggregate.

use axum::extract::State;
use axum::Json;
use pmis_store::models::dashboard::DashboardStats;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/dashboard/stats
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    Ok(Json(state.store.dashboard_stats()))
}
