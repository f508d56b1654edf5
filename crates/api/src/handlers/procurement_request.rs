//! Handlers for the `/api/procurement-requests` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use pmis_core::error::CoreError;
use pmis_core::types::DbId;
use pmis_store::models::procurement_request::{
    CreateProcurementRequest, ProcurementRequest, UpdateProcurementRequest,
};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::ProjectScope;
use crate::state::AppState;

/// POST /api/procurement-requests
///
/// 409 if the request number is already taken.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProcurementRequest>,
) -> AppResult<(StatusCode, Json<ProcurementRequest>)> {
    input
        .validate()
        .map_err(|e| AppError::validation("procurement request", e))?;
    let request = state.store.create_request(input)?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// GET /api/procurement-requests?projectId={id}
pub async fn list(
    State(state): State<AppState>,
    Query(scope): Query<ProjectScope>,
) -> AppResult<Json<Vec<ProcurementRequest>>> {
    Ok(Json(state.store.requests(scope.project_id)))
}

/// GET /api/procurement-requests/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProcurementRequest>> {
    let request = state
        .store
        .request(id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProcurementRequest",
            id,
        }))?;
    Ok(Json(request))
}

/// PUT /api/procurement-requests/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateProcurementRequest>,
) -> AppResult<Json<ProcurementRequest>> {
    input
        .validate()
        .map_err(|e| AppError::validation("procurement request", e))?;
    let request = state
        .store
        .update_request(id, input)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProcurementRequest",
            id,
        }))?;
    Ok(Json(request))
}

/// DELETE /api/procurement-requests/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if state.store.delete_request(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ProcurementRequest",
            id,
        }))
    }
}
