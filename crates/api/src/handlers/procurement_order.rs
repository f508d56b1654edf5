//! Handlers for the `/api/procurement` resource (procurement orders).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use pmis_core::error::CoreError;
use pmis_core::types::DbId;
use pmis_store::models::procurement_order::{
    CreateProcurementOrder, ProcurementOrder, UpdateProcurementOrder,
};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::ProjectScope;
use crate::state::AppState;

/// POST /api/procurement
///
/// 409 if the order number is already taken.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProcurementOrder>,
) -> AppResult<(StatusCode, Json<ProcurementOrder>)> {
    input
        .validate()
        .map_err(|e| AppError::validation("procurement order", e))?;
    let order = state.store.create_order(input)?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /api/procurement?projectId={id}
pub async fn list(
    State(state): State<AppState>,
    Query(scope): Query<ProjectScope>,
) -> AppResult<Json<Vec<ProcurementOrder>>> {
    Ok(Json(state.store.orders(scope.project_id)))
}

/// GET /api/procurement/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProcurementOrder>> {
    let order = state
        .store
        .order(id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProcurementOrder",
            id,
        }))?;
    Ok(Json(order))
}

/// PUT /api/procurement/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateProcurementOrder>,
) -> AppResult<Json<ProcurementOrder>> {
    input
        .validate()
        .map_err(|e| AppError::validation("procurement order", e))?;
    let order = state
        .store
        .update_order(id, input)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProcurementOrder",
            id,
        }))?;
    Ok(Json(order))
}

/// DELETE /api/procurement/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if state.store.delete_order(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ProcurementOrder",
            id,
        }))
    }
}
